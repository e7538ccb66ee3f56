//! Pivot flat workload rows into a (person, subject, comment) x month matrix.

use crate::models::comment::comment_or_placeholder;
use crate::models::month::Month;
use crate::models::workload::WorkloadRow;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Identity of a matrix row.
///
/// The comment is stored with the placeholder already applied, so a missing
/// comment and an empty one land in the same group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub name: String,
    pub firstname: String,
    pub subject: String,
    pub comment: String,
}

impl GroupKey {
    pub fn from_row(row: &WorkloadRow) -> Self {
        Self {
            name: row.name.clone(),
            firstname: row.firstname.clone(),
            subject: row.subject.clone(),
            comment: comment_or_placeholder(row.comment.as_deref()).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    #[serde(rename = "id_pers")]
    pub person_id: i64,
    #[serde(rename = "id_subject")]
    pub subject_id: i64,
    pub name: String,
    pub firstname: String,
    pub subject: String,
    pub comment: String,
    pub loads: BTreeMap<Month, i32>,
}

impl AggregatedRow {
    fn open(key: GroupKey, row: &WorkloadRow) -> Self {
        Self {
            person_id: row.person_id,
            subject_id: row.subject_id,
            name: key.name,
            firstname: key.firstname,
            subject: key.subject,
            comment: key.comment,
            loads: BTreeMap::new(),
        }
    }

    /// Load for `month`, 0 when the month has no entry.
    pub fn load_for(&self, month: &Month) -> i32 {
        self.loads.get(month).copied().unwrap_or(0)
    }

    pub fn load_sum<'a>(&self, months: impl IntoIterator<Item = &'a Month>) -> i64 {
        months
            .into_iter()
            .map(|m| self.load_for(m) as i64)
            .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkloadMatrix {
    pub rows: Vec<AggregatedRow>,
    pub months: Vec<Month>,
}

impl WorkloadMatrix {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group rows by [`GroupKey`].
///
/// Groups appear in order of first occurrence; a later row for a month
/// already present in its group replaces the earlier load. `months` is the
/// sorted set of every month seen in the input.
pub fn aggregate(rows: &[WorkloadRow]) -> WorkloadMatrix {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut out: Vec<AggregatedRow> = Vec::new();
    let mut months: BTreeSet<Month> = BTreeSet::new();

    for row in rows {
        months.insert(row.month);

        let key = GroupKey::from_row(row);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                out.push(AggregatedRow::open(key.clone(), row));
                index.insert(key, out.len() - 1);
                out.len() - 1
            }
        };

        out[slot].loads.insert(row.month, row.load);
    }

    WorkloadMatrix {
        rows: out,
        months: months.into_iter().collect(),
    }
}
