use serde::{Deserialize, Serialize};

/// Placeholder shown (and grouped on) when a person/subject pair has no comment.
pub const NO_COMMENT: &str = "No comment";

/// Free text attached to a (person, subject) pair, shared by all its months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "id_pers")]
    pub person_id: i64,
    #[serde(rename = "id_subject")]
    pub subject_id: i64,
    pub comment: String,
}

/// Apply the placeholder to an absent or blank comment.
pub fn comment_or_placeholder(comment: Option<&str>) -> &str {
    match comment {
        Some(c) if !c.trim().is_empty() => c,
        _ => NO_COMMENT,
    }
}
