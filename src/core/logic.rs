use crate::core::aggregate::{WorkloadMatrix, aggregate};
use crate::db::pool::DbPool;
use crate::db::queries::{RowScope, load_workload_rows};
use crate::errors::AppResult;
use crate::models::workload::WorkloadRow;

pub struct Core;

impl Core {
    pub fn build_matrix(rows: &[WorkloadRow]) -> WorkloadMatrix {
        aggregate(rows)
    }

    /// Fetch the rows in `scope` and pivot them.
    pub fn load_matrix(pool: &DbPool, scope: RowScope) -> AppResult<WorkloadMatrix> {
        let rows = load_workload_rows(&pool.conn, scope)?;
        Ok(Self::build_matrix(&rows))
    }
}
