use serde::{Deserialize, Serialize};

/// A full read of one tab of the store, ready to be shown as a grid.
///
/// `rows` are aligned with `columns`: every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub tab: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
