use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a list row.
///
/// Always the identifier of the record the row displays, never its position
/// in the list: positions shift on insert, delete and reorder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(id: impl Into<String>) -> Self {
        RowId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId(s)
    }
}

/// A single to-do entry as the remote task API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RowId,
    /// Label shown on the row
    pub text: String,
    /// Checkbox state
    #[serde(rename = "isChecked")]
    pub is_checked: bool,
    /// Creation date, `dd.MM.yyyy`
    pub date: String,
}

impl TaskRecord {
    pub fn new(id: impl Into<RowId>, text: impl Into<String>, date: impl Into<String>) -> Self {
        TaskRecord {
            id: id.into(),
            text: text.into(),
            is_checked: false,
            date: date.into(),
        }
    }
}
