use chrono::Local;
use indexmap::IndexMap;

use crate::model::row::{RowId, TaskRecord};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(RowId),
    #[error("task text cannot be blank")]
    BlankText,
    #[error("task id cannot be blank")]
    BlankId,
}

/// The to-do list, in display order, keyed by record id.
///
/// Row actions (edit, delete, toggle) always resolve their record through
/// the id, so a list that changed underneath an open row can never apply an
/// action to the wrong record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskList {
    records: IndexMap<RowId, TaskRecord>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TaskRecord>) -> Self {
        TaskList {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.records.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RowId> {
        self.records.keys()
    }

    pub fn get(&self, id: &RowId) -> Option<&TaskRecord> {
        self.records.get(id)
    }

    /// Record at a display position
    pub fn get_index(&self, index: usize) -> Option<&TaskRecord> {
        self.records.get_index(index).map(|(_, r)| r)
    }

    pub fn records(&self) -> Vec<TaskRecord> {
        self.records.values().cloned().collect()
    }

    /// Append a new unchecked task dated today. Returns its id.
    pub fn add(&mut self, text: &str) -> Result<RowId, TaskError> {
        self.add_with_date(text, &today_str())
    }

    pub fn add_with_date(&mut self, text: &str, date: &str) -> Result<RowId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::BlankText);
        }
        let id = RowId::new(self.next_id().to_string());
        self.records
            .insert(id.clone(), TaskRecord::new(id.clone(), text, date));
        Ok(id)
    }

    /// Replace a task's text, and its checked flag when `checked` is given.
    pub fn edit(&mut self, id: &RowId, text: &str, checked: Option<bool>) -> Result<&TaskRecord, TaskError> {
        if id.as_str().trim().is_empty() {
            return Err(TaskError::BlankId);
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::BlankText);
        }
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;
        record.text = text.to_string();
        if let Some(checked) = checked {
            record.is_checked = checked;
        }
        Ok(record)
    }

    /// Flip a task's checkbox. Returns the new state.
    pub fn toggle(&mut self, id: &RowId) -> Result<bool, TaskError> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))?;
        record.is_checked = !record.is_checked;
        Ok(record.is_checked)
    }

    /// Remove a task, keeping the order of the others.
    pub fn delete(&mut self, id: &RowId) -> Result<TaskRecord, TaskError> {
        self.records
            .shift_remove(id)
            .ok_or_else(|| TaskError::NotFound(id.clone()))
    }

    /// One past the highest numeric id in the list
    fn next_id(&self) -> u64 {
        self.records
            .keys()
            .filter_map(|id| id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1)
    }
}

fn today_str() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add_with_date("Buy milk", "01.05.2025").unwrap();
        list.add_with_date("Call mom", "02.05.2025").unwrap();
        list.add_with_date("Water plants", "03.05.2025").unwrap();
        list
    }

    fn labels(list: &TaskList) -> Vec<&str> {
        list.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let list = sample_list();
        let ids: Vec<&str> = list.ids().map(RowId::as_str).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(list.get(&RowId::from("2")).unwrap().date, "02.05.2025");
    }

    #[test]
    fn add_continues_after_highest_numeric_id() {
        let mut list = TaskList::from_records(vec![
            TaskRecord::new("17", "a", "x"),
            TaskRecord::new("server-uuid", "b", "x"),
        ]);
        let id = list.add_with_date("c", "x").unwrap();
        assert_eq!(id, RowId::from("18"));
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = TaskList::new();
        assert!(matches!(list.add("   "), Err(TaskError::BlankText)));
        assert!(list.is_empty());
    }

    #[test]
    fn add_trims_and_dates_today() {
        let mut list = TaskList::new();
        let id = list.add("  Read  ").unwrap();
        let record = list.get(&id).unwrap();
        assert_eq!(record.text, "Read");
        assert_eq!(record.date, today_str());
        assert!(!record.is_checked);
    }

    #[test]
    fn edit_keeps_checked_when_unspecified() {
        let mut list = sample_list();
        let id = RowId::from("1");
        list.toggle(&id).unwrap();
        list.edit(&id, "Buy oat milk", None).unwrap();
        let record = list.get(&id).unwrap();
        assert_eq!(record.text, "Buy oat milk");
        assert!(record.is_checked);

        list.edit(&id, "Buy oat milk", Some(false)).unwrap();
        assert!(!list.get(&id).unwrap().is_checked);
    }

    #[test]
    fn edit_errors() {
        let mut list = sample_list();
        assert!(matches!(list.edit(&RowId::from(""), "x", None), Err(TaskError::BlankId)));
        assert!(matches!(list.edit(&RowId::from("9"), "x", None), Err(TaskError::NotFound(_))));
        assert!(matches!(list.edit(&RowId::from("1"), " ", None), Err(TaskError::BlankText)));
    }

    #[test]
    fn toggle_flips_state() {
        let mut list = sample_list();
        let id = RowId::from("3");
        assert!(list.toggle(&id).unwrap());
        assert!(!list.toggle(&id).unwrap());
    }

    #[test]
    fn delete_preserves_order() {
        let mut list = sample_list();
        let removed = list.delete(&RowId::from("2")).unwrap();
        assert_eq!(removed.text, "Call mom");
        assert_eq!(labels(&list), vec!["Buy milk", "Water plants"]);
        assert_eq!(list.get_index(1).unwrap().id, RowId::from("3"));
        assert!(list.delete(&RowId::from("2")).is_err());
    }
}
