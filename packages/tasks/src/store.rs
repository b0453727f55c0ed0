// ABOUTME: In-memory task storage
// ABOUTME: Owns the task collection and the monotonically increasing id counter

use chrono::Utc;

use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

/// In-memory task collection.
///
/// Insertion order is preserved and ids are never reused within a process
/// lifetime. The collection and the counter are owned together so a single
/// lock around the store guards both.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// All tasks in insertion order
    pub fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Finds a task by id
    pub fn get(&self, id: u64) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    /// Appends a new task, assigning the next id and stamping both timestamps
    /// with the same instant
    pub fn insert(&mut self, input: TaskCreateInput) -> Task {
        let now = Utc::now();
        let task = Task {
            id: self.next_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Writes the supplied fields onto an existing record and refreshes
    /// `updatedAt`, even when no fields are supplied. Returns `None` when no
    /// task has the given id.
    pub fn apply_update(&mut self, id: u64, input: TaskUpdateInput) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(completed) = input.completed {
            task.completed = completed;
        }
        task.updated_at = Utc::now();

        Some(task.clone())
    }

    /// Removes a task by id, returning the removed record
    pub fn remove(&mut self, id: u64) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(title: &str) -> TaskCreateInput {
        TaskCreateInput {
            title: title.to_string(),
            description: String::new(),
            completed: false,
        }
    }

    #[test]
    fn test_insert_assigns_monotonic_ids_from_one() {
        let mut store = TaskStore::new();

        let first = store.insert(create_input("first"));
        let second = store.insert(create_input("second"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_insert_stamps_both_timestamps_with_same_instant() {
        let mut store = TaskStore::new();

        let task = store.insert(create_input("stamped"));

        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = TaskStore::new();

        let first = store.insert(create_input("first"));
        store.remove(first.id).unwrap();
        let second = store.insert(create_input("second"));

        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = TaskStore::new();

        store.insert(create_input("a"));
        store.insert(create_input("b"));
        store.insert(create_input("c"));

        let titles: Vec<String> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_from_middle_preserves_order_of_rest() {
        let mut store = TaskStore::new();

        store.insert(create_input("a"));
        let middle = store.insert(create_input("b"));
        store.insert(create_input("c"));

        let removed = store.remove(middle.id).unwrap();
        assert_eq!(removed.title, "b");

        let titles: Vec<String> = store.list().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_get_missing_id_returns_none() {
        let store = TaskStore::new();
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_apply_update_leaves_unsupplied_fields_unchanged() {
        let mut store = TaskStore::new();
        let task = store.insert(TaskCreateInput {
            title: "original".to_string(),
            description: "details".to_string(),
            completed: false,
        });

        let updated = store
            .apply_update(
                task.id,
                TaskUpdateInput {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "original");
        assert_eq!(updated.description, "details");
        assert!(updated.completed);
    }

    #[test]
    fn test_apply_update_refreshes_updated_at_without_changes() {
        let mut store = TaskStore::new();
        let task = store.insert(create_input("unchanged"));

        // Coarse clocks can stamp identical instants back to back
        std::thread::sleep(std::time::Duration::from_millis(5));

        let updated = store.apply_update(task.id, TaskUpdateInput::default()).unwrap();

        assert!(updated.updated_at > task.updated_at);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[test]
    fn test_apply_update_missing_id_returns_none() {
        let mut store = TaskStore::new();
        assert!(store.apply_update(7, TaskUpdateInput::default()).is_none());
    }

    #[test]
    fn test_remove_missing_id_returns_none() {
        let mut store = TaskStore::new();
        assert!(store.remove(7).is_none());
    }
}
