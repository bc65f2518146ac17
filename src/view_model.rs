//! View Model
//!
//! Keeps the rendered todo list in step with store events, and the
//! counters shown by the footer.

use crate::domain::Todo;
use crate::events::StoreEvent;

/// Apply a store event to the list the view renders
///
/// The list stays sorted by `order`, like the store it mirrors.
pub fn apply_event(todos: &mut Vec<Todo>, event: &StoreEvent) {
    match event {
        StoreEvent::Added(todo) => {
            let at = todos.partition_point(|t| (t.order, t.id) < (todo.order, todo.id));
            todos.insert(at, todo.clone());
        }
        StoreEvent::Changed(todo) => {
            if let Some(slot) = todos.iter_mut().find(|t| t.id == todo.id) {
                *slot = todo.clone();
            }
        }
        StoreEvent::Destroyed(id) => todos.retain(|t| t.id != *id),
        StoreEvent::Reset(all) => *todos = all.clone(),
    }
}

/// State a row's checkbox should show after a toggle attempt
///
/// The browser flips the checkbox before the store is asked; a failed
/// toggle (`None`) must put it back to what the store still holds.
pub fn settled_done(toggled: Option<&Todo>, before: bool) -> bool {
    toggled.map_or(before, |todo| todo.done)
}

/// Done/remaining counters for the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub done: usize,
    pub remaining: usize,
}

impl Stats {
    pub fn from_todos(todos: &[Todo]) -> Self {
        let done = todos.iter().filter(|t| t.done).count();
        Self {
            done,
            remaining: todos.len() - done,
        }
    }

    pub fn total(&self) -> usize {
        self.done + self.remaining
    }

    /// Main list and footer are only shown for a non-empty list
    pub fn is_visible(&self) -> bool {
        self.total() > 0
    }

    /// State of the toggle-all checkbox
    pub fn all_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining_label(&self) -> String {
        match self.remaining {
            1 => "1 item left".to_string(),
            n => format!("{} items left", n),
        }
    }

    pub fn clear_label(&self) -> String {
        match self.done {
            1 => "Clear 1 completed item".to_string(),
            n => format!("Clear {} completed items", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TodoId, TodoPatch};

    fn todo(order: u64, content: &str) -> Todo {
        Todo::new(TodoId::new(), order, TodoPatch::content(content))
    }

    #[test]
    fn test_added_keeps_order() {
        let mut list = vec![todo(1, "A"), todo(3, "C")];
        apply_event(&mut list, &StoreEvent::Added(todo(2, "B")));
        apply_event(&mut list, &StoreEvent::Added(todo(4, "D")));

        let contents: Vec<_> = list.iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_changed_and_destroyed() {
        let a = todo(1, "A");
        let b = todo(2, "B");
        let mut list = vec![a.clone(), b.clone()];

        let mut done_a = a.clone();
        done_a.done = true;
        apply_event(&mut list, &StoreEvent::Changed(done_a.clone()));
        assert_eq!(list[0], done_a);

        apply_event(&mut list, &StoreEvent::Destroyed(a.id));
        assert_eq!(list, vec![b]);
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut list = vec![todo(1, "Stale")];
        let fresh = vec![todo(1, "X"), todo(2, "Y")];
        apply_event(&mut list, &StoreEvent::Reset(fresh.clone()));
        assert_eq!(list, fresh);
    }

    #[test]
    fn test_failed_toggle_restores_checkbox() {
        assert!(!settled_done(None, false));
        assert!(settled_done(None, true));

        let mut toggled = todo(1, "Flipped");
        toggled.done = true;
        assert!(settled_done(Some(&toggled), false));
    }

    #[test]
    fn test_stats_labels() {
        let stats = Stats { done: 1, remaining: 2 };
        assert_eq!(stats.remaining_label(), "2 items left");
        assert_eq!(stats.clear_label(), "Clear 1 completed item");
        assert!(!stats.all_done());

        let stats = Stats { done: 3, remaining: 1 };
        assert_eq!(stats.remaining_label(), "1 item left");
        assert_eq!(stats.clear_label(), "Clear 3 completed items");
    }

    #[test]
    fn test_empty_list_is_hidden() {
        let stats = Stats::from_todos(&[]);
        assert!(!stats.is_visible());
        assert!(stats.all_done());

        let mut finished = todo(1, "Done");
        finished.done = true;
        let stats = Stats::from_todos(&[finished, todo(2, "Open")]);
        assert!(stats.is_visible());
        assert_eq!(stats, Stats { done: 1, remaining: 1 });
    }
}
