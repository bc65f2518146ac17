//! User Gestures
//!
//! Maps the gestures of the todo page onto store operations. Handlers
//! in the view layer call these and nothing else mutates the store.

use crate::domain::{DomainResult, Todo, TodoId, TodoPatch};
use crate::storage::Repository;
use crate::store::TodoStore;

/// Result of committing an inline edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Saved(Todo),
    /// The text was emptied, so the todo was removed
    Deleted,
}

/// Enter in the new-todo input. Empty text creates nothing; any other
/// text, whitespace included, is stored as typed.
pub fn create_on_enter<R: Repository<Todo>>(
    store: &mut TodoStore<R>,
    text: &str,
) -> DomainResult<Option<Todo>> {
    if text.is_empty() {
        return Ok(None);
    }
    store.create(TodoPatch::content(text)).map(Some)
}

/// Enter or blur in a row's edit field
pub fn commit_edit<R: Repository<Todo>>(
    store: &mut TodoStore<R>,
    id: &TodoId,
    text: &str,
) -> DomainResult<EditOutcome> {
    if text.is_empty() {
        store.destroy(id)?;
        return Ok(EditOutcome::Deleted);
    }
    store.save(id, &TodoPatch::content(text)).map(EditOutcome::Saved)
}

pub fn toggle_done<R: Repository<Todo>>(store: &mut TodoStore<R>, id: &TodoId) -> DomainResult<Todo> {
    store.toggle(id)
}

pub fn delete<R: Repository<Todo>>(store: &mut TodoStore<R>, id: &TodoId) -> DomainResult<()> {
    store.destroy(id)
}

/// The toggle-all checkbox; `checked` is its new state
pub fn toggle_all<R: Repository<Todo>>(store: &mut TodoStore<R>, checked: bool) -> DomainResult<usize> {
    store.toggle_all(checked)
}

pub fn clear_completed<R: Repository<Todo>>(store: &mut TodoStore<R>) -> DomainResult<usize> {
    store.clear_completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{LocalRepository, MemoryStorage, DEFAULT_NAMESPACE};

    fn setup_store() -> TodoStore<LocalRepository<MemoryStorage>> {
        TodoStore::new(LocalRepository::new(MemoryStorage::new(), DEFAULT_NAMESPACE))
    }

    #[test]
    fn test_empty_input_creates_nothing() {
        let mut store = setup_store();
        assert_eq!(create_on_enter(&mut store, "").unwrap(), None);
        assert!(store.is_empty());
        assert!(store.repository().storage().is_empty());
    }

    #[test]
    fn test_enter_keeps_text_as_typed() {
        let mut store = setup_store();
        let todo = create_on_enter(&mut store, "  Pay rent ").unwrap().unwrap();
        assert_eq!(todo.content, "  Pay rent ");

        let blank = create_on_enter(&mut store, "   ").unwrap().unwrap();
        assert_eq!(blank.content, "   ");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_commit_edit_saves_text() {
        let mut store = setup_store();
        let todo = create_on_enter(&mut store, "Typo").unwrap().unwrap();

        match commit_edit(&mut store, &todo.id, "Fixed").unwrap() {
            EditOutcome::Saved(saved) => assert_eq!(saved.content, "Fixed"),
            EditOutcome::Deleted => panic!("edit should have been saved"),
        }
        assert_eq!(store.get(&todo.id).unwrap().content, "Fixed");
    }

    #[test]
    fn test_empty_edit_deletes() {
        let mut store = setup_store();
        let todo = create_on_enter(&mut store, "Going away").unwrap().unwrap();
        create_on_enter(&mut store, "Staying").unwrap();

        assert_eq!(commit_edit(&mut store, &todo.id, "").unwrap(), EditOutcome::Deleted);
        assert!(store.get(&todo.id).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_whitespace_edit_is_saved() {
        let mut store = setup_store();
        let todo = create_on_enter(&mut store, "Spaces").unwrap().unwrap();

        assert!(matches!(
            commit_edit(&mut store, &todo.id, " ").unwrap(),
            EditOutcome::Saved(ref saved) if saved.content == " "
        ));
        assert_eq!(store.get(&todo.id).unwrap().content, " ");
    }

    #[test]
    fn test_toggle_all_sets_every_flag() {
        let mut store = setup_store();
        let a = create_on_enter(&mut store, "A").unwrap().unwrap();
        create_on_enter(&mut store, "B").unwrap();
        toggle_done(&mut store, &a.id).unwrap();

        toggle_all(&mut store, true).unwrap();
        assert!(store.iter().all(|t| t.done));

        toggle_all(&mut store, false).unwrap();
        assert!(store.iter().all(|t| !t.done));
    }

    #[test]
    fn test_clear_completed_scenario() {
        let mut store = setup_store();
        let a = create_on_enter(&mut store, "A").unwrap().unwrap();
        let b = create_on_enter(&mut store, "B").unwrap().unwrap();
        let c = create_on_enter(&mut store, "C").unwrap().unwrap();
        toggle_done(&mut store, &a.id).unwrap();
        toggle_done(&mut store, &c.id).unwrap();

        assert_eq!(clear_completed(&mut store).unwrap(), 2);
        assert_eq!(store.to_vec(), vec![b]);
    }

    #[test]
    fn test_delete_removes_todo() {
        let mut store = setup_store();
        let todo = create_on_enter(&mut store, "Delete me").unwrap().unwrap();
        delete(&mut store, &todo.id).unwrap();
        assert!(store.is_empty());
    }
}
