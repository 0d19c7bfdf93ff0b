//! In-process story storage.

use std::cell::RefCell;

use tracing::warn;

use crate::core::{Datastore, Story};
use crate::error::BacklogError;

/// Stories kept in a `Vec`, in insertion order.
///
/// Same contract as the `SQLite` engine; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryDatastore {
    stories: RefCell<Vec<Story>>,
}

impl MemoryDatastore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stories.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.borrow().is_empty()
    }
}

impl Datastore for MemoryDatastore {
    fn create_story(&self, story: &Story) -> Result<(), BacklogError> {
        self.stories.borrow_mut().push(story.clone());
        Ok(())
    }

    fn read_stories(&self) -> Result<Vec<Story>, BacklogError> {
        Ok(self.stories.borrow().clone())
    }

    fn delete_story(&self, id: &str) -> Result<Option<Story>, BacklogError> {
        let mut stories = self.stories.borrow_mut();
        let positions: Vec<usize> = stories
            .iter()
            .enumerate()
            .filter(|(_, story)| story.id() == id)
            .map(|(index, _)| index)
            .collect();

        match positions.as_slice() {
            [index] => Ok(Some(stories.remove(*index))),
            [] => Ok(None),
            duplicates => {
                warn!(id, count = duplicates.len(), "refusing to delete duplicated story id");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_create_and_read_keep_insertion_order() {
        let store = MemoryDatastore::new();
        store.create_story(&Story::new("b", 1, 1)).unwrap();
        store.create_story(&Story::new("a", 2, 1)).unwrap();

        let ids: Vec<_> = store
            .read_stories()
            .unwrap()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_delete_single_match() {
        let store = MemoryDatastore::new();
        store.create_story(&Story::new("1", 3, 1)).unwrap();

        assert_eq!(store.delete_story("1").unwrap(), Some(Story::new("1", 3, 1)));
        assert!(store.is_empty());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_delete_duplicated_id_warns() {
        let store = MemoryDatastore::new();
        store.create_story(&Story::new("dup", 3, 1)).unwrap();
        store.create_story(&Story::new("dup", 5, 1)).unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let removed =
            tracing::subscriber::with_default(subscriber, || store.delete_story("dup").unwrap());

        assert_eq!(removed, None);
        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("refusing to delete duplicated story id"), "{logs}");
        assert!(logs.contains("count=2"), "{logs}");
    }

    #[test]
    fn test_delete_missing_or_duplicated() {
        let store = MemoryDatastore::new();
        store.create_story(&Story::new("dup", 3, 1)).unwrap();
        store.create_story(&Story::new("dup", 5, 1)).unwrap();

        assert_eq!(store.delete_story("none").unwrap(), None);
        assert_eq!(store.delete_story("dup").unwrap(), None);
        assert_eq!(store.len(), 2);
    }
}
