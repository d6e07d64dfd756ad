use crate::errors::BrowseError;

use super::types::{Collection, Move, Record, Transition};

// submodules live in `src/app/core/`
mod navigation;

pub use navigation::Cursor;

/// Browser session: the read-only beer list plus the cursor over it.
///
/// All state lives here and is passed explicitly to the renderer; there is
/// no process-wide "current beer".
#[derive(Debug, Clone)]
pub struct Session {
    collection: Collection,
    cursor: Cursor,
}

impl Session {
    /// Start an unpositioned session over `collection`.
    pub fn new(collection: Collection) -> Result<Self, BrowseError> {
        let cursor = Cursor::new(collection.len())?;
        Ok(Session { collection, cursor })
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The record under the cursor, or `None` before the first move.
    pub fn current(&self) -> Option<&Record> {
        self.cursor.index().and_then(|i| self.collection.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::sample_record;

    fn session(n: u32) -> Session {
        let records = (1..=n).map(sample_record).collect();
        Session::new(Collection::new(records).unwrap()).unwrap()
    }

    #[test]
    fn three_records_next_saturates() {
        let mut s = session(3);
        assert!(s.current().is_none());
        assert!(s.navigate(Move::Next).changed());
        assert_eq!(s.cursor().index(), Some(0));
        s.navigate(Move::Next);
        s.navigate(Move::Next);
        assert_eq!(s.cursor().index(), Some(2));
        assert_eq!(s.navigate(Move::Next), Transition::Unchanged);
        assert_eq!(s.cursor().index(), Some(2));
        assert_eq!(s.current().map(|r| r.id), Some(3));
    }

    #[test]
    fn last_from_unpositioned() {
        let mut s = session(4);
        s.navigate(Move::Last);
        assert_eq!(s.current().map(|r| r.id), Some(4));
        s.navigate(Move::Previous);
        assert_eq!(s.current().map(|r| r.id), Some(3));
    }
}
