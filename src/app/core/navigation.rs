use super::*;

/// Cursor over a fixed-size collection.
///
/// `index == None` is the pre-initialization state: nothing has been
/// rendered yet. Every transition out of it lands on the first record,
/// except `Move::Last`. Movement saturates at both ends, it never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: Option<usize>,
    len: usize,
}

impl Cursor {
    /// Create an unpositioned cursor over `len` records.
    pub fn new(len: usize) -> Result<Self, BrowseError> {
        if len == 0 {
            return Err(BrowseError::EmptyCollection);
        }
        Ok(Cursor { index: None, len })
    }

    /// Current position, or `None` before the first transition.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Position with `-1` standing for "not yet positioned".
    pub fn raw_index(&self) -> isize {
        self.index.map_or(-1, |i| i as isize)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_positioned(&self) -> bool {
        self.index.is_some()
    }

    /// Apply `mv` and report whether the index moved.
    pub fn apply(&mut self, mv: Move) -> Transition {
        let last = self.len - 1;
        let target = match (self.index, mv) {
            (None, Move::Last) => last,
            (None, _) => 0,
            (Some(_), Move::First) => 0,
            (Some(_), Move::Last) => last,
            (Some(i), Move::Next) => std::cmp::min(i + 1, last),
            (Some(i), Move::Previous) => i.saturating_sub(1),
        };
        if self.index == Some(target) {
            return Transition::Unchanged;
        }
        self.index = Some(target);
        Transition::Changed
    }
}

impl Session {
    /// Move the cursor. Returns `Transition::Unchanged` when a bound is
    /// already saturated so the caller can skip the repaint.
    pub fn navigate(&mut self, mv: Move) -> Transition {
        let before = self.cursor.raw_index();
        let outcome = self.cursor.apply(mv);
        tracing::debug!(?mv, before, after = self.cursor.raw_index(), ?outcome, "navigate");
        outcome
    }
}
