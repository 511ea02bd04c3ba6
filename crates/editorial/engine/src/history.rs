//! Content history cursor
//!
//! A forward-only view over a content item's status history. The legacy
//! system held a live database cursor here; this loads the full ordered
//! result set eagerly and walks an immutable in-memory sequence instead,
//! preserving the observable behavior (forward-only, single-pass)
//! without holding a handle across calls.

use editorial_store::ContentHistorySource;
use editorial_types::{ContentHistoryEntry, ContentId, EditorialResult};

/// A forward-only, non-restartable cursor over a content item's history,
/// oldest entry first.
///
/// The cursor starts before the first entry; call
/// [`move_next`](Self::move_next) to advance. There is no rewind and no
/// random access, mirroring the append-only nature of the history.
#[derive(Clone, Debug)]
pub struct ContentHistoryCursor {
    content_id: ContentId,
    entries: Vec<ContentHistoryEntry>,
    position: Option<usize>,
}

impl ContentHistoryCursor {
    /// Load the history of `content_id`. Zero entries produce an empty
    /// cursor, never an error.
    pub fn load(
        source: &dyn ContentHistorySource,
        content_id: ContentId,
    ) -> EditorialResult<Self> {
        let entries = source.content_history(content_id)?;
        tracing::debug!(
            content_id = %content_id,
            entries = entries.len(),
            "content history loaded"
        );
        Ok(Self::from_entries(content_id, entries))
    }

    /// Build a cursor from already-loaded entries, oldest first.
    pub fn from_entries(content_id: ContentId, entries: Vec<ContentHistoryEntry>) -> Self {
        Self {
            content_id,
            entries,
            position: None,
        }
    }

    pub fn content_id(&self) -> ContentId {
        self.content_id
    }

    /// True iff the item has zero history entries, independent of cursor
    /// position.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries, independent of cursor position.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Advance to the next entry. Returns `false` once the sequence is
    /// exhausted; the cursor then stays exhausted.
    pub fn move_next(&mut self) -> bool {
        let next = match self.position {
            None => 0,
            Some(current) => current + 1,
        };
        if next < self.entries.len() {
            self.position = Some(next);
            true
        } else {
            self.position = Some(self.entries.len());
            false
        }
    }

    /// The entry the cursor is on, if any. `None` before the first
    /// `move_next` and after exhaustion.
    pub fn current(&self) -> Option<&ContentHistoryEntry> {
        self.position.and_then(|index| self.entries.get(index))
    }

    /// Release the cursor. Loading is eager, so no live handle is held;
    /// dropping releases the same way.
    pub fn close(self) {}
}
