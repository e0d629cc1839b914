use academy_core::model::{BoardDraft, BoardEntry, BoardKind, newest_first};
use storage::{Persistence, StoreKey};

use crate::Clock;
use crate::error::BoardServiceError;

/// Append-only board (forum or feedback) persisted as a JSON array.
#[derive(Clone)]
pub struct BoardService {
    kind: BoardKind,
    clock: Clock,
    store: Persistence,
}

impl BoardService {
    #[must_use]
    pub fn new(kind: BoardKind, clock: Clock, store: Persistence) -> Self {
        Self { kind, clock, store }
    }

    fn key(&self) -> StoreKey {
        match self.kind {
            BoardKind::Forum => StoreKey::Forum,
            BoardKind::Feedback => StoreKey::Feedback,
        }
    }

    /// Entries in the order they were appended.
    pub async fn entries(&self) -> Vec<BoardEntry> {
        self.store.get(self.key(), Vec::new()).await
    }

    /// Entries for display, most recent first.
    pub async fn newest_first(&self) -> Vec<BoardEntry> {
        let entries = self.entries().await;
        newest_first(&entries).cloned().collect()
    }

    /// Append a submission.
    ///
    /// Returns `Ok(None)` without touching the store when the body is blank.
    /// The role is only kept on the feedback board.
    ///
    /// # Errors
    ///
    /// Returns `BoardServiceError::Storage` if the stored entries cannot be
    /// read or the write fails; the stored list is left as it was.
    pub async fn submit(&self, draft: BoardDraft) -> Result<Option<BoardEntry>, BoardServiceError> {
        let Some(entry) = draft.into_entry(self.kind, self.clock.now()) else {
            return Ok(None);
        };

        let total = self
            .store
            .update(self.key(), Vec::new(), |entries: &mut Vec<BoardEntry>| {
                entries.push(entry.clone());
                Ok::<_, BoardServiceError>(entries.len())
            })
            .await?;

        tracing::info!(
            board = self.kind.as_str(),
            author = entry.author(),
            total,
            "board entry appended"
        );
        Ok(Some(entry))
    }
}
