use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-course "completed" flags, stored under `progress`.
///
/// Entries are only ever added or flipped, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<String, bool>);

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_completed(&self, course_id: &str) -> bool {
        self.0.get(course_id).copied().unwrap_or(false)
    }

    pub fn set_completed(&mut self, course_id: impl Into<String>, completed: bool) {
        self.0.insert(course_id.into(), completed);
    }

    /// Number of the given course ids currently marked completed.
    pub fn completed_among<'a>(&self, course_ids: impl IntoIterator<Item = &'a str>) -> usize {
        course_ids
            .into_iter()
            .filter(|id| self.is_completed(id))
            .count()
    }
}
