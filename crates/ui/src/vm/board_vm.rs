use academy_core::model::{BoardEntry, BoardKind};

use crate::vm::time_fmt::format_datetime;

/// One rendered board post. `body_markup` is inserted as markup; only `<`
/// has been escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardEntryVm {
    pub author: String,
    pub detail: String,
    pub body_markup: String,
}

impl BoardEntryVm {
    fn new(kind: BoardKind, entry: &BoardEntry) -> Self {
        let detail = match kind {
            BoardKind::Forum => format_datetime(entry.created_at()),
            BoardKind::Feedback => entry.role().unwrap_or_default().to_owned(),
        };
        Self {
            author: entry.author().to_owned(),
            detail,
            body_markup: entry.body_markup(),
        }
    }
}

/// Map entries already in display order.
#[must_use]
pub fn map_board_entries(kind: BoardKind, entries: &[BoardEntry]) -> Vec<BoardEntryVm> {
    entries.iter().map(|entry| BoardEntryVm::new(kind, entry)).collect()
}
