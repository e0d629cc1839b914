use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Author shown when the poster leaves the name field blank.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// The two append-only boards of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    Forum,
    Feedback,
}

impl BoardKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoardKind::Forum => "forum",
            BoardKind::Feedback => "feedback",
        }
    }

    /// Only the feedback board records a role next to the author.
    #[must_use]
    pub fn has_role(self) -> bool {
        matches!(self, BoardKind::Feedback)
    }
}

/// A forum post or feedback entry as persisted.
///
/// Forum posts are stored as `{name, msg, time}`. Feedback entries always
/// carry a role (possibly empty) and are stored as `{name, role, text, time}`.
/// Either body field name is accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardEntry {
    #[serde(rename = "name")]
    author: String,
    #[serde(rename = "msg", alias = "text")]
    body: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(rename = "time", with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct ForumRecord<'a> {
    name: &'a str,
    msg: &'a str,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    time: DateTime<Utc>,
}

#[derive(Serialize)]
struct FeedbackRecord<'a> {
    name: &'a str,
    role: &'a str,
    text: &'a str,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    time: DateTime<Utc>,
}

impl Serialize for BoardEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.role {
            None => ForumRecord {
                name: &self.author,
                msg: &self.body,
                time: self.created_at,
            }
            .serialize(serializer),
            Some(role) => FeedbackRecord {
                name: &self.author,
                role,
                text: &self.body,
                time: self.created_at,
            }
            .serialize(serializer),
        }
    }
}

impl BoardEntry {
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|role| !role.is_empty())
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Body with `<` escaped so it can be inserted as markup. Nothing else is
    /// sanitized.
    #[must_use]
    pub fn body_markup(&self) -> String {
        escape_angle(&self.body)
    }
}

#[must_use]
pub fn escape_angle(text: &str) -> String {
    text.replace('<', "&lt;")
}

/// Form input for either board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardDraft {
    pub name: String,
    pub body: String,
    pub role: Option<String>,
}

impl BoardDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Turns the draft into an entry of `kind` stamped with `now`.
    ///
    /// Returns `None` when the trimmed body is empty: submitting such a form
    /// stores nothing. Forum entries never keep a role; feedback entries
    /// always have one, empty when the field was left blank.
    #[must_use]
    pub fn into_entry(self, kind: BoardKind, now: DateTime<Utc>) -> Option<BoardEntry> {
        let body = self.body.trim();
        if body.is_empty() {
            return None;
        }
        let author = match self.name.trim() {
            "" => ANONYMOUS_AUTHOR.to_owned(),
            name => name.to_owned(),
        };
        let role = kind
            .has_role()
            .then(|| self.role.as_deref().unwrap_or_default().trim().to_owned());

        Some(BoardEntry {
            author,
            body: body.to_owned(),
            role,
            created_at: now,
        })
    }
}

/// Entries in display order: most recently appended first.
pub fn newest_first(entries: &[BoardEntry]) -> impl Iterator<Item = &BoardEntry> {
    entries.iter().rev()
}
