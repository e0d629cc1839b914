mod account;
mod board;
mod course;
mod progress;
mod question;
mod theme;

pub use account::{
    AccountError, Email, LoginDraft, MIN_PASSWORD_LEN, RegistrationDraft, Session, UserAccount,
    UserDirectory,
};
pub use board::{ANONYMOUS_AUTHOR, BoardDraft, BoardEntry, BoardKind, escape_angle, newest_first};
pub use course::{Course, CourseError, Level, LevelFilter, ParseLevelError};
pub use progress::Progress;
pub use question::{OPTION_COUNT, Question, QuestionError};
pub use theme::{ParseThemeError, Theme, ThemeMode};
