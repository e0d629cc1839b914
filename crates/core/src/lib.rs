#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod quiz;
pub mod route;
pub mod time;

pub use catalog::{Catalog, CourseFilter};
pub use quiz::{QuestionSet, QuizAnswers, QuizError, QuizScore};
pub use route::{NavItem, RouteState, Section};
pub use time::Clock;
