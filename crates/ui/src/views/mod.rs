mod account;
mod board;
mod courses;
mod home;
mod quiz;
mod scripts;
mod state;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use account::AccountView;
pub use board::BoardView;
pub use courses::CoursesView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use scripts::prefers_dark_scheme;
pub use state::{ViewError, ViewState, view_state_from_resource};
