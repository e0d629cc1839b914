mod account_vm;
mod board_vm;
mod course_vm;
mod quiz_vm;
mod time_fmt;

pub use account_vm::{
    LOGGED_OUT_MESSAGE, LOGIN_FAILED_MESSAGE, REGISTERED_MESSAGE, login_message,
    register_error_message, signed_in_message,
};
pub use board_vm::{BoardEntryVm, map_board_entries};
pub use course_vm::{CourseCardVm, completion_label, map_course_cards};
pub use quiz_vm::{QuestionVm, map_questions, quiz_result_message};
pub use time_fmt::format_datetime;
