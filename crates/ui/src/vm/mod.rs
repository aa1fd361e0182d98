mod quiz_vm;
mod summary_vm;
mod time_fmt;

pub use quiz_vm::{AdjustmentVm, OptionButtonVm, QuizScreenVm, map_quiz_screen};
pub use summary_vm::{SummaryRowVm, SummaryVm, map_summary, map_summary_from_snapshot};
pub use time_fmt::{format_datetime, format_elapsed};
