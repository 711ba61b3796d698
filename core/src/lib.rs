pub mod action;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod grade;
pub mod shuffle;
pub mod state;

pub use action::{QuizAction, QuizEffect};
pub use catalog::{organelle_by_id, target_by_id, Organelle, Target, ORGANELLES, TARGETS};
pub use controller::{CheckOutcome, Hint, Placement, QuizController, TapOutcome, TargetRow, DROP_PLACEHOLDER};
pub use error::{IdKind, QuizError};
pub use grade::{grade, GradeReport, RowMark};
pub use shuffle::{next_round_seed, shuffled_order, splitmix32};
pub use state::InputMode;
