//! Assessment module - the sitting state machine and its durable result.

mod errors;
mod result;
mod shuffle;
mod sitting;

pub use errors::AssessmentError;
pub use result::{AssessmentRecord, AssessmentResult};
pub use shuffle::{IdentityShuffle, SeededShuffle, ShuffleStrategy};
pub use sitting::{Sitting, SittingPhase};
