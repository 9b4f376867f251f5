//! User module - the editable account profile.

mod profile;

pub use profile::{Gender, ProfileUpdate, UserProfile};
