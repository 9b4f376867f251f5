//! Profile use cases.

mod get_profile;
mod update_profile;
mod upload_avatar;

pub use get_profile::GetProfileHandler;
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
pub use upload_avatar::{UploadAvatarCommand, UploadAvatarHandler};
