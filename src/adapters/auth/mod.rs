//! Authentication adapters.

mod gotrue;
mod mock;

pub use gotrue::{GoTrueConfig, GoTrueIdentityProvider, GoTrueSessionValidator};
pub use mock::{MockIdentityProvider, MockSessionValidator};
