//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - persistence for finalized results
//! - `ProfileRepository` - persistence for editable user profiles
//! - `IdentityProvider` - account operations against the auth service
//! - `SessionValidator` - bearer token validation for incoming requests
//! - `AvatarStorage` - object storage for profile photos

mod assessment_repository;
mod avatar_storage;
mod identity_provider;
mod profile_repository;
mod session_validator;

pub use assessment_repository::AssessmentRepository;
pub use avatar_storage::AvatarStorage;
pub use identity_provider::{IdentityProvider, SessionTokens, SignUpRequest};
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
