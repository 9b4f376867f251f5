//! PostgreSQL adapters for the persistence ports.

mod assessment_repository;
mod profile_repository;

pub use assessment_repository::PostgresAssessmentRepository;
pub use profile_repository::PostgresProfileRepository;
