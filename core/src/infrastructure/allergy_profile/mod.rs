pub mod mappers;
pub mod repositories;

pub use repositories::allergy_profile_repository::PostgresAllergyProfileRepository;
