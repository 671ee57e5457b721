pub mod allergen;
pub mod allergy_profile;
pub mod authentication;
pub mod scan;
pub mod server;
