pub mod allergen;
pub mod allergy_profile;
pub mod authentication;
pub mod common;
pub mod crypto;
pub mod jwt;
pub mod scan;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;
