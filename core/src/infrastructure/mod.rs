pub mod allergy_profile;
pub mod crypto;
pub mod db;
pub mod jwt;
pub mod llm;
pub mod scan;
pub mod user;
