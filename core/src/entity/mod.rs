pub mod prelude;

pub mod allergy_profiles;
pub mod scanned_products;
pub mod users;
