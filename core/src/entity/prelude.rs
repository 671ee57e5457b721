pub use super::allergy_profiles::Entity as AllergyProfiles;
pub use super::scanned_products::Entity as ScannedProducts;
pub use super::users::Entity as Users;
