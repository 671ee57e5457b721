pub mod get_common_allergens;
