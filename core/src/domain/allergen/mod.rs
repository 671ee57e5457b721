pub mod detector;
pub mod entities;
pub mod parser;
pub mod ports;
pub mod services;

pub use detector::AllergenDetector;
pub use entities::*;
pub use parser::parse_ingredients;
