//! Domain Layer
//!
//! Food entities, numeric coercion and error types.

mod error;
mod food;
mod number;

pub use error::*;
pub use food::{FoodDraft, FoodItem, FoodPatch, FoodStatus};
pub use number::parse_number;
