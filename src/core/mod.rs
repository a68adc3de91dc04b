pub mod driver;
pub mod vowel;

pub use crate::domain::model::{VowelCount, VOWELS};
pub use crate::domain::ports::Reporter;
pub use crate::utils::error::Result;
