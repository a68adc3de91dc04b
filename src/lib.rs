pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::LineReporter;
pub use crate::config::CountConfig;
pub use crate::core::{driver::CountDriver, vowel::count_vowels, vowel::is_vowel};
pub use crate::domain::model::{VowelCount, VOWELS};
pub use crate::utils::error::{Result, VowelError};
