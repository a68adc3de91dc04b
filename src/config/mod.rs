pub const DEFAULT_TEXT: &str = "My name is Sidak";
pub const REPORT_LABEL: &str = "Number of vowels are: ";

/// Fixed at build time; nothing is read from args, env or files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    pub text: String,
    pub label: String,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            label: REPORT_LABEL.to_string(),
        }
    }
}
