/// The recognised vowels, lowercase then uppercase.
pub const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

/// Outcome of scanning one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VowelCount {
    /// Characters scanned, not bytes.
    pub text_len: usize,
    pub vowels: usize,
}

impl VowelCount {
    pub fn is_all_vowels(&self) -> bool {
        self.vowels == self.text_len
    }
}
