use crate::core::VowelCount;

/// Returns true only for the ten ASCII vowels, either case.
pub fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

pub fn count_vowels(text: &str) -> VowelCount {
    text.chars().fold(VowelCount::default(), |mut acc, ch| {
        acc.text_len += 1;
        if is_vowel(ch) {
            acc.vowels += 1;
        }
        acc
    })
}
