use crate::config::CountConfig;
use crate::core::vowel::count_vowels;
use crate::core::{Reporter, VowelCount};
use crate::utils::error::Result;

pub struct CountDriver<R: Reporter> {
    reporter: R,
    config: CountConfig,
}

impl<R: Reporter> CountDriver<R> {
    pub fn new(reporter: R, config: CountConfig) -> Self {
        Self { reporter, config }
    }

    pub fn run(&mut self) -> Result<VowelCount> {
        let text = self.config.text.clone();
        self.run_text(&text)
    }

    pub fn run_text(&mut self, text: &str) -> Result<VowelCount> {
        tracing::debug!("Scanning {} bytes of text", text.len());
        let count = count_vowels(text);
        tracing::debug!(
            "Scanned {} characters, {} vowels",
            count.text_len,
            count.vowels
        );

        self.reporter.report(&count)?;
        Ok(count)
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
