// Adapters layer: concrete reporters for the domain's Reporter port.

use crate::config::REPORT_LABEL;
use crate::core::{Reporter, VowelCount};
use crate::utils::error::Result;
use std::io::Write;

pub fn render_line(label: &str, count: &VowelCount) -> String {
    format!("{}{}", label, count.vowels)
}

/// Writes one `<label><N>` line per report.
pub struct LineReporter<W: Write> {
    writer: W,
    label: String,
}

impl<W: Write> LineReporter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_label(writer, REPORT_LABEL)
    }

    pub fn with_label(writer: W, label: impl Into<String>) -> Self {
        Self {
            writer,
            label: label.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn report(&mut self, count: &VowelCount) -> Result<()> {
        writeln!(self.writer, "{}", render_line(&self.label, count))?;
        self.writer.flush()?;
        Ok(())
    }
}
