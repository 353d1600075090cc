use std::io::Write;

use crate::config::Config;
use crate::error::TypesetError;
use crate::layout::{justify, wrap};
use crate::paragraph::Paragraph;

/// A document is the main object that collects paragraphs and renders them
/// out with a call to [Document::write_to]. Paragraphs are rendered in the
/// order they were added, separated by exactly one blank line.
#[derive(Debug, Default, Clone)]
pub struct Document {
    pub config: Config,
    paragraphs: Vec<(Paragraph, bool)>,
}

impl Document {
    pub fn new(config: Config) -> Document {
        Document {
            config,
            paragraphs: Vec::new(),
        }
    }

    /// Append a paragraph to the end of the document. `indent` controls
    /// whether the paragraph's first line gets a first-line indent.
    pub fn add_paragraph(&mut self, paragraph: Paragraph, indent: bool) {
        self.paragraphs.push((paragraph, indent));
    }

    /// Wraps and justifies every paragraph, writing one rendered line at a
    /// time to the sink, with a blank line between consecutive paragraphs.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), TypesetError> {
        for (index, (paragraph, indent)) in self.paragraphs.iter().enumerate() {
            if index > 0 {
                writeln!(sink)?;
            }

            let lines = wrap(paragraph.text(), *indent, &self.config);
            log::debug!("wrapped paragraph {} into {} lines", index, lines.len());
            for line in &lines {
                writeln!(sink, "{}", justify(line, &self.config))?;
            }
        }
        Ok(())
    }
}
