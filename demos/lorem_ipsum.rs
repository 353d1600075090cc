use typeset::{Config, Document, Paragraph};

/// Typesets a few paragraphs of lorem ipsum at 60 columns without hanging
/// punctuation, so the output is a clean flush-right block.
fn main() {
    let config = Config::default().with_columns(60usize).with_hanging(false, false);

    let mut document = Document::new(config);
    for (index, words) in [64usize, 96, 48].into_iter().enumerate() {
        let paragraph = Paragraph::new(&lipsum::lipsum(words)).expect("lipsum is not empty");
        document.add_paragraph(paragraph, index > 0);
    }

    document
        .write_to(&mut std::io::stdout().lock())
        .expect("can write to stdout");
}
