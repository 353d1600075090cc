use typeset::{Config, Document, Paragraph};

/// Typesets the opening of the Frog Prince to standard output at the default
/// 80 columns, with hanging punctuation and indented paragraphs.
fn main() {
    let paragraphs = [
        "In old times when wishing still helped one, there lived a king whose \
         daughters were all beautiful, but the youngest was so beautiful that \
         the sun itself, which has seen so much, was astonished whenever it \
         shone in her face.",
        "Close by the King's castle lay a great dark forest, and under an old \
         lime-tree in the forest was a well, and when the day was very warm, \
         the King's child went out into the forest and sat down by the side of \
         the cool fountain, and when she was dull she took a golden ball, and \
         threw it up on high and caught it, and this ball was her favorite \
         plaything.",
        "Now it so happened that on one occasion the princess's golden ball \
         did not fall into the little hand which she was holding up for it, \
         but on to the ground beyond, and rolled straight into the water.",
        "The King's daughter followed it with her eyes, but it vanished, and \
         the well was deep, so deep that the bottom could not be seen.",
        "On this she began to cry, and cried louder and louder, and could not \
         be comforted.",
        "And as she thus lamented some one said to her, ``What ails thee, \
         King's daughter? Thou weepest so that even a stone would show \
         pity.''",
        "She looked round to the side from whence the voice came, and saw a \
         frog stretching forth its thick, ugly head from the water.",
        "``Ah! old water-splasher, is it thou?'' said she; ``I am weeping for \
         my golden ball, which has fallen into the well.''",
    ];

    let mut document = Document::new(Config::default());
    for (index, text) in paragraphs.iter().enumerate() {
        let paragraph = Paragraph::new(text).expect("paragraph is not empty");
        document.add_paragraph(paragraph, index > 0);
    }

    document
        .write_to(&mut std::io::stdout().lock())
        .expect("can write to stdout");
}
