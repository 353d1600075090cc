//! The two layout stages, applied in sequence: [`wrap`] turns one paragraph
//! into an ordered run of [`Line`](crate::Line)s no wider than the column
//! budget, and [`justify`] renders one line with its inter-word spacing
//! stretched so the right edge lands exactly on the target column.
//!
//! The stages are independent: justifying a line depends only on that line
//! and the [`Config`](crate::Config), never on its neighbours, so lines may
//! be rendered in any order as long as they are written out in the order the
//! wrapper produced them.
//!
//! # Example
//!
//! ```
//! use typeset::{Config, Paragraph};
//! use typeset::layout::{justify, wrap};
//!
//! let config = Config::default().with_columns(40usize);
//! let paragraph = Paragraph::new(
//!     "In old times when wishing still helped one, there lived a king \
//!      whose daughters were all beautiful.",
//! )
//! .expect("paragraph is not empty");
//!
//! for line in wrap(paragraph.text(), true, &config) {
//!     println!("{}", justify(&line, &config));
//! }
//! ```

mod justify;
mod wrap;

pub use justify::*;
pub use wrap::*;
