use derive_more::{Add, AddAssign, Display, From, Into, Sub};

/// A width measured in character columns. All layout in this crate is
/// monospace: one character is one column, regardless of how a terminal or
/// font might display it.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sub,
    Display,
    From,
    Into,
)]
pub struct Col(pub usize);

impl Col {
    /// The width of a piece of text, counted in characters (not bytes)
    pub fn of(text: &str) -> Col {
        Col(text.chars().count())
    }
}
