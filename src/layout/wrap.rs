use crate::config::Config;
use crate::line::Line;

/// Greedy word-wraps one normalized paragraph into lines of at most
/// `config.columns` characters, breaking only at spaces.
///
/// When `indent_first` is set, the first emitted line is flagged for a
/// paragraph indent and its budget shrinks by `config.indent` so the
/// rendered line still ends on the target column. The last line of every
/// paragraph is flagged ragged and is never stretched.
///
/// A single word longer than the line budget is never split: it is emitted
/// as one overlong line and left for the justifier's verbatim fallback.
pub fn wrap(text: &str, indent_first: bool, config: &Config) -> Vec<Line> {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();
    let columns = usize::from(config.columns);
    let indent_width = usize::from(config.indent);

    let mut lines = Vec::new();
    let mut start = 0;
    let mut indent = indent_first;

    loop {
        let budget = if indent {
            columns.saturating_sub(indent_width)
        } else {
            columns
        };
        if total - start <= budget {
            break;
        }

        // candidate cut one past the last column that fits
        let mut end = start + budget;
        if chars[end] != ' ' {
            while end > start && chars[end] != ' ' {
                end -= 1;
            }
            if end == start {
                // one word wider than the budget: extend to the end of the
                // word and let it overflow rather than splitting it
                end = start + budget;
                while end < total && chars[end] != ' ' {
                    end += 1;
                }
            }
        }

        lines.push(Line {
            text: chars[start..end].iter().collect::<String>().trim().to_string(),
            indent,
            force_no_justify: false,
        });

        // consume the word-separating spaces so they don't lead the next line
        while end < total && chars[end] == ' ' {
            end += 1;
        }
        start = end;
        indent = false;
    }

    // whatever remains is the ragged last line; an empty remainder (possible
    // only for input with trailing spaces) emits nothing
    if start < total {
        lines.push(Line {
            text: chars[start..].iter().collect::<String>().trim().to_string(),
            indent,
            force_no_justify: true,
        });
    }

    lines
}
