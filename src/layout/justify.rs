use crate::config::Config;
use crate::line::Line;
use crate::units::Col;

/// Renders one wrapped line, stretching its inter-word gaps so the right
/// edge lands exactly on `config.columns`. Ragged lines, lines with no
/// interior gap, and lines that already meet or exceed the budget are
/// rendered verbatim with natural single spaces.
///
/// With `hang_left` enabled, every line gets a one-column prefix ahead of the
/// text span: a leading punctuation mark hangs there, excluded from the
/// width accounting; lines without one get a plain space so left margins
/// stay aligned. With `hang_right` enabled, a trailing punctuation mark is
/// allowed one column past the nominal right margin.
///
/// The returned string carries no trailing newline; the output sink owns
/// line termination.
pub fn justify(line: &Line, config: &Config) -> String {
    let mut out = String::new();
    let mut budget = usize::from(config.columns) as isize;

    if line.indent {
        let indent = usize::from(config.indent);
        budget -= indent as isize;
        for _ in 0..indent {
            out.push(' ');
        }
    }

    let mut text = line.text.as_str();

    if config.hang_left {
        match text.chars().next() {
            Some(first) if config.hangs(first) => {
                out.push(first);
                text = &text[first.len_utf8()..];
            }
            _ => out.push(' '),
        }
    }

    let length = usize::from(Col::of(text)) as isize;
    let gaps = text.chars().filter(|&c| c == ' ').count();

    // extra spaces required on top of the natural single spaces; a trailing
    // hung mark earns one more so it lands past the margin
    let mut need = budget - length;
    if config.hang_right && text.chars().next_back().map_or(false, |c| config.hangs(c)) {
        need += 1;
    }

    if gaps == 0 || need < 1 || line.force_no_justify {
        out.push_str(text);
        return out;
    }

    let plan = space_plan(gaps, need as usize);

    let mut gap = 0;
    for c in text.chars() {
        if c == ' ' {
            for _ in 0..plan[gap] {
                out.push(' ');
            }
            gap += 1;
        } else {
            out.push(c);
        }
    }
    out
}

/// Computes the rendered width of each gap: every gap gets the natural space
/// plus an even share of `need`, and the remainder is spread one space at a
/// time across the line.
///
/// A lone remainder space goes to the last gap rather than the first, which
/// keeps stray wide gaps away from the left margin. Larger remainders walk a
/// fractional cursor across the gap indices at a stride of
/// `gaps / remainder`, dropping one space at each distinct index reached.
fn space_plan(gaps: usize, need: usize) -> Vec<usize> {
    let even = need / gaps;
    let mut plan = vec![1 + even; gaps];
    let mut remaining = need - even * gaps;

    if remaining == 1 {
        plan[gaps - 1] += 1;
        remaining = 0;
    }

    if remaining > 0 {
        let step = gaps as f64 / remaining as f64;
        let mut cursor = 0.0;
        let mut previous: Option<usize> = None;
        while cursor < gaps as f64 && remaining > 0 {
            let index = cursor.ceil() as usize;
            if index < gaps && previous != Some(index) {
                plan[index] += 1;
                remaining -= 1;
                previous = Some(index);
            }
            cursor += step;
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(columns: usize) -> Config {
        Config::default().with_columns(columns).with_hanging(false, false)
    }

    #[test]
    fn stretches_to_the_exact_column_width() {
        let out = justify(&Line::new("one two three"), &bare(20));
        assert_eq!(out, "one    two     three");
        assert_eq!(out.chars().count(), 20);
    }

    #[test]
    fn lone_extra_space_lands_on_the_last_gap() {
        // need is odd across two gaps, so after the even share one space is
        // left over; it belongs at the right edge of the line
        let out = justify(&Line::new("aa bb cc"), &bare(11));
        assert_eq!(out, "aa  bb   cc");
    }

    #[test]
    fn ragged_lines_render_verbatim() {
        let out = justify(&Line::new("one two three").ragged(), &bare(20));
        assert_eq!(out, "one two three");
    }

    #[test]
    fn ragged_rendering_is_idempotent() {
        let config = bare(20);
        let first = justify(&Line::new("one two three").ragged(), &config);
        let again = justify(&Line::new(first.clone()).ragged(), &config);
        assert_eq!(first, again);
    }

    #[test]
    fn no_gaps_renders_verbatim() {
        assert_eq!(justify(&Line::new("word"), &bare(20)), "word");
    }

    #[test]
    fn overfull_line_renders_verbatim() {
        // a 90-character word against an 80-column budget: need is negative
        let word = "x".repeat(90);
        assert_eq!(justify(&Line::new(word.clone()), &bare(80)), word);
    }

    #[test]
    fn exactly_full_line_is_untouched() {
        assert_eq!(justify(&Line::new("ab cd"), &bare(5)), "ab cd");
    }

    #[test]
    fn indent_is_prefixed_and_subtracted_from_the_budget() {
        let config = bare(20).with_indent(2usize);
        let out = justify(&Line::new("one two three").indented(), &config);
        assert_eq!(out, "  one   two    three");
        assert_eq!(out.chars().count(), 20);
    }

    #[test]
    fn indented_ragged_line_keeps_its_indent() {
        let config = bare(20).with_indent(2usize);
        let out = justify(&Line::new("one two three").indented().ragged(), &config);
        assert_eq!(out, "  one two three");
    }

    #[test]
    fn trailing_punctuation_hangs_past_the_margin() {
        let config = Config::default().with_columns(10usize).with_hanging(false, true);
        let out = justify(&Line::new("one two."), &config);
        assert_eq!(out, "one    two.");
        assert_eq!(out.chars().count(), 11);
    }

    #[test]
    fn leading_punctuation_hangs_ahead_of_the_text_span() {
        let config = Config::default().with_columns(10usize).with_hanging(true, false);
        let out = justify(&Line::new("\"one two"), &config);
        assert_eq!(out, "\"one    two");
        assert_eq!(out.chars().count(), 11);
    }

    #[test]
    fn hang_column_is_reserved_even_without_punctuation() {
        let config = Config::default().with_columns(10usize).with_hanging(true, false);
        let out = justify(&Line::new("one two"), &config);
        assert_eq!(out, " one    two");
    }

    #[test]
    fn hang_column_is_reserved_on_ragged_lines_too() {
        let config = Config::default().with_columns(80usize).with_hanging(true, false);
        let out = justify(&Line::new("one two").ragged(), &config);
        assert_eq!(out, " one two");
    }

    #[test]
    fn trailing_hang_can_tip_a_full_line_into_justification() {
        // the text already fills the budget, but the hung comma frees one
        // column of space budget
        let config = Config::default().with_columns(6usize).with_hanging(false, true);
        let out = justify(&Line::new("ab cd,"), &config);
        assert_eq!(out, "ab  cd,");
    }

    #[test]
    fn words_pass_through_unchanged() {
        let text = "the quick brown fox jumps";
        let out = justify(&Line::new(text), &bare(40));
        let letters = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(letters(&out), letters(text));
        assert_eq!(out.chars().count(), 40);
    }

    #[test]
    fn plan_walk_spreads_the_remainder_evenly() {
        // 5 gaps, 8 extra: even share 1 each, remainder 3 walks a stride of
        // 5/3 and lands on gaps 0, 2, and 4
        assert_eq!(space_plan(5, 8), vec![3, 2, 3, 2, 3]);
    }

    #[test]
    fn plan_lone_remainder_goes_last() {
        assert_eq!(space_plan(2, 7), vec![4, 5]);
        assert_eq!(space_plan(3, 4), vec![2, 2, 3]);
    }

    #[test]
    fn plan_allocations_are_fair_and_exact() {
        for gaps in 1..=12 {
            for need in 1..=48 {
                let plan = space_plan(gaps, need);
                assert_eq!(plan.len(), gaps);
                assert_eq!(plan.iter().sum::<usize>(), gaps + need, "gaps={gaps} need={need}");
                let min = *plan.iter().min().unwrap();
                let max = *plan.iter().max().unwrap();
                assert!(min >= 1);
                assert!(max - min <= 1, "gaps={gaps} need={need} plan={plan:?}");
            }
        }
    }
}
