use crate::font::Font;
use crate::units::Pt;

/// Anything that can tell how wide a string will be once drawn
pub trait MeasureText {
    fn measure(&self, text: &str) -> Pt;
}

impl<F: Fn(&str) -> Pt> MeasureText for F {
    fn measure(&self, text: &str) -> Pt {
        self(text)
    }
}

/// A font at a given size, measured with its real advance widths
#[derive(Copy, Clone)]
pub struct FontMetrics<'a> {
    pub font: &'a Font,
    pub size: Pt,
}

impl MeasureText for FontMetrics<'_> {
    fn measure(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.size)
    }
}

/// Greedy word wrap: words are added to the current line while the measured line stays
/// within `max_width`, and the line is flushed as soon as the next word would overflow it.
///
/// Whitespace runs are collapsed, so joining the returned lines with single spaces gives
/// back the words of `text` in order. A word that is wider than `max_width` on its own is
/// split at character boundaries rather than allowed to overflow, so the join then shows it
/// as several words; its characters are all kept, in order. Every chunk holds at least one
/// character, so a band narrower than a single glyph still makes progress.
pub fn wrap_text<M: MeasureText + ?Sized>(text: &str, max_width: Pt, measure: &M) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if measure.measure(word) > max_width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let mut chunks = split_word(word, max_width, measure);
            // the tail of the word can still share its line with what follows
            line = chunks.pop().unwrap_or_default();
            lines.extend(chunks);
            continue;
        }

        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        if measure.measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Break an oversized word into the fewest chunks that each fit, left to right
fn split_word<M: MeasureText + ?Sized>(word: &str, max_width: Pt, measure: &M) -> Vec<String> {
    let mut chunks: Vec<String> = Vec::new();
    let mut chunk = String::new();
    for ch in word.chars() {
        chunk.push(ch);
        if chunk.chars().count() > 1 && measure.measure(&chunk) > max_width {
            chunk.pop();
            chunks.push(std::mem::replace(&mut chunk, ch.to_string()));
        }
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// Lay a list of items out on as few lines as possible, joined by `separator`, breaking only
/// between items. Lines never start or end with a separator. An item too wide for a line of
/// its own is word wrapped with [wrap_text].
pub fn wrap_items<S, M>(items: &[S], separator: &str, max_width: Pt, measure: &M) -> Vec<String>
where
    S: AsRef<str>,
    M: MeasureText + ?Sized,
{
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for item in items.iter().map(|item| item.as_ref().trim()) {
        if item.is_empty() {
            continue;
        }

        let candidate = if line.is_empty() {
            item.to_string()
        } else {
            format!("{line}{separator}{item}")
        };
        if measure.measure(&candidate) <= max_width {
            line = candidate;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if measure.measure(item) <= max_width {
            line = item.to_string();
        } else {
            lines.extend(wrap_text(item, max_width, measure));
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::BuiltinFont;
    use proptest::prelude::*;

    /// Every character is 1pt wide, which keeps expectations readable
    fn mono(text: &str) -> Pt {
        Pt(text.chars().count() as f32)
    }

    #[test]
    fn wraps_greedily_at_word_boundaries() {
        let lines = wrap_text("the quick brown fox jumps", Pt(10.0), &mono);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn a_word_that_exactly_fills_the_line_fits() {
        let lines = wrap_text("abcde fghij", Pt(5.0), &mono);
        assert_eq!(lines, vec!["abcde", "fghij"]);
    }

    #[test]
    fn blank_text_has_no_lines() {
        assert!(wrap_text("", Pt(100.0), &mono).is_empty());
        assert!(wrap_text(" \t\n ", Pt(100.0), &mono).is_empty());
    }

    #[test]
    fn oversized_words_are_split_by_character() {
        let lines = wrap_text("ab abcdefghij cd", Pt(4.0), &mono);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij", "cd"]);
    }

    #[test]
    fn a_band_narrower_than_a_glyph_still_makes_progress() {
        let lines = wrap_text("abc", Pt(0.5), &mono);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn items_break_between_separators() {
        let items = ["Go", "SQL", "Kubernetes", "Rust"];
        let lines = wrap_items(&items, ", ", Pt(12.0), &mono);
        assert_eq!(lines, vec!["Go, SQL", "Kubernetes", "Rust"]);
    }

    #[test]
    fn items_skip_blanks_and_wrap_oversized_entries() {
        let items = ["", "a b c d e f", "  ", "g"];
        let lines = wrap_items(&items, " | ", Pt(5.0), &mono);
        assert_eq!(lines, vec!["a b c", "d e f", "g"]);
    }

    #[test]
    fn font_metrics_measure_real_widths() {
        let font = Font::builtin(BuiltinFont::Helvetica);
        let metrics = FontMetrics {
            font: &font,
            size: Pt(10.0),
        };
        assert_eq!(metrics.measure("Hello"), font.width_of_text("Hello", Pt(10.0)));

        // fourteen characters, yet they cannot share a 45pt line under real metrics
        let lines = wrap_text("iiii WWWW iiii", Pt(45.0), &metrics);
        assert_eq!(lines, vec!["iiii", "WWWW", "iiii"]);
    }

    /// Ten letters of the widest glyph are under 120pt at both test sizes, so none of these
    /// words needs a character split
    fn words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z]{1,10}", 0..40)
    }

    /// Words long enough that narrow bands have to split them
    fn long_words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z]{1,60}", 0..20)
    }

    proptest! {
        #[test]
        fn split_words_keep_every_character(words in long_words(), width in 20.0f32..120.0) {
            let font = Font::builtin(BuiltinFont::Helvetica);
            let metrics = FontMetrics { font: &font, size: Pt(10.0) };
            let text = words.join(" ");
            let lines = wrap_text(&text, Pt(width), &metrics);

            let drawn: String = lines.concat().split_whitespace().collect();
            let expected: String = text.split_whitespace().collect();
            prop_assert_eq!(drawn, expected);
            for line in &lines {
                prop_assert!(metrics.measure(line) <= Pt(width), "{line:?} overflows {width}");
            }
        }

        #[test]
        fn wrapped_lines_fit_the_band(text in "[a-zA-Z ,.\n]{0,300}", width in 20.0f32..300.0) {
            let font = Font::builtin(BuiltinFont::Helvetica);
            let metrics = FontMetrics { font: &font, size: Pt(10.0) };
            for line in wrap_text(&text, Pt(width), &metrics) {
                prop_assert!(metrics.measure(&line) <= Pt(width), "{line:?} overflows {width}");
            }
        }

        #[test]
        fn wrapping_is_lossless(words in words(), width in 120.0f32..400.0) {
            let font = Font::builtin(BuiltinFont::Helvetica);
            let metrics = FontMetrics { font: &font, size: Pt(10.0) };
            let text = words.join(" ");
            let lines = wrap_text(&text, Pt(width), &metrics);
            prop_assert_eq!(lines.join(" "), text);
        }

        #[test]
        fn wrapping_is_idempotent(words in words(), width in 120.0f32..400.0) {
            let font = Font::builtin(BuiltinFont::HelveticaBold);
            let metrics = FontMetrics { font: &font, size: Pt(11.0) };
            let once = wrap_text(&words.join(" "), Pt(width), &metrics);
            let twice = wrap_text(&once.join(" "), Pt(width), &metrics);
            prop_assert_eq!(once, twice);
        }
    }
}
