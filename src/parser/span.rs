//! Consumed-range bookkeeping over an immutable line

use std::ops::Range;

/// Byte ranges of a line already claimed by an extraction step.
///
/// Steps search the original text and skip anything claimed here, so one
/// extraction never shifts the offsets another one relies on.
#[derive(Debug, Clone, Default)]
pub struct Consumed {
    ranges: Vec<Range<usize>>,
}

impl Consumed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, range: Range<usize>) {
        if !range.is_empty() {
            self.ranges.push(range);
        }
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Text left over once every claimed range is cut out.
    /// Each cut leaves a space so neighbouring words stay apart.
    pub fn remainder(&self, text: &str) -> String {
        let mut ranges = self.ranges.clone();
        ranges.sort_by_key(|r| r.start);

        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        for r in ranges {
            if r.start > pos {
                out.push_str(&text[pos..r.start]);
            }
            out.push(' ');
            pos = pos.max(r.end);
        }
        if pos < text.len() {
            out.push_str(&text[pos..]);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remainder_cuts_claimed_ranges() {
        let text = "lebron 25+ points";
        let mut consumed = Consumed::new();
        consumed.claim(11..17);
        consumed.claim(7..10);
        assert_eq!(consumed.remainder(text).split_whitespace().collect::<Vec<_>>(), ["lebron"]);
    }

    #[test]
    fn test_remainder_keeps_words_apart() {
        let mut consumed = Consumed::new();
        consumed.claim(2..4);
        assert_eq!(consumed.remainder("ab12cd"), "ab cd");
    }

    #[test]
    fn test_empty_claim_ignored() {
        let mut consumed = Consumed::new();
        consumed.claim(3..3);
        assert!(consumed.ranges().is_empty());
    }
}
