//! Word-boundary tokenization.
//!
//! Segmentation starts from Unicode word boundaries (UAX #29) and then applies
//! a few treebank-style adjustments: clitics are split off (`don't` becomes
//! `do` + `n't`), dotted abbreviations stay whole (`U.K.`), and hyphenated
//! compounds are joined back together. Every token is a slice of the input.

use unicode_segmentation::UnicodeSegmentation;

const CLITICS: &[&str] = &["n't", "'s", "'m", "'d", "'re", "'ve", "'ll"];

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "inc", "corp", "ltd", "co",
    "vs", "etc", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "gen", "gov", "sen", "rep", "rev", "no",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    pub start: usize,
    pub text: &'a str,
}

impl<'a> WordToken<'a> {
    #[must_use]
    pub const fn new(start: usize, text: &'a str) -> Self {
        Self { start, text }
    }

    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Splits `text` into word tokens in order of appearance.
    #[must_use]
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<WordToken<'a>> {
        let segments: Vec<(usize, &str)> = text
            .split_word_bound_indices()
            .filter(|(_, s)| !s.chars().all(char::is_whitespace))
            .collect();

        let mut ranges: Vec<(usize, usize)> = Vec::with_capacity(segments.len());
        let mut i = 0;
        while i < segments.len() {
            let (start, segment) = segments[i];
            let end = start + segment.len();

            if let Some(last) = ranges.last_mut() {
                if last.1 == start {
                    let previous = &text[last.0..last.1];

                    if is_hyphen(segment) {
                        if let Some(&(next_start, next)) = segments.get(i + 1) {
                            if next_start == end && ends_alphanumeric(previous) && starts_alphanumeric(next) {
                                last.1 = next_start + next.len();
                                i += 2;
                                continue;
                            }
                        }
                    }

                    // A final period stays separate unless it closes `a.m.`/`p.m.`.
                    let more = i + 1 < segments.len() || is_meridiem(previous);
                    if segment == "." && more && is_abbreviation(previous) {
                        last.1 = end;
                        i += 1;
                        continue;
                    }
                }
            }

            ranges.push((start, end));
            i += 1;
        }

        let mut tokens = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            split_clitic(text, start, end, &mut tokens);
        }
        tokens
    }
}

fn is_hyphen(segment: &str) -> bool {
    matches!(segment, "-" | "\u{2010}")
}

fn ends_alphanumeric(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_alphanumeric)
}

fn starts_alphanumeric(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphanumeric)
}

/// `U.K`, `e.g`, a single capital initial, or a known abbreviation.
fn is_abbreviation(token: &str) -> bool {
    let mut chars = token.chars();
    let dotted = token.contains('.')
        && token
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic));
    if dotted {
        return true;
    }
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase();
    }
    let lower = token.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

fn is_meridiem(token: &str) -> bool {
    token.eq_ignore_ascii_case("a.m") || token.eq_ignore_ascii_case("p.m")
}

fn split_clitic<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<WordToken<'a>>) {
    let token = &text[start..end];
    let normalized = token.replace('\u{2019}', "'").to_lowercase();

    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            // The curly apostrophe is three bytes; count clitic chars from the end.
            let clitic_chars = clitic.chars().count();
            let split_at = token
                .char_indices()
                .rev()
                .nth(clitic_chars - 1)
                .map_or(0, |(idx, _)| idx);
            if split_at > 0 {
                out.push(WordToken::new(start, &token[..split_at]));
                out.push(WordToken::new(start + split_at, &token[split_at..]));
                return;
            }
        }
    }

    out.push(WordToken::new(start, token));
}
