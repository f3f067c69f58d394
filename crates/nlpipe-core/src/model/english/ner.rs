//! Rule-based named-entity recognition.
//!
//! Candidates come from three sources, strongest first: numeric and temporal
//! patterns, the gazetteer, and runs of proper nouns. Overlaps are resolved
//! greedily by start offset, then length, then source strength. Numbers left
//! uncovered afterwards become CARDINAL.

use regex::Regex;

use super::gazetteer::Gazetteer;
use super::lexicon::{
    contains, fold, Lexicon, CURRENCY_NOUNS, CURRENCY_SYMBOLS, DATE_MODIFIERS, DATE_UNITS,
    FAC_SUFFIXES, GPE_PREFIXES, LOCATIVE_PREPOSITIONS, LOC_PREFIXES, LOC_SUFFIXES, MONTHS, ORDINAL_WORDS,
    ORG_SUFFIXES, PERCENT_WORDS, QUANTITY_UNITS, RELATIVE_DAYS,
    TEMPORAL_PREPOSITIONS, TIME_WORDS, TITLES, WEEKDAYS,
};
use crate::analysis::WordToken;
use crate::model::{EntitySpan, PosTag, Span};
use crate::resources::ResourceResult;

const PATTERN: u8 = 3;
const GAZETTEER: u8 = 2;
const PROPER_RUN: u8 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    strength: u8,
}

/// Compiled token-level patterns.
#[derive(Debug, Clone)]
pub struct Patterns {
    year: Regex,
    decade: Regex,
    ordinal: Regex,
    meridiem: Regex,
}

impl Patterns {
    pub fn compile() -> ResourceResult<Self> {
        Ok(Self {
            year: Regex::new(r"^(1[5-9]\d{2}|20\d{2})$")?,
            decade: Regex::new(r"^(\d|1[5-9]\d|20\d)0s$")?,
            ordinal: Regex::new(r"(?i)^\d+(st|nd|rd|th)$")?,
            meridiem: Regex::new(r"(?i)^[ap]\.?m\.?$")?,
        })
    }
}

pub struct Recognizer<'a> {
    lexicon: &'a Lexicon,
    gazetteer: &'a Gazetteer,
    patterns: &'a Patterns,
}

impl<'a> Recognizer<'a> {
    pub const fn new(lexicon: &'a Lexicon, gazetteer: &'a Gazetteer, patterns: &'a Patterns) -> Self {
        Self {
            lexicon,
            gazetteer,
            patterns,
        }
    }

    pub fn recognize(
        &self,
        tokens: &[WordToken<'_>],
        tags: &[PosTag],
        sentences: &[usize],
    ) -> Vec<EntitySpan> {
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();

        let mut candidates = Vec::new();
        self.pattern_candidates(&texts, tags, &mut candidates);
        self.gazetteer_candidates(&texts, &mut candidates);
        self.proper_runs(&texts, tags, sentences, &mut candidates);

        let mut accepted = resolve(candidates);
        self.cardinals(&texts, tags, &mut accepted);
        accepted.sort_by_key(|c| c.start);

        accepted
            .into_iter()
            .map(|c| {
                let span = Span::new(tokens[c.start].start, tokens[c.end - 1].end());
                EntitySpan::new(span, c.label)
            })
            .collect()
    }

    /// Number run starting at `i`: digits or number words, with scale words.
    fn number_run(texts: &[&str], tags: &[PosTag], i: usize) -> usize {
        let mut end = i;
        while end < texts.len() && tags[end] == PosTag::Num {
            end += 1;
        }
        end
    }

    fn pattern_candidates(&self, texts: &[&str], tags: &[PosTag], out: &mut Vec<Candidate<'a>>) {
        let lower: Vec<String> = texts.iter().map(|t| fold(t)).collect();
        let push = |out: &mut Vec<Candidate<'a>>, start, end, label: &'a str| {
            out.push(Candidate {
                start,
                end,
                label,
                strength: PATTERN,
            });
        };

        for i in 0..texts.len() {
            let text = texts[i];
            let word = lower[i].as_str();

            // $1 billion
            if CURRENCY_SYMBOLS.contains(&text) && tags.get(i + 1) == Some(&PosTag::Num) {
                let end = Self::number_run(texts, tags, i + 1);
                push(out, i, end, "MONEY");
                continue;
            }

            if tags[i] == PosTag::Num {
                let end = Self::number_run(texts, tags, i);
                let next = lower.get(end).map(String::as_str);

                match next {
                    Some(w) if contains(CURRENCY_NOUNS, w) => push(out, i, end + 1, "MONEY"),
                    Some(w) if contains(PERCENT_WORDS, w) => push(out, i, end + 1, "PERCENT"),
                    Some("per") if lower.get(end + 1).map(String::as_str) == Some("cent") => {
                        push(out, i, end + 2, "PERCENT");
                    }
                    Some(w) if contains(QUANTITY_UNITS, w) => push(out, i, end + 1, "QUANTITY"),
                    Some(w) if contains(DATE_UNITS, w) => {
                        let ago = lower.get(end + 1).map(String::as_str) == Some("ago");
                        push(out, i, end + 1 + usize::from(ago), "DATE");
                    }
                    Some(":") if tags.get(end + 1) == Some(&PosTag::Num) => {
                        let mut stop = end + 2;
                        if lower.get(stop).is_some_and(|w| self.patterns.meridiem.is_match(w)) {
                            stop += 1;
                        }
                        push(out, i, stop, "TIME");
                    }
                    Some(w) if self.patterns.meridiem.is_match(w) || w == "o'clock" => {
                        push(out, i, end + 1, "TIME");
                    }
                    _ => {}
                }
            }

            if contains(MONTHS, text) {
                self.date_from_month(texts, tags, i, out);
                continue;
            }
            if contains(WEEKDAYS, text) || contains(RELATIVE_DAYS, word) {
                push(out, i, i + 1, "DATE");
                continue;
            }
            if contains(DATE_MODIFIERS, word)
                && lower.get(i + 1).is_some_and(|w| contains(DATE_UNITS, w))
            {
                push(out, i, i + 2, "DATE");
                continue;
            }
            if self.patterns.decade.is_match(text) {
                let start = if i > 0 && lower[i - 1] == "the" { i - 1 } else { i };
                push(out, start, i + 1, "DATE");
                continue;
            }
            if self.patterns.year.is_match(text)
                && i > 0
                && contains(TEMPORAL_PREPOSITIONS, lower[i - 1].as_str())
            {
                push(out, i, i + 1, "DATE");
                continue;
            }
            if contains(TIME_WORDS, word) {
                push(out, i, i + 1, "TIME");
                continue;
            }
            if self.patterns.ordinal.is_match(text) || contains(ORDINAL_WORDS, word) {
                push(out, i, i + 1, "ORDINAL");
            }
        }
    }

    /// `May 5, 2020`, `5 May`, `January 2021`; a bare "May" is not a date.
    fn date_from_month(&self, texts: &[&str], tags: &[PosTag], i: usize, out: &mut Vec<Candidate<'a>>) {
        let day = |j: usize| {
            texts.get(j).is_some_and(|t| {
                t.parse::<u8>().is_ok_and(|d| (1..=31).contains(&d)) || self.patterns.ordinal.is_match(t)
            })
        };
        let year = |j: usize| texts.get(j).is_some_and(|t| self.patterns.year.is_match(t));

        let mut start = i;
        let mut end = i + 1;
        if i > 0 && day(i - 1) && tags[i - 1] != PosTag::Punct {
            start = i - 1;
        }
        if day(end) {
            end += 1;
        }
        if texts.get(end) == Some(&",") && year(end + 1) {
            end += 2;
        } else if year(end) {
            end += 1;
        }

        if texts[i] == "May" && start == i && end == i + 1 {
            return;
        }
        out.push(Candidate {
            start,
            end,
            label: "DATE",
            strength: PATTERN,
        });
    }

    fn gazetteer_candidates(&self, texts: &[&str], out: &mut Vec<Candidate<'a>>) {
        let gazetteer: &'a Gazetteer = self.gazetteer;
        for i in 0..texts.len() {
            if let Some((len, label)) = gazetteer.longest_match(&texts[i..]) {
                out.push(Candidate {
                    start: i,
                    end: i + len,
                    label,
                    strength: GAZETTEER,
                });
            }
        }
    }

    fn proper_runs(
        &self,
        texts: &[&str],
        tags: &[PosTag],
        sentences: &[usize],
        out: &mut Vec<Candidate<'a>>,
    ) {
        let is_title = |t: &str| contains(TITLES, fold(t).as_str());
        let breaks_run = |t: &str| is_title(t) || is_temporal(t);
        let mut i = 0;

        while i < texts.len() {
            if tags[i] != PosTag::Propn || breaks_run(texts[i]) {
                i += 1;
                continue;
            }

            let titled = i > 0 && is_title(texts[i - 1]);
            let start = i;
            let mut end = i + 1;
            loop {
                let same_sentence = |j: usize| j < texts.len() && sentences[j] == sentences[start];
                if same_sentence(end) && tags[end] == PosTag::Propn && !breaks_run(texts[end]) {
                    end += 1;
                    continue;
                }
                // "Bank of America", "Johnson & Johnson"
                let connector = same_sentence(end)
                    && (texts[end] == "of" || texts[end] == "&")
                    && same_sentence(end + 1)
                    && tags[end + 1] == PosTag::Propn;
                let org_like = texts[start..end]
                    .iter()
                    .any(|t| contains(ORG_SUFFIXES, fold(t).as_str()) || contains(LOC_SUFFIXES, fold(t).as_str()));
                if connector && (texts[end] == "&" || org_like) {
                    end += 2;
                    continue;
                }
                break;
            }

            let preceding = start.checked_sub(1).map(|p| fold(texts[p]));
            let label = self.classify_run(&texts[start..end], titled, preceding.as_deref());
            out.push(Candidate {
                start,
                end,
                label,
                strength: PROPER_RUN,
            });
            i = end;
        }
    }

    fn classify_run(&self, run: &[&str], titled: bool, preceding: Option<&str>) -> &'static str {
        let folded: Vec<String> = run.iter().map(|t| fold(t)).collect();
        let last = folded.last().map_or("", String::as_str);

        if folded.iter().any(|w| contains(ORG_SUFFIXES, w)) {
            return "ORG";
        }
        if contains(FAC_SUFFIXES, last) {
            return "FAC";
        }
        if contains(LOC_SUFFIXES, last) || contains(LOC_PREFIXES, run[0]) {
            return "LOC";
        }
        if run.len() > 1 && contains(GPE_PREFIXES, folded[0].as_str()) {
            return "GPE";
        }
        if titled || self.lexicon.is_first_name(run[0]) {
            return "PERSON";
        }
        if run.len() == 1 {
            let acronym = run[0].chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);
            if !acronym && preceding.is_some_and(|p| contains(LOCATIVE_PREPOSITIONS, p)) {
                return "GPE";
            }
            return "ORG";
        }
        "PERSON"
    }

    fn cardinals(&self, texts: &[&str], tags: &[PosTag], accepted: &mut Vec<Candidate<'a>>) {
        let mut i = 0;
        while i < texts.len() {
            if tags[i] == PosTag::Num && !covered(i, accepted) {
                let mut end = i + 1;
                while end < texts.len() && tags[end] == PosTag::Num && !covered(end, accepted) {
                    end += 1;
                }
                let label = if self.patterns.year.is_match(texts[i]) && end == i + 1 {
                    "DATE"
                } else {
                    "CARDINAL"
                };
                accepted.push(Candidate {
                    start: i,
                    end,
                    label,
                    strength: PATTERN,
                });
                i = end;
            } else {
                i += 1;
            }
        }
    }
}

fn covered(i: usize, accepted: &[Candidate<'_>]) -> bool {
    accepted.iter().any(|c| c.start <= i && i < c.end)
}

/// Greedy non-overlapping selection: earliest start, then longest, then strongest.
fn resolve(mut candidates: Vec<Candidate<'_>>) -> Vec<Candidate<'_>> {
    candidates.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then((b.end - b.start).cmp(&(a.end - a.start)))
            .then(b.strength.cmp(&a.strength))
    });

    let mut accepted: Vec<Candidate<'_>> = Vec::new();
    for candidate in candidates {
        if candidate.end <= candidate.start {
            continue;
        }
        if accepted.last().is_some_and(|last| candidate.start < last.end) {
            continue;
        }
        accepted.push(candidate);
    }
    accepted
}

/// Month, weekday or relative day; these start dates, not names.
fn is_temporal(text: &str) -> bool {
    contains(MONTHS, text) || contains(WEEKDAYS, text) || contains(RELATIVE_DAYS, fold(text).as_str())
}
