//! Two-pass part-of-speech tagging.
//!
//! The first pass assigns each token a lexical category from its form alone.
//! The second pass resolves the ambiguous categories left to right, looking
//! at the resolved tag of the previous token and the lexical category of the
//! next one.

use std::collections::HashSet;

use super::lexicon::{contains, fold, Lexical, Lexicon, CURRENCY_SYMBOLS, TITLES};
use crate::analysis::WordToken;
use crate::model::PosTag;

pub struct Tagger<'a> {
    lexicon: &'a Lexicon,
    known_names: &'a HashSet<&'a str>,
}

impl<'a> Tagger<'a> {
    pub const fn new(lexicon: &'a Lexicon, known_names: &'a HashSet<&'a str>) -> Self {
        Self {
            lexicon,
            known_names,
        }
    }

    /// Sentence index per token. A new sentence starts after `.`, `!` or `?`,
    /// and after an abbreviation that swallowed the final period when a
    /// capitalized function word follows (`the U.S. Then`).
    pub fn sentences(&self, tokens: &[WordToken<'_>]) -> Vec<usize> {
        let mut sentence = 0;
        let mut indices = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            indices.push(sentence);
            let Some(next) = tokens.get(i + 1) else {
                break;
            };
            let terminal = !token.text.is_empty()
                && token.text.chars().all(|c| matches!(c, '.' | '!' | '?' | '\u{2026}'));
            if terminal || self.ends_sentence(token.text, next.text) {
                sentence += 1;
            }
        }
        indices
    }

    fn ends_sentence(&self, abbreviation: &str, next: &str) -> bool {
        let dotted = abbreviation.len() > 1
            && abbreviation.ends_with('.')
            && abbreviation.chars().any(char::is_alphabetic);
        if !dotted || contains(TITLES, fold(abbreviation).as_str()) {
            return false;
        }
        next != "I"
            && next.starts_with(char::is_uppercase)
            && self.lexicon.closed_class(&next.to_lowercase()).is_some()
    }

    pub fn tag(&self, tokens: &[WordToken<'_>], sentences: &[usize]) -> Vec<PosTag> {
        let lexical: Vec<Lexical> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let sentence_start = i == 0 || sentences[i] != sentences[i - 1];
                let next = tokens.get(i + 1).map(|t| t.text);
                let previous = i.checked_sub(1).map(|p| tokens[p].text);
                self.lexical(token.text, sentence_start, previous, next)
            })
            .collect();

        let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());
        for (i, category) in lexical.iter().enumerate() {
            let sentence_start = i == 0 || sentences[i] != sentences[i - 1];
            let previous = if sentence_start { None } else { tags.last().copied() };
            let previous_text = i.checked_sub(1).map(|p| tokens[p].text);
            let next = lexical.get(i + 1).copied();
            tags.push(resolve(*category, previous, previous_text, next));
        }
        tags
    }

    fn lexical(
        &self,
        text: &str,
        sentence_start: bool,
        previous: Option<&str>,
        next: Option<&str>,
    ) -> Lexical {
        if CURRENCY_SYMBOLS.contains(&text) || matches!(text, "%" | "+" | "=" | "#" | "@") {
            return Lexical::Fixed(PosTag::Sym);
        }
        if text.chars().all(|c| !c.is_alphanumeric()) {
            if text == "&" {
                return Lexical::Fixed(PosTag::Cconj);
            }
            return Lexical::Fixed(PosTag::Punct);
        }
        if text.starts_with(|c: char| c.is_ascii_digit()) {
            if text.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
                return Lexical::Fixed(PosTag::Num);
            }
            return Lexical::Fixed(PosTag::Adj);
        }

        let lower = text.replace('\u{2019}', "'").to_lowercase();

        // Possessive after a nominal, contracted "is"/"has" after a pronoun.
        if lower == "'s" {
            let after_pronoun = previous.is_some_and(|p| {
                matches!(
                    self.lexicon.closed_class(&p.to_lowercase()),
                    Some(Lexical::Fixed(PosTag::Pron) | Lexical::DetOrPron)
                )
            });
            return Lexical::Fixed(if after_pronoun { PosTag::Aux } else { PosTag::Part });
        }
        // 10:30 p.m.
        let after_number = previous.is_some_and(|p| p.starts_with(|c: char| c.is_ascii_digit()));
        if after_number && matches!(lower.trim_end_matches('.'), "a.m" | "p.m") {
            return Lexical::Fixed(PosTag::Adv);
        }
        if (lower == "ca" || lower == "wo") && next.is_some_and(|n| fold(n) == "n't") {
            return Lexical::Fixed(PosTag::Aux);
        }

        let capitalized = text.starts_with(char::is_uppercase);
        if !capitalized || text == "I" {
            return self
                .lexicon
                .closed_class(&lower)
                .unwrap_or_else(|| self.lexicon.open_class(&lower));
        }

        if is_acronym(text) {
            return Lexical::Fixed(PosTag::Propn);
        }
        if !sentence_start {
            return Lexical::Fixed(PosTag::Propn);
        }

        // Sentence-initial capital: a name only when known or followed by
        // another capitalized word.
        if let Some(category) = self.lexicon.closed_class(&lower) {
            return category;
        }
        let known = self.known_names.contains(text) || self.lexicon.is_first_name(text);
        let next_capitalized = next.is_some_and(|n| n.starts_with(char::is_uppercase));
        if known || next_capitalized {
            return Lexical::Fixed(PosTag::Propn);
        }
        self.lexicon.open_class(&lower)
    }
}

/// All-caps (`NASA`) or dotted (`U.K.`) abbreviations.
fn is_acronym(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() < 2 {
        return text.contains('.') && !letters.is_empty() && letters.iter().all(|c| c.is_uppercase());
    }
    letters.iter().all(|c| c.is_uppercase())
}

fn is_nominal_ahead(next: Option<Lexical>) -> bool {
    matches!(
        next,
        Some(
            Lexical::Fixed(PosTag::Noun | PosTag::Propn | PosTag::Adj | PosTag::Num)
                | Lexical::VerbLike { inflected: false }
                | Lexical::Gerund
                | Lexical::Participle
        )
    )
}

fn is_verb_ahead(next: Option<Lexical>) -> bool {
    matches!(
        next,
        Some(Lexical::VerbLike { inflected: false } | Lexical::Fixed(PosTag::Verb | PosTag::Aux))
    )
}

fn resolve(
    category: Lexical,
    previous: Option<PosTag>,
    previous_text: Option<&str>,
    next: Option<Lexical>,
) -> PosTag {
    match category {
        Lexical::Fixed(tag) => tag,
        Lexical::DetOrPron => {
            if is_nominal_ahead(next) {
                PosTag::Det
            } else {
                PosTag::Pron
            }
        }
        Lexical::To => {
            if is_verb_ahead(next) {
                PosTag::Part
            } else {
                PosTag::Adp
            }
        }
        Lexical::VerbLike { inflected } => match previous {
            None => PosTag::Verb,
            Some(PosTag::Det | PosTag::Adj | PosTag::Num | PosTag::Adp) => PosTag::Noun,
            Some(PosTag::Pron | PosTag::Aux | PosTag::Part | PosTag::Adv) => PosTag::Verb,
            Some(PosTag::Noun | PosTag::Propn) if inflected => PosTag::Verb,
            Some(PosTag::Noun | PosTag::Propn) => {
                if is_nominal_ahead(next) {
                    PosTag::Verb
                } else {
                    PosTag::Noun
                }
            }
            Some(_) if inflected => PosTag::Verb,
            Some(_) => PosTag::Noun,
        },
        Lexical::Gerund => {
            let after_possessive = previous_text.is_some_and(|p| fold(p) == "'s");
            match previous {
                Some(PosTag::Det | PosTag::Adj | PosTag::Adv) if is_nominal_ahead(next) => {
                    PosTag::Adj
                }
                Some(PosTag::Det | PosTag::Adj | PosTag::Noun | PosTag::Propn | PosTag::Num) => {
                    PosTag::Noun
                }
                Some(PosTag::Part) if after_possessive => PosTag::Noun,
                _ => PosTag::Verb,
            }
        }
        Lexical::Participle => match previous {
            Some(PosTag::Det | PosTag::Adj | PosTag::Adv) if is_nominal_ahead(next) => PosTag::Adj,
            Some(PosTag::Det) => PosTag::Noun,
            _ => PosTag::Verb,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::WordTokenizer;
    use crate::model::english::Gazetteer;

    fn tag(text: &str) -> Vec<(String, PosTag)> {
        let lexicon = Lexicon::english();
        let gazetteer = Gazetteer::english();
        let names = gazetteer.first_tokens();
        let tokens = WordTokenizer::new().tokenize(text);
        let tagger = Tagger::new(&lexicon, &names);
        let sentences = tagger.sentences(&tokens);
        let tags = tagger.tag(&tokens, &sentences);
        tokens
            .iter()
            .zip(tags)
            .map(|(t, tag)| (t.text.to_string(), tag))
            .collect()
    }

    fn tags_of(text: &str) -> Vec<PosTag> {
        tag(text).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn test_reference_sentence() {
        use PosTag::*;
        assert_eq!(
            tags_of("This is an example sentence for text preprocessing."),
            vec![Pron, Aux, Det, Noun, Noun, Adp, Noun, Noun, Punct]
        );
    }

    #[test]
    fn test_entity_sentence() {
        use PosTag::*;
        assert_eq!(
            tags_of("Apple is looking at buying U.K. startup for $1 billion."),
            vec![Propn, Aux, Verb, Adp, Verb, Propn, Noun, Adp, Sym, Num, Num, Punct]
        );
    }

    #[test]
    fn test_sentence_initial_common_word() {
        let tagged = tag("Example sentences help.");
        assert_eq!(tagged[0].1, PosTag::Noun);
    }

    #[test]
    fn test_this_as_determiner() {
        let tagged = tag("I like this model.");
        assert_eq!(tagged[2], ("this".to_string(), PosTag::Det));
    }

    #[test]
    fn test_to_particle_and_adposition() {
        let tagged = tag("They want to buy tickets to Paris.");
        assert_eq!(tagged[2].1, PosTag::Part);
        assert_eq!(tagged[5].1, PosTag::Adp);
    }

    #[test]
    fn test_gerund_as_adjective() {
        let tagged = tag("an interesting example");
        assert_eq!(tagged[1].1, PosTag::Adj);
    }

    #[test]
    fn test_possessive_and_contraction() {
        let tagged = tag("It's Apple's phone.");
        assert_eq!(tagged[1], ("'s".to_string(), PosTag::Aux));
        assert_eq!(tagged[3], ("'s".to_string(), PosTag::Part));
    }

    #[test]
    fn test_meridiem_after_number() {
        use PosTag::*;
        assert_eq!(tags_of("at 10:30 p.m."), vec![Adp, Num, Punct, Num, Adv]);
    }

    fn sentences(text: &str) -> Vec<usize> {
        let lexicon = Lexicon::english();
        let names = HashSet::new();
        let tokens = WordTokenizer::new().tokenize(text);
        Tagger::new(&lexicon, &names).sentences(&tokens)
    }

    #[test]
    fn test_sentences() {
        assert_eq!(sentences("One. Two! Three"), vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn test_sentence_ends_on_abbreviation() {
        assert_eq!(
            sentences("She moved to the U.S. Then she left."),
            vec![0, 0, 0, 0, 0, 1, 1, 1, 1]
        );
    }

    #[test]
    fn test_title_abbreviation_keeps_sentence() {
        assert_eq!(sentences("Dr. Who arrived. Mr. He left."), vec![0, 0, 0, 0, 1, 1, 1, 1]);
    }
}
