//! Word lists for the rule-based English model.

use std::collections::HashSet;

use crate::model::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "my", "your", "his", "its", "our", "their", "every", "no", "whose",
];

/// Determiner before a nominal, pronoun otherwise.
const DET_OR_PRON: &[&str] = &[
    "this", "that", "these", "those", "her", "all", "both", "some", "any", "each", "either",
    "neither", "many", "much", "few", "several", "another", "what", "which",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    "mine", "yours", "hers", "ours", "theirs", "who", "whom", "someone", "somebody",
    "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything",
    "nobody", "nothing", "none",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "around", "among", "across", "behind", "beyond", "near", "toward",
    "towards", "upon", "within", "without", "via", "per", "since", "despite", "like", "unlike",
    "onto", "throughout", "along", "amid", "inside", "outside", "past", "than", "except",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "'re", "'m", "'ve", "'ll", "'d", "ca", "wo",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "&"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "if", "unless", "whether", "while", "whereas", "until",
    "once", "whenever", "wherever",
];

const PARTICLES: &[&str] = &["not", "n't"];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "just", "only", "now", "then", "here", "there", "again", "already",
    "still", "even", "ever", "never", "always", "often", "soon", "quite", "rather", "almost",
    "perhaps", "really", "so", "well", "how", "when", "where", "why", "however", "therefore",
    "instead", "later", "together", "away", "back", "e.g.", "i.e.",
];

const INTERJECTIONS: &[&str] = &[
    "oh", "hello", "hi", "yes", "wow", "hey", "please", "thanks", "ok", "okay",
];

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "dozen",
];

pub const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "twentieth", "hundredth",
];

const ADJECTIVES: &[&str] = &[
    "new", "good", "high", "old", "great", "big", "small", "large", "little", "long", "young",
    "important", "different", "early", "late", "public", "bad", "able", "best", "better",
    "hard", "real", "major", "local", "sure", "free", "full", "clear", "recent", "strong",
    "possible", "whole", "low", "true", "simple", "open", "common", "final", "main", "short",
    "special", "national", "international", "political", "economic", "social", "global",
    "next", "last", "other", "same", "own", "top", "black", "white", "red", "blue", "green",
    "huge", "tiny", "quick", "fast", "slow", "easy", "difficult", "nice", "happy", "natural",
    "personal", "general", "human", "certain", "similar", "various", "current", "available",
    "key", "single", "entire", "specific", "raw", "deep", "modern", "digital", "financial",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

/// `-ly` words that are not adverbs.
const LY_NOUNS: &[&str] = &[
    "family", "supply", "reply", "ally", "italy", "assembly", "anomaly", "belly", "jelly",
    "rally", "monopoly", "fly", "july",
];

/// `-ing` words that are nouns whatever their context.
const ING_NOUNS: &[&str] = &[
    "thing", "something", "nothing", "anything", "everything", "king", "ring", "morning",
    "evening", "building", "wedding", "ceiling", "string", "spring", "wing", "sibling",
    "during", "bring", "sing", "darling", "pudding", "clothing", "funding",
];

const VERBS: &[&str] = &[
    "say", "make", "go", "take", "come", "see", "know", "get", "give", "find", "think", "tell",
    "become", "show", "leave", "feel", "put", "bring", "begin", "keep", "hold", "write",
    "stand", "hear", "let", "mean", "set", "meet", "run", "pay", "sit", "speak", "lie",
    "lead", "read", "grow", "lose", "fall", "send", "build", "understand", "draw", "break",
    "spend", "cut", "rise", "drive", "buy", "wear", "choose", "look", "want", "use", "work",
    "call", "try", "ask", "need", "seem", "help", "play", "move", "live", "believe", "happen",
    "include", "continue", "change", "provide", "create", "allow", "add", "open", "walk",
    "win", "offer", "remember", "love", "consider", "appear", "wait", "serve", "die",
    "expect", "stay", "reach", "kill", "remain", "suggest", "raise", "pass", "sell",
    "require", "report", "decide", "pull", "announce", "acquire", "plan", "launch", "invest",
    "extract", "process", "remove", "filter", "split", "parse", "analyze", "tokenize",
    "learn", "start", "stop", "turn", "follow", "like", "hope", "visit", "join", "release",
    "develop", "produce", "return", "explain", "describe", "agree", "receive", "apply",
];

const IRREGULAR_VERB_FORMS: &[&str] = &[
    "said", "made", "went", "gone", "took", "taken", "came", "saw", "seen", "knew", "known",
    "got", "gotten", "gave", "given", "found", "thought", "told", "became", "shown", "left",
    "felt", "brought", "began", "begun", "kept", "held", "wrote", "written", "stood", "heard",
    "meant", "met", "ran", "paid", "sat", "spoke", "spoken", "led", "grew", "grown", "lost",
    "fell", "fallen", "sent", "built", "understood", "drew", "drawn", "broke", "broken",
    "spent", "rose", "risen", "drove", "driven", "bought", "wore", "worn", "chose", "chosen",
    "won", "sold", "says", "goes", "does",
];

pub const MONTHS: &[&str] = &[
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December", "Jan.", "Feb.", "Mar.", "Apr.", "Jun.", "Jul.", "Aug.",
    "Sep.", "Sept.", "Oct.", "Nov.", "Dec.",
];

pub const WEEKDAYS: &[&str] = &[
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

pub const RELATIVE_DAYS: &[&str] = &["today", "yesterday", "tomorrow"];

pub const DATE_MODIFIERS: &[&str] = &["last", "next", "this", "past", "coming", "previous"];

pub const DATE_UNITS: &[&str] = &[
    "day", "days", "week", "weeks", "weekend", "month", "months", "year", "years", "decade",
    "decades", "century", "centuries", "quarter", "summer", "winter", "spring", "autumn",
];

pub const TIME_WORDS: &[&str] = &["tonight", "noon", "midnight"];

pub const TEMPORAL_PREPOSITIONS: &[&str] = &[
    "in", "since", "by", "until", "during", "of", "from", "before", "after", "around",
];

pub const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥", "₹"];

pub const CURRENCY_NOUNS: &[&str] = &[
    "dollar", "dollars", "euro", "euros", "pound", "pounds", "yen", "cents", "rupees", "yuan",
    "bucks",
];

pub const QUANTITY_UNITS: &[&str] = &[
    "km", "kilometers", "kilometres", "miles", "mile", "kg", "kilograms", "grams", "tons",
    "tonnes", "meters", "metres", "feet", "foot", "inches", "acres", "liters", "litres",
    "gallons", "mph",
];

pub const PERCENT_WORDS: &[&str] = &["%", "percent"];

pub const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sir", "madam", "lady", "lord", "president", "senator",
    "judge", "king", "queen", "ceo", "chairman", "founder", "minister", "governor", "gen",
    "captain", "pope", "prince", "princess",
];

pub const ORG_SUFFIXES: &[&str] = &[
    "inc", "corp", "corporation", "ltd", "llc", "plc", "co", "company", "group", "bank",
    "university", "college", "institute", "foundation", "association", "agency", "department",
    "ministry", "party", "committee", "council", "commission", "airlines", "airways",
    "motors", "technologies", "systems", "labs", "partners", "holdings", "fund", "club",
    "league", "union", "news", "school", "hospital", "church", "court", "army", "navy",
    "police", "board", "office", "organization", "organisation", "press", "times",
];

pub const FAC_SUFFIXES: &[&str] = &[
    "street", "avenue", "road", "boulevard", "bridge", "airport", "station", "tower",
    "stadium", "hall", "square", "highway",
];

pub const LOC_SUFFIXES: &[&str] = &[
    "river", "lake", "ocean", "sea", "mountain", "mountains", "island", "islands", "valley",
    "desert", "bay", "gulf", "peninsula", "forest", "canyon",
];

pub const LOC_PREFIXES: &[&str] = &["Mount", "Lake", "Mt."];

/// Leading words of multi-word place names (`St. Louis`, `Fort Worth`), folded.
pub const GPE_PREFIXES: &[&str] = &["st", "saint", "san", "santa", "fort", "port"];

pub const LOCATIVE_PREPOSITIONS: &[&str] = &["in", "from", "near", "across", "throughout"];

pub const FIRST_NAMES: &[&str] = &[
    "John", "Mary", "James", "Robert", "Michael", "William", "David", "Richard", "Joseph",
    "Thomas", "Charles", "Elizabeth", "Patricia", "Jennifer", "Linda", "Barbara", "Susan",
    "Jessica", "Sarah", "Karen", "Alice", "Bob", "Carol", "Eve", "Tim", "Steve", "Elon",
    "Bill", "Jeff", "Mark", "Sundar", "Satya", "Barack", "Donald", "Joe", "Hillary", "Emma",
    "Olivia", "Ava", "Sophia", "Noah", "Liam", "Peter", "Paul", "George", "Anna", "Maria",
    "Laura", "Tom", "Jack", "Harry", "Kate", "Anne", "Michelle", "Angela", "Emmanuel",
    "Vladimir", "Daniel", "Matthew", "Andrew", "Emily", "Rachel", "Samuel", "Benjamin",
    "Lucy", "Grace", "Oliver", "Henry", "Victoria", "Martin", "Ada", "Alan",
];

/// Ambiguous lexical category, resolved by the contextual pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexical {
    Fixed(PosTag),
    DetOrPron,
    To,
    /// Noun/verb homograph from the verb list; `inflected` for -s/-ed/past forms.
    VerbLike { inflected: bool },
    Gerund,
    Participle,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    determiners: HashSet<&'static str>,
    det_or_pron: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    auxiliaries: HashSet<&'static str>,
    coordinators: HashSet<&'static str>,
    subordinators: HashSet<&'static str>,
    particles: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    interjections: HashSet<&'static str>,
    numbers: HashSet<&'static str>,
    ordinals: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    ly_nouns: HashSet<&'static str>,
    ing_nouns: HashSet<&'static str>,
    verbs: HashSet<&'static str>,
    irregular: HashSet<&'static str>,
    first_names: HashSet<&'static str>,
}

impl Lexicon {
    #[must_use]
    pub fn english() -> Self {
        let set = |words: &[&'static str]| words.iter().copied().collect::<HashSet<_>>();
        Self {
            determiners: set(DETERMINERS),
            det_or_pron: set(DET_OR_PRON),
            pronouns: set(PRONOUNS),
            adpositions: set(ADPOSITIONS),
            auxiliaries: set(AUXILIARIES),
            coordinators: set(COORDINATORS),
            subordinators: set(SUBORDINATORS),
            particles: set(PARTICLES),
            adverbs: set(ADVERBS),
            interjections: set(INTERJECTIONS),
            numbers: set(NUMBER_WORDS),
            ordinals: set(ORDINAL_WORDS),
            adjectives: set(ADJECTIVES),
            ly_nouns: set(LY_NOUNS),
            ing_nouns: set(ING_NOUNS),
            verbs: set(VERBS),
            irregular: set(IRREGULAR_VERB_FORMS),
            first_names: set(FIRST_NAMES),
        }
    }

    /// Lookup for function words; `lower` must already be lowercased with
    /// curly apostrophes straightened.
    pub fn closed_class(&self, lower: &str) -> Option<Lexical> {
        let tag = if lower == "to" {
            return Some(Lexical::To);
        } else if self.det_or_pron.contains(lower) {
            return Some(Lexical::DetOrPron);
        } else if self.determiners.contains(lower) {
            PosTag::Det
        } else if self.pronouns.contains(lower) {
            PosTag::Pron
        } else if self.auxiliaries.contains(lower) {
            PosTag::Aux
        } else if self.adpositions.contains(lower) {
            PosTag::Adp
        } else if self.coordinators.contains(lower) {
            PosTag::Cconj
        } else if self.subordinators.contains(lower) {
            PosTag::Sconj
        } else if self.particles.contains(lower) {
            PosTag::Part
        } else if self.adverbs.contains(lower) {
            PosTag::Adv
        } else if self.interjections.contains(lower) {
            PosTag::Intj
        } else if self.numbers.contains(lower) {
            PosTag::Num
        } else if self.ordinals.contains(lower) {
            PosTag::Adj
        } else {
            return None;
        };
        Some(Lexical::Fixed(tag))
    }

    /// Lookup for content words.
    pub fn open_class(&self, lower: &str) -> Lexical {
        if self.adjectives.contains(lower) {
            return Lexical::Fixed(PosTag::Adj);
        }
        if let Some(inflected) = self.verb_form(lower) {
            return Lexical::VerbLike { inflected };
        }
        if lower.len() > 4 && lower.ends_with("ly") && !self.ly_nouns.contains(lower) {
            return Lexical::Fixed(PosTag::Adv);
        }
        if lower.len() > 4 && lower.ends_with("ing") && !self.ing_nouns.contains(lower) {
            return Lexical::Gerund;
        }
        if lower.len() > 4 && lower.ends_with("ed") && !lower.ends_with("eed") {
            return Lexical::Participle;
        }
        if lower.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return Lexical::Fixed(PosTag::Adj);
        }
        Lexical::Fixed(PosTag::Noun)
    }

    /// `Some(false)` for a base form, `Some(true)` for an inflected one.
    fn verb_form(&self, lower: &str) -> Option<bool> {
        if self.verbs.contains(lower) {
            return Some(false);
        }
        if self.irregular.contains(lower) {
            return Some(true);
        }
        if lower.ends_with("ing") {
            // Gerunds are resolved separately.
            return None;
        }
        if let Some(stem) = lower.strip_suffix("ies").or_else(|| lower.strip_suffix("ied")) {
            if self.verbs.contains(format!("{stem}y").as_str()) {
                return Some(true);
            }
        }
        let stems = [
            lower.strip_suffix("es"),
            lower.strip_suffix('s'),
            lower.strip_suffix("ed"),
            lower.strip_suffix('d'),
        ];
        for stem in stems.into_iter().flatten().filter(|s| s.len() > 1) {
            if self.verbs.contains(stem) || self.verbs.contains(undouble(stem)) {
                return Some(true);
            }
        }
        None
    }

    pub fn is_first_name(&self, word: &str) -> bool {
        self.first_names.contains(word)
    }
}

/// `stopp` -> `stop`; other stems are returned unchanged.
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    match bytes {
        [.., a, b] if a == b && !matches!(*a, b'a' | b'e' | b'i' | b'o' | b'u' | b's' | b'l') => {
            &stem[..stem.len() - 1]
        }
        _ => stem,
    }
}

pub fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

/// Lowercase, straighten apostrophes and drop one trailing period.
pub fn fold(word: &str) -> String {
    let lower = word.replace('\u{2019}', "'").to_lowercase();
    match lower.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() && !stripped.contains('.') => stripped.to_string(),
        _ => lower,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_class() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.closed_class("an"), Some(Lexical::Fixed(PosTag::Det)));
        assert_eq!(lexicon.closed_class("is"), Some(Lexical::Fixed(PosTag::Aux)));
        assert_eq!(lexicon.closed_class("this"), Some(Lexical::DetOrPron));
        assert_eq!(lexicon.closed_class("to"), Some(Lexical::To));
        assert_eq!(lexicon.closed_class("sentence"), None);
    }

    #[test]
    fn test_open_class() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.open_class("example"), Lexical::Fixed(PosTag::Noun));
        assert_eq!(lexicon.open_class("preprocessing"), Lexical::Gerund);
        assert_eq!(lexicon.open_class("quickly"), Lexical::Fixed(PosTag::Adv));
        assert_eq!(lexicon.open_class("family"), Lexical::Fixed(PosTag::Noun));
        assert_eq!(lexicon.open_class("famous"), Lexical::Fixed(PosTag::Adj));
        assert_eq!(lexicon.open_class("look"), Lexical::VerbLike { inflected: false });
        assert_eq!(lexicon.open_class("buys"), Lexical::VerbLike { inflected: true });
        assert_eq!(lexicon.open_class("bought"), Lexical::VerbLike { inflected: true });
        assert_eq!(lexicon.open_class("trained"), Lexical::Participle);
        assert_eq!(lexicon.open_class("stopped"), Lexical::VerbLike { inflected: true });
        assert_eq!(lexicon.open_class("applies"), Lexical::VerbLike { inflected: true });
        assert_eq!(lexicon.open_class("speed"), Lexical::Fixed(PosTag::Noun));
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("Mr."), "mr");
        assert_eq!(fold("U.K."), "u.k.");
        assert_eq!(fold("It\u{2019}s"), "it's");
    }
}
