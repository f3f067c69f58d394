use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::analysis::WordTokenizer;
use crate::resources::{ResourceError, ResourceResult};

const ORGANIZATIONS: &[&str] = &[
    "Apple", "Google", "Microsoft", "Amazon", "Facebook", "Meta", "IBM", "Intel", "Tesla",
    "Netflix", "Twitter", "OpenAI", "Nvidia", "Samsung", "Sony", "Toyota", "Ford", "Boeing",
    "Walmart", "Disney", "Oracle", "Uber", "Airbnb", "Spotify", "Reuters", "BBC", "CNN",
    "NASA", "FBI", "CIA", "NATO", "United Nations", "UN", "European Union", "EU",
    "World Health Organization", "WHO", "World Bank", "IMF", "Goldman Sachs", "JPMorgan",
    "Congress", "Senate", "Parliament", "Harvard", "MIT", "Stanford", "Coca-Cola", "PepsiCo",
    "McDonald's", "Starbucks", "Volkswagen", "BMW", "Siemens", "Alibaba", "Tencent", "Huawei",
    "Baidu", "SpaceX", "Mozilla", "Wikipedia", "YouTube", "LinkedIn", "Adobe", "Cisco",
];

const GEOPOLITICAL: &[&str] = &[
    "United States", "U.S.", "U.S", "U.S.A.", "US", "USA", "America", "United Kingdom", "U.K.",
    "U.K", "UK", "Britain", "Great Britain", "England", "Scotland", "Wales", "Ireland",
    "Canada", "Mexico", "Brazil", "Argentina", "Chile", "Peru", "Colombia", "France",
    "Germany", "Italy", "Spain", "Portugal", "Netherlands", "Belgium", "Switzerland",
    "Austria", "Sweden", "Norway", "Denmark", "Finland", "Poland", "Russia", "Ukraine",
    "Greece", "Turkey", "Israel", "Egypt", "Iran", "Iraq", "Saudi Arabia", "India",
    "Pakistan", "China", "Japan", "Korea", "South Korea", "North Korea", "Vietnam",
    "Thailand", "Indonesia", "Philippines", "Singapore", "Malaysia", "Australia",
    "New Zealand", "Nigeria", "Kenya", "South Africa", "Ethiopia", "Morocco", "London",
    "Paris", "Berlin", "Madrid", "Rome", "Moscow", "Tokyo", "Beijing", "Shanghai",
    "Hong Kong", "Delhi", "New Delhi", "Mumbai", "Sydney", "Toronto", "Vancouver",
    "Montreal", "New York", "New York City", "Los Angeles", "San Francisco", "Chicago",
    "Boston", "Seattle", "Washington", "Miami", "Houston", "Dallas", "Austin", "Atlanta",
    "Denver", "Dublin", "Amsterdam", "Brussels", "Vienna", "Zurich", "Geneva", "Stockholm",
    "Oslo", "Cairo", "Dubai", "Istanbul", "Seoul", "California", "Texas", "Florida", "Ohio",
    "Michigan", "Illinois", "Virginia", "Massachusetts", "Oregon", "Nevada", "Arizona",
    "Colorado", "Cupertino",
];

const LOCATIONS: &[&str] = &[
    "Europe", "Asia", "Africa", "North America", "South America", "Antarctica",
    "Middle East", "Pacific", "Atlantic", "Pacific Ocean", "Atlantic Ocean", "Mediterranean",
    "Sahara", "Alps", "Himalayas", "Mount Everest", "Silicon Valley", "Midwest", "Caribbean",
    "Arctic",
];

const NATIONALITIES: &[&str] = &[
    "American", "Americans", "British", "French", "German", "Germans", "Chinese", "Japanese",
    "Russian", "Russians", "Indian", "Indians", "Canadian", "Canadians", "Mexican", "Italian",
    "Spanish", "European", "Europeans", "Asian", "African", "Australian", "Korean",
    "Brazilian", "Israeli", "Palestinian", "Iranian", "Democrat", "Democrats", "Republican",
    "Republicans", "Democratic", "Christian", "Christians", "Muslim", "Muslims", "Jewish",
    "Catholic", "Buddhist", "Hindu",
];

const LANGUAGES: &[&str] = &["English", "Mandarin", "Swahili", "Esperanto", "Latin", "Hindi"];

/// Case-sensitive multi-token name lists, keyed by entity label.
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: HashMap<Vec<String>, String>,
    /// Longest entry length per first token, to bound lookups.
    longest: HashMap<String, usize>,
}

impl Gazetteer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English name lists.
    #[must_use]
    pub fn english() -> Self {
        let mut gazetteer = Self::new();
        for (label, names) in [
            ("GPE", GEOPOLITICAL),
            ("LOC", LOCATIONS),
            ("NORP", NATIONALITIES),
            ("LANGUAGE", LANGUAGES),
            ("ORG", ORGANIZATIONS),
        ] {
            for name in names {
                gazetteer.insert(name, label);
            }
        }
        gazetteer
    }

    /// Reads a TOML table of `LABEL = ["Name", ...]` arrays.
    pub fn from_file(path: &Path) -> ResourceResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ResourceError::Gazetteer {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table: HashMap<String, Vec<String>> = toml::from_str(content)?;
        let mut gazetteer = Self::new();

        let mut labels: Vec<_> = table.into_iter().collect();
        labels.sort_by(|a, b| a.0.cmp(&b.0));

        for (label, names) in labels {
            if !is_valid_label(&label) {
                tracing::warn!(label = %label, "Skipping gazetteer label; expected UPPER_SNAKE_CASE");
                continue;
            }
            for name in &names {
                gazetteer.insert(name, &label);
            }
        }
        Ok(gazetteer)
    }

    /// Adds `name` under `label`, replacing any earlier label for the same name.
    pub fn insert(&mut self, name: &str, label: &str) {
        // A trailing sentinel keeps a final abbreviation period ("U.K.") attached.
        let padded = format!("{} .", name.trim());
        let mut key: Vec<String> = WordTokenizer::new()
            .tokenize(&padded)
            .into_iter()
            .map(|t| t.text.to_string())
            .collect();
        key.pop();
        let Some(first) = key.first().cloned() else {
            return;
        };

        let longest = self.longest.entry(first).or_insert(0);
        *longest = (*longest).max(key.len());
        self.entries.insert(key, label.to_string());
    }

    /// Entries from `other` take precedence.
    pub fn merge(&mut self, other: Self) {
        for (key, label) in other.entries {
            let longest = self.longest.entry(key[0].clone()).or_insert(0);
            *longest = (*longest).max(key.len());
            self.entries.insert(key, label);
        }
    }

    /// Longest entry starting at `tokens[0]`, as (token count, label).
    pub fn longest_match(&self, tokens: &[&str]) -> Option<(usize, &str)> {
        let first = tokens.first()?;
        let max = (*self.longest.get(*first)?).min(tokens.len());

        (1..=max).rev().find_map(|n| {
            let key: Vec<String> = tokens[..n].iter().map(|t| (*t).to_string()).collect();
            self.entries.get(&key).map(|label| (n, label.as_str()))
        })
    }

    /// First tokens of all entries, used to recognise sentence-initial names.
    pub fn first_tokens(&self) -> HashSet<&str> {
        self.longest.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty() && label.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}
