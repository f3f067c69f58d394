use std::fmt;

use serde::{Deserialize, Serialize};

/// A named entity: the verbatim span text and the model's label for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

impl Entity {
    #[must_use]
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", py_repr(&self.text), py_repr(&self.label))
    }
}

/// The pipeline's output for one text. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRecord {
    text: String,
    filtered_tokens: Vec<String>,
    entities: Vec<Entity>,
    noun_phrases: Vec<String>,
}

impl StructuredRecord {
    #[must_use]
    pub const fn new(
        text: String,
        filtered_tokens: Vec<String>,
        entities: Vec<Entity>,
        noun_phrases: Vec<String>,
    ) -> Self {
        Self {
            text,
            filtered_tokens,
            entities,
            noun_phrases,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn filtered_tokens(&self) -> &[String] {
        &self.filtered_tokens
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn noun_phrases(&self) -> &[String] {
        &self.noun_phrases
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.filtered_tokens.is_empty()
            && self.entities.is_empty()
            && self.noun_phrases.is_empty()
    }
}

/// Renders as a Python dict literal:
/// `{'text': '...', 'filtered_tokens': [...], 'entities': [('Apple', 'ORG')], 'noun_phrases': [...]}`
impl fmt::Display for StructuredRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'text': {}, 'filtered_tokens': ", py_repr(&self.text))?;
        write_list(f, self.filtered_tokens.iter().map(|t| py_repr(t)))?;
        f.write_str(", 'entities': ")?;
        write_list(f, self.entities.iter().map(ToString::to_string))?;
        f.write_str(", 'noun_phrases': ")?;
        write_list(f, self.noun_phrases.iter().map(|p| py_repr(p)))?;
        f.write_str("}")
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = String>) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&item)?;
    }
    f.write_str("]")
}

/// Quotes a string the way Python's `repr` does: single quotes unless the
/// text contains a single quote and no double quote.
fn py_repr(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_display_matches_python_dict() {
        let record = StructuredRecord::new(
            "This is an example sentence for text preprocessing.".into(),
            owned(&["example", "sentence", "text", "preprocessing"]),
            Vec::new(),
            owned(&["This", "an example sentence", "text preprocessing"]),
        );
        assert_eq!(
            record.to_string(),
            "{'text': 'This is an example sentence for text preprocessing.', \
             'filtered_tokens': ['example', 'sentence', 'text', 'preprocessing'], \
             'entities': [], \
             'noun_phrases': ['This', 'an example sentence', 'text preprocessing']}"
        );
    }

    #[test]
    fn test_display_entities() {
        let record = StructuredRecord::new(
            "Apple".into(),
            owned(&["apple"]),
            vec![Entity::new("Apple", "ORG")],
            owned(&["Apple"]),
        );
        assert!(record.to_string().contains("'entities': [('Apple', 'ORG')]"));
    }

    #[test]
    fn test_py_repr_quoting() {
        assert_eq!(py_repr("plain"), "'plain'");
        assert_eq!(py_repr("McDonald's"), "\"McDonald's\"");
        assert_eq!(py_repr("both ' and \""), "'both \\' and \"'");
        assert_eq!(py_repr("line\nbreak"), "'line\\nbreak'");
        assert_eq!(py_repr("back\\slash"), "'back\\\\slash'");
    }

    #[test]
    fn test_empty_record() {
        let record = StructuredRecord::default();
        assert!(record.is_empty());
        assert_eq!(
            record.to_string(),
            "{'text': '', 'filtered_tokens': [], 'entities': [], 'noun_phrases': []}"
        );
    }

    #[test]
    fn test_json_shape() {
        let record = StructuredRecord::new(
            "Apple".into(),
            owned(&["apple"]),
            vec![Entity::new("Apple", "ORG")],
            owned(&["Apple"]),
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "Apple",
                "filtered_tokens": ["apple"],
                "entities": [{"text": "Apple", "label": "ORG"}],
                "noun_phrases": ["Apple"],
            })
        );
        let back: StructuredRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
