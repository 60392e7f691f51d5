//! Literal citation templates with `$placeholder` substitution.
//!
//! Each citation style fixes its punctuation and field order in a literal
//! template; rendering substitutes named fields and nothing else. A
//! placeholder with no bound value is an error, never empty output.

use hashlink::LinkedHashMap;

use crate::error::{Error, Result};

/// One parsed template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Verbatim text copied to the output.
    Literal(String),
    /// A `$name` placeholder resolved against a [`Fields`] map.
    Placeholder(String),
}

/// A compiled citation template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile a literal template.
    ///
    /// `$` followed by an identifier (`[A-Za-z_][A-Za-z0-9_]*`) starts a
    /// placeholder; any other `$` is kept verbatim.
    pub fn new(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            let starts_placeholder =
                c == '$' && chars.peek().is_some_and(|&n| n == '_' || n.is_ascii_alphabetic());
            if !starts_placeholder {
                literal.push(c);
                continue;
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            let mut name = String::new();
            while let Some(&n) = chars.peek() {
                if n == '_' || n.is_ascii_alphanumeric() {
                    name.push(n);
                    chars.next();
                } else {
                    break;
                }
            }
            segments.push(Segment::Placeholder(name));
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Template { segments }
    }

    /// Substitute every placeholder from `fields`.
    ///
    /// Fails with [`Error::MissingField`] on the first unbound placeholder.
    pub fn render(&self, fields: &Fields) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match fields.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::MissingField {
                            placeholder: name.clone(),
                        });
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Placeholder bindings for one render, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    values: LinkedHashMap<&'static str, String>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder to a value.
    pub fn set(&mut self, name: &'static str, value: impl ToString) -> &mut Self {
        self.values.insert(name, value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_named_fields() {
        let template = Template::new("$authors ($year). $title.");
        let mut fields = Fields::new();
        fields.set("authors", "Иванов И.М.");
        fields.set("year", 2020);
        fields.set("title", "Наука как искусство");

        assert_eq!(
            template.render(&fields).unwrap(),
            "Иванов И.М. (2020). Наука как искусство."
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        let template = Template::new("– $edition$city:");
        let mut fields = Fields::new();
        fields.set("edition", "3-е изд. – ");
        fields.set("city", "СПб.");

        assert_eq!(template.render(&fields).unwrap(), "– 3-е изд. – СПб.:");
    }

    #[test]
    fn test_repeated_placeholder_substitutes_each_occurrence() {
        let template = Template::new("$authors / $authors");
        let mut fields = Fields::new();
        fields.set("authors", "Иванов И.М.");

        assert_eq!(template.render(&fields).unwrap(), "Иванов И.М. / Иванов И.М.");
    }

    #[test]
    fn test_dollar_without_identifier_stays_literal() {
        let template = Template::new("№$number за $ 100");
        let mut fields = Fields::new();
        fields.set("number", 10);

        assert_eq!(template.render(&fields).unwrap(), "№10 за $ 100");
    }

    #[test]
    fn test_unbound_placeholder_is_an_error() {
        let template = Template::new("$authors ($year)");
        let mut fields = Fields::new();
        fields.set("authors", "Иванов И.М.");

        let err = template.render(&fields).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                placeholder: "year".to_string(),
            }
        );
        assert!(err.to_string().contains("'$year'"), "Got: {}", err);
    }
}
