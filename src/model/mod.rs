use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a localizable string.
pub type StringKey = String;

/// In-memory form of the catalog file.
///
/// Both maps keep the order in which entries appear in the source document, so
/// the joined link column is stable across runs and platforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// String key → source-language text.
    pub strings: IndexMap<StringKey, String>,
    /// Group name → (label → referenced string key).
    ///
    /// The referenced value is kept as raw JSON; see [`key_text`] for how it is
    /// compared against string keys.
    pub links: IndexMap<String, IndexMap<String, Value>>,
}

impl Catalog {
    /// Iterates over every link in group order, then label order.
    pub fn iter_links(&self) -> impl Iterator<Item = (LinkRef, &Value)> + '_ {
        self.links.iter().flat_map(|(group, labels)| {
            labels
                .iter()
                .map(move |(label, referenced)| (LinkRef::new(group, label), referenced))
        })
    }
}

/// Normalises a referenced value to the textual form compared against string
/// keys.
///
/// Strings compare as-is. Any other JSON value compares through its compact
/// JSON rendering, so a numeric reference `7` matches the key `"7"` and `true`
/// matches `"true"`.
pub fn key_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// A single place a string is referenced from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkRef {
    pub group: String,
    pub label: String,
}

impl LinkRef {
    pub fn new(group: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for LinkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.group, self.label)
    }
}

/// Column names of the emitted template, in order.
pub const TEMPLATE_HEADER: [&str; 4] = ["text_id", "links", "text_org", "text_new"];

/// One translator-facing row of the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRow {
    pub text_id: StringKey,
    /// Every reference to `text_id`, rendered as `group: label` and joined
    /// with `", "`.
    pub links: String,
    pub text_org: String,
    /// Always empty in freshly generated output.
    pub text_new: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_text_coerces_non_string_values() {
        assert_eq!(key_text(&json!("greet")), "greet");
        assert_eq!(key_text(&json!(7)), "7");
        assert_eq!(key_text(&json!(1.5)), "1.5");
        assert_eq!(key_text(&json!(true)), "true");
        assert_eq!(key_text(&json!(null)), "null");
    }

    #[test]
    fn link_ref_renders_group_and_label() {
        assert_eq!(LinkRef::new("page1", "home").to_string(), "page1: home");
    }

    #[test]
    fn catalog_preserves_document_order() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"strings": {"b": "B", "a": "A"},
                "links": {"zeta": {"y": "a", "x": "b"}, "alpha": {"w": "a"}}}"#,
        )
        .expect("catalog parsed");

        let keys: Vec<&str> = catalog.strings.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);

        let links: Vec<String> = catalog
            .iter_links()
            .map(|(link, _)| link.to_string())
            .collect();
        assert_eq!(links, ["zeta: y", "zeta: x", "alpha: w"]);
    }
}
