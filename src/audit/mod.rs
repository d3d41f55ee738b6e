//! Consistency checks over a catalog.
//!
//! None of the findings stop a template from being generated; they point at
//! strings nobody references, links that point nowhere, and texts that were
//! entered twice under different keys.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde_json::Value;

use crate::model::{Catalog, LinkRef, StringKey, key_text};

/// A link whose referenced key is not present in `strings`.
#[derive(Debug, Clone, PartialEq)]
pub struct BadLink {
    pub link: LinkRef,
    pub referenced: Value,
}

/// A string whose text repeats an earlier string, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateString {
    pub key: StringKey,
    /// First key seen with the same text.
    pub first_key: StringKey,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    /// Keys no link refers to, in catalog order.
    pub unused_strings: Vec<StringKey>,
    /// Links in catalog order whose target key does not exist.
    pub bad_links: Vec<BadLink>,
    pub duplicate_strings: Vec<DuplicateString>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.finding_count() == 0
    }

    pub fn finding_count(&self) -> usize {
        self.unused_strings.len() + self.bad_links.len() + self.duplicate_strings.len()
    }

    /// Renders one line per finding.
    pub fn lines(&self) -> Vec<String> {
        let unused = self
            .unused_strings
            .iter()
            .map(|key| format!("unused string: {key}"));
        let bad = self.bad_links.iter().map(ToString::to_string);
        let duplicates = self.duplicate_strings.iter().map(ToString::to_string);
        unused.chain(bad).chain(duplicates).collect()
    }
}

impl fmt::Display for BadLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bad link: {} -> {}",
            self.link,
            key_text(&self.referenced)
        )
    }
}

impl fmt::Display for DuplicateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "duplicate string: {} repeats {}",
            self.key, self.first_key
        )
    }
}

/// Checks the catalog for unused strings, bad links and duplicated texts.
pub fn audit_catalog(catalog: &Catalog) -> AuditReport {
    let mut referenced: HashSet<String> = HashSet::new();
    let mut bad_links = Vec::new();

    for (link, target) in catalog.iter_links() {
        let key = key_text(target);
        if catalog.strings.contains_key(&*key) {
            referenced.insert(key.into_owned());
        } else {
            bad_links.push(BadLink {
                link,
                referenced: target.clone(),
            });
        }
    }

    let unused_strings = catalog
        .strings
        .keys()
        .filter(|key| !referenced.contains(key.as_str()))
        .cloned()
        .collect();

    AuditReport {
        unused_strings,
        bad_links,
        duplicate_strings: find_duplicates(catalog),
    }
}

fn find_duplicates(catalog: &Catalog) -> Vec<DuplicateString> {
    let mut first_seen: HashMap<String, &StringKey> = HashMap::new();
    let mut duplicates = Vec::new();

    for (key, text) in &catalog.strings {
        match first_seen.get(&text.to_lowercase()) {
            Some(first_key) => duplicates.push(DuplicateString {
                key: key.clone(),
                first_key: (*first_key).clone(),
            }),
            None => {
                first_seen.insert(text.to_lowercase(), key);
            }
        }
    }

    duplicates
}
