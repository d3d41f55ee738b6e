use std::collections::HashMap;

use crate::model::{Catalog, LinkRef, TemplateRow, key_text};

/// Separator placed between references in the `links` column.
pub const LINK_SEPARATOR: &str = ", ";

/// Builds one template row per string, sorted by key.
///
/// The `links` column lists every `group: label` whose referenced key equals
/// the row's key, in group order and then label order as they appear in the
/// catalog.
pub fn build_rows(catalog: &Catalog) -> Vec<TemplateRow> {
    let references = index_references(catalog);

    let mut entries: Vec<(&String, &String)> = catalog.strings.iter().collect();
    entries.sort_by(|lhs, rhs| lhs.0.cmp(rhs.0));

    entries
        .into_iter()
        .map(|(key, text)| TemplateRow {
            text_id: key.clone(),
            links: references
                .get(key.as_str())
                .map(|links| join_links(links))
                .unwrap_or_default(),
            text_org: text.clone(),
            text_new: String::new(),
        })
        .collect()
}

/// Inverts the link groups into referenced key → references.
pub fn index_references(catalog: &Catalog) -> HashMap<String, Vec<LinkRef>> {
    let mut index: HashMap<String, Vec<LinkRef>> = HashMap::new();
    for (link, referenced) in catalog.iter_links() {
        index
            .entry(key_text(referenced).into_owned())
            .or_default()
            .push(link);
    }
    index
}

fn join_links(links: &[LinkRef]) -> String {
    links
        .iter()
        .map(LinkRef::to_string)
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR)
}
