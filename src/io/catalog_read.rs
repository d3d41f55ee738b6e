use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ToolError};
use crate::model::Catalog;

/// Reads and parses the catalog stored at `path`.
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let source = fs::read_to_string(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ToolError::InputNotFound(path.to_path_buf()),
        _ => ToolError::Io(error),
    })?;
    parse_catalog(&source, path)
}

/// Parses catalog JSON. `path` is only used to label errors.
pub fn parse_catalog(source: &str, path: &Path) -> Result<Catalog> {
    serde_json::from_str(source).map_err(|source| ToolError::InputMalformed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(source: &str) -> Result<Catalog> {
        parse_catalog(source, Path::new("strings.json"))
    }

    #[test]
    fn accepts_non_string_link_targets() {
        let catalog = parse(r#"{"strings": {"1": "One"}, "links": {"g": {"l": 1}}}"#)
            .expect("catalog parsed");
        assert_eq!(catalog.links["g"]["l"], serde_json::json!(1));
    }

    #[test]
    fn ignores_unrelated_top_level_fields() {
        let catalog = parse(r#"{"strings": {}, "links": {}, "language": "en"}"#)
            .expect("catalog parsed");
        assert!(catalog.strings.is_empty());
    }

    #[test]
    fn rejects_missing_sections() {
        let error = parse(r#"{"strings": {"a": "A"}}"#).expect_err("links missing");
        assert!(matches!(error, ToolError::InputMalformed { .. }));
        assert!(error.to_string().contains("links"));
    }

    #[test]
    fn rejects_wrong_value_types() {
        for source in [
            r#"{"strings": {"a": 1}, "links": {}}"#,
            r#"{"strings": {}, "links": {"g": "a"}}"#,
            r#"{"strings": [], "links": {}}"#,
            "not json",
        ] {
            let error = parse(source).expect_err("shape rejected");
            assert!(
                matches!(error, ToolError::InputMalformed { .. }),
                "unexpected error for {source}: {error}"
            );
        }
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let temp_dir = tempdir().expect("temporary directory");
        let path = temp_dir.path().join("absent.json");

        let error = read_catalog(&path).expect_err("file is missing");
        assert!(matches!(error, ToolError::InputNotFound(ref missing) if missing == &path));
    }
}
