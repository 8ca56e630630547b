use std::path::Path;

use puddleglum_ir::Snapshot;

use crate::{Error, Result};

/// Read and parse an introspection snapshot.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Snapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_snapshot(&content, &path.display().to_string())
}

/// Parse an introspection snapshot from a string.
pub fn parse_snapshot(content: &str, filename: &str) -> Result<Snapshot> {
    serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot(
            r#"{
                "classes": { "App\\Models\\User": { "table": "users" } },
                "tables": { "users": [{ "name": "id", "type_name": "bigint" }] },
                "routes": [{ "uri": "api/users", "methods": ["GET"], "middleware": ["api"] }]
            }"#,
            "puddleglum.json",
        )
        .unwrap();

        assert_eq!(snapshot.classes.len(), 1);
        assert_eq!(snapshot.columns("users")[0].name, "id");
        assert_eq!(snapshot.routes[0].controller, None);
    }

    #[test]
    fn test_malformed_snapshot_is_json_error() {
        let err = parse_snapshot(r#"{ "classes": [] }"#, "puddleglum.json").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_malformed_shape_marker_still_loads() {
        let snapshot = parse_snapshot(
            r#"{ "classes": { "App\\Http\\Controllers\\StatsController": { "methods": [
                { "name": "index", "response_shape": { "count": 5 }, "request_shape": [1, 2] }
            ] } } }"#,
            "puddleglum.json",
        )
        .unwrap();

        let method = snapshot
            .class("App\\Http\\Controllers\\StatsController")
            .and_then(|c| c.method("index"))
            .unwrap();
        assert_eq!(method.response_shape.as_ref().unwrap().types(), ["any"]);
        assert_eq!(method.request_shape.as_ref().unwrap().types(), ["any"]);
    }

    #[test]
    fn test_missing_snapshot_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = load_snapshot(temp.path().join("puddleglum.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
