//! Class discovery over autoload roots.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use puddleglum_ir::{DiscoveredClass, NAMESPACE_SEPARATOR, Snapshot};
use puddleglum_manifest::AutoloadRoot;
use walkdir::WalkDir;

/// Result of walking every autoload root.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Concrete classes in walk order, without duplicates.
    pub classes: Vec<DiscoveredClass>,
    /// Roots whose directory does not exist.
    pub missing_roots: Vec<PathBuf>,
}

/// Walk `roots` for source files and resolve them against the snapshot.
///
/// Files are visited sorted by name so output ordering is stable. Names the
/// catalog does not know and abstract classes are skipped.
pub fn discover(roots: &[AutoloadRoot], snapshot: &Snapshot, extension: &str) -> Discovery {
    let mut discovery = Discovery::default();
    let mut seen = HashSet::new();

    for root in roots {
        if !root.dir.is_dir() {
            tracing::debug!(dir = %root.dir.display(), prefix = %root.prefix, "autoload root not found");
            discovery.missing_roots.push(root.dir.clone());
            continue;
        }

        tracing::debug!(dir = %root.dir.display(), prefix = %root.prefix, "walking autoload root");
        for entry in WalkDir::new(&root.dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || entry.path().extension().and_then(|e| e.to_str()) != Some(extension)
            {
                continue;
            }

            let Some(name) = class_name(&root.prefix, &root.dir, entry.path()) else {
                continue;
            };
            let Some(info) = snapshot.class(&name) else {
                tracing::debug!(class = %name, "not in class catalog, skipping");
                continue;
            };
            if info.is_abstract {
                tracing::debug!(class = %name, "abstract, skipping");
                continue;
            }
            if seen.insert(name.clone()) {
                tracing::trace!(class = %name, "discovered");
                discovery.classes.push(DiscoveredClass::new(&name, info));
            }
        }
    }

    discovery
}

/// Derive `Prefix\Sub\Name` from `<dir>/Sub/Name.<ext>`.
fn class_name(prefix: &str, dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(dir).ok()?.with_extension("");
    let mut segments = Vec::new();
    if !prefix.is_empty() {
        segments.push(prefix.to_string());
    }
    for component in relative.components() {
        segments.push(component.as_os_str().to_str()?.to_string());
    }
    Some(segments.join(&NAMESPACE_SEPARATOR.to_string()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn snapshot() -> Snapshot {
        serde_json::from_str(
            r#"{
                "classes": {
                    "App\\Models\\User": { "ancestors": ["Illuminate\\Database\\Eloquent\\Model"] },
                    "App\\Models\\Base": { "abstract": true },
                    "App\\Http\\Controllers\\UserController": {}
                }
            }"#,
        )
        .unwrap()
    }

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<?php\n").unwrap();
    }

    fn root(prefix: &str, dir: PathBuf) -> AutoloadRoot {
        AutoloadRoot {
            prefix: prefix.to_string(),
            dir,
            dev: false,
        }
    }

    #[test]
    fn test_class_name() {
        assert_eq!(
            class_name("App", Path::new("/x/app"), Path::new("/x/app/Models/User.php")).as_deref(),
            Some("App\\Models\\User")
        );
        assert_eq!(
            class_name("", Path::new("/x/src"), Path::new("/x/src/Thing.php")).as_deref(),
            Some("Thing")
        );
    }

    #[test]
    fn test_discover_resolves_and_filters() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        touch(app.join("Models/User.php"));
        touch(app.join("Models/Base.php"));
        touch(app.join("Models/Unknown.php"));
        touch(app.join("Models/notes.txt"));
        touch(app.join("Http/Controllers/UserController.php"));

        let discovery = discover(&[root("App", app)], &snapshot(), "php");
        let names: Vec<&str> = discovery.classes.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, ["App\\Http\\Controllers\\UserController", "App\\Models\\User"]);
        assert!(discovery.missing_roots.is_empty());
    }

    #[test]
    fn test_discover_dedups_overlapping_roots() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("app");
        touch(app.join("Models/User.php"));

        let roots = [root("App", app.clone()), root("App", app)];
        let discovery = discover(&roots, &snapshot(), "php");

        assert_eq!(discovery.classes.len(), 1);
    }

    #[test]
    fn test_missing_root_is_reported() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let discovery = discover(&[root("App", missing.clone())], &snapshot(), "php");

        assert!(discovery.classes.is_empty());
        assert_eq!(discovery.missing_roots, [missing]);
    }
}
