use std::path::{Path, PathBuf};

use crate::{AutoloadPath, Composer, Config, Result};

/// A namespace prefix mapped to one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoloadRoot {
    /// Namespace prefix without trailing separator (e.g. `App`).
    pub prefix: String,
    pub dir: PathBuf,
    pub dev: bool,
}

impl Config {
    /// Resolve the autoload roots discovery walks, relative to `base`.
    ///
    /// Dev-only roots are included when `autoload_dev` is set.
    pub fn autoload_roots(&self, base: &Path) -> Result<Vec<AutoloadRoot>> {
        let mut roots = Vec::new();
        match &self.composer {
            Some(composer) => {
                let composer = Composer::open(base.join(composer))?;
                push_roots(&mut roots, base, &composer.autoload.psr4, false);
                if self.autoload_dev {
                    push_roots(&mut roots, base, &composer.autoload_dev.psr4, true);
                }
            }
            None => {
                push_roots(&mut roots, base, &self.autoload, false);
                if self.autoload_dev {
                    push_roots(&mut roots, base, &self.dev_autoload, true);
                }
            }
        }
        Ok(roots)
    }
}

fn push_roots<'a>(
    roots: &mut Vec<AutoloadRoot>,
    base: &Path,
    map: impl IntoIterator<Item = (&'a String, &'a AutoloadPath)>,
    dev: bool,
) {
    for (prefix, paths) in map {
        for dir in paths.paths() {
            roots.push(AutoloadRoot {
                prefix: prefix.trim_matches('\\').to_string(),
                dir: base.join(dir.trim_end_matches('/')),
                dev,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_from_config_tables() {
        let config: Config = r#"
[autoload]
"App" = "app"

[autoload-dev]
"Tests" = "tests"
"#
        .parse()
        .unwrap();

        let roots = config.autoload_roots(Path::new("/srv")).unwrap();
        assert_eq!(
            roots,
            vec![AutoloadRoot {
                prefix: "App".into(),
                dir: PathBuf::from("/srv/app"),
                dev: false,
            }]
        );
    }

    #[test]
    fn test_roots_include_dev_when_enabled() {
        let config: Config = r#"
autoload_dev = true

[autoload-dev]
"Tests" = "tests"
"#
        .parse()
        .unwrap();

        let roots = config.autoload_roots(Path::new("/srv")).unwrap();
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[1].prefix, "Tests");
        assert!(roots[1].dev);
    }

    #[test]
    fn test_roots_from_composer() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("composer.json"),
            r#"{ "autoload": { "psr-4": { "App\\": "app/", "Acme\\Billing\\": ["billing/src/"] } } }"#,
        )
        .unwrap();
        let config: Config = "composer = \"composer.json\"".parse().unwrap();

        let roots = config.autoload_roots(temp.path()).unwrap();

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].prefix, "App");
        assert_eq!(roots[0].dir, temp.path().join("app"));
        assert_eq!(roots[1].prefix, "Acme\\Billing");
        assert_eq!(roots[1].dir, temp.path().join("billing/src"));
    }
}
