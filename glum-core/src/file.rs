use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path that was written
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::trace!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Delete `path` (if present) and create it again as an empty directory.
pub fn recreate_dir(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path)
            .wrap_err_with(|| format!("failed to clear output directory '{}'", path.display()))?;
    }
    std::fs::create_dir_all(path)
        .wrap_err_with(|| format!("failed to create output directory '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello;

    impl GeneratedFile for Hello {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join("hello.ts")
        }

        fn render(&self) -> String {
            "export {};\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let written = Hello.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("nested").join("hello.ts"));
        assert_eq!(fs::read_to_string(written).unwrap(), "export {};\n");
    }

    #[test]
    fn test_recreate_dir_removes_stale_content() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        write_file(&out.join("stale").join("old.ts"), "old").unwrap();

        recreate_dir(&out).unwrap();

        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_recreate_dir_creates_missing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("does").join("not").join("exist");

        recreate_dir(&out).unwrap();

        assert!(out.is_dir());
    }

    #[test]
    fn test_write_file_surfaces_io_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a dir").unwrap();

        let err = write_file(&blocker.join("child.ts"), "x").unwrap_err();

        assert!(err.to_string().contains("failed to create directory"));
        assert!(err.root_cause().downcast_ref::<std::io::Error>().is_some());
    }
}
