use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use crate::error::{Result, TypshipError};

/// File name of the package manifest in the project root.
pub const MANIFEST_FILE: &str = "typst.toml";
/// File name of the license in the project root.
pub const LICENSE_FILE: &str = "LICENSE";
/// File name of the README in the project root.
pub const README_FILE: &str = "README.md";
/// Name of the source directory, both in the project and the release.
pub const SRC_DIR: &str = "src";

/// Reads a file to a string.
///
/// A nonexistent path is reported as [`TypshipError::SourceFileMissing`];
/// any other read failure as [`TypshipError::Io`].
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(TypshipError::SourceFileMissing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| TypshipError::io(path, e))
}

/// Copies a single file, overwriting any existing destination file.
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if !src.exists() {
        return Err(TypshipError::SourceFileMissing {
            path: src.to_path_buf(),
        });
    }
    std::fs::copy(src, dest).map_err(|e| TypshipError::io(dest, e))?;
    Ok(())
}

/// Recursively copies a directory tree into `dest`.
///
/// Destination directories are created as needed and existing files are
/// overwritten, so repeated copies of the same tree converge on the
/// same result.
pub fn copy_dir_all(src: &Path, dest: &Path) -> Result<()> {
    if !src.is_dir() {
        return Err(TypshipError::SourceFileMissing {
            path: src.to_path_buf(),
        });
    }
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) => rel,
            // entries always live under `src`
            Err(_) => continue,
        };
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .map_err(|e| TypshipError::io(&target, e))?;
        } else {
            std::fs::copy(entry.path(), &target)
                .map_err(|e| TypshipError::io(&target, e))?;
        }
    }
    Ok(())
}

fn walk_error(root: &Path, err: walkdir::Error) -> TypshipError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    match err.into_io_error() {
        Some(source) => TypshipError::Io { path, source },
        None => TypshipError::Io {
            path,
            source: std::io::Error::other("directory walk failed"),
        },
    }
}

/// Returns the path to the `typst.toml` manifest in the current working directory.
pub fn get_manifest_path() -> std::io::Result<PathBuf> {
    Ok(std::env::current_dir()?.join(MANIFEST_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_file_overwrites_destination() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dest = dir.path().join("b.txt");
        fs::write(&src, "new").unwrap();
        fs::write(&dest, "old contents that are longer").unwrap();

        copy_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_copy_file_missing_source() {
        let dir = tempdir().unwrap();
        let err = copy_file(&dir.path().join("nope.txt"), &dir.path().join("b.txt"))
            .unwrap_err();
        assert!(matches!(err, TypshipError::SourceFileMissing { .. }));
    }

    #[test]
    fn test_copy_dir_all_copies_nested_tree() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("tree");
        fs::create_dir_all(src.join("inner")).unwrap();
        fs::write(src.join("top.typ"), "top").unwrap();
        fs::write(src.join("inner").join("leaf.typ"), "leaf").unwrap();

        let dest = dir.path().join("out");
        copy_dir_all(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("top.typ")).unwrap(), "top");
        assert_eq!(
            fs::read_to_string(dest.join("inner").join("leaf.typ")).unwrap(),
            "leaf"
        );
    }

    #[test]
    fn test_copy_dir_all_missing_source() {
        let dir = tempdir().unwrap();
        let err =
            copy_dir_all(&dir.path().join("nope"), &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, TypshipError::SourceFileMissing { .. }));
    }

    #[test]
    fn test_read_file_missing() {
        let dir = tempdir().unwrap();
        let err = read_file(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(err, TypshipError::SourceFileMissing { .. }));
    }
}
