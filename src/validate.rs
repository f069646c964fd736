use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use crate::error::{Result, TypshipError};

/// The validation gate run before any release file is written.
///
/// Implementations report `Ok` when the package entry point compiles
/// cleanly. The real implementation shells out to the `typst` binary;
/// tests substitute a fake to exercise gating without a compiler
/// install.
pub trait Validate {
    fn validate(&self, entrypoint: &Path) -> Result<()>;
}

/// Validates the entry point by running `typst compile` against it.
///
/// The compiled document goes into a temporary directory that is
/// removed when the check finishes, so a passing validation leaves no
/// build artifact behind.
pub struct TypstCompiler {
    program: String,
}

impl TypstCompiler {
    /// Uses `program` instead of the `typst` on `PATH`.
    pub fn new(program: impl Into<String>) -> TypstCompiler {
        TypstCompiler {
            program: program.into(),
        }
    }
}

impl Default for TypstCompiler {
    fn default() -> Self {
        TypstCompiler::new("typst")
    }
}

impl Validate for TypstCompiler {
    fn validate(&self, entrypoint: &Path) -> Result<()> {
        if !entrypoint.exists() {
            return Err(TypshipError::SourceFileMissing {
                path: entrypoint.to_path_buf(),
            });
        }
        let out_dir = TempDir::new()
            .map_err(|e| TypshipError::io(std::env::temp_dir(), e))?;
        let output = Command::new(&self.program)
            .arg("compile")
            .arg(entrypoint)
            .arg(out_dir.path().join("check.pdf"))
            .output()
            .map_err(|e| TypshipError::io(PathBuf::from(&self.program), e))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => output.status.to_string(),
                diagnostics => diagnostics.to_string(),
            };
            return Err(TypshipError::ValidationFailed { detail });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn entrypoint_fixture() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let entry = dir.path().join("lib.typ");
        fs::write(&entry, "#let answer = 42\n").unwrap();
        (dir, entry)
    }

    #[test]
    fn test_missing_entrypoint_is_source_file_missing() {
        let dir = tempdir().unwrap();
        let compiler = TypstCompiler::default();
        let err = compiler.validate(&dir.path().join("lib.typ")).unwrap_err();
        assert!(matches!(err, TypshipError::SourceFileMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_passes() {
        let (_dir, entry) = entrypoint_fixture();
        let compiler = TypstCompiler::new("true");
        compiler.validate(&entry).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_validation_failed() {
        let (_dir, entry) = entrypoint_fixture();
        let compiler = TypstCompiler::new("false");
        let err = compiler.validate(&entry).unwrap_err();
        assert!(matches!(err, TypshipError::ValidationFailed { .. }));
    }

    #[test]
    fn test_unknown_program_is_io_failure() {
        let (_dir, entry) = entrypoint_fixture();
        let compiler = TypstCompiler::new("typship-no-such-compiler");
        let err = compiler.validate(&entry).unwrap_err();
        assert!(matches!(err, TypshipError::Io { .. }));
    }
}
