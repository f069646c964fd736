use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::error::{Result, TypshipError};

/// Entry point compiled during validation when the manifest does not
/// name one.
pub const DEFAULT_ENTRYPOINT: &str = "src/lib.typ";

/// Validated contents of a `typst.toml` package manifest.
///
/// `name` and `version` are guaranteed non-empty once construction
/// succeeds; both are used as path segments of the release directory
/// and `name` additionally in the README link rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    /// The package name, as listed on the registry.
    pub name: String,
    /// The package version (used verbatim as a path segment).
    pub version: String,
    /// Project-relative path of the file to compile for validation.
    pub entrypoint: String,
}

/// Raw mirror of `typst.toml` as serde sees it.
///
/// Everything is optional at parse time; required fields are checked
/// when converting into a [`PackageManifest`]. Unknown keys (authors,
/// license, ...) are ignored.
#[derive(Deserialize, Serialize, Debug, Default)]
struct RawManifest {
    package: Option<RawPackage>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
struct RawPackage {
    name: Option<String>,
    version: Option<String>,
    entrypoint: Option<String>,
}

impl PackageManifest {
    /// Parses and validates a manifest from its TOML source.
    ///
    /// # Errors
    /// Returns [`TypshipError::ManifestInvalid`] on malformed TOML and
    /// [`TypshipError::ManifestFieldMissing`] when `name` or `version`
    /// is absent or empty.
    pub fn from_str(input: &str) -> Result<PackageManifest> {
        let raw: RawManifest =
            toml::from_str(input).map_err(|e| TypshipError::ManifestInvalid {
                detail: e.to_string(),
            })?;
        let package = raw.package.unwrap_or_default();
        Ok(PackageManifest {
            name: required_field("name", package.name)?,
            version: required_field("version", package.version)?,
            entrypoint: package
                .entrypoint
                .unwrap_or_else(|| DEFAULT_ENTRYPOINT.to_string()),
        })
    }

    /// Loads a manifest from a file path.
    ///
    /// # Errors
    /// A nonexistent file is [`TypshipError::SourceFileMissing`]; read
    /// failures surface as [`TypshipError::Io`], parse and field errors
    /// as in [`PackageManifest::from_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<PackageManifest> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TypshipError::SourceFileMissing {
                path: path.to_path_buf(),
            });
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| TypshipError::io(path, e))?;
        Self::from_str(&content)
    }
}

fn required_field(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(TypshipError::ManifestFieldMissing { field }),
    }
}
