use std::path::{Path, PathBuf};
use crate::error::{Result, TypshipError};
use crate::manifest::PackageManifest;
use crate::util::{
    copy_dir_all, copy_file, read_file, LICENSE_FILE, MANIFEST_FILE, README_FILE,
    SRC_DIR,
};
use crate::validate::Validate;

/// Listing URL prefix of the Typst Universe registry.
pub const REGISTRY_URL_BASE: &str = "https://typst.app/universe/package";
/// Canonical source-hosting URL prefix the README links are rewritten to.
pub const CANONICAL_URL_BASE: &str = "https://github.com/Typsium";

/// The versioned output directory derived from a manifest.
///
/// The root path is a pure function of `{name, version}` and the
/// project root; recomputing it from the same manifest always yields
/// the same location.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseTarget {
    pub name: String,
    pub version: String,
    pub root: PathBuf,
}

impl ReleaseTarget {
    /// Derives the output location `<project_root>/<name>/<version>`.
    pub fn from_manifest(manifest: &PackageManifest, project_root: &Path) -> ReleaseTarget {
        ReleaseTarget {
            name: manifest.name.clone(),
            version: manifest.version.clone(),
            root: project_root.join(&manifest.name).join(&manifest.version),
        }
    }

    /// The source subdirectory of the release.
    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }
}

/// Replaces every registry listing URL for `name` with the canonical
/// GitHub URL. All other content passes through byte for byte.
pub fn rewrite_registry_links(content: &str, name: &str) -> String {
    let from = format!("{REGISTRY_URL_BASE}/{name}");
    let to = format!("{CANONICAL_URL_BASE}/{name}");
    content.replace(&from, &to)
}

/// Builds the release directory for `manifest` under `project_root`.
///
/// Directory creation is idempotent and every staged file overwrites
/// its destination, so rerunning after an interrupted or stale build
/// converges on the same output. Stale files a previous build left in
/// the target are not purged, only overwritten.
///
/// # Errors
/// The first failing step aborts the assembly: missing license, README,
/// or source tree is [`TypshipError::SourceFileMissing`]; write
/// failures are [`TypshipError::Io`] with the offending path.
pub fn assemble(manifest: &PackageManifest, project_root: &Path) -> Result<ReleaseTarget> {
    let target = ReleaseTarget::from_manifest(manifest, project_root);
    let src_dest = target.src_dir();
    std::fs::create_dir_all(&src_dest).map_err(|e| TypshipError::io(&src_dest, e))?;

    copy_file(
        &project_root.join(MANIFEST_FILE),
        &target.root.join(MANIFEST_FILE),
    )?;
    copy_file(
        &project_root.join(LICENSE_FILE),
        &target.root.join(LICENSE_FILE),
    )?;
    copy_dir_all(&project_root.join(SRC_DIR), &src_dest)?;

    let readme = read_file(&project_root.join(README_FILE))?;
    let rewritten = rewrite_registry_links(&readme, &manifest.name);
    let readme_dest = target.root.join(README_FILE);
    std::fs::write(&readme_dest, rewritten)
        .map_err(|e| TypshipError::io(&readme_dest, e))?;

    Ok(target)
}

/// Runs the full release pipeline: manifest, validation gate, assembly.
///
/// The validator runs before any directory or file is created; a
/// failing check aborts with the target path untouched.
pub fn release(project_root: &Path, validator: &dyn Validate) -> Result<ReleaseTarget> {
    let manifest = PackageManifest::load(project_root.join(MANIFEST_FILE))?;
    validator.validate(&project_root.join(&manifest.entrypoint))?;
    assemble(&manifest, project_root)
}
