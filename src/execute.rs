use std::path::Path;
use anyhow::{bail, Result};
use colored::Colorize;
use typship::manifest::PackageManifest;
use typship::release::release;
use typship::util::{get_manifest_path, MANIFEST_FILE};
use typship::validate::{TypstCompiler, Validate};
use crate::cli::{TypshipCommand, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    let manifest_path = get_manifest_path()?;
    if !manifest_path.exists() {
        bail!("{} not found. Run typship inside the package root.", MANIFEST_FILE)
    }
    let project_root = std::env::current_dir()?;
    match cli.command {
        TypshipCommand::Check => execute_check(&project_root),
        TypshipCommand::Release => execute_release(&project_root),
    }
}

pub fn execute_check(project_root: &Path) -> Result<()> {
    let manifest = PackageManifest::load(project_root.join(MANIFEST_FILE))?;
    let compiler = TypstCompiler::default();
    compiler.validate(&project_root.join(&manifest.entrypoint))?;
    println!("{} {} compiles cleanly", "ok:".green().bold(), manifest.entrypoint);
    Ok(())
}

pub fn execute_release(project_root: &Path) -> Result<()> {
    let target = release(project_root, &TypstCompiler::default())?;
    println!(
        "{} staged {}@{} at {}",
        "ok:".green().bold(),
        target.name,
        target.version,
        target.root.display()
    );
    Ok(())
}
