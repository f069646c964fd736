//! # Typship Core Library
//!
//! This crate contains the core logic and building blocks of the `typship` tool – a release
//! packaging tool for Typst packages published through the Typst Universe registry.
//!
//! `typship` reads a package's `typst.toml`, checks that the library entry point compiles
//! with the `typst` compiler, and assembles a self-contained versioned release directory
//! (`<name>/<version>/`) holding the manifest, license, source tree, and a README whose
//! registry links are rewritten to the canonical GitHub repository.
//!
//! This library is built for the `typship` CLI, but you can also reuse it as a backend in
//! other tools.
//!
//! ## Modules Overview
//! - [`manifest`] – Parsing and validation of `typst.toml` manifests
//! - [`release`] – Target path derivation and release directory assembly
//! - [`validate`] – The `typst compile` gate run before any file is staged
//! - [`error`] – The error taxonomy shared by all operations
//! - [`util`] – Shared helpers (fixed file names, recursive copies)


pub mod error;
pub mod manifest;
pub mod release;
pub mod util;
pub mod validate;

pub use error::*;
pub use manifest::*;
pub use release::*;
pub use util::*;
pub use validate::*;
