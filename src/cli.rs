use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    #[command(subcommand)]
    pub(crate) command: TypshipCommand,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum TypshipCommand {
    /// Compiles the package entry point without writing any release files
    Check,
    /// Validates the entry point, then assembles the versioned release
    /// directory `<name>/<version>/` with the manifest, license, source
    /// tree, and rewritten README
    #[clap(alias = "module")]
    Release,
}
