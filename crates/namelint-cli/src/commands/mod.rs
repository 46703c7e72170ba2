//! CLI command implementations

pub mod check;
pub mod explain;
pub mod init;

pub use check::CheckArgs;
pub use explain::ExplainArgs;
pub use init::InitArgs;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check JavaScript/TypeScript files for naming issues
    Check(CheckArgs),

    /// Create a namelint.toml in the current directory
    Init(InitArgs),

    /// Show the description and examples of a rule
    Explain(ExplainArgs),
}
