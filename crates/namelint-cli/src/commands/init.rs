//! `namelint init`: write a starter `namelint.toml`

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use namelint_core::config::CONFIG_FILENAME;

const STARTER_CONFIG: &str = r#"# namelint looks for this file from the checked path upwards.

[rules]
# Rules to skip, by id or name
# disabled = ["svg-file-name"]

# Rule categories
naming = true
hooks = true

# Per-rule severity: error, warning, info or hint
# [rules.severity]
# hook-func-name = "error"
# N002 = "hint"
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Replace an existing namelint.toml
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(&self) -> Result<()> {
        let path = self.write_starter(&std::env::current_dir()?)?;
        println!(
            "{} wrote {}",
            "✓".green().bold(),
            path.display().to_string().cyan()
        );
        Ok(())
    }

    fn write_starter(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        let written = if self.force {
            fs::write(&path, STARTER_CONFIG)
        } else {
            create_new(&path, STARTER_CONFIG)
        };

        match written {
            Err(e) if e.kind() == ErrorKind::AlreadyExists => anyhow::bail!(
                "{} already exists in {}. Pass --force to replace it.",
                CONFIG_FILENAME,
                dir.display()
            ),
            other => other.with_context(|| format!("writing {}", path.display()))?,
        }

        tracing::debug!(path = %path.display(), force = self.force, "wrote starter config");
        Ok(path)
    }
}

/// Fails with `AlreadyExists` instead of truncating.
fn create_new(path: &Path, contents: &str) -> std::io::Result<()> {
    use std::io::Write;

    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?
        .write_all(contents.as_bytes())
}
