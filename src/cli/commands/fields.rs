//! Fields command implementation.
//!
//! `fieldprobe fields` prints the probe plan: every field that `probe` would
//! omit, in the order it would omit them. Nothing is sent.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{FieldsArgs, ProbeArgs};
use crate::document::{load_document, plan_targets, FieldTarget};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::probe::resolve_config;

/// The fields command implementation.
pub struct FieldsCommand {
    root: PathBuf,
    config_path: Option<PathBuf>,
    args: FieldsArgs,
}

impl FieldsCommand {
    pub fn new(root: &Path, config_path: Option<&Path>, args: FieldsArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Plan the probe and write one label per line to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<FieldTarget>> {
        let overrides = ProbeArgs {
            payload: self.args.payload.clone(),
            ..ProbeArgs::default()
        };
        let config = resolve_config(&self.root, self.config_path.as_deref(), &overrides)?;
        let document = load_document(&self.root.join(&config.payload))?;
        let targets = plan_targets(&document)?;

        for target in &targets {
            writeln!(out, "{}", target)?;
        }
        Ok(targets)
    }
}

impl Command for FieldsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let targets = self.run(&mut stdout.lock())?;
        ui.message(&format!("{} fields", targets.len()));
        Ok(CommandResult::success())
    }
}
