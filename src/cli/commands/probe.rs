//! Probe command implementation.
//!
//! The `fieldprobe probe` command loads the baseline payload, omits each
//! field in turn, and prints the fields the endpoint could not do without.

use chrono::Utc;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::ProbeArgs;
use crate::config::{load_merged_config, validate, InterpolationContext, ProbeConfig};
use crate::document::load_document;
use crate::error::{ProbeError, Result};
use crate::probe::{Classification, FieldSender, HttpSender, ProbeRun, Prober};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ProbeReport, ReportFormatter};
use crate::ui::{SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Load, interpolate, override and validate the run configuration.
pub fn resolve_config(
    root: &Path,
    config_path: Option<&Path>,
    args: &ProbeArgs,
) -> Result<ProbeConfig> {
    let mut config =
        load_merged_config(root, config_path)?.interpolate(&InterpolationContext::from_process_env())?;

    if let Some(url) = &args.url {
        config.url = Some(url.clone());
    }
    if let Some(payload) = &args.payload {
        config.payload = payload.clone();
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }

    validate(&config)?;
    Ok(config)
}

/// The probe command implementation.
pub struct ProbeCommand {
    root: PathBuf,
    config_path: Option<PathBuf>,
    args: ProbeArgs,
}

impl ProbeCommand {
    pub fn new(root: &Path, config_path: Option<&Path>, args: ProbeArgs) -> Self {
        Self {
            root: root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    pub fn args(&self) -> &ProbeArgs {
        &self.args
    }

    /// Run the probe and write the report to `out`.
    pub fn run<W: Write>(&self, ui: &mut dyn UserInterface, out: &mut W) -> Result<ProbeReport> {
        let config = resolve_config(&self.root, self.config_path.as_deref(), &self.args)?;
        let document = load_document(&self.root.join(&config.payload))?;
        let url = config.target_url().map(String::from);

        let sender = HttpSender::with_options(url.clone(), config.timeout(), &config.headers)?;
        let prober = Prober::new(sender);

        ui.show_header(&format!(
            "Probing {}",
            url.as_deref().unwrap_or("(no target URL)")
        ));

        let started_at = Utc::now();
        let run = probe_with_progress(&prober, &document, config.concurrency, ui)?;
        if run.unconfigured {
            ui.warning(&ProbeError::UnconfiguredTarget.to_string());
        }
        let report = ProbeReport::new(url, started_at, run);

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(&report, out)?,
            OutputFormat::Human => HumanFormatter::new()
                .show_all(self.args.all)
                .format(&report, out)?,
        }
        out.flush()?;

        Ok(report)
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run(ui, &mut out)?;
        Ok(CommandResult::success())
    }
}

/// Drive a probe run, keeping a spinner updated.
///
/// Sequential runs update the spinner per field; concurrent runs only
/// report the final count.
fn probe_with_progress<S: FieldSender>(
    prober: &Prober<S>,
    document: &Value,
    concurrency: usize,
    ui: &mut dyn UserInterface,
) -> Result<ProbeRun> {
    let mut spinner = ui.start_spinner("Probing fields");

    let outcome = if concurrency > 1 {
        spinner.set_message(&format!("Probing fields ({} at a time)", concurrency));
        prober.run(document, concurrency)
    } else {
        probe_sequential(prober, document, spinner.as_mut(), ui)
    };

    match &outcome {
        Ok(run) if run.unconfigured => spinner.finish_clear(),
        Ok(run) => {
            let mandatory = run.mandatory().count();
            spinner.finish_success(&format!(
                "Probed {} {}: {} mandatory",
                run.results.len(),
                if run.results.len() == 1 { "field" } else { "fields" },
                mandatory
            ));
        }
        Err(_) => spinner.finish_error("Probe aborted"),
    }

    outcome
}

fn probe_sequential<S: FieldSender>(
    prober: &Prober<S>,
    document: &Value,
    spinner: &mut dyn SpinnerHandle,
    ui: &mut dyn UserInterface,
) -> Result<ProbeRun> {
    let verbose = ui.output_mode().shows_field_progress();
    let mut probes = prober.probe(document)?;
    let unconfigured = probes.is_unconfigured();
    let total = probes.total();
    let mut results = Vec::with_capacity(total);

    loop {
        if let Some(target) = probes.peek_target() {
            spinner.set_message(&format!("[{}/{}] {}", results.len() + 1, total, target));
        }
        let Some(result) = probes.next() else {
            break;
        };
        let result = result?;
        if result.classification == Classification::Mandatory {
            tracing::debug!(field = %result.label(), "Mandatory field");
        }
        if verbose && !unconfigured {
            ui.message(&format!("{} {}", result.classification, result.label()));
        }
        results.push(result);
    }

    Ok(ProbeRun::finish(results, unconfigured))
}
