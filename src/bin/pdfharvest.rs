//! CLI binary for pdf-harvest.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `HarvestConfig` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_harvest::{
    harvest, sweep_directory, DownloadOutcome, FileCheck, HarvestConfig, HarvestProgressCallback,
    HarvestStats, ProgressCallback, Verdict,
};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

// ── Console reporter ─────────────────────────────────────────────────────────

/// Prints one line per URL and per notable file. With `bar` set, lines are
/// printed above an indicatif progress bar covering the download phase.
struct ConsoleReporter {
    bar: Option<ProgressBar>,
    bar_active: AtomicBool,
}

impl ConsoleReporter {
    fn new(show_progress: bool) -> Arc<Self> {
        let bar = show_progress.then(|| {
            let bar = ProgressBar::new(0);
            let style = ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:.bold}  [{bar:42.green/238}] {pos:>3}/{len} links  {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
            bar.set_style(style);
            bar.set_prefix("Downloading");
            bar
        });
        Arc::new(Self {
            bar,
            bar_active: AtomicBool::new(false),
        })
    }

    fn line(&self, msg: String) {
        match self.bar {
            Some(ref bar) if self.bar_active.load(Ordering::SeqCst) => bar.println(msg),
            _ => eprintln!("{msg}"),
        }
    }

    fn finish_bar(&self) {
        if let Some(ref bar) = self.bar {
            if self.bar_active.swap(false, Ordering::SeqCst) {
                bar.finish_and_clear();
            }
        }
    }
}

impl HarvestProgressCallback for ConsoleReporter {
    fn on_extracted(&self, count: usize) {
        self.line(format!("Extracted {} PDF URLs:", bold(&count.to_string())));
        if let Some(ref bar) = self.bar {
            if count > 0 {
                bar.set_length(count as u64);
                bar.enable_steady_tick(Duration::from_millis(80));
                self.bar_active.store(true, Ordering::SeqCst);
            }
        }
    }

    fn on_download_start(&self, _index: usize, _total: usize, url: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(url.to_string());
        }
    }

    fn on_download_complete(&self, index: usize, total: usize, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded { path, bytes, .. } => self.line(format!(
                "  {} Downloaded: {}  {}",
                green("✓"),
                path.display(),
                dim(&format!("{bytes} bytes")),
            )),
            DownloadOutcome::AlreadyExists { path, .. } => self.line(format!(
                "  {} File already exists: {}",
                dim("="),
                path.display()
            )),
            DownloadOutcome::Failed { url, error } => self.line(format!(
                "  {} Failed to download {}: {}",
                red("✗"),
                url,
                red(&error.to_string())
            )),
        }
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
        if index == total {
            self.finish_bar();
        }
    }

    fn on_file_checked(&self, check: &FileCheck) {
        if check.uppercase_name {
            self.line(format!(
                "  {} Filename contains uppercase letters: {}",
                yellow("⚠"),
                check.path.display()
            ));
        }
        if let Verdict::Corrupt { ref reason } = check.verdict {
            let action = if check.deleted { "Deleted corrupt file" } else { "Corrupt file" };
            self.line(format!(
                "  {} {}: {}  {}",
                red("✗"),
                action,
                check.path.display(),
                dim(&format!("({reason})")),
            ));
        }
    }

    fn on_harvest_complete(&self, stats: &HarvestStats) {
        self.finish_bar();
        let mark = if stats.failed == 0 && stats.deleted == 0 {
            green("✔")
        } else {
            yellow("⚠")
        };
        eprintln!(
            "{} {} downloaded, {} skipped, {} failed, {} checked, {} corrupt removed  {}",
            mark,
            bold(&stats.downloaded.to_string()),
            stats.skipped,
            stats.failed,
            stats.checked,
            stats.deleted,
            dim(&format!("{}ms", stats.duration_ms)),
        );
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Download every PDF linked from a CSV export into ./PDFs
  pdfharvest thecloroxcompany.csv

  # Different output directory, 30 s per-request timeout
  pdfharvest links.txt -o downloads --download-timeout 30

  # Only re-check what is already on disk, without deleting anything
  pdfharvest --sweep-only --dry-run

  # Machine-readable run report
  pdfharvest links.csv --json > report.json

NOTES:
  Links must end in lowercase ".pdf"; pass --match-uppercase-ext to also
  accept ".PDF". A file that already exists under its sanitized name is never
  downloaded again. Corrupt files (unparseable or zero pages) are deleted after
  the download phase.
"#;

/// Download every PDF linked from a text or CSV file, then remove corrupt ones.
#[derive(Parser, Debug)]
#[command(
    name = "pdfharvest",
    version,
    about = "Download every PDF linked from a text or CSV file, then remove corrupt ones",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Text or CSV file to scan for PDF links.
    #[arg(env = "PDFHARVEST_INPUT", required_unless_present = "sweep_only")]
    input: Option<PathBuf>,

    /// Directory PDFs are downloaded into and swept.
    #[arg(short, long, env = "PDFHARVEST_OUTPUT_DIR", default_value = "PDFs")]
    output_dir: PathBuf,

    /// Write-buffer size in bytes for downloaded bodies.
    #[arg(long, env = "PDFHARVEST_CHUNK_SIZE", default_value_t = 8192)]
    chunk_size: usize,

    /// Per-request timeout in seconds (default: none).
    #[arg(long, env = "PDFHARVEST_DOWNLOAD_TIMEOUT")]
    download_timeout: Option<u64>,

    /// Also pick up links ending in .PDF / .Pdf.
    #[arg(long, env = "PDFHARVEST_MATCH_UPPERCASE_EXT")]
    match_uppercase_ext: bool,

    /// Log and skip corrupt files that cannot be deleted instead of aborting.
    #[arg(long, env = "PDFHARVEST_KEEP_GOING")]
    keep_going_on_delete_error: bool,

    /// Validate and report, but never delete.
    #[arg(long, env = "PDFHARVEST_DRY_RUN")]
    dry_run: bool,

    /// Skip extraction and download; only sweep the output directory.
    #[arg(long, env = "PDFHARVEST_SWEEP_ONLY")]
    sweep_only: bool,

    /// Print the run report as JSON on stdout.
    #[arg(long, env = "PDFHARVEST_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "PDFHARVEST_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDFHARVEST_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDFHARVEST_QUIET")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The console reporter already prints one line per event; library INFO
    // logs would duplicate it, so they only show with --verbose.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let reporter: Option<ProgressCallback> = if cli.quiet {
        None
    } else {
        Some(ConsoleReporter::new(show_progress) as Arc<dyn HarvestProgressCallback>)
    };

    let config = build_config(&cli, reporter)?;

    // ── Sweep-only mode ──────────────────────────────────────────────────
    if cli.sweep_only {
        let report = sweep_directory(&config).context("Sweep failed")?;
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialise report")?
            );
        } else if !cli.quiet {
            eprintln!(
                "{} checked, {} valid, {} corrupt removed, {} uppercase names",
                report.files.len(),
                report.valid(),
                report.deleted(),
                report.uppercase_notices(),
            );
        }
        return Ok(());
    }

    // ── Full run ─────────────────────────────────────────────────────────
    let input = cli
        .input
        .as_ref()
        .context("An input file is required unless --sweep-only is given")?;

    let report = harvest(input, &config)
        .await
        .with_context(|| format!("Harvest of {} failed", input.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    }

    Ok(())
}

/// Map CLI args to `HarvestConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<HarvestConfig> {
    let mut builder = HarvestConfig::builder()
        .output_dir(&cli.output_dir)
        .chunk_size(cli.chunk_size)
        .match_uppercase_extension(cli.match_uppercase_ext)
        .delete_errors_fatal(!cli.keep_going_on_delete_error)
        .dry_run(cli.dry_run);

    if let Some(secs) = cli.download_timeout {
        builder = builder.download_timeout_secs(secs);
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}
