use std::fs;
use std::path::{Component, Path, PathBuf};
use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

/// `RUST_LOG` wins when set; otherwise `--verbose` selects between info and warn.
pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &Args) -> anyhow::Result<()> {
    let check = args.command.check_args();

    if let Some(timeout) = check.timeout {
        if !(timeout > 0.0 && timeout <= 3600.0) {
            anyhow::bail!("--timeout must be greater than 0 and at most 3600 seconds");
        }
    }

    if let Some(limit) = check.limit {
        if limit == 0 {
            anyhow::bail!("--limit must be greater than 0");
        }
    }

    let output = check
        .output
        .clone()
        .unwrap_or_else(|| args.command.variant().default_output());
    if same_file(&output, &check.input) {
        anyhow::bail!(
            "Output file {:?} is the input file; it would be truncated before it is read",
            output
        );
    }

    Ok(())
}

/// Compares canonical paths when both exist, falling back to the paths with
/// `.` components removed.
fn same_file(a: &Path, b: &Path) -> bool {
    if let (Ok(a), Ok(b)) = (fs::canonicalize(a), fs::canonicalize(b)) {
        return a == b;
    }
    let lexical = |p: &Path| -> PathBuf {
        p.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    };
    lexical(a) == lexical(b)
}
