use anyhow::{Context, Result};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::args::{CheckArgs, Variant};
use crate::dns::DnsProber;
use crate::http::HttpProber;
use crate::probe::Prober;
use crate::sites;
use crate::stats::RunSummary;
use crate::writer::SurvivorWriter;

pub fn run_check(variant: Variant, args: &CheckArgs) -> Result<RunSummary> {
    let timeout = match args.timeout {
        Some(secs) => Duration::try_from_secs_f64(secs)
            .with_context(|| format!("Invalid timeout of {} seconds", secs))?,
        None => variant.default_timeout(),
    };

    match variant {
        Variant::Dns => run_with_prober(&DnsProber::from_system_conf(timeout)?, variant, args),
        Variant::Http => run_with_prober(&HttpProber::new(timeout)?, variant, args),
    }
}

/// Load, reorder, probe and write survivors for one run.
pub fn run_with_prober<P: Prober>(
    prober: &P,
    variant: Variant,
    args: &CheckArgs,
) -> Result<RunSummary> {
    let total_start_time = Instant::now();
    info!(action = "start", component = "site_check", variant = variant.name(), prober = prober.name(), input = ?args.input, "Starting site check");

    let mut sites = sites::load_sites(&args.input)?;
    sites::apply_overrides(&mut sites, &args.overrides)?;
    if let Some(limit) = args.limit {
        sites.truncate(limit);
    }
    args.order
        .unwrap_or_else(|| variant.default_order())
        .apply(&mut sites);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| variant.default_output());
    let mut writer = SurvivorWriter::create(&output)?;

    let mut summary = check_sites(prober, &sites, &mut writer)?;
    summary.elapsed = total_start_time.elapsed();

    info!(
        action = "complete",
        component = "site_check",
        prober = prober.name(),
        probed = summary.probed,
        survivors = summary.survivors,
        failed = summary.failed(),
        output = ?output,
        duration_ms = summary.elapsed.as_millis(),
        "Site check completed"
    );
    for (kind, count) in &summary.failures {
        info!(action = "failures", component = "site_check", kind = %kind, count, "Failure breakdown");
    }

    Ok(summary)
}

/// Probes each site in turn and records survivors as soon as they are found.
pub fn check_sites<P, W>(
    prober: &P,
    sites: &[String],
    writer: &mut SurvivorWriter<W>,
) -> Result<RunSummary>
where
    P: Prober + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();

    for site in sites {
        summary.probed += 1;
        match prober.probe(site) {
            Ok(()) => {
                writer
                    .record(site)
                    .with_context(|| format!("Failed to write survivor {:?}", site))?;
                summary.survivors += 1;
                debug!(action = "alive", component = "site_check", site = %site, "Site is alive");
            }
            Err(failure) => {
                summary.record_failure(failure.kind());
                debug!(action = "dead", component = "site_check", site = %site, kind = %failure.kind(), error = %failure, "Site is not reachable");
            }
        }
    }

    Ok(summary)
}

/// Survivor count on the first line, wall-clock seconds on the second.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "{}\n--- {} seconds ---",
        summary.survivors,
        summary.elapsed.as_secs_f64()
    )
}

pub fn print_summary(summary: &RunSummary) {
    println!("{}", format_summary(summary));
}
