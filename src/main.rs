use anyhow::Result;
use clap::Parser;
use tracing::error;

use sitecheck::{print_summary, run_check, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    utils::validate_args(&args)?;

    match run_check(args.command.variant(), args.command.check_args()) {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            error!(action = "fail", component = "main", error = %format!("{:#}", e), "Site check failed");
            std::process::exit(1);
        }
    }
}
