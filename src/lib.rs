pub mod args;
pub mod dns;
pub mod host;
pub mod http;
pub mod probe;
pub mod runner;
pub mod sites;
pub mod stats;
#[cfg(test)]
mod test_support;
pub mod utils;
pub mod writer;

pub use args::{Args, CheckArgs, Command, Order, Variant};
pub use probe::{FailureKind, ProbeFailure, Prober};
pub use runner::{format_summary, print_summary, run_check};
pub use stats::RunSummary;
