use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::sites::SiteOverride;

#[derive(Parser, Debug)]
#[command(
    name = "sitecheck",
    about = "Check which hosts in a site list are still alive",
    version,
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Keep sites whose hostname has NS records
    Dns(CheckArgs),
    /// Keep sites that answer an HTTP GET with any response
    Http(CheckArgs),
}

impl Command {
    pub fn variant(&self) -> Variant {
        match self {
            Command::Dns(_) => Variant::Dns,
            Command::Http(_) => Variant::Http,
        }
    }

    pub fn check_args(&self) -> &CheckArgs {
        match self {
            Command::Dns(args) | Command::Http(args) => args,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Site list, one hostname or URL per line
    #[arg(short, long, default_value = "canondeduped.txt")]
    pub input: PathBuf,

    /// File to write surviving sites to (truncated on every run)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-site probe timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<f64>,

    /// Only probe the first N sites of the list
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Order in which sites are probed
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Replace the site at INDEX before probing (repeatable)
    #[arg(long = "override", value_name = "INDEX=HOST")]
    pub overrides: Vec<SiteOverride>,
}

impl CheckArgs {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            timeout: None,
            limit: None,
            order: None,
            overrides: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Dns,
    Http,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Dns => "dns",
            Variant::Http => "http",
        }
    }

    pub fn default_output(self) -> PathBuf {
        match self {
            Variant::Dns => PathBuf::from("okstatus2.txt"),
            Variant::Http => PathBuf::from("okstatus3.txt"),
        }
    }

    pub fn default_timeout(self) -> Duration {
        match self {
            Variant::Dns => Duration::from_secs(5),
            Variant::Http => Duration::from_secs(1),
        }
    }

    /// HTTP checks walk the list from the bottom up.
    pub fn default_order(self) -> Order {
        match self {
            Variant::Dns => Order::Forward,
            Variant::Http => Order::Reverse,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Probe in file order
    Forward,
    /// Probe from the last line to the first
    Reverse,
}

impl Order {
    pub fn apply(self, sites: &mut [String]) {
        if self == Order::Reverse {
            sites.reverse();
        }
    }
}
