use anyhow::{Context, Result};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::Resolver;
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::host::extract_hostname;
use crate::probe::{ProbeFailure, Prober};

/// Treats a site as alive when its hostname has at least one NS record.
pub struct DnsProber {
    resolver: Resolver,
}

impl DnsProber {
    /// Uses the nameservers from the system configuration (`/etc/resolv.conf`
    /// on Unix).
    pub fn from_system_conf(timeout: Duration) -> Result<Self> {
        let (config, opts) =
            read_system_conf().context("Failed to read system resolver configuration")?;
        Self::new(config, opts, timeout)
    }

    pub fn new(config: ResolverConfig, mut opts: ResolverOpts, timeout: Duration) -> Result<Self> {
        opts.timeout = timeout;
        // Counts retries on top of the first query.
        opts.attempts = 0;

        info!(
            action = "configure",
            component = "dns_prober",
            nameservers = config.name_servers().len(),
            timeout_ms = timeout.as_millis(),
            "Building DNS resolver"
        );
        let resolver = Resolver::new(config, opts).context("Failed to build DNS resolver")?;
        Ok(DnsProber { resolver })
    }
}

impl Prober for DnsProber {
    fn name(&self) -> &'static str {
        "dns"
    }

    fn probe(&self, site: &str) -> Result<(), ProbeFailure> {
        let hostname = extract_hostname(site)
            .ok_or_else(|| ProbeFailure::Malformed(format!("{:?} has no hostname", site)))?;

        let lookup = self
            .resolver
            .lookup(hostname.as_str(), RecordType::NS)
            .map_err(|e| classify(&hostname, e))?;

        if lookup.records().is_empty() {
            return Err(ProbeFailure::NoAnswer(format!("{}: empty NS answer", hostname)));
        }

        debug!(action = "answer", component = "dns_prober", hostname = %hostname, record_count = lookup.records().len(), "NS lookup answered");
        Ok(())
    }
}

fn classify(hostname: &str, err: ResolveError) -> ProbeFailure {
    let message = format!("{}: {}", hostname, err);
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::ServFail | ResponseCode::Refused => ProbeFailure::Refused(message),
            _ => ProbeFailure::NoAnswer(message),
        },
        ResolveErrorKind::Timeout => ProbeFailure::Timeout(message),
        ResolveErrorKind::NoConnections => ProbeFailure::Refused(message),
        ResolveErrorKind::Io(e) if e.kind() == io::ErrorKind::TimedOut => {
            ProbeFailure::Timeout(message)
        }
        _ => ProbeFailure::Other(message),
    }
}
