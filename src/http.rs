use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::host::site_url;
use crate::probe::{ProbeFailure, Prober};

/// Treats a site as alive when a GET gets any response back, whatever the
/// status code.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self> {
        info!(
            action = "configure",
            component = "http_prober",
            timeout_ms = timeout.as_millis(),
            "Building HTTP client"
        );
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        HttpProber { client }
    }
}

impl Prober for HttpProber {
    fn name(&self) -> &'static str {
        "http"
    }

    fn probe(&self, site: &str) -> Result<(), ProbeFailure> {
        let url = site_url(site)
            .ok_or_else(|| ProbeFailure::Malformed(format!("{:?} is not a valid URL", site)))?;

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| classify(site, e))?;

        debug!(action = "response", component = "http_prober", site = site, status = response.status().as_u16(), "Received HTTP response");
        Ok(())
    }
}

fn classify(site: &str, err: reqwest::Error) -> ProbeFailure {
    let message = format!("{}: {}", site, err);
    if err.is_timeout() {
        ProbeFailure::Timeout(message)
    } else if err.is_connect() {
        ProbeFailure::Refused(message)
    } else if err.is_builder() {
        ProbeFailure::Malformed(message)
    } else {
        ProbeFailure::Other(message)
    }
}
