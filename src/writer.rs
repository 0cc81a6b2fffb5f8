use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Appends surviving sites to the output, one per line, flushing each one so
/// an interrupted run keeps what it found.
pub struct SurvivorWriter<W: Write> {
    inner: W,
}

impl SurvivorWriter<File> {
    /// Creates the output file, truncating anything from a previous run.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {:?}", path))?;
        info!(action = "create", component = "survivor_writer", file_path = ?path, "Opened output file");
        Ok(SurvivorWriter::new(file))
    }
}

impl<W: Write> SurvivorWriter<W> {
    pub fn new(inner: W) -> Self {
        SurvivorWriter { inner }
    }

    pub fn record(&mut self, site: &str) -> io::Result<()> {
        self.inner.write_all(format!("{}\n", site).as_bytes())?;
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
