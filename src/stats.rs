use std::collections::BTreeMap;
use std::time::Duration;

use crate::probe::FailureKind;

#[derive(Debug, Default)]
pub struct RunSummary {
    pub probed: usize,
    pub survivors: usize,
    pub failures: BTreeMap<FailureKind, usize>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn record_failure(&mut self, kind: FailureKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }
}
