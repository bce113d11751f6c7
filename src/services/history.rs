use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::interview::Report;

/// Persists finished reports. Write-only from the flow's point of view;
/// how a shell reads history back for its dashboard is its own concern.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn save(&self, report: &Report) -> Result<()>;
}

/// Keeps reports in memory. Suitable for local shells and tests.
#[derive(Debug, Clone)]
pub struct InMemoryHistoryStore {
    reports: Arc<RwLock<Vec<Report>>>,
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn reports(&self) -> Vec<Report> {
        self.reports.read().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.read().is_empty()
    }
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn save(&self, report: &Report) -> Result<()> {
        self.reports.write().push(report.clone());
        Ok(())
    }
}
