//! ListProblemsHandler - Query handler for the problems a source can load.

use std::sync::Arc;

use crate::ports::{ProblemSource, ProblemSourceError};

/// Query for available problem names.
#[derive(Debug, Clone, Default)]
pub struct ListProblemsQuery;

/// Handler for listing problems.
pub struct ListProblemsHandler {
    source: Arc<dyn ProblemSource>,
}

impl ListProblemsHandler {
    pub fn new(source: Arc<dyn ProblemSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self, _query: ListProblemsQuery) -> Result<Vec<String>, ProblemSourceError> {
        let names = self.source.list()?;
        tracing::debug!(count = names.len(), "Listed problems");
        Ok(names)
    }
}
