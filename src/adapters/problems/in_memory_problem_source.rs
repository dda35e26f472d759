//! In-memory problem source for tests and embedding.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::analysis::DecisionProblem;
use crate::ports::{ProblemSource, ProblemSourceError};

/// Problem source backed by a map keyed by problem name
#[derive(Debug, Default)]
pub struct InMemoryProblemSource {
    problems: RwLock<BTreeMap<String, DecisionProblem>>,
}

impl InMemoryProblemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with problems
    pub fn with_problems(problems: impl IntoIterator<Item = DecisionProblem>) -> Self {
        let source = Self::new();
        for problem in problems {
            source.insert(problem);
        }
        source
    }

    /// Adds or replaces a problem under its own name
    pub fn insert(&self, problem: DecisionProblem) {
        let mut problems = self.problems.write().unwrap_or_else(|e| e.into_inner());
        problems.insert(problem.name.clone(), problem);
    }

    pub fn len(&self) -> usize {
        self.problems.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProblemSource for InMemoryProblemSource {
    fn load(&self, name: &str) -> Result<DecisionProblem, ProblemSourceError> {
        let problems = self
            .problems
            .read()
            .map_err(|e| ProblemSourceError::IoError(e.to_string()))?;

        problems
            .get(name)
            .cloned()
            .ok_or_else(|| ProblemSourceError::NotFound(name.to_string()))
    }

    fn list(&self) -> Result<Vec<String>, ProblemSourceError> {
        let problems = self
            .problems
            .read()
            .map_err(|e| ProblemSourceError::IoError(e.to_string()))?;

        Ok(problems.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Orientation;

    fn problem(name: &str) -> DecisionProblem {
        DecisionProblem {
            name: name.to_string(),
            orientation: Orientation::Gain,
            alternatives: vec!["A".into()],
            states: vec!["S".into()],
            payoffs: vec![vec![1.0]],
            probabilities: None,
            hurwicz_alpha: None,
        }
    }

    #[test]
    fn load_returns_inserted_problem() {
        let source = InMemoryProblemSource::with_problems([problem("alpha")]);
        assert_eq!(source.load("alpha").unwrap().name, "alpha");
    }

    #[test]
    fn load_unknown_is_not_found() {
        let source = InMemoryProblemSource::new();
        assert!(source.is_empty());
        assert!(matches!(
            source.load("ghost"),
            Err(ProblemSourceError::NotFound(name)) if name == "ghost"
        ));
    }

    #[test]
    fn insert_replaces_same_name() {
        let source = InMemoryProblemSource::new();
        source.insert(problem("beta"));
        let mut updated = problem("beta");
        updated.payoffs = vec![vec![5.0]];
        source.insert(updated);

        assert_eq!(source.len(), 1);
        assert_eq!(source.load("beta").unwrap().payoffs, vec![vec![5.0]]);
    }

    #[test]
    fn list_is_sorted() {
        let source = InMemoryProblemSource::with_problems([problem("zeta"), problem("eta")]);
        assert_eq!(source.list().unwrap(), vec!["eta", "zeta"]);
    }
}
