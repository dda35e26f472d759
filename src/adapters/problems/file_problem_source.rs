//! File-based Problem Source Adapter
//!
//! Loads decision problems from YAML or JSON files in a directory.
//! A problem's name is its file stem unless the file sets one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::analysis::DecisionProblem;
use crate::ports::{ProblemSource, ProblemSourceError};

const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Directory of problem files
#[derive(Debug, Clone)]
pub struct FileProblemSource {
    base_path: PathBuf,
}

impl FileProblemSource {
    /// Create a new file source rooted at a directory
    ///
    /// # Example
    /// ```ignore
    /// let source = FileProblemSource::new("./problems");
    /// let problem = source.load("factory")?;
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory problems are read from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Find the file for a problem name
    ///
    /// A name with a known extension is used as-is; a bare name is tried
    /// with each extension in turn.
    fn resolve(&self, name: &str) -> Result<PathBuf, ProblemSourceError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(ProblemSourceError::NotFound(name.to_string()));
        }

        let direct = self.base_path.join(name);
        if Self::extension_of(&direct).is_some() {
            return if direct.is_file() {
                Ok(direct)
            } else {
                Err(ProblemSourceError::NotFound(name.to_string()))
            };
        }

        EXTENSIONS
            .iter()
            .map(|ext| self.base_path.join(format!("{}.{}", name, ext)))
            .find(|path| path.is_file())
            .ok_or_else(|| ProblemSourceError::NotFound(name.to_string()))
    }

    fn extension_of(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        EXTENSIONS.iter().copied().find(|known| *known == ext)
    }

    fn parse(path: &Path, contents: &str) -> Result<DecisionProblem, ProblemSourceError> {
        let malformed = |reason: String| ProblemSourceError::Malformed {
            name: path.display().to_string(),
            reason,
        };

        match Self::extension_of(path) {
            Some("json") => serde_json::from_str(contents).map_err(|e| malformed(e.to_string())),
            Some(_) => serde_yaml::from_str(contents).map_err(|e| malformed(e.to_string())),
            None => Err(ProblemSourceError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

impl ProblemSource for FileProblemSource {
    fn load(&self, name: &str) -> Result<DecisionProblem, ProblemSourceError> {
        let path = self.resolve(name)?;

        let contents =
            fs::read_to_string(&path).map_err(|e| ProblemSourceError::IoError(e.to_string()))?;

        let mut problem = Self::parse(&path, &contents)?;

        if problem.name.is_empty() {
            problem.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(name)
                .to_string();
        }

        tracing::debug!(
            path = %path.display(),
            problem = %problem.name,
            "Loaded decision problem"
        );

        Ok(problem)
    }

    fn list(&self) -> Result<Vec<String>, ProblemSourceError> {
        let entries =
            fs::read_dir(&self.base_path).map_err(|e| ProblemSourceError::IoError(e.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| ProblemSourceError::IoError(e.to_string()))?
                .path();

            if path.is_file() && Self::extension_of(&path).is_some() {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}
