//! Problem source adapters.
//!
//! - `FileProblemSource` - YAML/JSON files in a directory
//! - `InMemoryProblemSource` - map-backed, for tests and embedding

mod file_problem_source;
mod in_memory_problem_source;

pub use file_problem_source::FileProblemSource;
pub use in_memory_problem_source::InMemoryProblemSource;
