//! Random fixed-length line fixtures: generation, sorting and lookup.

mod error;
pub mod fixture;
pub mod generate;
pub mod search;
pub mod size;
pub mod sort;

pub use error::{Error, Result};
pub use fixture::{run, Request, RunReport};
pub use generate::{generate_file, GenerateReport};
pub use search::Searcher;
pub use size::parse_size;
pub use sort::{sort_file, verify_sorted, SortReport};
