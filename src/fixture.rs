use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::generate::generate_file;
use crate::size::parse_size;
use crate::sort::sort_file;

/// Sizes as typed by the user; the raw strings end up in the file names.
#[derive(Debug, Clone)]
pub struct Request {
    pub total_size: String,
    pub line_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub intermediate: PathBuf,
    pub output: PathBuf,
    /// Generation was skipped because a file of the right size was there
    pub reused: bool,
    pub records: usize,
}

impl Request {
    pub fn new(total_size: impl Into<String>, line_size: impl Into<String>) -> Self {
        Request {
            total_size: total_size.into(),
            line_size: line_size.into(),
        }
    }

    /// `test_<total>_<line>.txt`
    pub fn output_name(&self) -> String {
        format!("test_{}_{}.txt", self.total_size, self.line_size)
    }

    /// `test_<total>_<line>.txt.tmp`
    pub fn intermediate_name(&self) -> String {
        format!("{}.tmp", self.output_name())
    }
}

/// Reject non-positive sizes and lines longer than the whole file.
pub fn validate(total: i64, line: i64) -> Result<(u64, u64)> {
    if total < 1 || line < 1 || line > total {
        return Err(Error::InvalidArguments { total, line });
    }
    Ok((total as u64, line as u64))
}

/// True when `path` exists and holds exactly `size` bytes.
fn has_size(path: &Path, size: u64) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.len() == size,
        Err(_) => false,
    }
}

/// Generate (unless already present) and sort the fixture inside `dir`.
pub fn run<R>(dir: &Path, request: &Request, rng: &mut R) -> Result<RunReport>
where
    R: Rng + ?Sized,
{
    let (total, line) = validate(
        parse_size(&request.total_size)?,
        parse_size(&request.line_size)?,
    )?;

    let intermediate = dir.join(request.intermediate_name());
    let output = dir.join(request.output_name());

    // only the size is compared, content is trusted
    let reused = has_size(&intermediate, total);
    if reused {
        info!("Reusing existing file: {}", intermediate.display());
    } else {
        generate_file(&intermediate, total, line, rng)?;
    }

    let sorted = sort_file(&intermediate, &output)?;
    Ok(RunReport {
        intermediate,
        output,
        reused,
        records: sorted.records,
    })
}
