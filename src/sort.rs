use itertools::Itertools;
use log::info;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{Error, Result};

/// Write buffer size in bytes
const BUFFER_SIZE_IN_BYTES: usize = 1024 * 1024 * 8; // 8 MiB
/// Read buffer size in bytes when checking order
const READ_BUFFER_SIZE_IN_BYTES: usize = 1024 * 1024; // 1 MiB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortReport {
    pub records: usize,
    pub bytes: u64,
}

/// Split a newline delimited buffer into records.
///
/// A trailing newline terminates the last record rather than starting an
/// empty one.
pub fn split_records(data: &[u8]) -> Vec<&[u8]> {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    if data.is_empty() {
        return Vec::new();
    }
    data.split(|b| *b == b'\n').collect()
}

/// Byte-wise ascending sort.
pub fn sort_records(records: &mut [&[u8]]) {
    records.sort_unstable();
}

/// Index of the first record that is smaller than its predecessor.
pub fn first_unsorted<I>(records: I) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    records
        .into_iter()
        .tuple_windows()
        .position(|(a, b)| a > b)
        .map(|i| i + 1)
}

/// Sort the lines of `input` into `output`, then delete `input`.
///
/// The whole file is held in memory while sorting.
pub fn sort_file(input: &Path, output: &Path) -> Result<SortReport> {
    info!("Reading and sorting file: {}", input.display());

    let data = std::fs::read(input).map_err(|e| Error::io(input, e))?;
    let mut records = split_records(&data);
    sort_records(&mut records);

    let mut bytes = 0u64;
    {
        let file = File::create(output).map_err(|e| Error::io(output, e))?;
        let mut bw = BufWriter::with_capacity(BUFFER_SIZE_IN_BYTES, file);
        for record in records.iter() {
            bw.write_all(record)
                .and_then(|_| bw.write_all(b"\n"))
                .map_err(|e| Error::io(output, e))?;
            bytes += record.len() as u64 + 1;
        }
        bw.flush().map_err(|e| Error::io(output, e))?;
    }

    std::fs::remove_file(input).map_err(|e| Error::io(input, e))?;

    info!("Done. Sorted file saved to: {}", output.display());
    info!("File size: {:.2} MB", bytes as f64 / (1024 * 1024) as f64);
    Ok(SortReport {
        records: records.len(),
        bytes,
    })
}

/// Check that the lines of `path` are in non-decreasing order.
///
/// Lines are streamed, only two of them are held at a time.
pub fn verify_sorted(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let lines = BufReader::with_capacity(READ_BUFFER_SIZE_IN_BYTES, file).split(b'\n');
    let unsorted = itertools::process_results(lines, |lines| first_unsorted(lines))
        .map_err(|e| Error::io(path, e))?;
    match unsorted {
        Some(index) => Err(Error::NotSorted {
            path: path.to_path_buf(),
            line: index + 1,
        }),
        None => Ok(()),
    }
}
