use log::info;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::convert::TryFrom;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::{Error, Result};

/// Characters a generated line is made of
pub const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Write buffer size in bytes
const BUFFER_SIZE_IN_BYTES: usize = 1024 * 1024; // 1 MiB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    pub lines: u64,
    pub bytes: u64,
}

/// Number of `line_size` lines (plus newline) that fit into `total_size` bytes.
pub fn lines_count(total_size: u64, line_size: u64) -> u64 {
    total_size / line_size.saturating_add(1)
}

/// Write `count` lines of `line_size` random alphanumeric characters.
pub fn write_lines<W, R>(writer: &mut W, count: u64, line_size: usize, rng: &mut R) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    if count == 0 {
        return Ok(());
    }
    let uniform = Uniform::new(0, CHARSET.len());
    let mut line = vec![b'\n'; line_size + 1];
    for _ in 0..count {
        for byte in line[..line_size].iter_mut() {
            *byte = CHARSET[uniform.sample(rng)];
        }
        writer.write_all(&line)?;
    }
    Ok(())
}

/// Create (or truncate) `path` and fill it with `total_size / (line_size + 1)`
/// random lines.
pub fn generate_file<R>(path: &Path, total_size: u64, line_size: u64, rng: &mut R) -> Result<GenerateReport>
where
    R: Rng + ?Sized,
{
    let line_len = usize::try_from(line_size).map_err(|_| Error::InvalidArguments {
        total: total_size as i64,
        line: line_size as i64,
    })?;
    let lines = lines_count(total_size, line_size);

    info!("Generating file: {}", path.display());
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut bw = BufWriter::with_capacity(BUFFER_SIZE_IN_BYTES, file);
    write_lines(&mut bw, lines, line_len, rng).map_err(|e| Error::io(path, e))?;
    bw.flush().map_err(|e| Error::io(path, e))?;
    info!("Done. Generated file: {}", path.display());

    Ok(GenerateReport {
        lines,
        bytes: lines * line_size.saturating_add(1),
    })
}
