//! Lookup of the first line `>=` a term in a sorted line file.
//!
//! The file is never loaded as a whole: the search bisects byte offsets,
//! rewinds each probe to the start of its line and reads just that line.

use log::debug;
use std::fs::File;
use std::io::prelude::*;
use std::io::{self, BufReader, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Bytes scanned per step when rewinding to a line start
pub const CHUNK_SIZE: usize = 1024 * 1024; // 1 MiB
/// Read buffer size for a probed line
pub const BUFFER_LIMIT: usize = 1024 * 1024 * 10; // 10 MiB

pub struct Searcher {
    path: PathBuf,
    reader: BufReader<File>,
    chunk: Vec<u8>,
    size: u64,
}

impl Searcher {
    pub fn open(path: &Path) -> Result<Self> {
        Self::with_chunk_size(path, CHUNK_SIZE)
    }

    /// Like `open`, rewinding `chunk_size` bytes at a time.
    pub fn with_chunk_size(path: &Path, chunk_size: usize) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let size = file.metadata().map_err(|e| Error::io(path, e))?.len();
        Ok(Searcher {
            path: path.to_path_buf(),
            reader: BufReader::with_capacity(BUFFER_LIMIT, file),
            chunk: vec![0; chunk_size.max(1)],
            size,
        })
    }

    /// First line that compares `>=` `term`, without its newline.
    /// `None` if every line is smaller or the file is empty.
    pub fn find_line(&mut self, term: &[u8]) -> Result<Option<Vec<u8>>> {
        let path = self.path.clone();
        self.search(term).map_err(|e| Error::io(path, e))
    }

    fn search(&mut self, term: &[u8]) -> io::Result<Option<Vec<u8>>> {
        let (mut left, mut right) = (0u64, self.size);
        let mut result = None;
        while left < right {
            let mid = left + (right - left) / 2;
            let start = self.line_start(mid)?;
            let line = self.read_line_at(start)?;
            if line.as_slice() >= term {
                debug!("Found a candidate: {}", String::from_utf8_lossy(&line[..line.len().min(5)]));
                result = Some(line);
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        Ok(result)
    }

    /// Offset of the first byte of the line containing `pos`.
    fn line_start(&mut self, pos: u64) -> io::Result<u64> {
        let chunk_size = self.chunk.len() as u64;
        let file = self.reader.get_mut();
        let mut end = pos;
        while end > 0 {
            let start = end.saturating_sub(chunk_size);
            let buf = &mut self.chunk[..(end - start) as usize];
            file.seek(SeekFrom::Start(start))?;
            file.read_exact(buf)?;
            if let Some(i) = buf.iter().rposition(|b| *b == b'\n') {
                return Ok(start + i as u64 + 1);
            }
            end = start;
        }
        Ok(0)
    }

    fn read_line_at(&mut self, start: u64) -> io::Result<Vec<u8>> {
        // seeking a BufReader drops whatever it buffered
        self.reader.seek(SeekFrom::Start(start))?;
        let mut line = Vec::new();
        self.reader.read_until(b'\n', &mut line)?;
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        Ok(line)
    }
}

/// Shorten lines longer than 20 characters to `first10...last10`.
pub fn shorten(line: &str) -> String {
    let count = line.chars().count();
    if count <= 20 {
        return line.to_string();
    }
    let head: String = line.chars().take(10).collect();
    let tail: String = line.chars().skip(count - 10).collect();
    format!("{}...{}", head, tail)
}
