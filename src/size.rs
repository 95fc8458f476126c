use crate::error::{Error, Result};

const KIB: u64 = 1024;

/// Unit suffixes, longest first so that "KB" wins over "B".
const UNITS: [(&str, u64); 9] = [
    ("KB", KIB),
    ("MB", KIB * KIB),
    ("GB", KIB * KIB * KIB),
    ("TB", KIB * KIB * KIB * KIB),
    ("B", 1),
    ("K", KIB),
    ("M", KIB * KIB),
    ("G", KIB * KIB * KIB),
    ("T", KIB * KIB * KIB * KIB),
];

/// Parse a human readable size such as `10GB`, `512k` or `1.5M` into bytes.
///
/// Fractional magnitudes are truncated after applying the multiplier.
/// A string without a unit suffix must be a plain integer. The sign is
/// kept, so `-5` parses and is left for the caller to reject.
pub fn parse_size(size: &str) -> Result<i64> {
    let size = size.trim().to_uppercase();
    let invalid = || Error::InvalidSizeFormat(size.clone());

    for (unit, multiplier) in UNITS.iter() {
        if let Some(number) = size.strip_suffix(unit) {
            let magnitude: f64 = lexical::parse(number.trim()).map_err(|_| invalid())?;
            let bytes = magnitude * *multiplier as f64;
            // i64::MAX as f64 rounds up to 2^63, which is already out of range
            if !bytes.is_finite() || bytes.abs() >= i64::MAX as f64 {
                return Err(invalid());
            }
            return Ok(bytes as i64);
        }
    }

    lexical::parse(&size).map_err(|_| invalid())
}
