//! Trace loading - turns text into a sequence of page accesses.
//!
//! A trace is a list of integer page identifiers separated by any ASCII
//! whitespace (spaces, tabs, newlines), read in file order:
//! ```text
//! 1 2 3
//! 1 2
//! 4
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::common::{Error, PageId, Result};

/// Parse every whitespace-separated token of `reader` as a page identifier.
///
/// # Errors
/// - `Error::MalformedToken` for the first token that is not an integer.
///   Its `position` is the 1-based token index.
/// - `Error::Io` if reading fails.
pub fn parse_trace<R: BufRead>(reader: R) -> Result<Vec<PageId>> {
    let mut trace = Vec::new();

    for line in reader.split(b'\n') {
        let line = line?;
        for token in line
            .split(|b| b.is_ascii_whitespace())
            .filter(|t| !t.is_empty())
        {
            let page_id = std::str::from_utf8(token)
                .ok()
                .and_then(|t| t.parse::<PageId>().ok())
                .ok_or_else(|| Error::MalformedToken {
                    token: String::from_utf8_lossy(token).into_owned(),
                    position: trace.len() + 1,
                })?;
            trace.push(page_id);
        }
    }

    Ok(trace)
}

/// Parse a trace held in memory.
///
/// # Example
/// ```
/// use agingsim::trace::parse_trace_str;
/// use agingsim::PageId;
///
/// let trace = parse_trace_str("1 2\n 3\t1\n").unwrap();
/// assert_eq!(trace, vec![PageId::new(1), PageId::new(2), PageId::new(3), PageId::new(1)]);
/// ```
pub fn parse_trace_str(text: &str) -> Result<Vec<PageId>> {
    parse_trace(text.as_bytes())
}

/// Read and parse the trace file at `path`.
///
/// # Errors
/// - `Error::UnreadableTrace` if the file cannot be opened.
/// - Any error from [`parse_trace`].
pub fn read_trace_file<P: AsRef<Path>>(path: P) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::UnreadableTrace {
        path: path.to_path_buf(),
        source,
    })?;

    let trace = parse_trace(BufReader::new(file))?;
    debug!("loaded {} accesses from {}", trace.len(), path.display());
    Ok(trace)
}
