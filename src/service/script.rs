//! Batch driver for the line protocol.
//!
//! ## Input Layout
//!
//! ```text
//! N Q
//! <N record lines:   id price "description">
//! <Q command lines:  LOOKUP / INSERT / DELETE / RANGE_PRICE / RANGE_PATTERN>
//! ```
//!
//! Blank lines are skipped. One [`Response`] is produced per query
//! command and handed to the sink as soon as it exists, so output written
//! before a fatal error survives it.
//!
//! ## Failure Handling
//!
//! A line that fails on its own (malformed text, bad price, a duplicate id
//! under the reject policy) is logged at `warn` and skipped. Missing lines
//! and I/O failures end the run.

use std::io::{self, BufRead};

use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::service::{QueryService, Response};
use crate::types::{parse_record_line, Command};

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Initial records loaded
    pub records: usize,

    /// Query commands answered
    pub queries: usize,

    /// Queries answered with a not-found or no-match message
    pub empty_results: usize,

    /// Record or command lines skipped after a per-line failure
    pub skipped: usize,
}

/// Run a batch script against `service`, passing each response to `emit`.
///
/// # Errors
///
/// [`CatalogError::UnexpectedEof`] when the input ends early, a header
/// parse failure, or any I/O error from the reader or from `emit`.
///
/// # Example
///
/// ```
/// use product_catalog::service::{run_script, QueryService};
///
/// let input = "2 2\n1 9.99 \"red shoe\"\n2 5.00 \"blue hat\"\nLOOKUP 2\nRANGE_PATTERN 1 2 \"hat\"\n";
/// let mut service = QueryService::new();
/// let mut lines = Vec::new();
/// let summary = run_script(input.as_bytes(), &mut service, |response| {
///     lines.push(response.to_string());
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(lines, vec!["5.00", "2"]);
/// assert_eq!(summary.queries, 2);
/// ```
pub fn run_script<R, F>(reader: R, service: &mut QueryService, mut emit: F) -> Result<ScriptSummary>
where
    R: BufRead,
    F: FnMut(&Response) -> io::Result<()>,
{
    let mut lines = reader.lines();
    let mut next_line = |expected: &str| -> Result<String> {
        for line in lines.by_ref() {
            let line = line?;
            if !line.trim().is_empty() {
                return Ok(line);
            }
        }
        Err(CatalogError::UnexpectedEof {
            expected: expected.to_string(),
        })
    };

    let header = next_line("header line \"N Q\"")?;
    let (record_count, command_count) = parse_header(&header)?;
    let mut summary = ScriptSummary::default();

    for _ in 0..record_count {
        let line = next_line("initial product record")?;
        let loaded = parse_record_line(&line)
            .and_then(|record| service.insert(record.id, record.price, record.description));

        match loaded {
            Ok(_) => summary.records += 1,
            Err(e) if e.is_line_error() => {
                warn!(line = %line, error = %e, "skipped record line");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    for _ in 0..command_count {
        let line = next_line("command line")?;
        let executed = Command::parse(&line).and_then(|command| {
            let is_query = command.is_query();
            service.execute(command).map(|response| (is_query, response))
        });

        match executed {
            Ok((is_query, response)) => {
                if is_query {
                    summary.queries += 1;
                }
                if let Some(response) = response {
                    if response.is_empty_result() {
                        summary.empty_results += 1;
                    }
                    emit(&response)?;
                }
            }
            Err(e) if e.is_line_error() => {
                warn!(line = %line, error = %e, "skipped command line");
                summary.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        records = summary.records,
        queries = summary.queries,
        empty_results = summary.empty_results,
        skipped = summary.skipped,
        catalog_size = service.len(),
        "batch complete"
    );
    Ok(summary)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let mut count = |name: &str| -> Result<usize> {
        let field = fields
            .next()
            .ok_or_else(|| CatalogError::parse(line, format!("missing {name}")))?;
        field
            .parse()
            .map_err(|e| CatalogError::parse(line, format!("bad {name} {field:?}: {e}")))
    };

    let records = count("record count")?;
    let commands = count("command count")?;
    Ok((records, commands))
}
