//! The run loop: header handling, per-row isolation, sink writing.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{EngineError, Result, TransformError};
use crate::quote;
use crate::transform::{self, ColumnRule, RowState};

/// Field separator for both input and output rows.
pub const SEPARATOR: char = ',';

/// Counts reported after a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows written to the output sink (header excluded).
    pub rows: usize,
    /// Rows dropped after a row-local transform failure.
    pub skipped: usize,
}

/// Rewrites `input` onto `output`, reporting skipped rows on `errors`.
///
/// The first line is the header: it is echoed verbatim and its names
/// choose one transform per column. Every later line is rewritten
/// column by column; a row whose transform fails is dropped from
/// `output` and its failure message becomes one line on `errors`, in
/// the same relative order the bad rows arrived. Both sinks are flushed
/// before returning.
///
/// # Errors
///
/// Fails with [`EngineError::MissingHeader`] when the input produces no
/// line at all, and with [`EngineError::Io`] when the source or either
/// sink fails.
///
/// # Examples
///
/// ```
/// use rowfix_core::engine::run;
///
/// let input = "A,NameB\n1,\"x,y\"\n";
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let summary = run(input.as_bytes(), &mut out, &mut err).unwrap();
/// assert_eq!(out, b"A,NameB\n1,\"X,Y\"\n");
/// assert!(err.is_empty());
/// assert_eq!(summary.rows, 1);
/// ```
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> Result<RunSummary> {
    let mut lines = input.lines();
    let header_line = lines.next().ok_or(EngineError::MissingHeader)??;
    writeln!(output, "{header_line}")?;

    let rules: Vec<ColumnRule> = header_line
        .split(SEPARATOR)
        .map(ColumnRule::for_header)
        .collect();

    let mut summary = RunSummary::default();
    for (ordinal, line) in lines.enumerate() {
        let line = line?;
        match rewrite_row(&line, &rules) {
            Ok(row) => {
                writeln!(output, "{row}")?;
                summary.rows += 1;
            }
            Err(failure) => {
                debug!(row = ordinal + 1, %failure, "row skipped");
                writeln!(errors, "{failure}")?;
                summary.skipped += 1;
            }
        }
    }

    output.flush()?;
    errors.flush()?;
    Ok(summary)
}

/// Rewrites one data line, or reports the first field failure.
///
/// Fields beyond the header width ride along unchanged at the end of
/// the row, placeholders included; fields missing from a short row are
/// transformed as the empty string.
fn rewrite_row(line: &str, rules: &[ColumnRule]) -> std::result::Result<String, TransformError> {
    let (masked, store) = quote::mask(line);
    let mut state = RowState {
        quoted: store,
        ..RowState::default()
    };
    let fields: Vec<&str> = masked.split(SEPARATOR).collect();

    let mut rewritten = Vec::with_capacity(fields.len().max(rules.len()));
    for (index, rule) in rules.iter().enumerate() {
        let field = fields.get(index).copied().unwrap_or("");
        rewritten.push(transform::apply(*rule, field, &mut state)?);
    }
    for surplus in fields.iter().skip(rules.len()) {
        rewritten.push((*surplus).to_string());
    }

    Ok(rewritten.join(&SEPARATOR.to_string()))
}
