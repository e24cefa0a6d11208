//! Loader for the word2vec/GloVe whitespace text format.
//!
//! Each line is `token v1 v2 .. vD`. An optional first line of exactly two
//! integers (`vocab_count dimension`, as word2vec writes) is treated as a
//! header and skipped; without a header the dimension is inferred from the
//! first data row. Every malformed line is a typed error carrying its line
//! number, never a panic.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{EmbeddingTable, TableError};

/// Loads an embedding table from a text-format file.
///
/// # Errors
/// Returns [`TableError::Io`] if the file cannot be read, or any parse
/// error described on [`parse_text`].
pub fn load_text(path: impl AsRef<Path>) -> Result<EmbeddingTable, TableError> {
    let file = File::open(path)?;
    parse_text(BufReader::new(file))
}

/// Parses text-format embeddings from a reader.
///
/// # Errors
/// Returns [`TableError::Parse`] for a malformed line (missing components,
/// unparseable or non-finite values, or a row whose length disagrees with
/// the established dimension) and [`TableError::EmptyTable`] if no vectors
/// were read.
pub fn parse_text<R: BufRead>(reader: R) -> Result<EmbeddingTable, TableError> {
    let mut table: Option<EmbeddingTable> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        // word2vec header: two integers before any data row.
        if table.is_none() && fields.len() == 2 {
            if let (Ok(_vocab), Ok(dim)) =
                (fields[0].parse::<usize>(), fields[1].parse::<usize>())
            {
                if dim == 0 {
                    return Err(TableError::Parse {
                        line: line_no,
                        reason: "header declares zero dimension".to_string(),
                    });
                }
                table = Some(EmbeddingTable::new(dim));
                continue;
            }
        }

        if fields.len() < 2 {
            return Err(TableError::Parse {
                line: line_no,
                reason: "expected a token followed by vector components".to_string(),
            });
        }

        let token = fields[0];
        let mut vector = Vec::with_capacity(fields.len() - 1);
        for raw in &fields[1..] {
            let value: f32 = raw.parse().map_err(|_| TableError::Parse {
                line: line_no,
                reason: format!("invalid vector component '{raw}'"),
            })?;
            if !value.is_finite() {
                return Err(TableError::Parse {
                    line: line_no,
                    reason: format!("non-finite vector component '{raw}'"),
                });
            }
            vector.push(value);
        }

        let table = table.get_or_insert_with(|| EmbeddingTable::new(vector.len()));
        match table.insert(token, vector) {
            Ok(()) => {}
            Err(TableError::DimensionMismatch { expected, actual }) => {
                return Err(TableError::Parse {
                    line: line_no,
                    reason: format!("expected {expected} components, found {actual}"),
                });
            }
            Err(err) => return Err(err),
        }
    }

    match table {
        Some(table) if !table.is_empty() => Ok(table),
        _ => Err(TableError::EmptyTable),
    }
}
