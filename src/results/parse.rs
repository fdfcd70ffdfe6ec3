//! TSV response decoding (verb)

use super::error::MalformedResultError;
use super::table::QueryResult;

/// Decode a TSV response into a [`QueryResult`]
///
/// The first line is the header; its field order is authoritative (the
/// server may return columns in a different order than they were requested).
/// Each label is produced by passing the header field through `label` -
/// identity keeps the server's display names, a lookup maps them back to raw
/// attribute names. Every data line must match the header's field count.
pub fn parse_result<F>(raw: &[u8], label: F) -> Result<QueryResult, MalformedResultError>
where
    F: Fn(&str) -> String,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .quoting(false)
        .flexible(false)
        .from_reader(raw);

    let columns: Vec<String> = reader.headers()?.iter().map(|field| label(field)).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(QueryResult::new(columns, rows))
}
