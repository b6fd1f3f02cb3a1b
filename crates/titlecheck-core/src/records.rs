//! Utilities for the records output format
//!
//! Every record is one line starting with a type letter: `H` for a header,
//! `M` for a ranked match, `P` for a duplicate pair, `W` for a warning.

/// Version tag carried in every `H` line
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes so a value can sit inside a quoted field
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a free-text value, flattening newlines
pub fn quoted(s: &str) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!("\"{}\"", escape_quotes(&flat))
}

/// Start a header line: `H titlecheck=1 records=1 <mode>`
pub fn header(mode: &str) -> String {
    format!("H titlecheck=1 records={} mode={}", RECORDS_VERSION, mode)
}
