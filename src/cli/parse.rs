use titlecheck_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a non-negative similarity percentage
///
/// Values above 100 are allowed; they switch the similarity override off.
pub fn parse_percent(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("must be a non-negative percentage: {}", s));
    }
    Ok(value)
}

/// Parse a positive count
pub fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("not a positive integer: {}", s)),
    }
}
