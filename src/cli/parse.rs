use casebook_core::config::validate_domain_name;
use casebook_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse and validate a domain name
pub fn parse_domain_name(s: &str) -> std::result::Result<String, String> {
    validate_domain_name(s)
        .map(|()| s.to_string())
        .map_err(|e| e.to_string())
}

/// Parse a count that must be at least 1
pub fn parse_positive(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
