use crate::core::normalize::normalize;
use crate::domain::model::Citation;
use crate::utils::error::{Result, RsaError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<chapter>[0-9]+(?:-[A-Za-z]+)?)(?::(?P<section>[A-Za-z0-9-]+))?$")
        .expect("valid citation regex")
});

const RSA_PREFIX: &str = "rsa";

/// Parses already-normalized text such as `rsa225-a:24` or `540`.
pub fn parse_citation(normalized: &str) -> Result<Citation> {
    let body = normalized.strip_prefix(RSA_PREFIX).unwrap_or(normalized);

    let caps = CITATION_RE.captures(body).ok_or(RsaError::ParseError)?;

    Ok(Citation {
        chapter: caps["chapter"].to_lowercase(),
        section: caps.name("section").map(|s| s.as_str().to_lowercase()),
    })
}

impl FromStr for Citation {
    type Err = RsaError;

    /// Normalizes raw user input before parsing.
    fn from_str(raw: &str) -> Result<Self> {
        parse_citation(&normalize(raw))
    }
}
