//! Helpers for reading and picking apart puzzle input

use crate::error::InputError;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::trace;

/// Read a whole input file, trimming leading and trailing whitespace
pub fn read_input(path: impl AsRef<Path>) -> Result<String, InputError> {
    read_input_untrimmed(path).map(|contents| contents.trim().to_string())
}

/// Read a whole input file as-is, so line numbers match the file on disk
pub fn read_input_untrimmed(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    trace!(path = %path.display(), bytes = contents.len(), "read input file");
    Ok(contents)
}

/// Parse a decimal integer, ignoring surrounding whitespace
pub fn parse_int(s: &str) -> Result<i64, InputError> {
    s.trim().parse().map_err(|source| InputError::Int {
        input: s.to_string(),
        source,
    })
}

/// Parse a float, ignoring surrounding whitespace
pub fn parse_float(s: &str) -> Result<f64, InputError> {
    s.trim().parse().map_err(|source| InputError::Float {
        input: s.to_string(),
        source,
    })
}

/// Parse `1`/`0` or `true`/`false` (any case), ignoring surrounding whitespace
pub fn parse_bool(s: &str) -> Result<bool, InputError> {
    match s.trim() {
        "1" => Ok(true),
        "0" => Ok(false),
        t if t.eq_ignore_ascii_case("true") => Ok(true),
        t if t.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(InputError::Bool(s.to_string())),
    }
}

/// Collect the capture groups of every match of `re` in `haystack`.
///
/// Each inner vec holds groups 1..n of one match; the whole-match group is
/// left out. A group that did not take part in the match shows up as `""`.
///
/// ```
/// use aoc_utils::input::capture_groups;
/// use regex::Regex;
///
/// let re = Regex::new(r"(\d+) (b|r|g)").unwrap();
/// let groups = capture_groups(&re, "3 blue, 4 red; 1 green");
/// assert_eq!(groups, vec![vec!["3", "b"], vec!["4", "r"], vec!["1", "g"]]);
/// ```
pub fn capture_groups<'h>(re: &Regex, haystack: &'h str) -> Vec<Vec<&'h str>> {
    re.captures_iter(haystack)
        .map(|caps| {
            caps.iter()
                .skip(1)
                .map(|group| group.map_or("", |m| m.as_str()))
                .collect()
        })
        .collect()
}
