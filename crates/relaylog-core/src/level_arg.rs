//! Boundary conversion from loosely-typed level input to `Severity`
//!
//! Internal code only ever sees `Severity`. Names and numeric ranks coming
//! from callers, configuration or the command line are resolved here once.

use crate::errors::{RelayLogError, Result};
use relaylog_core_types::Severity;

/// A level as supplied by a caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelArg {
    Severity(Severity),
    Name(String),
    Rank(i64),
}

impl LevelArg {
    /// Resolve to a severity from the level table
    ///
    /// Numeric strings (`"5"`, `" 5"`, `"+5"`, `"5.0"`, `"1e0"`) are treated
    /// as ranks, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when the name or rank is not in the table.
    pub fn resolve(&self) -> Result<Severity> {
        match self {
            LevelArg::Severity(sev) => Ok(*sev),
            LevelArg::Rank(rank) => Severity::from_rank(*rank).ok_or_else(|| {
                RelayLogError::InvalidLevel {
                    level: rank.to_string(),
                }
                .into()
            }),
            LevelArg::Name(name) => match numeric_rank(name) {
                Some(rank) => Severity::from_rank(rank).ok_or_else(|| {
                    RelayLogError::InvalidLevel {
                        level: name.clone(),
                    }
                    .into()
                }),
                None => Ok(name.parse::<Severity>()?),
            },
        }
    }
}

/// Integer value of a decimal numeric string, `None` if it is not numeric
///
/// Accepts surrounding whitespace, an optional sign, a fraction and an
/// exponent. Hex, `inf` and `nan` are not numeric.
fn numeric_rank(text: &str) -> Option<i64> {
    let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return None;
        }
        pos += exp_digits;
    }
    if pos != bytes.len() {
        return None;
    }

    if let Ok(rank) = trimmed.parse::<i64>() {
        return Some(rank);
    }
    let value = trimmed.parse::<f64>().ok()?;
    // saturating cast; out-of-range values never match a rank
    Some(value.trunc() as i64)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

impl From<Severity> for LevelArg {
    fn from(sev: Severity) -> Self {
        LevelArg::Severity(sev)
    }
}

impl From<&str> for LevelArg {
    fn from(name: &str) -> Self {
        LevelArg::Name(name.to_string())
    }
}

impl From<String> for LevelArg {
    fn from(name: String) -> Self {
        LevelArg::Name(name)
    }
}

macro_rules! rank_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LevelArg {
                fn from(rank: $t) -> Self {
                    LevelArg::Rank(i64::from(rank))
                }
            }
        )*
    };
}

rank_from!(u8, u16, u32, i8, i16, i32, i64);
