//! Line-oriented star catalog.
//!
//! Every record is `right ascension, declination, magnitude`
//! (comma or whitespace separated). Blank lines and `#` comments are ignored;
//! the first record is considered a header and skipped
//! if none of its fields is a time, an angle or a number.
//!
//! The load is all-or-nothing: the first malformed record fails the whole catalog.

use std::{
    error::Error,
    fmt,
    io::{self, BufRead},
};

use log::debug;

use crate::{
    angle::{Angle, ClockTime},
    enum_trivial_from_impl,
    star::{split_fields, ParseStarError, Star},
};

const COMMENT_SIGN: char = '#';

#[derive(Debug)]
/// The catalog cannot be loaded
pub enum CatalogError {
    /// Reading failed
    Io(io::Error),
    /// The record at the (1-based) line is malformed
    Record {
        /// Line number
        line: usize,
        /// The reason
        source: ParseStarError,
    },
}

enum_trivial_from_impl!(io::Error => CatalogError:Io);

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot load catalog: ")?;
        match self {
            Self::Io(inner) => write!(f, "{inner}"),
            Self::Record { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(inner) => Some(inner),
            Self::Record { source, .. } => Some(source),
        }
    }
}

/// No field of the header holds a value, a malformed data record still has some
fn is_header(record: &str) -> bool {
    split_fields(record).iter().all(|field| {
        field.parse::<ClockTime>().is_err() && field.parse::<Angle>().is_err()
    })
}

/// Load all the stars from the reader.
///
/// # Errors
/// Reading fails or some record is malformed.
pub fn load_catalog<R: BufRead>(reader: R) -> Result<Vec<Star>, CatalogError> {
    debug!("Loading star catalog");
    let mut stars = Vec::new();
    let mut header_checked = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() || record.starts_with(COMMENT_SIGN) {
            continue;
        }

        if !header_checked {
            header_checked = true;
            if is_header(record) {
                debug!("Skipping catalog header {record:?}");
                continue;
            }
        }

        let star = Star::parse_record(record).map_err(|source| CatalogError::Record {
            line: idx + 1,
            source,
        })?;
        stars.push(star);
    }

    debug!("Loaded {} stars", stars.len());
    Ok(stars)
}

/// Load all the stars from the in-memory text.
///
/// # Errors
/// Some record is malformed.
pub fn parse_catalog(data: &str) -> Result<Vec<Star>, CatalogError> {
    load_catalog(data.as_bytes())
}
