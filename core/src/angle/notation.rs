//! Regular expressions for the textual sexagesimal notations.
//! The leading sign is stripped before matching.

use lazy_static::lazy_static;
use regex::Regex;

use super::consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN};

/// Construct regular expression to parse the `dd:mm:ss.ff` or `dd°mm′ss.ff″` representation
fn degrees_re(is_colon: bool) -> String {
    let (deg, min, sec) = if is_colon {
        (":".to_string(), ":".to_string(), String::new())
    } else {
        (
            DEGREE_SIGN.to_string(),
            ARC_MINUTE_SIGN.to_string(),
            ARC_SECOND_SIGN.to_string(),
        )
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<whole>\d{{1,5}})                            # mandatory degree VALUE
        {deg}                                           # degree separator
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>[0-5]?\d)                               # minutes VALUE (0..=59)
            {min}                                           # arcminute separator
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>[0-5]?\d(?:\.\d+)?)                     # seconds VALUE with the optional fraction (0..60)
                {sec}                                           # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#
    )
}

/// Construct regular expression to parse the `hh:mm:ss.fff` representation of a clock time
fn clock_re() -> &'static str {
    r"(?x)
        ^
        (?P<whole>[01]?\d|2[0-3])                       # hours (0..=23)
        :(?P<min>[0-5]?\d)                              # minutes (0..=59)
        (?:
            :(?P<sec>[0-5]?\d)                          # seconds (0..=59)
            (?:\.(?P<frac>\d{1,3}))?                    # milliseconds as up to 3 fraction digits
        )?
        $
    "
}

lazy_static! {
    pub(super) static ref RE_COLON: Regex =
        Regex::new(&degrees_re(true)).expect("Colon regex is valid");
    pub(super) static ref RE_UNICODE: Regex =
        Regex::new(&degrees_re(false)).expect("Unicode regex is valid");
    pub(super) static ref RE_CLOCK: Regex = Regex::new(clock_re()).expect("Clock regex is valid");
}
