//! Utilities functions which do not linked to domain

use std::ops::{Add, Div, Rem, Sub};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the given character from the beginning
pub(crate) trait StripChar {
    /// Strip the character from the beginning
    fn strip_prefix_char(self, ch: char) -> Option<String>;
    /// Split into the first character and the rest of the string
    fn split_first(self) -> Option<(char, String)>;
}

impl StripChar for &str {
    fn strip_prefix_char(self, ch: char) -> Option<String> {
        self.strip_prefix(ch).map(str::to_string)
    }

    fn split_first(self) -> Option<(char, String)> {
        self.chars().next().and_then(|head| {
            self.strip_prefix_char(head)
                .map(|stripped| (head, stripped))
        })
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Bring the value into `[0, period)` assuming it is
/// at most one period away from that range.
pub(crate) fn wrap_once<T>(value: T, period: T) -> T
where
    T: Copy + Default + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    if value < T::default() {
        value + period
    } else if value >= period {
        value - period
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_head() {
        let s = "-12:30";
        assert_eq!(s.split_first().unwrap(), ('-', "12:30".into()));
    }

    #[test]
    fn split_head_empty() {
        let s = "";
        assert!(s.split_first().is_none());
    }

    #[test]
    fn split_head_single() {
        let s = "+";
        assert_eq!(s.split_first().unwrap(), ('+', String::new()));
    }

    #[test]
    fn strip_prefix_no_match() {
        let s = "12:30";
        assert!(s.strip_prefix_char('-').is_none());
    }

    #[test]
    fn test_div_mod() {
        assert_eq!(div_mod(15, 4), (3, 3));
        assert_eq!(div_mod(3_725_500_u32, 3_600_000), (1, 125_500));
    }

    #[test]
    fn wrap_below_zero() {
        assert!((wrap_once(-0.5_f64, 24.0) - 23.5).abs() < 1e-12);
    }

    #[test]
    fn wrap_above_period() {
        assert!((wrap_once(24.25_f64, 24.0) - 0.25).abs() < 1e-12);
        assert_eq!(wrap_once(24, 24), 0);
    }

    #[test]
    fn wrap_in_range_untouched() {
        assert!((wrap_once(12.0_f64, 24.0) - 12.0).abs() < f64::EPSILON);
        assert!((wrap_once(0.0_f64, 24.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn wrap_only_once() {
        // the input domain guarantees a single wraparound
        assert!((wrap_once(-30.0_f64, 24.0) + 6.0).abs() < 1e-12);
    }
}
