pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const HOURS_IN_DAY: u8 = 24;

pub(crate) const MILLIS_IN_SECOND: u16 = 1_000;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';

/// Arc seconds of the decimal-converted angle are kept with this precision (hundredths)
pub(crate) const ARC_SECOND_PARTS: u32 = 100;
