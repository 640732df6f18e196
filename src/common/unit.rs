//! Unit conversion utilities.
//!
//! All geometry in a presentationML package is expressed in EMUs (English
//! Metric Units, 914,400 per inch). Font sizes and paragraph spacing are
//! stored in centipoints (hundredths of a point).

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const CENTIPOINTS_PER_PT: i64 = 100;

/// Convert a length in inches to EMUs.
///
/// # Examples
///
/// ```
/// use deckforge::common::unit::inches_to_emu;
/// assert_eq!(inches_to_emu(1.0), 914_400);
/// assert_eq!(inches_to_emu(0.5), 457_200);
/// ```
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Convert a length in EMUs to inches.
#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

/// Convert a length in points to EMUs.
#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert a size in points to centipoints, the unit used by `sz` and
/// `spcPts val` attributes.
///
/// # Examples
///
/// ```
/// use deckforge::common::unit::pt_to_centipoints;
/// assert_eq!(pt_to_centipoints(18.0), 1800);
/// assert_eq!(pt_to_centipoints(2.5), 250);
/// ```
#[inline]
pub fn pt_to_centipoints(pt: f64) -> i64 {
    (pt * CENTIPOINTS_PER_PT as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_round_trip() {
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert!((emu_to_inches(6_858_000) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_pt_to_emu() {
        assert_eq!(pt_to_emu(72.0), EMUS_PER_INCH);
        assert_eq!(pt_to_emu(1.0), 12_700);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(4.0), 400);
        assert_eq!(pt_to_centipoints(14.0), 1400);
    }
}
