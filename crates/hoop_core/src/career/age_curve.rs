//! Piecewise age-development curve.
//!
//! The multiplier models the classic career arc: development years ramp from
//! 0.70 to 1.0, peak years climb to 1.30, the prime holds in the low 1.x
//! range, then decline sets in. `year_index` is zero-based within the career.

/// Career phase boundaries, in zero-based year indices.
const PEAK_START: usize = 3;
const PRIME_START: usize = 6;
const DECLINE_START: usize = 10;
const LATE_START: usize = 13;

/// Age multiplier for the given zero-based career year.
pub fn age_factor(year_index: usize) -> f32 {
    let y = year_index as f32;
    if year_index < PEAK_START {
        0.7 + 0.15 * y
    } else if year_index < PRIME_START {
        1.0 + 0.1 * (y - PEAK_START as f32)
    } else if year_index < DECLINE_START {
        1.3 - 0.05 * (y - PRIME_START as f32)
    } else if year_index < LATE_START {
        1.1 - 0.08 * (y - DECLINE_START as f32)
    } else {
        0.86 - 0.06 * (y - LATE_START as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_exact() {
        assert_eq!(age_factor(0), 0.70);
        assert_eq!(age_factor(3), 1.00);
        assert_eq!(age_factor(6), 1.30);
        assert_eq!(age_factor(10), 1.10);
        assert_eq!(age_factor(13), 0.86);
    }

    #[test]
    fn development_ramps_up_and_decline_ramps_down() {
        // Year 2 already reaches 1.0, the same value the peak segment starts
        // from, so the rise is non-strict there.
        for y in 0..6 {
            assert!(age_factor(y + 1) >= age_factor(y), "factor should rise through year {y}");
        }
        for y in 6..20 {
            assert!(age_factor(y + 1) < age_factor(y), "factor should fall after year {y}");
        }
    }

    #[test]
    fn peak_of_the_curve_is_year_six() {
        let peak = (0..25).map(age_factor).fold(f32::MIN, f32::max);
        assert_eq!(peak, age_factor(6));
    }
}
