//! Common math functions.

/// Round to two decimal places.
/// The exact binary value of `v` is rounded, and exact ties go to the even neighbour
/// (`3.125 -> 3.12`, while `2.675 -> 2.67` since 2.675 is stored slightly below the tie).
pub fn round2(v: f64) -> f64 {
    if !v.is_finite() || v == 0.0 {
        return v;
    }
    let bits = v.abs().to_bits();
    let exp = ((bits >> 52) & 0x7ff) as i32;
    let frac = bits & ((1_u64 << 52) - 1);
    // |v| = mant * 2^shift exactly.
    let (mant, shift) = if exp == 0 { (frac, -1074) } else { (frac | (1_u64 << 52), exp - 1075) };

    // scaled = |v| * 100 = mant * 100 * 2^shift, mant * 100 < 2^60.
    let scaled = u128::from(mant) * 100;
    let rounded: u128 = if shift >= 0 {
        // Already an integer after scaling, too large for any meaningful rounding.
        return v;
    } else if shift < -64 {
        // scaled < 2^60 < 2^(-shift - 1): below one half.
        0
    } else {
        let s = (-shift) as u32;
        let quot = scaled >> s;
        let rem = scaled & ((1_u128 << s) - 1);
        let half = 1_u128 << (s - 1);
        if rem > half || (rem == half && quot % 2 == 1) { quot + 1 } else { quot }
    };
    (rounded as f64 / 100.0).copysign(v)
}

/// Percentage `num / denom * 100` rounded to two decimals, or None if the denominator is zero.
pub fn percentage(num: usize, denom: usize) -> Option<f64> {
    if denom == 0 {
        None
    } else {
        Some(round2(num as f64 / denom as f64 * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(12.0), 12.0);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-1.256), -1.26);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(15.625), 15.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(12.5), 12.5);
        // Stored below the tie.
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(1.005), 1.0);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(percentage(0, 0), None);
        assert_eq!(percentage(5, 0), None);
        assert_eq!(percentage(0, 4), Some(0.0));
        assert_eq!(percentage(1, 3), Some(33.33));
        assert_eq!(percentage(4, 4), Some(100.0));
        assert_eq!(percentage(1, 32), Some(3.12));
        assert_eq!(percentage(5, 32), Some(15.62));
    }
}
