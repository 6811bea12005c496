use crate::submodules::type_lib::NumericData;

/// Finds a root of `f` inside `[lo, hi]` by bisection. Returns `None` when the
/// bracket does not straddle a sign change.
pub fn bisect<F>(f: F, mut lo: NumericData, mut hi: NumericData, tol: NumericData, max_iter: usize) -> Option<NumericData>
where
    F: Fn(NumericData) -> NumericData,
{
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Some(lo);
    }
    if f_hi == 0.0 {
        return Some(hi);
    }
    if f_lo * f_hi > 0.0 {
        return None;
    }
    for _ in 0..max_iter {
        let mid = 0.5 * (lo + hi);
        let f_mid = f(mid);
        if f_mid == 0.0 || (hi - lo).abs() < tol {
            return Some(mid);
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    Some(0.5 * (lo + hi))
}

pub fn round_to(value: NumericData, digits: i32) -> NumericData {
    let scale = (10.0 as NumericData).powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn bisect_finds_square_root() {
        let root = bisect(|x| x * x - 4.0, 0.0, 10.0, 1.0e-12, 200).unwrap();
        assert_relative_eq!(root, 2.0, epsilon = 1.0e-9);
    }

    #[test]
    fn bisect_rejects_bracket_without_sign_change() {
        assert!(bisect(|x| x * x + 1.0, -5.0, 5.0, 1.0e-12, 200).is_none());
    }

    #[test]
    fn bisect_accepts_root_at_endpoint() {
        let root = bisect(|x| x, 0.0, 3.0, 1.0e-12, 200).unwrap();
        assert_relative_eq!(root, 0.0);
    }

    #[test]
    fn round_to_digits() {
        assert_relative_eq!(round_to(1.23456, 2), 1.23);
        assert_relative_eq!(round_to(1.23556, 3), 1.236);
        assert_relative_eq!(round_to(-1.2345, 2), -1.23, epsilon = 1.0e-12);
    }
}
