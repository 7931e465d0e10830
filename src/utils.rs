//! Utilities

/// Clamp a value to the given range
///
/// Values that compare neither below `min` nor above `max`, like NaN, are returned unchanged.
#[inline]
pub fn clamp<T>(value: T, min: T, max: T) -> T where T: PartialOrd {
    if value < min { min } else if value > max { max } else { value }
}

/// Find minimum of three values
#[inline]
pub fn min3<T>(a: T, b: T, c: T) -> T where T: Ord {
    a.min(b).min(c)
}

/// Find maximum of three values
#[inline]
pub fn max3<T>(a: T, b: T, c: T) -> T where T: Ord {
    a.max(b).max(c)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(300.0, 0.0, 255.0), 255.0);
        assert_eq!(clamp(-1.0, 0.0, 255.0), 0.0);
        assert_eq!(clamp(12, 0, 255), 12);
        assert!(clamp(::std::f32::NAN, 0.0, 255.0).is_nan());
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min3(3, -2, 7), -2);
        assert_eq!(max3(3, -2, 7), 7);
    }
}
