use super::Rgb;

/// Squared Euclidean distance between two colors.
///
/// Only ever used to rank candidates against each other, so the square root
/// is never taken.
pub fn distance(a: &Rgb, b: &Rgb) -> f64 {
    let dr = a.r - b.r;
    let dg = a.g - b.g;
    let db = a.b - b.b;

    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_is_zero() {
        let c = Rgb::new(0.2, 0.4, 0.6);
        assert_eq!(distance(&c, &c), 0.0);
    }

    #[test]
    fn test_distance_black_to_white() {
        let black = Rgb::new(0.0, 0.0, 0.0);
        let white = Rgb::new(1.0, 1.0, 1.0);
        assert_eq!(distance(&black, &white), 3.0);
        assert_eq!(distance(&white, &black), 3.0);
    }

    #[test]
    fn test_distance_single_channel() {
        let a = Rgb::new(0.5, 0.0, 0.0);
        let b = Rgb::new(0.0, 0.0, 0.0);
        assert!((distance(&a, &b) - 0.25).abs() < 1e-12);
    }
}
