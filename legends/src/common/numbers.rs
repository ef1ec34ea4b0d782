/// Rounds the value to one decimal place.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamps a probability into the range `[0, max]`.
///
/// NaN is treated as an impossible event.
pub fn clamp_probability(probability: f64, max: f64) -> f64 {
    if probability.is_nan() {
        return 0.0;
    }
    probability.clamp(0.0, max)
}

#[cfg(test)]
mod numbers_test {
    use crate::common::{
        clamp_probability,
        round_to_tenth,
    };

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(110.0), 110.0);
        assert_eq!(round_to_tenth(54.45), 54.5);
        assert_eq!(round_to_tenth(12.34), 12.3);
        assert_eq!(round_to_tenth(0.0), 0.0);
    }

    #[test]
    fn clamps_probability() {
        assert_eq!(clamp_probability(0.25, 0.5), 0.25);
        assert_eq!(clamp_probability(1.0, 0.5), 0.5);
        assert_eq!(clamp_probability(-0.1, 0.5), 0.0);
        assert_eq!(clamp_probability(f64::NAN, 0.5), 0.0);
    }
}
