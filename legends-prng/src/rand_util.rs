use crate::PseudoRandomNumberGenerator;

const UNIT_DENOMINATOR: f64 = (1u64 << 32) as f64;

/// Returns whether a random event occurs.
pub fn chance(
    prng: &mut dyn PseudoRandomNumberGenerator,
    numerator: u64,
    denominator: u64,
) -> bool {
    prng.next().rem_euclid(denominator) < numerator
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random float in the range `[0, 1)`.
pub fn unit(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    prng.next() as f64 / UNIT_DENOMINATOR
}

/// Returns whether an event with the given probability occurs.
///
/// A value is always drawn, even for probabilities of `0` or `1`, so that the number of values
/// consumed by a battle does not depend on the probabilities involved.
pub fn roll(prng: &mut dyn PseudoRandomNumberGenerator, probability: f64) -> bool {
    unit(prng) < probability
}

/// Returns a random element from the given slice.
pub fn sample_slice<'a, T>(
    prng: &mut dyn PseudoRandomNumberGenerator,
    slice: &'a [T],
) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    if slice.len() == 1 {
        return slice.first();
    }
    let index = range(prng, 0, slice.len() as u64);
    slice.get(index as usize)
}
