//! Random sample data for seeding rooms and availability.
//!
//! Every helper takes the generator explicitly, so callers decide how it is seeded:
//! the binary uses an entropy-seeded `StdRng`, tests use a fixed seed.

use rand::Rng;

/// Lowest nightly rate produced by [`random_price`]
pub const MIN_PRICE: i32 = 5000;
/// Highest nightly rate produced by [`random_price`]
pub const MAX_PRICE: i32 = 10000;
/// Lowest guest count produced by [`random_guests`]
pub const MIN_GUESTS: i32 = 2;
/// Highest guest count produced by [`random_guests`]
pub const MAX_GUESTS: i32 = 8;

/// Generates a random integer between `min` and `max`, both inclusive.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.gen_range(min..=max)
}

/// Generates a random nightly rate.
pub fn random_price<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    random_int(rng, MIN_PRICE, MAX_PRICE)
}

/// Randomly returns true or false.
pub fn random_bool<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Generates a random maximum guest count for a room.
pub fn random_guests<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    random_int(rng, MIN_GUESTS, MAX_GUESTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_values_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..1000 {
            let price = random_price(&mut rng);
            assert!((MIN_PRICE..=MAX_PRICE).contains(&price));

            let guests = random_guests(&mut rng);
            assert!((MIN_GUESTS..=MAX_GUESTS).contains(&guests));
        }
    }

    #[test]
    fn test_random_bool_produces_both_values() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let values: Vec<bool> = (0..64).map(|_| random_bool(&mut rng)).collect();

        assert!(values.iter().any(|v| *v));
        assert!(values.iter().any(|v| !*v));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);

        let first: Vec<i32> = (0..16).map(|_| random_price(&mut a)).collect();
        let second: Vec<i32> = (0..16).map(|_| random_price(&mut b)).collect();
        assert_eq!(first, second);
    }
}
