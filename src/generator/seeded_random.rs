/*
seeded_random.rs

Copyright 2025 Hervé Quatremain

This file is part of Zipgrid.

Zipgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zipgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zipgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Seeded pseudo-random number generator.
//!
//! Levels must be reproducible from their identifier, so the generator does not use the
//! [`rand`] thread-local generator. Instead, a small linear congruential generator produces the
//! same sequence for the same seed, on every platform.

/// Multiplier of the linear congruential recurrence.
const MULTIPLIER: u64 = 9301;

/// Increment of the linear congruential recurrence.
const INCREMENT: u64 = 49297;

/// Modulus of the linear congruential recurrence.
const MODULUS: u64 = 233280;

/// Seeded generator object.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededRandom {
    /// Current state, always lower than [`MODULUS`].
    seed: u64,
}

impl SeededRandom {
    /// Create a [`SeededRandom`] object.
    ///
    /// The recurrence only depends on the seed modulo 233280, so the seed is reduced here. That
    /// way the arithmetic cannot overflow.
    pub fn new(seed: u64) -> Self {
        Self {
            seed: seed % MODULUS,
        }
    }

    /// Advance the state and return a value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        self.seed = (self.seed * MULTIPLIER + INCREMENT) % MODULUS;
        self.seed as f64 / MODULUS as f64
    }

    /// Return an integer between `min` and `max` (both included).
    ///
    /// `max` must not be lower than `min`.
    pub fn next_int(&mut self, min: usize, max: usize) -> usize {
        let range: f64 = (max - min + 1) as f64;
        (self.next() * range).floor() as usize + min
    }

    /// Return a shuffled copy of the given slice (Fisher-Yates).
    ///
    /// The items are visited from the last one down to the second one, and each item is swapped
    /// with a random item at the same or a lower position.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled: Vec<T> = items.to_vec();
        for i in (1..shuffled.len()).rev() {
            let j: usize = self.next_int(0, i);
            shuffled.swap(i, j);
        }
        shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_values_follow_the_recurrence() {
        let mut rng = SeededRandom::new(0);
        assert_eq!(rng.next(), 49297.0 / 233280.0);
        // (49297 * 9301 + 49297) % 233280
        assert_eq!(rng.next(), 165494.0 / 233280.0);
    }

    #[test]
    fn large_seeds_are_reduced() {
        let mut a = SeededRandom::new(233280 * 7 + 42);
        let mut b = SeededRandom::new(42);
        for _ in 0..100 {
            assert_eq!(a.next(), b.next());
        }
    }

    #[test]
    fn next_int_stays_in_range() {
        let mut rng = SeededRandom::new(67890);
        for _ in 0..1000 {
            let v = rng.next_int(3, 6);
            assert!((3..=6).contains(&v));
        }
        assert_eq!(rng.next_int(4, 4), 4);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::new(80235);
        let mut b = SeededRandom::new(80235);
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(a.shuffle(&items), b.shuffle(&items));
        assert_eq!(a.next_int(0, 100), b.next_int(0, 100));
        assert_eq!(a.next(), b.next());
    }

    #[test]
    fn shuffle_is_a_permutation_and_keeps_the_input() {
        let mut rng = SeededRandom::new(12);
        let items: Vec<usize> = (0..25).collect();
        let mut shuffled = rng.shuffle(&items);
        assert_eq!(items, (0..25).collect::<Vec<usize>>());
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn shuffle_of_short_slices_does_not_consume_values() {
        let mut a = SeededRandom::new(5);
        let b = a.clone();
        assert_eq!(a.shuffle(&[7]), vec![7]);
        assert!(a.shuffle::<u8>(&[]).is_empty());
        assert_eq!(a, b);
    }
}
