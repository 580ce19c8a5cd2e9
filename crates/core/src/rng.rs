//! RNG module - uniform random shape selection
//!
//! Every upcoming shape is an independent uniform draw over the seven shapes;
//! there is no bag and no repeat protection.
//!
//! The generator is a small seedable LCG so games are reproducible in tests.

use crate::types::{ShapeKind, NEXT_QUEUE_LEN};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a fixed point of the multiply step.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn next_shape(&mut self) -> ShapeKind {
        let idx = self.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }
}

/// Preview queue of upcoming shapes (front = next to spawn)
#[derive(Debug, Clone)]
pub struct NextQueue {
    shapes: [ShapeKind; NEXT_QUEUE_LEN],
    rng: SimpleRng,
}

impl NextQueue {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let shapes = std::array::from_fn(|_| rng.next_shape());
        Self { shapes, rng }
    }

    /// Replace every queued shape with a fresh draw.
    pub fn refill(&mut self) {
        for slot in &mut self.shapes {
            *slot = self.rng.next_shape();
        }
    }

    /// Take the front shape and append a new random one at the back.
    pub fn pop_and_refill(&mut self) -> ShapeKind {
        let front = self.shapes[0];
        self.shapes.rotate_left(1);
        self.shapes[NEXT_QUEUE_LEN - 1] = self.rng.next_shape();
        front
    }

    pub fn peek(&self) -> [ShapeKind; NEXT_QUEUE_LEN] {
        self.shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_every_shape_is_drawn() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[rng.next_shape() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_queue_shifts_forward() {
        let mut queue = NextQueue::new(99);
        let before = queue.peek();
        let popped = queue.pop_and_refill();
        let after = queue.peek();
        assert_eq!(popped, before[0]);
        assert_eq!(after[0], before[1]);
        assert_eq!(after[1], before[2]);
        assert_eq!(after.len(), NEXT_QUEUE_LEN);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = NextQueue::new(2024);
        let mut b = NextQueue::new(2024);
        for _ in 0..50 {
            assert_eq!(a.pop_and_refill(), b.pop_and_refill());
        }
    }
}
