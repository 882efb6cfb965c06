//! Scripted random draws for spawning hearts.

use std::collections::VecDeque;

use craftconnect_core::rng::DeterministicRng;

/// Always draws the low end of the range: hearts spawn at x = 0 and fall at
/// the minimum speed.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// Replays a fixed list of draws in order. A spawn takes two draws: the x
/// position, then the speed.
///
/// Panics when the list runs out or a draw falls outside the requested range.
#[derive(Debug)]
pub struct SequenceRng {
    draws: VecDeque<u32>,
}

impl SequenceRng {
    #[must_use]
    pub fn new(draws: Vec<u32>) -> Self {
        Self {
            draws: draws.into(),
        }
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        let draw = self.draws.pop_front().expect("SequenceRng exhausted");
        assert!(
            (min..=max).contains(&draw),
            "scripted draw {draw} outside {min}..={max}"
        );
        draw
    }
}
