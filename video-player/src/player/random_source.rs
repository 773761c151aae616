use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use static_assertions::assert_obj_safe;

/// Uniform choice of a position in a sequence.
pub trait RandomSource: Send + 'static {
	/// Returns a position in `0..length`. `length` is never zero.
	fn pick_index(&mut self, length: usize) -> usize;
}

assert_obj_safe!(RandomSource);

pub struct RngRandomSource<Random>(Random);

impl RngRandomSource<StdRng> {
	pub fn from_entropy() -> Self {
		Self(StdRng::from_os_rng())
	}

	pub fn seeded(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl<Random: Rng + Send + 'static> RandomSource for RngRandomSource<Random> {
	fn pick_index(&mut self, length: usize) -> usize {
		self.0.random_range(0..length)
	}
}

/// Replays a fixed list of positions, wrapping them into range.
#[cfg(test)]
pub struct SequenceRandomSource {
	indices: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl SequenceRandomSource {
	pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
		Self {
			indices: indices.into_iter().collect(),
		}
	}
}

#[cfg(test)]
impl RandomSource for SequenceRandomSource {
	fn pick_index(&mut self, length: usize) -> usize {
		let index = self.indices.pop_front().expect("Random sequence exhausted");
		index % length
	}
}
