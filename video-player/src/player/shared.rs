use crate::player::VideoPlayer;
use crate::player::outcome::Outcome;
use crate::player::playback_state::PlaybackState;
use crate::video::VideoId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Handle to one [`VideoPlayer`] for several callers. The lock is held for exactly one
/// operation, so operations never interleave but also don't compose.
#[derive(Clone)]
pub struct SharedVideoPlayer {
	player: Arc<Mutex<VideoPlayer>>,
}

impl From<VideoPlayer> for SharedVideoPlayer {
	fn from(player: VideoPlayer) -> Self {
		Self {
			player: Arc::new(Mutex::new(player)),
		}
	}
}

impl SharedVideoPlayer {
	pub fn play(&self, video_id: &VideoId) -> Vec<Outcome> {
		self.player.lock().play(video_id)
	}

	pub fn stop(&self) -> Outcome {
		self.player.lock().stop()
	}

	pub fn play_random(&self) -> Vec<Outcome> {
		self.player.lock().play_random()
	}

	pub fn pause(&self) -> Outcome {
		self.player.lock().pause()
	}

	pub fn resume(&self) -> Outcome {
		self.player.lock().resume()
	}

	pub fn show_current(&self) -> Outcome {
		self.player.lock().show_current()
	}

	pub fn state(&self) -> PlaybackState {
		self.player.lock().state().clone()
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::library::InMemoryVideoLibrary;
	use crate::player::random_source::RngRandomSource;
	use crate::video::Video;
	use std::thread;

	fn shared_player() -> SharedVideoPlayer {
		let library = InMemoryVideoLibrary::new([
			Video::builder().id("v1").title("Amy").build(),
			Video::builder().id("v2").title("Bo").build(),
		])
		.expect("Failed to create library");
		VideoPlayer::new(Arc::new(library), Box::new(RngRandomSource::seeded(42))).into()
	}

	#[test]
	fn clones_should_share_the_same_state() {
		let player = shared_player();
		let other_handle = player.clone();

		player.play(&VideoId::from("v2"));
		other_handle.pause();

		assert_eq!(
			PlaybackState::Paused {
				current: VideoId::from("v2")
			},
			player.state()
		);
	}

	#[test]
	fn concurrent_callers_should_never_break_the_state() {
		let player = shared_player();

		thread::scope(|scope| {
			for thread_number in 0..4 {
				let player = player.clone();
				scope.spawn(move || {
					for iteration in 0..250 {
						match (thread_number + iteration) % 5 {
							0 => {
								player.play(&VideoId::from("v1"));
							}
							1 => {
								player.play_random();
							}
							2 => {
								player.pause();
							}
							3 => {
								player.resume();
							}
							_ => {
								player.stop();
							}
						}

						let state = player.state();
						assert!(!state.is_paused() || state.current().is_some());
					}
				});
			}
		});
	}

	#[test]
	fn stopping_from_two_handles_should_only_stop_once() {
		let player = shared_player();
		player.play(&VideoId::from("v1"));

		let outcomes = thread::scope(|scope| {
			let first = scope.spawn(|| player.stop());
			let second = scope.spawn(|| player.stop());
			[
				first.join().expect("First thread panicked"),
				second.join().expect("Second thread panicked"),
			]
		});

		let stopped = outcomes
			.iter()
			.filter(|outcome| matches!(outcome, Outcome::Stopping { .. }))
			.count();
		assert_eq!(1, stopped);
		assert_eq!(PlaybackState::Idle, player.state());
	}
}
