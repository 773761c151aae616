use crate::configuration::Configuration;
use crate::library::error::LibraryError;
use crate::library::{InMemoryVideoLibrary, VideoLibrary};
use crate::player::VideoPlayer;
use crate::player::random_source::{RandomSource, RngRandomSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationContext {
	pub configuration: Configuration,
	pub library: Arc<dyn VideoLibrary>,
}

impl ApplicationContext {
	pub fn new(configuration: Configuration) -> Result<ApplicationContext, LibraryError> {
		let library = Arc::new(InMemoryVideoLibrary::from_file(&configuration.library_path)?);

		Ok(Self { configuration, library })
	}

	pub fn video_player(&self) -> VideoPlayer {
		let random_source: Box<dyn RandomSource> = match self.configuration.random_seed {
			Some(seed) => Box::new(RngRandomSource::seeded(seed)),
			None => Box::new(RngRandomSource::from_entropy()),
		};

		VideoPlayer::new(self.library.clone(), random_source)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::player::outcome::Outcome;

	#[test]
	fn should_load_the_configured_library() {
		let configuration =
			Configuration::from_file("test/files/test-configuration.toml").expect("Failed to load configuration");

		let context = ApplicationContext::new(configuration).expect("Failed to create application context");

		assert_eq!(Outcome::VideoCount { count: 5 }, context.video_player().number_of_videos());
	}

	#[test]
	fn seeded_players_should_pick_the_same_videos() {
		let configuration =
			Configuration::from_file("test/files/test-configuration.toml").expect("Failed to load configuration");
		let context = ApplicationContext::new(configuration).expect("Failed to create application context");

		let mut first = context.video_player();
		let mut second = context.video_player();

		for _ in 0..10 {
			assert_eq!(first.play_random(), second.play_random());
		}
	}
}
