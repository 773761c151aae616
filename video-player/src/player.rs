use crate::library::VideoLibrary;
use crate::player::error::PlaybackError;
use crate::player::outcome::Outcome;
use crate::player::playback_state::PlaybackState;
use crate::player::random_source::RandomSource;
use crate::video::{Video, VideoId};
use std::sync::Arc;
use tracing::{debug, warn};

pub mod error;
pub mod outcome;
pub mod playback_state;
pub mod random_source;
pub mod shared;


/// Playback controller over a single slot.
///
/// Every operation runs to completion and reports what happened as [`Outcome`]s,
/// rejected operations leave the [`PlaybackState`] untouched.
pub struct VideoPlayer {
	library: Arc<dyn VideoLibrary>,
	random_source: Box<dyn RandomSource>,
	state: PlaybackState,
}

impl VideoPlayer {
	pub fn new(library: Arc<dyn VideoLibrary>, random_source: Box<dyn RandomSource>) -> Self {
		Self {
			library,
			random_source,
			state: PlaybackState::default(),
		}
	}

	pub fn state(&self) -> &PlaybackState {
		&self.state
	}

	/// Play the given video, stopping whatever is loaded first. This restarts the
	/// video if it is already loaded.
	pub fn play(&mut self, video_id: &VideoId) -> Vec<Outcome> {
		let title = match self.library.get(video_id) {
			Ok(video) => video.title.clone(),
			Err(error) => {
				debug!(%video_id, "Cannot play video: {error}");
				return vec![Outcome::CannotPlay {
					reason: PlaybackError::NotFound,
				}];
			}
		};

		self.load(video_id.clone(), title)
	}

	pub fn stop(&mut self) -> Outcome {
		self.unload().unwrap_or_else(|| {
			debug!("Cannot stop, nothing is loaded.");
			Outcome::CannotStop {
				reason: PlaybackError::NoneLoaded,
			}
		})
	}

	/// Play a video chosen uniformly from the whole library, the loaded one included.
	pub fn play_random(&mut self) -> Vec<Outcome> {
		let videos = self.library.videos();
		if videos.is_empty() {
			debug!("Cannot play a random video, the library is empty.");
			return vec![Outcome::NoVideosAvailable];
		}

		let Video { id, title, .. } = &videos[self.random_source.pick_index(videos.len())];
		let (id, title) = (id.clone(), title.clone());

		self.load(id, title)
	}

	pub fn pause(&mut self) -> Outcome {
		match &self.state {
			PlaybackState::Idle => {
				debug!("Cannot pause, nothing is loaded.");
				Outcome::CannotPause {
					reason: PlaybackError::NoneLoaded,
				}
			}
			PlaybackState::Paused { current } => Outcome::AlreadyPaused {
				title: self.loaded_video(current).title,
			},
			PlaybackState::Playing { current } => {
				let current = current.clone();
				let title = self.loaded_video(&current).title;
				debug!(video_id = %current, "Pausing video.");
				self.state = PlaybackState::Paused { current };
				Outcome::Pausing { title }
			}
		}
	}

	pub fn resume(&mut self) -> Outcome {
		match &self.state {
			PlaybackState::Idle => {
				debug!("Cannot continue, nothing is loaded.");
				Outcome::CannotContinue {
					reason: PlaybackError::NoneLoaded,
				}
			}
			PlaybackState::Playing { .. } => Outcome::CannotContinue {
				reason: PlaybackError::NotPaused,
			},
			PlaybackState::Paused { current } => {
				let current = current.clone();
				let title = self.loaded_video(&current).title;
				debug!(video_id = %current, "Continuing video.");
				self.state = PlaybackState::Playing { current };
				Outcome::Continuing { title }
			}
		}
	}

	pub fn show_current(&self) -> Outcome {
		let Some(current) = self.state.current() else {
			return Outcome::NothingPlaying;
		};

		let Video { id, title, tags } = self.loaded_video(current);
		Outcome::Showing {
			title,
			id,
			tags,
			paused: self.state.is_paused(),
		}
	}

	pub fn number_of_videos(&self) -> Outcome {
		Outcome::VideoCount {
			count: self.library.videos().len(),
		}
	}

	/// All videos, sorted by title.
	pub fn show_all_videos(&self) -> Outcome {
		let mut videos = self.library.videos().to_vec();
		videos.sort_by(|left, right| left.title.cmp(&right.title));
		Outcome::VideoListing { videos }
	}

	fn load(&mut self, video_id: VideoId, title: String) -> Vec<Outcome> {
		let mut outcomes = Vec::with_capacity(2);
		outcomes.extend(self.unload());

		debug!(%video_id, "Playing video.");
		self.state = PlaybackState::Playing { current: video_id };
		outcomes.push(Outcome::Playing { title });
		outcomes
	}

	fn unload(&mut self) -> Option<Outcome> {
		let current = std::mem::take(&mut self.state).into_current()?;
		debug!(video_id = %current, "Stopping video.");
		Some(Outcome::Stopping {
			title: self.loaded_video(&current).title,
		})
	}

	fn loaded_video(&self, video_id: &VideoId) -> Video {
		match self.library.get(video_id) {
			Ok(video) => video.clone(),
			Err(error) => {
				// Only ids from the library get loaded, fall back to the bare id if one vanishes.
				warn!(%video_id, "Loaded video is missing from the library: {error}");
				Video::builder().id(video_id.clone()).title(video_id.to_string()).build()
			}
		}
	}
}
