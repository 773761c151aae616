use crate::video::VideoId;

/// Which video is loaded and whether it is paused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	/// Nothing is loaded.
	#[default]
	Idle,
	Playing {
		current: VideoId,
	},
	Paused {
		current: VideoId,
	},
}

impl PlaybackState {
	pub fn current(&self) -> Option<&VideoId> {
		match self {
			PlaybackState::Idle => None,
			PlaybackState::Playing { current } | PlaybackState::Paused { current } => Some(current),
		}
	}

	pub fn is_paused(&self) -> bool {
		matches!(self, PlaybackState::Paused { .. })
	}

	pub(super) fn into_current(self) -> Option<VideoId> {
		match self {
			PlaybackState::Idle => None,
			PlaybackState::Playing { current } | PlaybackState::Paused { current } => Some(current),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn should_initially_be_idle() {
		let playback_state = PlaybackState::default();

		assert_eq!(PlaybackState::Idle, playback_state);
		assert_eq!(None, playback_state.current());
		assert!(!playback_state.is_paused());
	}

	#[test]
	fn should_only_be_paused_with_a_loaded_video() {
		let paused = PlaybackState::Paused {
			current: VideoId::from("v1"),
		};
		let playing = PlaybackState::Playing {
			current: VideoId::from("v1"),
		};

		assert!(paused.is_paused());
		assert_eq!(Some(&VideoId::from("v1")), paused.current());
		assert!(!playing.is_paused());
		assert_eq!(Some(&VideoId::from("v1")), playing.current());
	}
}
