use crate::player::error::PlaybackError;
use crate::video::{Video, VideoId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Everything the player reports back to its caller.
///
/// The [`Display`] implementation renders the message a user sees in the shell.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
	Playing {
		title: String,
	},
	Stopping {
		title: String,
	},
	Pausing {
		title: String,
	},
	Continuing {
		title: String,
	},
	AlreadyPaused {
		title: String,
	},
	Showing {
		title: String,
		id: VideoId,
		tags: Vec<String>,
		paused: bool,
	},
	NothingPlaying,
	NoVideosAvailable,
	CannotPlay {
		reason: PlaybackError,
	},
	CannotStop {
		reason: PlaybackError,
	},
	CannotPause {
		reason: PlaybackError,
	},
	CannotContinue {
		reason: PlaybackError,
	},
	VideoCount {
		count: usize,
	},
	VideoListing {
		videos: Vec<Video>,
	},
}

impl Outcome {
	/// Why the operation was rejected, `None` if it went through.
	pub fn error(&self) -> Option<PlaybackError> {
		use Outcome::*;
		match self {
			CannotPlay { reason } | CannotStop { reason } | CannotPause { reason } | CannotContinue { reason } => {
				Some(*reason)
			}
			AlreadyPaused { .. } => Some(PlaybackError::AlreadyPaused),
			NoVideosAvailable => Some(PlaybackError::NoVideosAvailable),
			Playing { .. }
			| Stopping { .. }
			| Pausing { .. }
			| Continuing { .. }
			| Showing { .. }
			| NothingPlaying
			| VideoCount { .. }
			| VideoListing { .. } => None,
		}
	}
}

impl Display for Outcome {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		use Outcome::*;
		match self {
			Playing { title } => write!(formatter, "Playing video: {title}"),
			Stopping { title } => write!(formatter, "Stopping video: {title}"),
			Pausing { title } => write!(formatter, "Pausing video: {title}"),
			Continuing { title } => write!(formatter, "Continuing video: {title}"),
			AlreadyPaused { title } => write!(formatter, "Video already paused: {title}"),
			Showing {
				title,
				id,
				tags,
				paused,
			} => {
				write!(formatter, "Currently playing: {title} ({id}) [{}]", tags.join(" "))?;
				if *paused {
					formatter.write_str(" - PAUSED")?;
				}
				Ok(())
			}
			NothingPlaying => formatter.write_str("No video is currently playing"),
			NoVideosAvailable => formatter.write_str("No videos available"),
			CannotPlay { reason } => write!(formatter, "Cannot play video: {reason}"),
			CannotStop { reason } => write!(formatter, "Cannot stop video: {reason}"),
			CannotPause { reason } => write!(formatter, "Cannot pause video: {reason}"),
			CannotContinue { reason } => write!(formatter, "Cannot continue video: {reason}"),
			VideoCount { count } => write!(formatter, "{count} videos in the library"),
			VideoListing { videos } => {
				formatter.write_str("Here's a list of all available videos:")?;
				for video in videos {
					write!(formatter, "\n  {video}")?;
				}
				Ok(())
			}
		}
	}
}
