use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an operation was rejected. None of them are fatal.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackError {
	#[error("Video does not exist")]
	NotFound,
	#[error("No video is currently playing")]
	NoneLoaded,
	#[error("Video is not paused")]
	NotPaused,
	#[error("Video is already paused")]
	AlreadyPaused,
	#[error("No videos available")]
	NoVideosAvailable,
}
