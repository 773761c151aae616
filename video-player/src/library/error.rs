use crate::video::VideoId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
	#[error("Video '{0}' does not exist.")]
	NotFound(VideoId),
	#[error("Video '{id}' is listed more than once (line {line}).")]
	DuplicateVideoId { id: VideoId, line: usize },
	#[error("Line {line} is missing the {field} field.")]
	MissingField { field: &'static str, line: usize },
	#[error("Line {line} has an empty {field} field.")]
	EmptyField { field: &'static str, line: usize },
	#[error("Failed to read video library: {0}")]
	IoError(#[from] std::io::Error),
}
