use crate::library::error::LibraryError;
use crate::video::{Video, VideoId};
use static_assertions::assert_obj_safe;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

pub mod error;
pub mod video_file;

/// Read-only catalog of videos the player can choose from.
pub trait VideoLibrary: Send + Sync + 'static {
	/// Every video in the library, in no particular order.
	fn videos(&self) -> &[Video];

	fn get(&self, video_id: &VideoId) -> Result<&Video, LibraryError>;
}

assert_obj_safe!(VideoLibrary);

#[derive(Clone, Debug, Default)]
pub struct InMemoryVideoLibrary {
	videos: Vec<Video>,
	index: HashMap<VideoId, usize>,
}

impl InMemoryVideoLibrary {
	/// Build a library from a sequence of videos, keeping their order.
	///
	/// A repeated id fails with [`LibraryError::DuplicateVideoId`] where `line` is the
	/// 1-based position of the repetition in `videos`.
	pub fn new(videos: impl IntoIterator<Item = Video>) -> Result<Self, LibraryError> {
		let mut library = Self::default();
		for (position, video) in videos.into_iter().enumerate() {
			library
				.insert(video)
				.map_err(|id| LibraryError::DuplicateVideoId { id, line: position + 1 })?;
		}
		Ok(library)
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path)?;
		let library = video_file::parse(&text)?;
		info!(count = library.videos.len(), "Loaded video library from '{}'.", path.display());
		Ok(library)
	}

	/// Appends a video unless its id is already taken, in which case the id is handed back.
	pub(crate) fn insert(&mut self, video: Video) -> Result<(), VideoId> {
		if self.index.contains_key(&video.id) {
			return Err(video.id);
		}

		self.index.insert(video.id.clone(), self.videos.len());
		self.videos.push(video);
		Ok(())
	}
}

impl VideoLibrary for InMemoryVideoLibrary {
	fn videos(&self) -> &[Video] {
		&self.videos
	}

	fn get(&self, video_id: &VideoId) -> Result<&Video, LibraryError> {
		self.index
			.get(video_id)
			.and_then(|&position| self.videos.get(position))
			.ok_or_else(|| LibraryError::NotFound(video_id.clone()))
	}
}
