use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use typed_builder::TypedBuilder;

#[derive(
	derive_more::From,
	derive_more::Into,
	derive_more::Deref,
	Clone,
	Debug,
	Eq,
	PartialEq,
	Hash,
	Serialize,
	Deserialize,
	PartialOrd,
	Ord,
)]
#[serde(transparent)]
pub struct VideoId(String);

impl From<&str> for VideoId {
	fn from(id: &str) -> Self {
		VideoId(id.to_string())
	}
}

impl Display for VideoId {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str(&self.0)
	}
}

/// A catalog entry. Immutable once it is part of a library.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, TypedBuilder)]
pub struct Video {
	#[builder(setter(into))]
	pub id: VideoId,
	#[builder(setter(into))]
	pub title: String,
	#[builder(default)]
	pub tags: Vec<String>,
}

impl Display for Video {
	fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
		write!(formatter, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn should_display_title_id_and_tags() {
		let video = Video::builder()
			.id("funny_dogs_video_id")
			.title("Funny Dogs")
			.tags(vec!["#dog".to_string(), "#animal".to_string()])
			.build();

		assert_eq!("Funny Dogs (funny_dogs_video_id) [#dog #animal]", video.to_string());
	}

	#[test]
	fn should_display_empty_brackets_without_tags() {
		let video = Video::builder().id("nothing_video_id").title("Video about nothing").build();

		assert_eq!("Video about nothing (nothing_video_id) []", video.to_string());
	}

	#[test]
	fn video_id_should_serialize_transparently() {
		let json = serde_json::to_string(&VideoId::from("v1")).expect("Failed to serialize VideoId");

		assert_eq!(r#""v1""#, json);
	}
}
