//! Plain text video catalog.
//!
//! One video per line: `title | id | tag , tag , ...`. The tag field is optional and
//! blank lines are ignored.

use crate::library::InMemoryVideoLibrary;
use crate::library::error::LibraryError;
use crate::video::Video;

const FIELD_SEPARATOR: char = '|';
const TAG_SEPARATOR: char = ',';

pub fn parse(text: &str) -> Result<InMemoryVideoLibrary, LibraryError> {
	let mut library = InMemoryVideoLibrary::default();

	for (index, line) in text.lines().enumerate() {
		let line_number = index + 1;
		if line.trim().is_empty() {
			continue;
		}

		let video = parse_line(line, line_number)?;
		library
			.insert(video)
			.map_err(|id| LibraryError::DuplicateVideoId { id, line: line_number })?;
	}

	Ok(library)
}

fn parse_line(line: &str, line_number: usize) -> Result<Video, LibraryError> {
	let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);

	let title = required_field(fields.next(), "title", line_number)?;
	let id = required_field(fields.next(), "id", line_number)?;
	let tags: Vec<String> = fields
		.next()
		.map(|tags| {
			tags.split(TAG_SEPARATOR)
				.map(str::trim)
				.filter(|tag| !tag.is_empty())
				.map(ToString::to_string)
				.collect()
		})
		.unwrap_or_default();

	Ok(Video::builder().id(id).title(title).tags(tags).build())
}

fn required_field<'line>(
	field: Option<&'line str>,
	name: &'static str,
	line_number: usize,
) -> Result<&'line str, LibraryError> {
	match field {
		None => Err(LibraryError::MissingField {
			field: name,
			line: line_number,
		}),
		Some("") => Err(LibraryError::EmptyField {
			field: name,
			line: line_number,
		}),
		Some(field) => Ok(field),
	}
}
