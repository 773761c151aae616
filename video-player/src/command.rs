use crate::video::VideoId;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	NumberOfVideos,
	ShowAllVideos,
	Play(VideoId),
	Stop,
	PlayRandom,
	Pause,
	Continue,
	ShowPlaying,
	Help,
	Exit,
	/// A known command the player doesn't support yet.
	NotImplemented(&'static str),
}

/// Commands that are recognised but answered with "not implemented".
const NOT_IMPLEMENTED: [&str; 11] = [
	"CREATE_PLAYLIST",
	"ADD_TO_PLAYLIST",
	"SHOW_ALL_PLAYLISTS",
	"SHOW_PLAYLIST",
	"REMOVE_FROM_PLAYLIST",
	"CLEAR_PLAYLIST",
	"DELETE_PLAYLIST",
	"SEARCH_VIDEOS",
	"SEARCH_VIDEOS_WITH_TAG",
	"FLAG_VIDEO",
	"ALLOW_VIDEO",
];

pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    HELP - Displays help.
    EXIT - Terminates the program execution.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
	#[error("Please enter a valid command, type HELP for a list of available commands.")]
	Empty,
	#[error("Unknown command '{0}', type HELP for a list of available commands.")]
	Unknown(String),
	#[error("{command} needs a {argument}.")]
	MissingArgument {
		command: &'static str,
		argument: &'static str,
	},
}

impl TryFrom<&str> for Command {
	type Error = CommandError;

	fn try_from(line: &str) -> Result<Self, Self::Error> {
		let mut words = line.split_whitespace();
		let name = words.next().ok_or(CommandError::Empty)?.to_uppercase();

		let command = match name.as_str() {
			"NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
			"SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
			"PLAY" => {
				let video_id = words.next().ok_or(CommandError::MissingArgument {
					command: "PLAY",
					argument: "video_id",
				})?;
				Command::Play(VideoId::from(video_id))
			}
			"STOP" => Command::Stop,
			"PLAY_RANDOM" => Command::PlayRandom,
			"PAUSE" => Command::Pause,
			"CONTINUE" => Command::Continue,
			"SHOW_PLAYING" => Command::ShowPlaying,
			"HELP" => Command::Help,
			"EXIT" => Command::Exit,
			other => match NOT_IMPLEMENTED.into_iter().find(|&known| known == other) {
				Some(known) => Command::NotImplemented(known),
				None => return Err(CommandError::Unknown(other.to_string())),
			},
		};

		Ok(command)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn should_parse_commands_case_insensitively() {
		assert_eq!(Ok(Command::Stop), Command::try_from("stop"));
		assert_eq!(Ok(Command::ShowPlaying), Command::try_from("Show_Playing"));
		assert_eq!(Ok(Command::NumberOfVideos), Command::try_from("  NUMBER_OF_VIDEOS  "));
	}

	#[test]
	fn should_keep_the_case_of_video_ids() {
		assert_eq!(
			Ok(Command::Play(VideoId::from("Funny_Dogs_video_id"))),
			Command::try_from("play Funny_Dogs_video_id")
		);
	}

	#[test]
	fn should_require_a_video_id_for_play() {
		assert_eq!(
			Err(CommandError::MissingArgument {
				command: "PLAY",
				argument: "video_id"
			}),
			Command::try_from("PLAY")
		);
	}

	#[test]
	fn should_recognise_not_implemented_commands() {
		assert_eq!(
			Ok(Command::NotImplemented("CREATE_PLAYLIST")),
			Command::try_from("create_playlist my_list")
		);
		assert_eq!(
			Ok(Command::NotImplemented("FLAG_VIDEO")),
			Command::try_from("FLAG_VIDEO amazing_cats_video_id dont_like_cats")
		);
	}

	#[test]
	fn should_reject_unknown_and_empty_commands() {
		assert_eq!(
			Err(CommandError::Unknown("REWIND".to_string())),
			Command::try_from("rewind")
		);
		assert_eq!(Err(CommandError::Empty), Command::try_from("   "));
	}
}
