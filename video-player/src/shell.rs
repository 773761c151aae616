use crate::command::{Command, CommandError, HELP_TEXT};
use crate::configuration::OutputFormat;
use crate::player::VideoPlayer;
use crate::player::outcome::Outcome;
use serde_json::json;
use std::io::{BufRead, Write};
use tracing::debug;

const GREETING: &str = "Welcome to the video player, what would you like to do?
Enter HELP for a list of available commands or EXIT to terminate.";
const FAREWELL: &str = "Video player is now terminated its execution. Thank you and goodbye!";
const PROMPT: &str = "> ";

/// Line based front-end: reads commands, drives the player and writes back what happened.
pub struct Shell {
	player: VideoPlayer,
	output_format: OutputFormat,
}

#[derive(Debug, PartialEq)]
enum Response {
	Outcomes(Vec<Outcome>),
	Help,
	NotImplemented(&'static str),
	InvalidCommand(CommandError),
}

impl Shell {
	pub fn new(player: VideoPlayer, output_format: OutputFormat) -> Self {
		Self { player, output_format }
	}

	pub fn player(&self) -> &VideoPlayer {
		&self.player
	}

	/// Runs until `EXIT` or the end of `input`.
	pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> std::io::Result<()> {
		if self.output_format == OutputFormat::Text {
			writeln!(output, "{GREETING}")?;
		}

		let mut line = String::new();
		loop {
			if self.output_format == OutputFormat::Text {
				write!(output, "{PROMPT}")?;
				output.flush()?;
			}

			line.clear();
			if input.read_line(&mut line)? == 0 {
				break;
			}

			let response = match Command::try_from(line.as_str()) {
				Ok(Command::Exit) => break,
				Ok(command) => self.execute(command),
				Err(error) => {
					debug!(line = line.trim(), "Invalid command: {error}");
					Response::InvalidCommand(error)
				}
			};
			self.render(&response, &mut output)?;
		}

		if self.output_format == OutputFormat::Text {
			writeln!(output, "{FAREWELL}")?;
		}
		output.flush()
	}

	fn execute(&mut self, command: Command) -> Response {
		debug!(?command, "Executing command.");
		let outcomes = match command {
			Command::NumberOfVideos => vec![self.player.number_of_videos()],
			Command::ShowAllVideos => vec![self.player.show_all_videos()],
			Command::Play(video_id) => self.player.play(&video_id),
			Command::Stop => vec![self.player.stop()],
			Command::PlayRandom => self.player.play_random(),
			Command::Pause => vec![self.player.pause()],
			Command::Continue => vec![self.player.resume()],
			Command::ShowPlaying => vec![self.player.show_current()],
			Command::Help => return Response::Help,
			Command::NotImplemented(name) => return Response::NotImplemented(name),
			Command::Exit => return Response::Outcomes(Vec::new()),
		};

		for outcome in &outcomes {
			if let Some(error) = outcome.error() {
				debug!(?error, "Operation rejected.");
			}
		}
		Response::Outcomes(outcomes)
	}

	fn render(&self, response: &Response, output: &mut impl Write) -> std::io::Result<()> {
		match self.output_format {
			OutputFormat::Text => render_text(response, output),
			OutputFormat::Json => render_json(response, output),
		}
	}
}

fn render_text(response: &Response, output: &mut impl Write) -> std::io::Result<()> {
	match response {
		Response::Outcomes(outcomes) => {
			for outcome in outcomes {
				writeln!(output, "{outcome}")?;
			}
			Ok(())
		}
		Response::Help => writeln!(output, "{HELP_TEXT}"),
		Response::NotImplemented(name) => writeln!(output, "{name} is not implemented"),
		Response::InvalidCommand(error) => writeln!(output, "{error}"),
	}
}

fn render_json(response: &Response, output: &mut impl Write) -> std::io::Result<()> {
	let values = match response {
		Response::Outcomes(outcomes) => outcomes.iter().map(serde_json::to_value).collect::<Result<Vec<_>, _>>()?,
		Response::Help => vec![json!({"type": "help", "message": HELP_TEXT})],
		Response::NotImplemented(name) => vec![json!({"type": "not_implemented", "command": name})],
		Response::InvalidCommand(error) => vec![json!({"type": "invalid_command", "message": error.to_string()})],
	};

	for value in values {
		serde_json::to_writer(&mut *output, &value)?;
		writeln!(output)?;
	}
	Ok(())
}
