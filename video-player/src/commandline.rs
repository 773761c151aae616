use crate::configuration::Configuration;
use crate::context::ApplicationContext;
use crate::error::VideoPlayerError;
use crate::shell::Shell;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
pub struct Commandline {
	#[clap(short = 'c', long = "config-file", default_value = "configuration.toml")]
	pub configuration_file_path: String,
	/// Overrides the library path from the configuration file
	#[clap(short = 'l', long = "library")]
	pub library_path: Option<PathBuf>,
	#[clap(subcommand)]
	pub command: Option<BaseCommand>,
}

#[derive(clap::Subcommand, Default)]
pub enum BaseCommand {
	/// Start the interactive video player
	#[default]
	Run,
	/// Print the configuration
	Configuration,
}

impl Commandline {
	pub fn run(self) -> Result<(), VideoPlayerError> {
		let mut configuration = Configuration::from_file(&self.configuration_file_path)?;
		if let Some(library_path) = self.library_path {
			configuration.library_path = library_path;
		}

		tracing_subscriber::fmt()
			.with_env_filter(EnvFilter::try_new(&configuration.log_filters)?)
			.with_writer(std::io::stderr)
			.init();

		let base_command = self.command.unwrap_or_default();
		match base_command {
			BaseCommand::Run => {
				let application_context = ApplicationContext::new(configuration)?;
				info!(
					"Starting video player with library '{}'.",
					application_context.configuration.library_path.display()
				);
				let mut shell = Shell::new(
					application_context.video_player(),
					application_context.configuration.output_format,
				);
				shell.run(std::io::stdin().lock(), std::io::stdout().lock())?;
			}
			BaseCommand::Configuration => println!("{configuration:?}"),
		}
		Ok(())
	}
}
