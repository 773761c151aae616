use crate::configuration::ConfigurationError;
use crate::library::error::LibraryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VideoPlayerError {
	#[error("Failed to load configuration: {0}")]
	Configuration(#[from] ConfigurationError),
	#[error("Failed to load video library: {0}")]
	Library(#[from] LibraryError),
	#[error("Invalid log filters: {0}")]
	LogFilters(#[from] tracing_subscriber::filter::ParseError),
	#[error("IO error while running the shell: {0}")]
	Shell(#[from] std::io::Error),
}
