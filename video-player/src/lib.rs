pub mod command;
pub mod commandline;
pub mod configuration;
pub mod context;
pub mod error;
pub mod library;
pub mod player;
pub mod shell;
pub mod video;
