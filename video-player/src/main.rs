use anyhow::Context;
use clap::Parser;
use video_player::commandline::Commandline;

fn main() -> anyhow::Result<()> {
	let commandline = Commandline::parse();
	commandline.run().context("Video player failed")
}
