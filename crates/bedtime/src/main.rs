use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod gemini;
mod prelude;
mod serve;
mod story;
mod storyteller;

#[cfg(test)]
mod testing;

pub use crate::error::Error;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Soothing, magical bedtime stories written by Gemini"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BEDTIME_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Write bedtime stories
    Story(crate::story::App),

    /// Serve the story API over HTTP
    Serve(crate::serve::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Story(sub_app) => crate::story::run(sub_app, app.global).await,
        SubCommands::Serve(sub_app) => crate::serve::run(sub_app, app.global).await,
    }
}
