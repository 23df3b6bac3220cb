#![warn(
    clippy::all,
    // clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    // clippy::unwrap_used
)]
use app::App;
use clap::Parser;

use logger::LogExt;

mod app;
mod cli;
pub mod config;
pub mod edit;
pub mod gateway;
mod logger;
pub mod views;
pub mod widgets;

fn main() -> iced::Result {
    logger::init();

    let cli = cli::Cli::parse();
    let Ok(mut config) = config::init(cli.config).log_error("Could not load the configuration file") else {
        std::process::exit(1);
    };
    let Ok(selection) = config.selection().log_error("Invalid dropdown configuration") else {
        std::process::exit(1);
    };

    if let Some(video_id) = cli.video {
        config.user.selected = Some(video_id);
    }

    log::debug!("{config:?}");

    iced::application::application("Edit video", App::update, App::view)
        .subscription(App::subscription)
        .theme(|_| iced::Theme::TokyoNight)
        .run_with(move || App::new(config, selection))
}
