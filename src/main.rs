use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;

use nova::app::App;
use nova::config::Settings;
use nova::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "nova", about = "Small keyboard arcade shooter")]
struct Args {
    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Directory for rolling log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Start fullscreen regardless of saved settings.
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let mut settings = Settings::load();
    if args.fullscreen {
        settings.window.fullscreen = true;
    }

    let conf = Conf {
        window_title: "nova".to_owned(),
        window_width: settings.window.width,
        window_height: settings.window.height,
        fullscreen: settings.window.fullscreen,
        ..Default::default()
    };

    macroquad::Window::from_config(conf, run(settings));
    Ok(())
}

async fn run(settings: Settings) {
    info!("starting nova");
    let mut app = App::new(&settings);

    loop {
        app.frame();
        next_frame().await;
    }
}
