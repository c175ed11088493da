//! picascii CLI - Convert images to ASCII/Unicode glyph art

use clap::{CommandFactory, Parser};
use log::{debug, info};
use picascii::{Converter, Options, PicasciiError, RenderMode, Settings};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "picascii",
    allow_negative_numbers = true,
    about = "Convert images to ASCII art",
    after_help = "Rendering modes:\n  simple    Basic grayscale conversion (default)\n  detailed  High detail with a larger glyph set\n  block     Unicode shade blocks\n  edge      Sobel edge detection\n  enhanced  Edges fused with tone\n\nExamples:\n  picascii image.jpg\n  picascii photo.png 150 --mode=block\n  picascii portrait.jpg 120 -m=detailed"
)]
struct Args {
    /// Input image file
    input: Option<PathBuf>,
    /// Output width in characters (first integer wins, default: 100)
    #[arg(value_name = "WIDTH")]
    extra: Vec<String>,
    /// Rendering mode; unknown names fall back to simple
    #[arg(short, long)]
    mode: Option<String>,
    /// Invert the image before rendering
    #[arg(short, long)]
    invert: bool,
    /// JSON settings file providing defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn width(&self) -> Option<u32> {
        self.extra
            .iter()
            .find_map(|a| a.parse::<i64>().ok())
            .map(|w| u32::try_from(w).unwrap_or(0))
    }

    fn options(&self) -> Result<Options, PicasciiError> {
        let base = match &self.config {
            Some(path) => Settings::load(path)?.apply(Options::default()),
            None => Options::default(),
        };
        Ok(Options {
            width: self.width().unwrap_or(base.width),
            mode: self.mode.as_deref().map(RenderMode::from_name_lossy).unwrap_or(base.mode),
            invert: self.invert || base.invert,
        })
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let Some(input) = args.input.clone() else {
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    };

    if !input.exists() {
        eprintln!("Error: Image file '{}' not found.", input.display());
        return ExitCode::FAILURE;
    }

    let result = args.options().and_then(|options| {
        info!("converting {} ({} columns, {} mode)", input.display(), options.width, options.mode);
        debug!("{options:?}");
        Converter::from_options(options).convert_path(&input)
    });

    match result {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: Failed to convert image.");
            eprintln!("Details: {e}");
            ExitCode::FAILURE
        }
    }
}
