//! monodither CLI - Dither an image down to black and white

use clap::{Parser, ValueEnum};
use image::imageops::FilterType;
use log::error;
use monodither::{Ditherer, Mode, DEFAULT_WIDTH};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "monodither", about = "Dither an image to a black and white PNG")]
struct Args {
    /// Input image file (JPEG, PNG, ...)
    input: PathBuf,
    /// Output PNG file
    output: PathBuf,
    /// Resample to this width before dithering, keeping the aspect ratio
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Dither at the source resolution
    #[arg(long, conflicts_with = "width")]
    no_resize: bool,
    /// Conversion to apply
    #[arg(short, long, value_enum, default_value_t = ModeArg::Atkinson)]
    mode: ModeArg,
    /// Resampling filter
    #[arg(short, long, value_enum, default_value_t = FilterArg::Lanczos3)]
    filter: FilterArg,
    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Atkinson,
    AverageMono,
    AverageThreshold,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Atkinson => Mode::Atkinson,
            ModeArg::AverageMono => Mode::AverageMono,
            ModeArg::AverageThreshold => Mode::AverageThreshold,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for FilterType {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => FilterType::Nearest,
            FilterArg::Triangle => FilterType::Triangle,
            FilterArg::CatmullRom => FilterType::CatmullRom,
            FilterArg::Gaussian => FilterType::Gaussian,
            FilterArg::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn main() {
    // Missing or extra positionals exit here with usage
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let ditherer = Ditherer::new()
        .with_width((!args.no_resize).then_some(args.width))
        .with_filter(args.filter.into())
        .with_mode(args.mode.into());

    if let Err(e) = ditherer.convert_file(&args.input, &args.output) {
        error!("{e}");
        std::process::exit(1);
    }
}
