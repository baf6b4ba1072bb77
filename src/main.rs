use std::{path::PathBuf, time::Instant};

use clap::Parser;
use modhalftone::{
    config::ProcessConfig,
    error::ModHalftoneError,
    run,
    texture::{Texture, TextureRef},
};

#[derive(Parser)]
#[command(
    name = "modhalftone",
    about = "Halftone a grayscale image with threshold-modulated error diffusion"
)]
struct Args {
    /// Input image, color images are reduced to luma
    input: PathBuf,
    /// Output image, the encoder follows the extension unless the config names a format
    output: PathBuf,
    /// Optional JSON process config
    config: Option<PathBuf>,
}

fn main() -> Result<(), ModHalftoneError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ProcessConfig::read_config(path)?,
        None => ProcessConfig::default(),
    };
    log::debug!("process config: {config:?}");

    let image = Texture::from_luma8_image(&args.input)?;
    log::info!(
        "read {} ({}x{})",
        args.input.display(),
        image.width(),
        image.height()
    );

    let start = Instant::now();
    let halftone = run(&config, &image);
    log::info!("elapsed: {:.3?}", start.elapsed());

    halftone.write_luma8_image(&args.output, config.format)?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}
