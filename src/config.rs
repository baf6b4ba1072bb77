use std::{fs, path::Path};

use image::ImageFormat;
use itertools::Itertools;
use json::JsonValue;

use crate::{
    dithering::{ModulatedDiffusion, NoiseSeed, NoiseStrategy},
    error::{ModHalftoneError, Result},
};

const STRATEGY_NAMES: [&str; 3] = ["auto", "seq", "par"];

/// Optional knobs for one run. Every field has a default, an empty `{}`
/// config behaves like no config at all.
///
/// ```json
/// { "seed": 42, "noise_strategy": "par", "format": "png" }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessConfig {
    /// noise source, entropy unless a `seed` is given
    pub seed: NoiseSeed,
    /// `None` picks per image shape
    pub noise_strategy: Option<NoiseStrategy>,
    /// `None` infers the encoder from the output path
    pub format: Option<ImageFormat>,
}

impl ProcessConfig {
    fn to_config(json_string: &str) -> Result<ProcessConfig> {
        let json = json::parse(json_string)?;
        if !json.is_object() {
            return Err(config_error("root must be an object"));
        }

        let seed = match &json["seed"] {
            JsonValue::Null => NoiseSeed::Entropy,
            value => match value.as_u64() {
                Some(seed) => NoiseSeed::Fixed(seed),
                None => return Err(config_error("seed must be a non-negative integer")),
            },
        };

        let noise_strategy = match &json["noise_strategy"] {
            JsonValue::Null => None,
            value => match value.as_str() {
                Some("auto") => None,
                Some("seq") => Some(NoiseStrategy::Seq),
                Some("par") => Some(NoiseStrategy::Par),
                _ => {
                    return Err(config_error(&format!(
                        "noise_strategy must be one of {}",
                        STRATEGY_NAMES.iter().join(", ")
                    )));
                }
            },
        };

        let format = match &json["format"] {
            JsonValue::Null => None,
            value => match value.as_str().and_then(ImageFormat::from_extension) {
                Some(format) if format.can_write() => Some(format),
                _ => return Err(config_error("format must name a writable image extension")),
            },
        };

        Ok(ProcessConfig {
            seed,
            noise_strategy,
            format,
        })
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let json_string = fs::read_to_string(path)?;
        ProcessConfig::to_config(&json_string)
    }

    /// Halftoning transform configured by this run.
    pub fn transform(&self) -> ModulatedDiffusion {
        let transform = ModulatedDiffusion::new(self.seed);
        match self.noise_strategy {
            Some(strategy) => transform.with_strategy(strategy),
            None => transform,
        }
    }
}

fn config_error(msg: &str) -> ModHalftoneError {
    ModHalftoneError::Config(msg.to_string())
}
