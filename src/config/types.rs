//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Smallest canvas edge that still shows the whole shape.
pub const MIN_CANVAS_SIZE: i32 = 250;
pub const MAX_CANVAS_SIZE: i32 = 4096;

/// Canvas settings.
///
/// The shapes use fixed coordinates, so the canvas only controls how much
/// space surrounds them and what fills it.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 250 - 4096)
    #[serde(default = "default_canvas_size")]
    pub width: i32,

    /// Canvas height in pixels (valid range: 250 - 4096)
    #[serde(default = "default_canvas_size")]
    pub height: i32,

    /// Background fill - either a named color or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

/// Output settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Where rendered PNGs are written when no path is given on the command line
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_canvas_size() -> i32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_output_path() -> PathBuf {
    PathBuf::from("shape.png")
}
