use std::{fs::File, io::BufReader, path::Path};

use crate::{
    animation::{driver::TimingSpec, ease::Ease},
    foundation::core::{Canvas, Millis},
    foundation::error::{WordrankError, WordrankResult},
    layout::scales::LayoutSpec,
};

/// Layout and animation settings for one visualization.
///
/// Every key is optional in JSON; missing keys take the defaults below. Keys are
/// camelCase (`leftPad`, `exitDurationMs`, ...).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VizConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Canvas height in pixels. Words sit on the horizontal centre line.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Distance from the left edge to the top-ranked word.
    #[serde(default = "default_pad")]
    pub left_pad: f64,
    /// Distance from the right edge to the last-ranked word.
    #[serde(default = "default_pad")]
    pub right_pad: f64,
    /// `[min, max]` font size for the least and most frequent word.
    #[serde(default = "default_font_range")]
    pub font_range: [f64; 2],
    /// Fade-out length for words leaving the ranking.
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: u64,
    /// Length of enter and update transitions.
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: u64,
    #[serde(default = "default_enter_ease")]
    pub enter_ease: Ease,
    #[serde(default = "default_in_out_ease")]
    pub update_ease: Ease,
    #[serde(default = "default_in_out_ease")]
    pub exit_ease: Ease,
    /// Font size words grow from and shrink to.
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f64,
}

fn default_width() -> f64 {
    1000.0
}

fn default_height() -> f64 {
    380.0
}

fn default_pad() -> f64 {
    150.0
}

fn default_font_range() -> [f64; 2] {
    [24.0, 72.0]
}

fn default_exit_duration_ms() -> u64 {
    600
}

fn default_transition_duration_ms() -> u64 {
    900
}

fn default_enter_ease() -> Ease {
    Ease::CubicOut
}

fn default_in_out_ease() -> Ease {
    Ease::CubicInOut
}

fn default_min_font_size() -> f64 {
    1.0
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            left_pad: default_pad(),
            right_pad: default_pad(),
            font_range: default_font_range(),
            exit_duration_ms: default_exit_duration_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            enter_ease: default_enter_ease(),
            update_ease: default_in_out_ease(),
            exit_ease: default_in_out_ease(),
            min_font_size: default_min_font_size(),
        }
    }
}

impl VizConfig {
    /// Parse a config from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> WordrankResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| WordrankError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> WordrankResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WordrankResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WordrankError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> WordrankResult<()> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(WordrankError::config(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, v) in [("leftPad", self.left_pad), ("rightPad", self.right_pad)] {
            if !v.is_finite() || v < 0.0 {
                return Err(WordrankError::config(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.left_pad + self.right_pad >= self.width {
            return Err(WordrankError::config(
                "leftPad + rightPad must be smaller than width",
            ));
        }
        let [f_min, f_max] = self.font_range;
        if !f_min.is_finite() || !f_max.is_finite() || f_min <= 0.0 || f_min > f_max {
            return Err(WordrankError::config(
                "fontRange must be finite with 0 < min <= max",
            ));
        }
        if !self.min_font_size.is_finite() || self.min_font_size <= 0.0 {
            return Err(WordrankError::config(
                "minFontSize must be finite and > 0",
            ));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn layout(&self) -> LayoutSpec {
        LayoutSpec {
            canvas: self.canvas(),
            left_pad: self.left_pad,
            right_pad: self.right_pad,
            font_range: self.font_range,
        }
    }

    pub fn timing(&self) -> TimingSpec {
        TimingSpec {
            exit_duration: Millis(self.exit_duration_ms),
            transition_duration: Millis(self.transition_duration_ms),
            enter_ease: self.enter_ease,
            update_ease: self.update_ease,
            exit_ease: self.exit_ease,
            min_font_size: self.min_font_size,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
