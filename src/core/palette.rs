//! Load-to-color mapping used to shade the workload matrix.
//!
//! A palette is an ordered list of breakpoints `(threshold, color)`. Loads
//! between two adjacent thresholds are interpolated channel by channel;
//! loads outside the table take the color of the nearest end.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::workload::MAX_LOAD;
use crate::utils::path::expand_tilde;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (hex digits in either case).
    pub fn from_hex(s: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;

        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        Ok(Rgb::from_u32(value))
    }

    pub fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    pub fn to_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived luminance in [0, 1].
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Channels as fractions, for renderers working in [0, 1].
    pub fn to_unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn mix(from: Rgb, to: Rgb, ratio: f64) -> Rgb {
        let channel = |a: u8, b: u8| (b as f64 * ratio + a as f64 * (1.0 - ratio)).round() as u8;
        Rgb {
            r: channel(from.r, to.r),
            g: channel(from.g, to.g),
            b: channel(from.b, to.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Readable foreground for a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    pub fn as_hex(&self) -> &'static str {
        match self {
            TextColor::Black => "#000000",
            TextColor::White => "#FFFFFF",
        }
    }

    pub fn rgb(&self) -> Rgb {
        match self {
            TextColor::Black => Rgb::BLACK,
            TextColor::White => Rgb::WHITE,
        }
    }
}

/// Black on light backgrounds (luminance > 0.5), white otherwise.
pub fn text_color_for(background: Rgb) -> TextColor {
    if background.luminance() > 0.5 {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// String entry point for [`text_color_for`].
pub fn text_color_for_hex(background: &str) -> AppResult<&'static str> {
    Ok(text_color_for(Rgb::from_hex(background)?).as_hex())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub threshold: i32,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    breakpoints: Vec<Breakpoint>,
}

/// Built-in table, white for an idle month up to dark red for a full one.
const DEFAULT_BREAKPOINTS: [(i32, u32); 7] = [
    (0, 0xFFFFFF),
    (5, 0xD9F2D0),
    (10, 0xA8DC8C),
    (15, 0xFFE699),
    (20, 0xF8B26A),
    (25, 0xE8564A),
    (31, 0x8B0000),
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            breakpoints: DEFAULT_BREAKPOINTS
                .iter()
                .map(|&(threshold, hex)| Breakpoint {
                    threshold,
                    color: Rgb::from_u32(hex),
                })
                .collect(),
        }
    }
}

impl Palette {
    /// Build a palette, rejecting empty tables and thresholds that do not
    /// strictly increase.
    pub fn new(breakpoints: Vec<Breakpoint>) -> AppResult<Self> {
        if breakpoints.is_empty() {
            return Err(AppError::Palette("palette has no breakpoints".into()));
        }

        for pair in breakpoints.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(AppError::Palette(format!(
                    "thresholds must be strictly increasing ({} then {})",
                    pair[0].threshold, pair[1].threshold
                )));
            }
        }

        Ok(Self { breakpoints })
    }

    /// Parse a JSON object `{"0": "#FFFFFF", "10": "#A8DC8C", ...}`.
    /// Keys are read in the order they are written.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| AppError::Palette(format!("invalid JSON: {e}")))?;

        let map: &Map<String, Value> = value
            .as_object()
            .ok_or_else(|| AppError::Palette("palette must be a JSON object".into()))?;

        let mut breakpoints = Vec::with_capacity(map.len());
        for (key, color) in map {
            let threshold: i32 = key
                .trim()
                .parse()
                .map_err(|_| AppError::Palette(format!("threshold '{key}' is not an integer")))?;

            let hex = color.as_str().ok_or_else(|| {
                AppError::Palette(format!("color for threshold {key} must be a string"))
            })?;

            let color = Rgb::from_hex(hex)
                .map_err(|_| AppError::Palette(format!("invalid color '{hex}' for {key}")))?;

            breakpoints.push(Breakpoint { threshold, color });
        }

        Palette::new(breakpoints)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Palette(format!("cannot read {}: {e}", path.display()))
        })?;
        Palette::from_json_str(&content)
    }

    /// Palette configured in `cfg`, or the built-in one.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        match cfg.palette.as_deref() {
            Some(p) if !p.trim().is_empty() => Palette::load(&expand_tilde(p)),
            _ => Ok(Palette::default()),
        }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    /// Background color for `load`.
    pub fn color_for(&self, load: i32) -> Rgb {
        // `new` guarantees at least one breakpoint
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];

        if load <= first.threshold {
            return first.color;
        }
        if load >= last.threshold {
            return last.color;
        }

        for pair in self.breakpoints.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if load >= lo.threshold && load < hi.threshold {
                let span = i64::from(hi.threshold) - i64::from(lo.threshold);
                let ratio = (i64::from(load) - i64::from(lo.threshold)) as f64 / span as f64;
                return Rgb::mix(lo.color, hi.color, ratio);
            }
        }

        first.color
    }

    /// Background and text color for a matrix cell.
    pub fn cell_colors(&self, load: i32) -> (Rgb, TextColor) {
        let bg = self.color_for(load);
        (bg, text_color_for(bg))
    }

    /// Describe a table that does not span the whole 0..=31 load range.
    pub fn coverage_warning(&self) -> Option<String> {
        let first = self.breakpoints[0].threshold;
        let last = self.breakpoints[self.breakpoints.len() - 1].threshold;

        match (first > 0, last < MAX_LOAD) {
            (false, false) => None,
            (true, false) => Some(format!("palette starts at {first}, loads below are clamped")),
            (false, true) => Some(format!("palette ends at {last}, loads above are clamped")),
            (true, true) => Some(format!(
                "palette only covers {first}..{last}, other loads are clamped"
            )),
        }
    }
}
