//! Device preset and zoom state of the design canvas.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Smallest zoom percentage.
pub const MIN_ZOOM: u16 = 50;
/// Largest zoom percentage.
pub const MAX_ZOOM: u16 = 200;
/// Zoom change per step.
pub const ZOOM_STEP: u16 = 10;
/// Zoom percentage at which one logical pixel is one screen pixel.
pub const DEFAULT_ZOOM: u16 = 100;

/// The device frame the canvas previews.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DevicePreset {
    /// 375 x 667
    #[default]
    Phone,
    /// 768 x 1024
    Tablet,
    /// 1280 x 800
    Desktop,
}

/// Logical canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasSize {
    /// Width in logical pixels.
    pub width: u16,
    /// Height in logical pixels.
    pub height: u16,
}

impl DevicePreset {
    /// The logical canvas size for this device.
    #[must_use]
    pub const fn canvas_size(self) -> CanvasSize {
        match self {
            Self::Phone => CanvasSize {
                width: 375,
                height: 667,
            },
            Self::Tablet => CanvasSize {
                width: 768,
                height: 1024,
            },
            Self::Desktop => CanvasSize {
                width: 1280,
                height: 800,
            },
        }
    }
}

/// Device and zoom of the canvas.
///
/// The zoom percentage is always within `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Viewport {
    device: DevicePreset,
    zoom_percent: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            device: DevicePreset::default(),
            zoom_percent: DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    /// Current device preset.
    #[must_use]
    pub const fn device(&self) -> DevicePreset {
        self.device
    }

    /// Current zoom percentage.
    #[must_use]
    pub const fn zoom_percent(&self) -> u16 {
        self.zoom_percent
    }

    /// Zoom as a scale factor (`1.0` at 100%).
    #[must_use]
    pub fn scale(&self) -> f32 {
        f32::from(self.zoom_percent) / 100.0
    }

    /// Zoom in one step, stopping at [`MAX_ZOOM`].
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom_percent.saturating_add(ZOOM_STEP));
    }

    /// Zoom out one step, stopping at [`MIN_ZOOM`].
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom_percent.saturating_sub(ZOOM_STEP));
    }

    /// Return to 100%.
    pub fn zoom_reset(&mut self) {
        self.zoom_percent = DEFAULT_ZOOM;
    }

    /// Set an arbitrary zoom, clamped into range.
    pub fn set_zoom(&mut self, percent: u16) {
        self.zoom_percent = percent.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Switch device. Zoom is unchanged.
    pub fn set_device_preset(&mut self, device: DevicePreset) {
        self.device = device;
    }

    /// Logical size of the canvas for the current device.
    #[must_use]
    pub const fn canvas_size(&self) -> CanvasSize {
        self.device.canvas_size()
    }

    /// On-screen size of the canvas at the current zoom.
    #[must_use]
    pub fn display_size(&self) -> (f32, f32) {
        let size = self.canvas_size();
        let scale = self.scale();
        (f32::from(size.width) * scale, f32::from(size.height) * scale)
    }
}
