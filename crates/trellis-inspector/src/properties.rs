//! The properties panel beside the canvas.
//!
//! Values are kept as the strings the user typed, the way the panel's text
//! fields hold them. Only opacity, driven by a 0-100 slider, is numeric.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::InspectorError;

/// A field of the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum PropertyField {
    /// Layout: width.
    Width,
    /// Layout: height.
    Height,
    /// Layout: padding.
    Padding,
    /// Layout: margin.
    Margin,
    /// Appearance: background color.
    Background,
    /// Appearance: border radius.
    BorderRadius,
    /// Appearance: opacity percentage.
    Opacity,
    /// Text: font size.
    FontSize,
    /// Text: color.
    Color,
}

/// Current values of the properties panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasProperties {
    /// Layout width.
    pub width: String,
    /// Layout height.
    pub height: String,
    /// Padding in pixels.
    pub padding: String,
    /// Margin in pixels.
    pub margin: String,
    /// Background color.
    pub background: String,
    /// Border radius in pixels.
    pub border_radius: String,
    /// Opacity percentage, 0-100.
    pub opacity: u8,
    /// Font size in pixels.
    pub font_size: String,
    /// Text color.
    pub color: String,
}

impl Default for CanvasProperties {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            height: "auto".to_string(),
            padding: "20".to_string(),
            margin: "0".to_string(),
            background: "#f0e6dc".to_string(),
            border_radius: "0".to_string(),
            opacity: 100,
            font_size: "16".to_string(),
            color: "#FFFFFF".to_string(),
        }
    }
}

impl CanvasProperties {
    /// The current value of `field`, as the panel displays it.
    #[must_use]
    pub fn get(&self, field: PropertyField) -> String {
        match field {
            PropertyField::Width => self.width.clone(),
            PropertyField::Height => self.height.clone(),
            PropertyField::Padding => self.padding.clone(),
            PropertyField::Margin => self.margin.clone(),
            PropertyField::Background => self.background.clone(),
            PropertyField::BorderRadius => self.border_radius.clone(),
            PropertyField::Opacity => self.opacity.to_string(),
            PropertyField::FontSize => self.font_size.clone(),
            PropertyField::Color => self.color.clone(),
        }
    }

    /// Update one field. Other fields are left alone.
    ///
    /// # Errors
    /// Returns [`InspectorError::InvalidProperty`] if opacity is not an
    /// integer between 0 and 100; the old value is kept.
    pub fn set(&mut self, field: PropertyField, value: &str) -> Result<(), InspectorError> {
        let value = value.trim();
        let slot = match field {
            PropertyField::Opacity => {
                self.opacity = parse_opacity(value)?;
                return Ok(());
            }
            PropertyField::Width => &mut self.width,
            PropertyField::Height => &mut self.height,
            PropertyField::Padding => &mut self.padding,
            PropertyField::Margin => &mut self.margin,
            PropertyField::Background => &mut self.background,
            PropertyField::BorderRadius => &mut self.border_radius,
            PropertyField::FontSize => &mut self.font_size,
            PropertyField::Color => &mut self.color,
        };
        value.clone_into(slot);
        Ok(())
    }

    /// Apply a `field=value` assignment, e.g. `border-radius=8`.
    ///
    /// # Errors
    /// Returns [`InspectorError::UnknownProperty`] for an unknown field name
    /// or a missing `=`, and whatever [`CanvasProperties::set`] returns.
    pub fn apply(&mut self, assignment: &str) -> Result<(), InspectorError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| InspectorError::UnknownProperty(assignment.to_string()))?;
        let field = name
            .trim()
            .parse::<PropertyField>()
            .map_err(|_| InspectorError::UnknownProperty(name.trim().to_string()))?;
        self.set(field, value)
    }
}

fn parse_opacity(value: &str) -> Result<u8, InspectorError> {
    let invalid = |reason| InspectorError::InvalidProperty {
        field: PropertyField::Opacity,
        value: value.to_string(),
        reason,
    };
    let opacity: u8 = value.parse().map_err(|_| invalid("not a whole number"))?;
    if opacity > 100 {
        return Err(invalid("must be between 0 and 100"));
    }
    Ok(opacity)
}
