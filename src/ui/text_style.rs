//! Mapping from the session's display settings to egui text styling.
//!
//! The session stores font family and color as names ("Arial", "Black").
//! egui ships a proportional and a monospace family only, so families are
//! mapped onto one of those two.

use egui::{Color32, FontFamily, FontId};

/// Font families offered in the View menu.
pub const FONT_FAMILIES: &[&str] = &[
    "Arial",
    "Calibri",
    "Tahoma",
    "Times New Roman",
    "Verdana",
    "Consolas",
    "Courier New",
    "Lucida Console",
];

/// Font colors offered in the View menu.
pub const FONT_COLORS: &[&str] = &[
    "Black", "Gray", "Blue", "Red", "Green", "Purple", "Orange", "White",
];

const MONOSPACE_FAMILIES: &[&str] = &["consolas", "courier new", "lucida console", "monospace"];

/// egui family for a named font.
pub fn font_family(name: &str) -> FontFamily {
    let lower = name.trim().to_lowercase();
    if MONOSPACE_FAMILIES.contains(&lower.as_str()) {
        FontFamily::Monospace
    } else {
        FontFamily::Proportional
    }
}

/// Font for the text area. Sizes below 1 are drawn at 1 point.
pub fn font_id(size: i32, family: &str) -> FontId {
    FontId::new(size.max(1) as f32, font_family(family))
}

/// Parse a named color. Unknown names give `None`, and the caller should
/// fall back to the theme's text color.
pub fn font_color(name: &str) -> Option<Color32> {
    let color = match name.trim().to_lowercase().as_str() {
        "black" => Color32::BLACK,
        "gray" | "grey" => Color32::GRAY,
        "blue" => Color32::from_rgb(0, 0, 255),
        "red" => Color32::from_rgb(255, 0, 0),
        "green" => Color32::from_rgb(0, 128, 0),
        "purple" => Color32::from_rgb(128, 0, 128),
        "orange" => Color32::from_rgb(255, 165, 0),
        "white" => Color32::WHITE,
        _ => return None,
    };
    Some(color)
}
