use raylib::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1280;          // Default window width
pub const WINDOW_HEIGHT: i32 = 720;          // Default window height
pub const FPS: u32 = 60;                     // Frames per second
pub const REFERENCE_HEIGHT: f32 = 720.0;     // Font sizes below are authored for this height

pub const APP_TITLE: &str = "PLDM Firmware Update Explainer";
pub const FOOTER_HINT: &str = "Use Arrow Keys for Navigation";

// Layout proportions (pixels at REFERENCE_HEIGHT)
pub const HEADER_HEIGHT: f32 = 56.0;
pub const FOOTER_HEIGHT: f32 = 28.0;
pub const CARD_MARGIN: f32 = 32.0;
pub const CARD_PADDING: f32 = 36.0;
pub const CARD_MAX_WIDTH: f32 = 1152.0;
pub const NAV_BAR_HEIGHT: f32 = 64.0;
pub const NAV_BUTTON_RADIUS: f32 = 22.0;
pub const NAV_INDICATOR_WIDTH: f32 = 80.0;
pub const NAV_SPACING: f32 = 16.0;

// Font sizes
pub const FONT_APP_TITLE: f32 = 24.0;
pub const FONT_TITLE: f32 = 40.0;
pub const FONT_SUBTITLE: f32 = 22.0;
pub const FONT_BODY: f32 = 18.0;
pub const FONT_SMALL: f32 = 14.0;
pub const FONT_MONO: f32 = 12.0;
pub const FONT_INDICATOR: f32 = 20.0;
pub const FONT_FOOTER: f32 = 12.0;
pub const MIN_FONT: i32 = 10;

// Palette
pub const BACKGROUND: Color = Color::new(17, 24, 39, 255);
pub const SURFACE: Color = Color::new(31, 41, 55, 255);
pub const SURFACE_RAISED: Color = Color::new(55, 65, 81, 255);
pub const BORDER: Color = Color::new(55, 65, 81, 255);
pub const BORDER_MUTED: Color = Color::new(107, 114, 128, 255);
pub const TEXT: Color = Color::new(243, 244, 246, 255);
pub const TEXT_SOFT: Color = Color::new(209, 213, 219, 255);
pub const TEXT_MUTED: Color = Color::new(156, 163, 175, 255);
pub const TEXT_FAINT: Color = Color::new(107, 114, 128, 255);
pub const ACCENT: Color = Color::new(34, 211, 238, 255);
pub const ACCENT_HOVER: Color = Color::new(6, 182, 212, 204);
pub const ACCENT_DEEP: Color = Color::new(21, 94, 117, 255);
pub const INDIGO: Color = Color::new(129, 140, 248, 255);
pub const INDIGO_DEEP: Color = Color::new(55, 48, 163, 255);
pub const AMBER: Color = Color::new(251, 191, 36, 255);
pub const GREEN: Color = Color::new(74, 222, 128, 255);
pub const BUTTON: Color = Color::new(55, 65, 81, 204);
