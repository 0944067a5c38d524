//! Sizing, color, and styling constants for the WishMaker screen.

/// Horizontal inset of the title, description, and slider panel
pub const SIDE_INSET: f32 = 20.0;

/// Gap above the title
pub const TITLE_TOP: f32 = 30.0;

/// Title font size
pub const TITLE_FONT: f32 = 32.0;

/// Description font size
pub const DESCRIPTION_FONT: f32 = 16.0;

/// Corner radius of the slider panel
pub const PANEL_RADIUS: f32 = 12.0;

/// Inner padding of the slider panel
pub const PANEL_PADDING: f32 = 16.0;

/// Vertical spacing between sliders in the panel
pub const PANEL_SPACING: f32 = 16.0;

/// 1D slider track height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Thumb radius on 1D sliders
pub const THUMB_RADIUS: f64 = 7.0;

/// Label font size above each slider
pub const LABEL_FONT: f32 = 14.0;

/// Button height
pub const BUTTON_HEIGHT: f32 = 44.0;

/// Corner radius of buttons
pub const BUTTON_RADIUS: f32 = 8.0;

/// Spacing between stacked buttons
pub const BUTTON_SPACING: f32 = 10.0;

/// Share of the window width the button stack takes
pub const BUTTON_STACK_WIDTH_PCT: f64 = 80.0;

/// Gap below the button stack
pub const BUTTON_STACK_BOTTOM: f32 = 40.0;

/// Hex input field width
pub const HEX_INPUT_WIDTH: f32 = 120.0;

/// Input font size
pub const INPUT_FONT: f32 = 16.0;

/// Text shown in the empty hex field
pub const HEX_PLACEHOLDER: &str = "#FF00FF";

/// Button background (system blue)
pub const BUTTON_BLUE: (u8, u8, u8) = (0, 122, 255);
