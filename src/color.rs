//! RgbaColor — the renderable color handed to the view layer.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range.

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbaColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl RgbaColor {
    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl RgbaColor {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Create from f64 RGBA (all 0.0–1.0).
    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to 0–255 RGB tuple.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }

    /// Format as 6-char uppercase hex (RRGGBB, no `#` prefix). Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Relative luminance approximation, used to pick readable text on top.
    pub fn is_light(&self) -> bool {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b > 0.6
    }
}

fn to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_opaque_white() {
        let c = RgbaColor::default();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn magenta_formats_as_hex() {
        assert_eq!(RgbaColor::from_rgb(255, 0, 255).to_hex(), "FF00FF");
    }

    #[test]
    fn to_rgb_rounds_to_nearest_byte() {
        let c = RgbaColor::from_rgba(0.5, 0.25, 1.0, 1.0);
        assert_eq!(c.to_rgb(), (128, 64, 255));
    }

    #[test]
    fn light_and_dark() {
        assert!(RgbaColor::WHITE.is_light());
        assert!(!RgbaColor::from_rgb(0, 0, 128).is_light());
    }
}
