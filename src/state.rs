//! The color state behind the WishMaker screen.
//!
//! Holds three channels in 0.0–1.0 and applies the events the view emits.

use rand::Rng;
use tracing::{debug, warn};

use crate::color::RgbaColor;
use crate::hex::{parse_hex, HexParseError};

/// One of the three color channels a slider controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Slider order, top to bottom.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }
}

/// Something the user did that changes the color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorEvent {
    SetChannel(Channel, f64),
    Randomize,
    ParseHex(String),
}

/// Current background color as three normalized channels.
///
/// Every channel stays within 0.0–1.0: `set_channel` clamps, and the other
/// mutators only ever write values already in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    red: f64,
    green: f64,
    blue: f64,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

impl ColorState {
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    /// Set one channel. Values outside 0.0–1.0 are clamped; NaN is ignored.
    pub fn set_channel(&mut self, channel: Channel, value: f64) {
        if value.is_nan() {
            warn!(?channel, "ignoring NaN channel value");
            return;
        }
        let value = value.clamp(0.0, 1.0);
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        debug!(?channel, value, "channel set");
    }

    /// The renderable color, always fully opaque.
    pub fn current_color(&self) -> RgbaColor {
        RgbaColor::from_rgba(self.red, self.green, self.blue, 1.0)
    }

    /// Replace all three channels with uniform random values.
    pub fn randomize(&mut self) -> RgbaColor {
        self.randomize_with(&mut rand::thread_rng())
    }

    /// Like [`randomize`](Self::randomize), drawing from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RgbaColor {
        self.red = rng.gen_range(0.0..=1.0);
        self.green = rng.gen_range(0.0..=1.0);
        self.blue = rng.gen_range(0.0..=1.0);
        let color = self.current_color();
        debug!(hex = %color.to_hex(), "randomized");
        color
    }

    /// Parse `raw` as a hex code and adopt it. On error the state is untouched.
    pub fn apply_hex(&mut self, raw: &str) -> Result<RgbaColor, HexParseError> {
        let (red, green, blue) = parse_hex(raw).inspect_err(|err| {
            warn!(input = raw, %err, "rejected hex color");
        })?;
        self.red = red;
        self.green = green;
        self.blue = blue;
        let color = self.current_color();
        debug!(hex = %color.to_hex(), "hex applied");
        Ok(color)
    }

    /// Apply one UI event and return the resulting color.
    pub fn handle(&mut self, event: ColorEvent) -> Result<RgbaColor, HexParseError> {
        match event {
            ColorEvent::SetChannel(channel, value) => {
                self.set_channel(channel, value);
                Ok(self.current_color())
            }
            ColorEvent::Randomize => Ok(self.randomize()),
            ColorEvent::ParseHex(raw) => self.apply_hex(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn starts_white() {
        let c = ColorState::default().current_color();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn set_each_channel() {
        let mut state = ColorState::default();
        state.set_channel(Channel::Red, 0.5);
        state.set_channel(Channel::Green, 0.25);
        state.set_channel(Channel::Blue, 1.0);
        let c = state.current_color();
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.5, 0.25, 1.0, 1.0));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut state = ColorState::default();
        state.set_channel(Channel::Red, -0.3);
        state.set_channel(Channel::Green, 7.0);
        assert_eq!(state.channel(Channel::Red), 0.0);
        assert_eq!(state.channel(Channel::Green), 1.0);
    }

    #[test]
    fn nan_is_ignored() {
        let mut state = ColorState::default();
        state.set_channel(Channel::Blue, 0.2);
        state.set_channel(Channel::Blue, f64::NAN);
        assert_eq!(state.channel(Channel::Blue), 0.2);
    }

    #[test]
    fn seeded_randomize_is_reproducible() {
        let mut a = ColorState::default();
        let mut b = ColorState::default();
        let ca = a.randomize_with(&mut StdRng::seed_from_u64(7));
        let cb = b.randomize_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(ca, cb);
        assert_eq!(a, b);
    }

    #[test]
    fn randomize_returns_stored_color() {
        let mut state = ColorState::default();
        let color = state.randomize();
        assert_eq!(color, state.current_color());
    }

    #[test]
    fn apply_hex_updates_all_channels() {
        let mut state = ColorState::default();
        let color = state.apply_hex("#FF00FF").unwrap();
        assert_eq!((color.r(), color.g(), color.b()), (1.0, 0.0, 1.0));
        assert_eq!(state.channel(Channel::Green), 0.0);
    }

    #[test]
    fn failed_hex_leaves_state_unchanged() {
        let mut state = ColorState::default();
        state.set_channel(Channel::Red, 0.3);
        let before = state;
        assert_eq!(state.apply_hex("12345"), Err(HexParseError::InvalidLength));
        assert_eq!(state.apply_hex("ZZZZZZ"), Err(HexParseError::InvalidDigits));
        assert_eq!(state, before);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut state = ColorState::default();
        let c = state
            .handle(ColorEvent::SetChannel(Channel::Green, 0.0))
            .unwrap();
        assert_eq!(c.g(), 0.0);

        let c = state.handle(ColorEvent::ParseHex("00ff00".into())).unwrap();
        assert_eq!(c.to_hex(), "00FF00");

        let err = state.handle(ColorEvent::ParseHex("nope".into()));
        assert_eq!(err, Err(HexParseError::InvalidLength));
        assert_eq!(state.current_color().to_hex(), "00FF00");

        let c = state.handle(ColorEvent::Randomize).unwrap();
        assert_eq!(c, state.current_color());
    }

    #[test]
    fn channel_labels() {
        let labels: Vec<_> = Channel::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["Red", "Green", "Blue"]);
    }
}
