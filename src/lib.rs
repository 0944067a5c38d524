//! # wish-maker
//!
//! A single-screen "WishMaker" view for [Floem](https://github.com/lapce/floem):
//! three RGB sliders, hex code entry, a random color button, and a toggle for
//! the slider panel. The chosen color fills the background.
//!
//! The color model ([`ColorState`], [`parse_hex`]) does not depend on Floem
//! and can be driven directly with [`ColorEvent`]s.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use wish_maker::{wish_maker, ColorState};
//!
//! let state = RwSignal::new(ColorState::default());
//! // Use `wish_maker(state)` in your Floem view tree.
//! ```

mod channel_slider;
mod color;
mod constants;
mod hex;
mod inputs;
mod state;
mod wish_maker;

pub use color::RgbaColor;
pub use hex::{parse_hex, HexParseError};
pub use state::{Channel, ColorEvent, ColorState};

use std::sync::Once;

use floem::prelude::*;
use floem::reactive::RwSignal;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the WishMaker screen.
///
/// The view reads from and writes to `state`. External changes to the signal
/// are reflected in the sliders and background, and user edits update it.
pub fn wish_maker(state: RwSignal<ColorState>) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    wish_maker::wish_maker_view(state)
}
