//! Buttons and the hex entry row.

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::constants;
use crate::hex::HexParseError;
use crate::state::{ColorEvent, ColorState};

fn button_blue() -> Color {
    let (r, g, b) = constants::BUTTON_BLUE;
    Color::rgb8(r, g, b)
}

/// A full-width blue button with white text that runs `on_tap` when released.
pub(crate) fn action_button(title: &'static str, on_tap: impl Fn() + 'static) -> impl IntoView {
    container(label(move || title).style(|s| {
        s.color(Color::WHITE)
            .font_size(constants::DESCRIPTION_FONT)
    }))
    .style(|s| {
        s.width_full()
            .height(constants::BUTTON_HEIGHT)
            .items_center()
            .justify_center()
            .border_radius(constants::BUTTON_RADIUS)
            .background(button_blue())
            .cursor(floem::style::CursorStyle::Pointer)
            .active(|s| {
                let (r, g, b) = constants::BUTTON_BLUE;
                s.background(Color::rgba8(r, g, b, 180))
            })
    })
    .on_event_stop(EventListener::PointerUp, move |_| on_tap())
}

/// Text field + OK/Cancel that feeds a [`ColorEvent::ParseHex`] into `state`.
///
/// A rejected code leaves the color alone and shows a dismissible message.
/// `open` is cleared once a code is accepted or the row is cancelled.
pub(crate) fn hex_entry(state: RwSignal<ColorState>, open: RwSignal<bool>) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let error = RwSignal::new(None::<HexParseError>);

    let submit = move || {
        match commit_hex(state, text.get_untracked()) {
            Ok(()) => {
                error.set(None);
                text.set(String::new());
                open.set(false);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    let cancel = move || {
        error.set(None);
        text.set(String::new());
        open.set(false);
    };

    v_stack((
        h_stack((
            text_input(text)
                .placeholder(constants::HEX_PLACEHOLDER)
                .style(|s| {
                    s.width(constants::HEX_INPUT_WIDTH)
                        .padding(6.0)
                        .font_size(constants::INPUT_FONT)
                        .font_family("monospace".to_string())
                        .background(Color::WHITE)
                        .border(1.0)
                        .border_color(Color::rgb8(200, 200, 200))
                        .border_radius(6.0)
                })
                .on_event(EventListener::KeyDown, move |e| {
                    if let Event::KeyDown(ke) = e {
                        if ke.key.logical_key == Key::Named(NamedKey::Enter) {
                            submit();
                            return EventPropagation::Stop;
                        }
                        if ke.key.logical_key == Key::Named(NamedKey::Escape) {
                            cancel();
                            return EventPropagation::Stop;
                        }
                    }
                    EventPropagation::Continue
                }),
            small_button("OK", submit),
            small_button("Cancel", cancel),
        ))
        .style(|s| s.items_center().gap(6.0)),
        error_banner(error),
    ))
    .style(|s| {
        s.gap(6.0)
            .padding(10.0)
            .border_radius(constants::BUTTON_RADIUS)
            .background(Color::rgba8(255, 255, 255, 230))
    })
}

/// Apply `raw` to `state`, writing the signal only when the code is accepted
/// so a rejected code doesn't wake any subscriber.
pub(crate) fn commit_hex(state: RwSignal<ColorState>, raw: String) -> Result<(), HexParseError> {
    let mut next = state.get_untracked();
    next.handle(ColorEvent::ParseHex(raw))?;
    state.set(next);
    Ok(())
}

fn small_button(title: &'static str, on_tap: impl Fn() + 'static) -> impl IntoView {
    label(move || title)
        .style(|s| {
            s.padding_horiz(10.0)
                .padding_vert(6.0)
                .border_radius(6.0)
                .color(Color::WHITE)
                .background(button_blue())
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_event_stop(EventListener::PointerUp, move |_| on_tap())
}

/// Parse error text with a close button. Hidden while `error` is `None`.
fn error_banner(error: RwSignal<Option<HexParseError>>) -> impl IntoView {
    h_stack((
        label(move || error.get().map(|e| e.to_string()).unwrap_or_default())
            .style(|s| s.color(Color::rgb8(200, 30, 30)).flex_grow(1.0)),
        label(|| "\u{00D7}")
            .style(|s| {
                s.font_size(16.0)
                    .color(Color::rgb8(120, 120, 120))
                    .cursor(floem::style::CursorStyle::Pointer)
            })
            .on_event_stop(EventListener::PointerUp, move |_| error.set(None)),
    ))
    .style(move |s| {
        s.items_center()
            .gap(6.0)
            .apply_if(error.get().is_none(), |s| s.hide())
    })
}

/// Copy glyph that puts `get_text()` on the clipboard.
///
/// Drawn in `tint` so it matches the text it sits next to, grey while held.
pub(crate) fn copy_button(
    tint: impl Fn() -> Color + 'static,
    get_text: impl Fn() -> String + 'static,
) -> impl IntoView {
    let pressed = RwSignal::new(false);
    label(|| lucide_icons::Icon::Copy.unicode().to_string())
        .style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(128, 128, 128)
            } else {
                tint()
            };
            s.font_size(constants::INPUT_FONT)
                .font_family("lucide".to_string())
                .color(c)
                .padding(4.0)
                .border_radius(constants::BUTTON_RADIUS / 2.0)
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.background(Color::rgba8(128, 128, 128, 40)))
        })
        .on_event_stop(EventListener::PointerDown, move |_| pressed.set(true))
        .on_event_stop(EventListener::PointerUp, move |_| {
            pressed.set(false);
            copy_to_clipboard(&get_text());
        })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(%err, "failed to copy to clipboard");
            }
        }
        Err(err) => tracing::warn!(%err, "clipboard unavailable"),
    }
}
