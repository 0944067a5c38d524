//! The WishMaker screen: title, description, channel sliders, and the button
//! stack, all on top of a background painted in the current color.

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

use crate::channel_slider::channel_slider;
use crate::constants;
use crate::inputs::{action_button, copy_button, hex_entry};
use crate::state::{Channel, ColorEvent, ColorState};

const TITLE: &str = "WishMaker";
const DESCRIPTION: &str = "This app will bring you joy and will fulfill three of your wishes!\n\n\
                           \u{2022} The first wish is to change the background color.";

pub(crate) fn wish_maker_view(state: RwSignal<ColorState>) -> impl IntoView {
    let sliders_visible = RwSignal::new(true);
    let hex_open = RwSignal::new(false);

    v_stack((
        header(state),
        // Spacer pushes the controls to the bottom
        empty().style(|s| s.flex_grow(1.0)),
        sliders_panel(state).style(move |s| {
            s.margin_horiz(constants::SIDE_INSET)
                .apply_if(!sliders_visible.get(), |s| s.hide())
        }),
        hex_entry(state, hex_open).style(move |s| {
            s.margin_horiz(constants::SIDE_INSET)
                .apply_if(!hex_open.get(), |s| s.hide())
        }),
        buttons(state, sliders_visible, hex_open),
    ))
    .style(move |s| {
        let c = state.get().current_color();
        s.size_full()
            .gap(constants::PANEL_SPACING)
            .items_center()
            .background(Color::rgba(c.r(), c.g(), c.b(), c.a()))
    })
}

fn header(state: RwSignal<ColorState>) -> impl IntoView {
    // White text disappears on light backgrounds, so darken it there.
    let text_color = move || {
        if state.get().current_color().is_light() {
            Color::rgb8(40, 40, 40)
        } else {
            Color::WHITE
        }
    };

    v_stack((
        label(|| TITLE).style(move |s| {
            s.font_size(constants::TITLE_FONT)
                .font_bold()
                .color(text_color())
        }),
        label(|| DESCRIPTION).style(move |s| {
            s.font_size(constants::DESCRIPTION_FONT)
                .color(text_color())
        }),
        h_stack((
            label(move || format!("#{}", state.get().current_color().to_hex())).style(
                move |s| {
                    s.font_size(constants::INPUT_FONT)
                        .font_family("monospace".to_string())
                        .color(text_color())
                },
            ),
            copy_button(text_color, move || {
                format!("#{}", state.get_untracked().current_color().to_hex())
            }),
        ))
        .style(|s| s.items_center().gap(6.0)),
    ))
    .style(|s| {
        s.width_full()
            .padding_horiz(constants::SIDE_INSET)
            .margin_top(constants::TITLE_TOP)
            .gap(constants::PANEL_SPACING)
            .items_center()
    })
}

fn sliders_panel(state: RwSignal<ColorState>) -> impl IntoView {
    v_stack_from_iter(Channel::ALL.map(|channel| labelled_slider(state, channel)))
        .style(|s| {
            s.width_full()
                .gap(constants::PANEL_SPACING)
                .padding(constants::PANEL_PADDING)
                .border_radius(constants::PANEL_RADIUS)
                .background(Color::rgba8(255, 255, 255, 230))
        })
}

fn labelled_slider(state: RwSignal<ColorState>, channel: Channel) -> impl IntoView {
    v_stack((
        label(move || channel.label()).style(|s| {
            s.font_size(constants::LABEL_FONT)
                .color(Color::rgb8(60, 60, 60))
                .align_self(Some(floem::taffy::AlignItems::Center))
        }),
        channel_slider(state, channel).style(|s| s.width_full()),
    ))
    .style(|s| s.width_full().gap(6.0))
}

fn buttons(
    state: RwSignal<ColorState>,
    sliders_visible: RwSignal<bool>,
    hex_open: RwSignal<bool>,
) -> impl IntoView {
    v_stack((
        action_button("Enter HEX", move || hex_open.set(true)),
        action_button("Random color", move || {
            state.update(|s| {
                // Randomize never fails.
                let _ = s.handle(ColorEvent::Randomize);
            });
        }),
        action_button("Show/Hide sliders", move || {
            sliders_visible.update(|v| *v = !*v)
        }),
    ))
    .style(|s| {
        s.width_pct(constants::BUTTON_STACK_WIDTH_PCT)
            .gap(constants::BUTTON_SPACING)
            .margin_bottom(constants::BUTTON_STACK_BOTTOM)
    })
}
