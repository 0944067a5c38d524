//! Single RGB channel slider (0.0–1.0).
//!
//! The track shows what the color would look like across the channel's range
//! with the other two channels held at their current values. The gradient is
//! rasterized into an image, like the rest of the picker's tracks.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::state::{Channel, ColorEvent, ColorState};

/// Rasterize a horizontal gradient of `channel` from 0 (left) to 1 (right).
fn rasterize_channel_gradient(width: u32, height: u32, channel: Channel, base: [f64; 3]) -> Vec<u8> {
    let idx = channel_index(channel);
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let mut rgb = base;
        rgb[idx] = t;
        let [cr, cg, cb] = rgb.map(|v| (v * 255.0 + 0.5) as u8);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = cr;
            buf[offset + 1] = cg;
            buf[offset + 2] = cb;
            buf[offset + 3] = 255;
        }
    }
    buf
}

fn channel_index(channel: Channel) -> usize {
    match channel {
        Channel::Red => 0,
        Channel::Green => 1,
        Channel::Blue => 2,
    }
}

/// Position of the thumb center for `value` on a track `width` wide.
fn thumb_center(value: f64, width: f64) -> f64 {
    let r = constants::THUMB_RADIUS;
    r + value.clamp(0.0, 1.0) * (width - 2.0 * r)
}

/// Channel value under pointer `x` on a track `width` wide.
fn value_at(x: f64, width: f64) -> Option<f64> {
    let r = constants::THUMB_RADIUS;
    let usable = width - 2.0 * r;
    (usable > 0.0).then(|| ((x - r) / usable).clamp(0.0, 1.0))
}

struct ChannelUpdate(ColorState);

pub struct ChannelSlider {
    id: ViewId,
    held: bool,
    channel: Channel,
    base: [f64; 3],
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_key: [u8; 3],
    cached_dims: (u32, u32),
}

/// Creates a horizontal slider for one channel of `state`.
///
/// Dragging emits [`ColorEvent::SetChannel`]; external state changes move
/// the thumb and recolor the track.
pub fn channel_slider(state: RwSignal<ColorState>, channel: Channel) -> ChannelSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let s = state.get();
        id.update_state(ChannelUpdate(s));
    });

    ChannelSlider {
        id,
        held: false,
        channel,
        base: rgb_of(&state.get_untracked()),
        size: Default::default(),
        on_change: Box::new(move |val| {
            state.update(|s| {
                // SetChannel never fails.
                let _ = s.handle(ColorEvent::SetChannel(channel, val));
            });
        }),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_key: [0, 0, 0],
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

fn rgb_of(state: &ColorState) -> [f64; 3] {
    Channel::ALL.map(|c| state.channel(c))
}

impl ChannelSlider {
    fn value(&self) -> f64 {
        self.base[channel_index(self.channel)]
    }

    fn update_from_pointer(&mut self, x: f64) {
        if let Some(v) = value_at(x, self.size.width as f64) {
            self.base[channel_index(self.channel)] = v;
            (self.on_change)(v);
        }
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        // The channel itself doesn't affect the gradient, only the other two.
        let mut key = self.base.map(|v| (v * 255.0 + 0.5) as u8);
        key[channel_index(self.channel)] = 0;
        let dims = (pw, ph);
        if self.cached_dims == dims && self.cached_key == key && self.grad_img.is_some() {
            return;
        }

        let pixels = rasterize_channel_gradient(pw, ph, self.channel, self.base);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_key = key;
        self.cached_dims = dims;
    }
}

impl View for ChannelSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<ChannelUpdate>() {
            self.base = rgb_of(&update.0);
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_layout();
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    self.id.request_layout();
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);

        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }

        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        // Thumb ring
        let radius = constants::THUMB_RADIUS;
        let thumb_x = thumb_center(self.value(), w);
        let thumb_cy = h / 2.0;
        let circle = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius);
        cx.stroke(
            &circle,
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        let inner = floem::kurbo::Circle::new((thumb_x, thumb_cy), radius - 1.5);
        cx.stroke(&inner, Color::WHITE, &floem::kurbo::Stroke::new(2.0));
    }
}
