use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Circle};
use ratatui::widgets::Widget;

use crate::animation::AnimationFrame;
use crate::ui::theme::{faded, EXPLOSION_CORE, PARTICLE};

/// Half-extent of the drawing space, in the same units as particle radius.
const CANVAS_EXTENT: f64 = 200.0;
const CORE_RADIUS: f64 = 50.0;
const PARTICLE_RADIUS: f64 = 10.0;
/// Below this the shape is indistinguishable from the background.
const MIN_VISIBLE_OPACITY: f64 = 0.05;

pub struct ExplosionCanvas<'a> {
    frame: &'a AnimationFrame,
}

impl<'a> ExplosionCanvas<'a> {
    pub fn new(frame: &'a AnimationFrame) -> Self {
        Self { frame }
    }
}

impl Widget for ExplosionCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = self.frame;
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .y_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .paint(|ctx| {
                if frame.core_opacity >= MIN_VISIBLE_OPACITY && frame.core_scale > 0.0 {
                    ctx.draw(&Circle {
                        x: 0.0,
                        y: 0.0,
                        radius: CORE_RADIUS * frame.core_scale,
                        color: faded(EXPLOSION_CORE, frame.core_opacity),
                    });
                }
                for particle in &frame.particles {
                    if particle.opacity < MIN_VISIBLE_OPACITY {
                        continue;
                    }
                    // Screen y grows downward, canvas y upward
                    ctx.draw(&Circle {
                        x: particle.x,
                        y: -particle.y,
                        radius: PARTICLE_RADIUS,
                        color: faded(PARTICLE, particle.opacity),
                    });
                }
            })
            .render(area, buf);
    }
}
