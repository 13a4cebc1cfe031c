use std::time::Instant;
use tracing::debug;

use crate::animation::effects::{ExplosionEffect, ParticleFrame, PressFeedback};
use crate::config::AnimationConfig;
use crate::machine::Transition;

/// Everything the renderer needs to draw animated values for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
    pub button_scale: f64,
    pub core_scale: f64,
    pub core_opacity: f64,
    pub particles: Vec<ParticleFrame>,
}

impl AnimationFrame {
    pub fn at_rest(particle_count: usize) -> Self {
        Self {
            button_scale: 1.0,
            core_scale: 0.0,
            core_opacity: 0.0,
            particles: vec![ParticleFrame::AT_REST; particle_count],
        }
    }
}

/// Owns every running effect. Fed transitions, sampled by time.
pub struct Presenter {
    config: AnimationConfig,
    press: Option<PressFeedback>,
    explosion: Option<ExplosionEffect>,
}

impl Presenter {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            press: None,
            explosion: None,
        }
    }

    pub fn on_transition(&mut self, transition: Transition, now: Instant) {
        match transition {
            Transition::Started => {
                self.press = Some(PressFeedback::start(&self.config, now));
            }
            Transition::Ticked { .. } => {}
            Transition::Exploded => {
                debug!(particles = self.config.particle_count, "explosion started");
                self.explosion = Some(ExplosionEffect::start(&self.config, now));
            }
            Transition::Reset => self.snap_to_rest(),
        }
    }

    /// Drops every effect in flight; the next frame is at rest.
    pub fn snap_to_rest(&mut self) {
        self.press = None;
        self.explosion = None;
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.press.as_ref().is_some_and(|p| !p.is_finished(now))
            || self.explosion.as_ref().is_some_and(|e| !e.is_finished(now))
    }

    pub fn frame(&self, now: Instant) -> AnimationFrame {
        let mut frame = AnimationFrame::at_rest(self.config.particle_count as usize);
        if let Some(press) = &self.press {
            frame.button_scale = press.scale(now);
        }
        if let Some(explosion) = &self.explosion {
            frame.core_scale = explosion.core_scale(now);
            frame.core_opacity = explosion.core_opacity(now);
            frame.particles = explosion.particles(now);
        }
        frame
    }
}
