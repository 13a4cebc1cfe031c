use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use crate::animation::tween::Track;
use crate::config::AnimationConfig;

/// Squeeze played on the button when it is pressed.
#[derive(Debug, Clone)]
pub struct PressFeedback {
    started: Instant,
    scale: Track,
}

impl PressFeedback {
    pub const PRESSED_SCALE: f64 = 0.9;

    pub fn start(config: &AnimationConfig, now: Instant) -> Self {
        let leg = Duration::from_millis(config.press_leg_ms);
        Self {
            started: now,
            scale: Track::new(1.0)
                .then(Self::PRESSED_SCALE, leg)
                .then(1.0, leg),
        }
    }

    pub fn scale(&self, now: Instant) -> f64 {
        self.scale.sample(now.saturating_duration_since(self.started))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.scale
            .is_finished(now.saturating_duration_since(self.started))
    }
}

/// Position and opacity of one particle, relative to the blast center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl ParticleFrame {
    pub const AT_REST: ParticleFrame = ParticleFrame {
        x: 0.0,
        y: 0.0,
        opacity: 0.0,
    };
}

#[derive(Debug, Clone)]
struct ParticleTracks {
    angle: f64,
    x: Track,
    y: Track,
    opacity: Track,
}

/// Central flash plus particles flying out on evenly spaced angles.
#[derive(Debug, Clone)]
pub struct ExplosionEffect {
    started: Instant,
    core_scale: Track,
    core_opacity: Track,
    particles: Vec<ParticleTracks>,
}

impl ExplosionEffect {
    pub fn start(config: &AnimationConfig, now: Instant) -> Self {
        let total = Duration::from_millis(config.explosion_ms);
        let fade_in = Duration::from_millis(config.fade_in_ms);
        let fade_out = total.saturating_sub(fade_in);
        let flash = || Track::new(0.0).then(1.0, fade_in).then(0.0, fade_out);

        let count = config.particle_count.max(1);
        let particles = (0..count)
            .map(|index| {
                let angle = TAU * f64::from(index) / f64::from(count);
                ParticleTracks {
                    angle,
                    x: Track::new(0.0).then(angle.cos() * config.particle_radius, total),
                    y: Track::new(0.0).then(angle.sin() * config.particle_radius, total),
                    opacity: flash(),
                }
            })
            .collect();

        Self {
            started: now,
            core_scale: Track::new(0.0).then(config.explosion_scale, total),
            core_opacity: flash(),
            particles,
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn core_scale(&self, now: Instant) -> f64 {
        self.core_scale.sample(self.elapsed(now))
    }

    pub fn core_opacity(&self, now: Instant) -> f64 {
        self.core_opacity.sample(self.elapsed(now))
    }

    /// Launch angles in radians, one per particle.
    pub fn angles(&self) -> Vec<f64> {
        self.particles.iter().map(|p| p.angle).collect()
    }

    pub fn particles(&self, now: Instant) -> Vec<ParticleFrame> {
        let elapsed = self.elapsed(now);
        self.particles
            .iter()
            .map(|p| ParticleFrame {
                x: p.x.sample(elapsed),
                y: p.y.sample(elapsed),
                opacity: p.opacity.sample(elapsed),
            })
            .collect()
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        let elapsed = self.elapsed(now);
        self.core_scale.is_finished(elapsed)
            && self.core_opacity.is_finished(elapsed)
            && self.particles.iter().all(|p| p.opacity.is_finished(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn config() -> AnimationConfig {
        AnimationConfig::default()
    }

    #[test]
    fn press_dips_then_recovers() {
        let now = Instant::now();
        let press = PressFeedback::start(&config(), now);
        assert!((press.scale(now) - 1.0).abs() < EPS);
        let bottom = press.scale(now + Duration::from_millis(100));
        assert!((bottom - PressFeedback::PRESSED_SCALE).abs() < EPS);
        assert!((press.scale(now + Duration::from_millis(200)) - 1.0).abs() < EPS);
        assert!(press.is_finished(now + Duration::from_millis(200)));
    }

    #[test]
    fn particles_are_evenly_spaced() {
        let effect = ExplosionEffect::start(&config(), Instant::now());
        let angles = effect.angles();
        assert_eq!(angles.len(), 8);
        for (index, angle) in angles.iter().enumerate() {
            let degrees = angle.to_degrees();
            assert!((degrees - 45.0 * index as f64).abs() < 1e-6);
        }
    }

    #[test]
    fn particles_end_on_the_radius_and_invisible() {
        let now = Instant::now();
        let effect = ExplosionEffect::start(&config(), now);
        let end = now + Duration::from_millis(1000);
        for frame in effect.particles(end) {
            let distance = (frame.x * frame.x + frame.y * frame.y).sqrt();
            assert!((distance - 150.0).abs() < 1e-6);
            assert!(frame.opacity.abs() < EPS);
        }
        assert!(effect.is_finished(end));
    }

    #[test]
    fn flash_peaks_after_fade_in() {
        let now = Instant::now();
        let effect = ExplosionEffect::start(&config(), now);
        assert!(effect.core_opacity(now).abs() < EPS);
        let peak = effect.core_opacity(now + Duration::from_millis(200));
        assert!((peak - 1.0).abs() < EPS);
        assert!((effect.core_scale(now + Duration::from_millis(1000)) - 3.0).abs() < EPS);
        assert!(!effect.is_finished(now + Duration::from_millis(500)));
    }

    #[test]
    fn core_scale_eases_in_and_out() {
        let now = Instant::now();
        let effect = ExplosionEffect::start(&config(), now);
        let quarter = effect.core_scale(now + Duration::from_millis(250));
        let half = effect.core_scale(now + Duration::from_millis(500));
        // Linear would be 0.75 at the quarter mark
        assert!(quarter < 0.75);
        assert!((half - 1.5).abs() < 1e-6);
    }

    #[test]
    fn particle_count_follows_config() {
        let config = AnimationConfig {
            particle_count: 12,
            ..AnimationConfig::default()
        };
        let effect = ExplosionEffect::start(&config, Instant::now());
        assert_eq!(effect.angles().len(), 12);
        assert!((effect.angles()[1].to_degrees() - 30.0).abs() < 1e-6);
    }
}
