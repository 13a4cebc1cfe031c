use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the default curve for timed tweens.
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Leg {
    to: f64,
    duration: Duration,
}

/// A value animated through consecutive legs.
///
/// Before the first leg starts the track reads `start`; after the last leg it
/// holds the final target.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    start: f64,
    easing: Easing,
    legs: Vec<Leg>,
}

impl Track {
    pub fn new(start: f64) -> Self {
        Self {
            start,
            easing: Easing::default(),
            legs: Vec::new(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn then(mut self, to: f64, duration: Duration) -> Self {
        self.legs.push(Leg { to, duration });
        self
    }

    pub fn duration(&self) -> Duration {
        self.legs.iter().map(|leg| leg.duration).sum()
    }

    pub fn sample(&self, elapsed: Duration) -> f64 {
        let mut from = self.start;
        let mut offset = Duration::ZERO;
        for leg in &self.legs {
            let leg_end = offset + leg.duration;
            if elapsed < leg_end {
                let into = elapsed.saturating_sub(offset).as_secs_f64();
                let t = into / leg.duration.as_secs_f64();
                return from + (leg.to - from) * self.easing.apply(t);
            }
            from = leg.to;
            offset = leg_end;
        }
        from
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}
