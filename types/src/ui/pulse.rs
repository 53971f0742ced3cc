//! Highlight shown when a dot is confirmed.
//!
//! The terminal has no actuator, so a confirmation is rendered as a short
//! pulse on the touched target.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};
use crate::Dot;

#[derive(Debug, Clone)]
pub struct DotPulse {
    dot: Dot,
    timer: EffectTimer,
}

impl DotPulse {
    #[must_use]
    pub fn new(dot: Dot, duration: Duration) -> Self {
        Self {
            dot,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn dot(&self) -> Dot {
        self.dot
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == AnimPhase::Finished
    }

    /// Remaining strength of the pulse, 1.0 when fresh and 0.0 when done.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        match self.phase() {
            AnimPhase::Running { progress } => 1.0 - progress,
            AnimPhase::Finished => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::DotPulse;
    use crate::Dot;

    #[test]
    fn pulse_fades_out() {
        let mut pulse = DotPulse::new(Dot::new(4).unwrap(), Duration::from_millis(200));
        assert_eq!(pulse.dot().get(), 4);
        assert!(pulse.intensity() > 0.99);
        pulse.advance(Duration::from_millis(100));
        assert!(!pulse.is_finished());
        assert!((pulse.intensity() - 0.5).abs() < 0.01);
        pulse.advance(Duration::from_millis(100));
        assert!(pulse.is_finished());
        assert!(pulse.intensity().abs() < f32::EPSILON);
    }
}
