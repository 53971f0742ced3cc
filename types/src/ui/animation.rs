use std::time::Duration;

/// Where a timed effect currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    /// `progress` runs from 0.0 to 1.0.
    Running { progress: f32 },
    Finished,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.elapsed >= self.duration {
            AnimPhase::Finished
        } else {
            AnimPhase::Running {
                progress: normalized_progress(self.elapsed, self.duration),
            }
        }
    }
}
