/// Smooth-scroll animation.
///
/// Interpolates a scroll offset from `from` to `to` with an ease-out cubic
/// curve. Time is passed in explicitly (seconds on the UI clock) so the
/// animation has no hidden dependency on a wall clock.

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    pub from: f32,
    pub to: f32,
    /// UI clock time the animation started at.
    pub start: f64,
    /// Duration in seconds.
    pub duration: f32,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, start: f64, duration: f32) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Normalized progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) as f32) / self.duration).clamp(0.0, 1.0)
    }

    /// Scroll offset at time `now`.
    pub fn offset_at(&self, now: f64) -> f32 {
        let p = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * p
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Redirect an in-flight animation towards a new target, starting from
    /// wherever it currently is.
    pub fn retarget(&mut self, to: f32, now: f64) {
        self.from = self.offset_at(now);
        self.to = to;
        self.start = now;
    }
}

#[inline]
fn ease_out_cubic(p: f32) -> f32 {
    let inv = 1.0 - p;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        let a = ScrollAnimation::new(100.0, 500.0, 2.0, 0.5);
        assert_eq!(a.offset_at(2.0), 100.0);
        assert_eq!(a.offset_at(2.5), 500.0);
        assert_eq!(a.offset_at(10.0), 500.0);
        assert!(a.is_finished(2.5));
        assert!(!a.is_finished(2.25));
    }

    #[test]
    fn eases_out() {
        let a = ScrollAnimation::new(0.0, 100.0, 0.0, 1.0);
        // Ease-out covers more than half the distance at the midpoint.
        assert!(a.offset_at(0.5) > 50.0);
        assert!(a.offset_at(0.5) < 100.0);
    }

    #[test]
    fn scrolls_upwards() {
        let a = ScrollAnimation::new(800.0, 200.0, 0.0, 1.0);
        let mid = a.offset_at(0.5);
        assert!(mid < 800.0 && mid > 200.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let a = ScrollAnimation::new(0.0, 300.0, 5.0, 0.0);
        assert_eq!(a.offset_at(5.0), 300.0);
        assert!(a.is_finished(5.0));
    }

    #[test]
    fn retarget_continues_from_current_offset() {
        let mut a = ScrollAnimation::new(0.0, 100.0, 0.0, 1.0);
        let here = a.offset_at(0.5);
        a.retarget(400.0, 0.5);
        assert_eq!(a.offset_at(0.5), here);
        assert_eq!(a.offset_at(1.5), 400.0);
    }
}
