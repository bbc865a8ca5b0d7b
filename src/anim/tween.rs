use std::time::{Duration, Instant};

use super::easing::Ease;

/// The visual properties an animation can drive
///
/// `x` and `y` are offsets in logical pixels from the element's resting
/// position. `scale` multiplies the element's resting size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Props {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Props {
    /// Fully visible, untransformed
    pub const REST: Props = Props {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Interpolate towards `to`. `t` is not clamped so overshooting curves
    /// carry through to the properties.
    pub fn lerp(self, to: Props, t: f32) -> Props {
        Props {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    pub fn with_opacity(self, opacity: f32) -> Props {
        Props { opacity, ..self }
    }

    pub fn with_x(self, x: f32) -> Props {
        Props { x, ..self }
    }

    pub fn with_scale(self, scale: f32) -> Props {
        Props { scale, ..self }
    }
}

impl Default for Props {
    fn default() -> Self {
        Props::REST
    }
}

/// An unstarted tween: endpoints, timing and curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub from: Props,
    pub to: Props,
    pub duration: Duration,
    pub delay: Duration,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(from: Props, to: Props, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            ease: Ease::default(),
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Start the tween at `now`
    pub fn start(self, now: Instant) -> Tween {
        Tween {
            spec: self,
            started: now,
        }
    }

    /// Start `count` copies of this tween, each delayed `step` after the previous one
    pub fn stagger(self, count: usize, step: Duration, now: Instant) -> impl Iterator<Item = Tween> {
        (0..count).map(move |i| self.delay(self.delay + step * i as u32).start(now))
    }
}

/// A running tween
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    spec: TweenSpec,
    started: Instant,
}

impl Tween {
    /// Linear progress through the active part of the tween (0.0 to 1.0)
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed <= self.spec.delay {
            return 0.0;
        }

        if self.spec.duration.is_zero() {
            return 1.0;
        }

        let active = elapsed - self.spec.delay;
        (active.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
    }

    /// Eased property values at `now`
    pub fn sample(&self, now: Instant) -> Props {
        let t = self.spec.ease.apply(self.progress(now));
        self.spec.from.lerp(self.spec.to, t)
    }

    pub fn ends_at(&self) -> Instant {
        self.started + self.spec.delay + self.spec.duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    pub fn target(&self) -> Props {
        self.spec.to
    }
}

/// An animated element: a resting value plus at most one running tween
///
/// Playing a new tween replaces the running one, the same way a second
/// tween on the same element overrides the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    rest: Props,
    tween: Option<Tween>,
}

impl Animated {
    pub fn new(rest: Props) -> Self {
        Self { rest, tween: None }
    }

    pub fn value(&self, now: Instant) -> Props {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None => self.rest,
        }
    }

    pub fn play(&mut self, tween: Tween) {
        self.tween = Some(tween);
    }

    /// Animate from wherever the element currently is towards `to`
    pub fn play_to(&mut self, to: Props, duration: Duration, ease: Ease, now: Instant) {
        let from = self.value(now);
        self.play(TweenSpec::new(from, to, duration).ease(ease).start(now));
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Retire the running tween once it has finished.
    ///
    /// Returns `true` on the call that observes the completion.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.tween {
            Some(tween) if tween.is_finished(now) => {
                self.rest = tween.target();
                self.tween = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(Props::REST)
    }
}
