/// Easing curves for tweens
///
/// Each curve maps normalized progress `t` (0.0 to 1.0) to an eased value.
/// All curves start at 0.0 and end at 1.0; `BackOut` overshoots in between.

/// Default overshoot used by the gallery's entrance animations
pub const DEFAULT_OVERSHOOT: f32 = 1.4;

/// Supported easing curves
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    /// Constant speed
    #[default]
    Linear,
    /// Decelerates past the target, then settles back (`back.out(s)`)
    BackOut(f32),
    /// Cubic acceleration from rest (`power2.in`)
    Power2In,
    /// Cubic deceleration into rest (`power2.out`)
    Power2Out,
}

impl Ease {
    /// Apply the curve to a progress value (clamped to 0.0..=1.0).
    ///
    /// The endpoints are exact, so a tween sits precisely on its `from` and `to` values.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Ease::Linear => t,
            Ease::BackOut(overshoot) => {
                let p = t - 1.0;
                p * p * ((overshoot + 1.0) * p + overshoot) + 1.0
            }
            Ease::Power2In => t * t * t,
            Ease::Power2Out => {
                let p = 1.0 - t;
                1.0 - p * p * p
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Ease; 4] = [
        Ease::Linear,
        Ease::BackOut(DEFAULT_OVERSHOOT),
        Ease::Power2In,
        Ease::Power2Out,
    ];

    #[test]
    fn test_endpoints() {
        for ease in CURVES {
            assert!(ease.apply(0.0).abs() < 1e-6, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_progress_is_clamped() {
        for ease in CURVES {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.0), ease.apply(1.0));
        }
    }

    #[test]
    fn test_back_out_overshoots() {
        let ease = Ease::BackOut(DEFAULT_OVERSHOOT);
        let peak = (1..100)
            .map(|i| ease.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);

        assert!(peak > 1.0);
    }

    #[test]
    fn test_power2_shapes() {
        // In starts slow, out starts fast
        assert!(Ease::Power2In.apply(0.5) < 0.5);
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!((Ease::Power2In.apply(0.5) + Ease::Power2Out.apply(0.5) - 1.0).abs() < 1e-6);
    }
}
