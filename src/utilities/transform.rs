//! Transform utilities - skew, translate and the transition timing that goes with them
//!
//! Skew and translate amounts are previewed with explicit `skewX`/`skewY` and
//! `translateX`/`translateY` values so the demo renders the same geometry the
//! class would.

use super::class::utility_class;

utility_class! {
    Skew, axis = "skew", title = "Skew", default = X0 {
        X0 => "skew-x-0", "x-0", "transform: skewX(0deg);", "No skew \u{2014} baseline";
        X1 => "skew-x-1", "x-1", "transform: skewX(1deg);", "Very subtle skew (1\u{b0}) \u{2014} tactile accent";
        X2 => "skew-x-2", "x-2", "transform: skewX(2deg);", "Subtle skew (2\u{b0}) \u{2014} badge/label use";
        X6 => "skew-x-6", "x-6", "transform: skewX(6deg);", "Noticeable skew (6\u{b0}) \u{2014} decorative";
        NegX1 => "-skew-x-1", "-x-1", "transform: skewX(-1deg);", "Tiny negative skew \u{2014} visual balance";
        NegX2 => "-skew-x-2", "-x-2", "transform: skewX(-2deg);", "Negative skew (2\u{b0}) \u{2014} subtle counter-skew";
        NegX6 => "-skew-x-6", "-x-6", "transform: skewX(-6deg);", "Decorative negative skew \u{2014} collage";
        Y1 => "skew-y-1", "y-1", "transform: skewY(1deg);", "Vertical micro-skew (1\u{b0}) \u{2014} small tilt";
        Y2 => "skew-y-2", "y-2", "transform: skewY(2deg);", "Vertical skew (2\u{b0}) \u{2014} decorative";
        Y6 => "skew-y-6", "y-6", "transform: skewY(6deg);", "Vertical decorative skew \u{2014} playful layouts";
        NegY1 => "-skew-y-1", "-y-1", "transform: skewY(-1deg);", "Negative vertical micro-skew";
        NegY2 => "-skew-y-2", "-y-2", "transform: skewY(-2deg);", "Negative vertical skew";
        NegY6 => "-skew-y-6", "-y-6", "transform: skewY(-6deg);", "Negative vertical decorative skew";
    }
}

impl Skew {
    /// Signed angle in degrees
    pub fn degrees(&self) -> i8 {
        match self {
            Self::X0 => 0,
            Self::X1 | Self::Y1 => 1,
            Self::X2 | Self::Y2 => 2,
            Self::X6 | Self::Y6 => 6,
            Self::NegX1 | Self::NegY1 => -1,
            Self::NegX2 | Self::NegY2 => -2,
            Self::NegX6 | Self::NegY6 => -6,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            Self::Y1 | Self::Y2 | Self::Y6 | Self::NegY1 | Self::NegY2 | Self::NegY6
        )
    }
}

utility_class! {
    Translate, axis = "translate", title = "Translate", default = X0 {
        X0 => "translate-x-0", "x-0", "transform: translateX(0px);", "No shift";
        X1 => "translate-x-1", "x-1", "transform: translateX(4px);", "Tiny nudge \u{2014} 4px";
        X2 => "translate-x-2", "x-2", "transform: translateX(8px);", "Small nudge \u{2014} 8px";
        X4 => "translate-x-4", "x-4", "transform: translateX(16px);", "Clear offset \u{2014} 16px";
        X8 => "translate-x-8", "x-8", "transform: translateX(32px);", "Large offset \u{2014} 32px";
        NegX1 => "-translate-x-1", "-x-1", "transform: translateX(-4px);", "Tiny left nudge";
        NegX2 => "-translate-x-2", "-x-2", "transform: translateX(-8px);", "Small left nudge";
        Y1 => "translate-y-1", "y-1", "transform: translateY(4px);", "Tiny down nudge";
        Y2 => "translate-y-2", "y-2", "transform: translateY(8px);", "Small down nudge";
        Y4 => "translate-y-4", "y-4", "transform: translateY(16px);", "Down offset \u{2014} 16px";
        Y8 => "translate-y-8", "y-8", "transform: translateY(32px);", "Large down offset \u{2014} 32px";
        NegY1 => "-translate-y-1", "-y-1", "transform: translateY(-4px);", "Tiny up nudge";
        NegY2 => "-translate-y-2", "-y-2", "transform: translateY(-8px);", "Small up nudge";
    }
}

utility_class! {
    Duration, axis = "duration", title = "Duration", default = Ms150 {
        Ms75 => "duration-75", "75ms", "transition-duration: 75ms;", "Instant feedback";
        Ms150 => "duration-150", "150ms", "transition-duration: 150ms;", "Default micro-interaction";
        Ms300 => "duration-300", "300ms", "transition-duration: 300ms;", "Noticeable motion";
        Ms500 => "duration-500", "500ms", "transition-duration: 500ms;", "Slow, deliberate motion";
    }
}

utility_class! {
    Easing, axis = "easing", title = "Easing", default = InOut {
        Linear => "ease-linear", "linear", "transition-timing-function: linear;", "Constant speed";
        In => "ease-in", "in", "transition-timing-function: cubic-bezier(0.4, 0, 1, 1);", "Starts slow";
        Out => "ease-out", "out", "transition-timing-function: cubic-bezier(0, 0, 0.2, 1);", "Ends slow";
        InOut => "ease-in-out", "in-out", "transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);", "Slow at both ends";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    #[test]
    fn skew_css_follows_axis_and_angle() {
        for s in Skew::ALL {
            let func = if s.is_vertical() { "skewY" } else { "skewX" };
            assert_eq!(s.to_css(), format!("transform: {func}({}deg);", s.degrees()));
        }
    }

    #[test]
    fn vertical_skews_use_skew_y() {
        assert_eq!(Skew::NegY6.to_css(), "transform: skewY(-6deg);");
        assert!(!Skew::X6.is_vertical());
    }

    #[test]
    fn translate_axis_matches_class() {
        for t in Translate::ALL {
            let vertical = t.class().contains("-y-");
            assert_eq!(t.to_css().contains("translateY"), vertical, "{t}");
        }
    }

    #[test]
    fn duration_labels_are_milliseconds() {
        assert_eq!(Duration::Ms300.label(), "300ms");
        assert_eq!(Duration::Ms300.to_css(), "transition-duration: 300ms;");
    }
}
