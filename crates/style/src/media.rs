//! Width-only media conditions.
//!
//! Only `min-width` and `max-width` in pixels are understood; anything
//! else in a media prelude is ignored, leaving that bound open.

/// Width bounds parsed from an `@media` prelude.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MediaCondition {
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
}

impl MediaCondition {
    /// Parse the raw prelude text of an `@media` rule.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        Self {
            min_width: feature_px(&lower, "min-width"),
            max_width: feature_px(&lower, "max-width"),
        }
    }

    /// Whether the condition holds at the given viewport width.
    pub fn matches(self, width: f32) -> bool {
        self.min_width.is_none_or(|min| width >= min)
            && self.max_width.is_none_or(|max| width <= max)
    }

    /// Combine with an enclosing condition; both must hold, so the
    /// tighter bound on each side survives.
    pub fn intersect(self, outer: Self) -> Self {
        Self {
            min_width: widest_min(self.min_width, outer.min_width),
            max_width: tightest_max(self.max_width, outer.max_width),
        }
    }
}

fn widest_min(lhs: Option<f32>, rhs: Option<f32>) -> Option<f32> {
    match (lhs, rhs) {
        (Some(left), Some(right)) => Some(left.max(right)),
        (bound, None) | (None, bound) => bound,
    }
}

fn tightest_max(lhs: Option<f32>, rhs: Option<f32>) -> Option<f32> {
    match (lhs, rhs) {
        (Some(left), Some(right)) => Some(left.min(right)),
        (bound, None) | (None, bound) => bound,
    }
}

fn feature_px(lower: &str, feature: &str) -> Option<f32> {
    let pos = lower.find(feature)?;
    let tail = lower.get(pos + feature.len()..)?;
    let value = tail.split_once(':')?.1.trim_start();
    let digits: String = value
        .chars()
        .take_while(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    digits.parse().ok()
}
