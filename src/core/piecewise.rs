use serde::{Deserialize, Serialize};

/// One closed numeric range mapped to a display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBucket {
    pub min: f64,
    pub max: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ColorBucket {
    #[must_use]
    pub fn new(min: f64, max: f64, color: impl Into<String>) -> Self {
        Self {
            min,
            max,
            color: color.into(),
            label: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    fn distance_to(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// Ordered, non-overlapping buckets forming a piecewise color scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiecewiseScale {
    buckets: Vec<ColorBucket>,
}

impl PiecewiseScale {
    /// Builds a scale from buckets sorted by `min`.
    #[must_use]
    pub fn new(buckets: Vec<ColorBucket>) -> Self {
        Self { buckets }
    }

    /// Five-step scale used by intensity grids: `0`, `1-2`, `3-5`, `6-8`, `9-10`.
    #[must_use]
    pub fn intensity() -> Self {
        Self::new(vec![
            ColorBucket::new(0.0, 0.0, "#1a1a1a").with_label("Less"),
            ColorBucket::new(1.0, 2.0, "#7f1d1d"),
            ColorBucket::new(3.0, 5.0, "#991b1b"),
            ColorBucket::new(6.0, 8.0, "#dc2626"),
            ColorBucket::new(9.0, 10.0, "#ef4444").with_label("More"),
        ])
    }

    #[must_use]
    pub fn buckets(&self) -> &[ColorBucket] {
        &self.buckets
    }

    /// Returns the bucket index for `value`.
    ///
    /// Values inside a bucket map to it. Values falling in a gap or outside
    /// the covered range map to the bucket with the nearest boundary, ties
    /// resolving to the lower bucket. `NaN` maps to the lowest bucket.
    /// Returns `None` only for an empty scale.
    #[must_use]
    pub fn classify(&self, value: f64) -> Option<usize> {
        if self.buckets.is_empty() {
            return None;
        }
        if value.is_nan() {
            return Some(0);
        }
        if value == f64::INFINITY {
            return Some(self.buckets.len() - 1);
        }

        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.contains(value) {
                return Some(index);
            }
            let distance = bucket.distance_to(value);
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }
        Some(best)
    }

    #[must_use]
    pub fn color_for(&self, value: f64) -> Option<&str> {
        self.classify(value)
            .map(|index| self.buckets[index].color.as_str())
    }
}
