/// Upper end of the gauge scale; readings at or above this fill it completely.
pub const GAUGE_MAX_LUX: f64 = 1000.0;

/// Coarse illuminance band used for coloring and labeling a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Dark,
    Normal,
    Bright,
    VeryBright,
}

impl Category {
    /// Every band, in legend order (darkest first).
    pub const ALL: [Self; 4] = [Self::Dark, Self::Normal, Self::Bright, Self::VeryBright];

    /// Short legend label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dark       => "Dark",
            Self::Normal     => "Normal",
            Self::Bright     => "Bright",
            Self::VeryBright => "Very Bright",
        }
    }

    /// Caption shown under the gauge value.
    pub fn description(self) -> &'static str {
        match self {
            Self::Dark       => "Dark environment",
            Self::Normal     => "Normal lighting",
            Self::Bright     => "Bright environment",
            Self::VeryBright => "Very bright environment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a lux value.
///
/// Bands are closed on both ends: `[0, 50]` Dark, `[51, 200]` Normal,
/// `[201, 500]` Bright.  Everything else lands in `VeryBright`, including
/// negative values, NaN and the gaps `(50, 51)` and `(200, 201)`.
pub fn classify(value: f64) -> Category {
    match value {
        v if (0.0..=50.0).contains(&v)    => Category::Dark,
        v if (51.0..=200.0).contains(&v)  => Category::Normal,
        v if (201.0..=500.0).contains(&v) => Category::Bright,
        // NOTE: negative readings and the fractional gaps fall through here.
        _ => Category::VeryBright,
    }
}

/// Gauge fill fraction: `min(value / 1000, 1.0)`.
///
/// Only the top end is clamped; a negative value yields a negative fraction.
pub fn gauge_fraction(value: f64) -> f64 {
    (value / GAUGE_MAX_LUX).min(1.0)
}
