//! US EPA AQI categories.

/// Upper end of the gauge scale.
pub const AQI_SCALE_MAX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_value(value: f64) -> Self {
        // Breakpoints are inclusive on the upper bound; fractional values round first.
        let v = value.round();
        if v <= 50.0 {
            Self::Good
        } else if v <= 100.0 {
            Self::Moderate
        } else if v <= 150.0 {
            Self::UnhealthyForSensitiveGroups
        } else if v <= 200.0 {
            Self::Unhealthy
        } else if v <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }

    /// Text colour class, used for both the gauge arc and the label.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Good => "text-emerald-500",
            Self::Moderate => "text-yellow-500",
            Self::UnhealthyForSensitiveGroups => "text-orange-500",
            Self::Unhealthy => "text-red-500",
            Self::VeryUnhealthy => "text-purple-600",
            Self::Hazardous => "text-rose-900",
        }
    }
}

/// Gauge fill in percent, clamped to the scale.
pub fn gauge_percent(value: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value / AQI_SCALE_MAX) * 100.0).clamp(0.0, 100.0) as f32
}
