use serde::{Deserialize, Serialize};

/// Category of customer-side controllable load or generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DerType {
    #[serde(rename = "Solar")]
    Solar,
    #[serde(rename = "Solar + Battery")]
    SolarBattery,
    #[serde(rename = "Hot water")]
    HotWater,
    #[serde(rename = "EV chargers")]
    EvChargers,
    #[serde(rename = "Other loads")]
    OtherLoads,
    #[serde(rename = "Other generation")]
    OtherGeneration,
}

impl DerType {
    /// Returns the display label, which is also the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solar => "Solar",
            Self::SolarBattery => "Solar + Battery",
            Self::HotWater => "Hot water",
            Self::EvChargers => "EV chargers",
            Self::OtherLoads => "Other loads",
            Self::OtherGeneration => "Other generation",
        }
    }

    /// Returns a URL-safe identifier.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::SolarBattery => "solar-battery",
            Self::HotWater => "hot-water",
            Self::EvChargers => "ev-chargers",
            Self::OtherLoads => "other-loads",
            Self::OtherGeneration => "other-generation",
        }
    }

    /// Parses a DER type from its label or slug (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .into_iter()
            .find(|der| der.as_str().eq_ignore_ascii_case(s) || der.slug().eq_ignore_ascii_case(s))
    }

    /// Returns every DER type in presentation order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Solar,
            Self::SolarBattery,
            Self::HotWater,
            Self::EvChargers,
            Self::OtherLoads,
            Self::OtherGeneration,
        ]
    }
}

impl std::fmt::Display for DerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a slot selection is written out as a recurrence string.
///
/// `Compat` is the historical format: per day, the union of hours and the
/// union of minutes, which loses partial-hour selections. `Exact` groups
/// hours by their own minute set and may emit several clauses per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    #[default]
    Compat,
    Exact,
}

impl EncodingMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compat => "compat",
            Self::Exact => "exact",
        }
    }
}

impl std::fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
