use std::fmt;

use serde::{Deserialize, Serialize};

/// Soil fertility category produced by the classifier.
///
/// The trained model emits integer labels; anything outside the known set
/// resolves to [`FertilityClass::Unknown`] so every prediction has a
/// presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FertilityClass {
    Low,
    Moderate,
    High,
    Unknown,
}

impl FertilityClass {
    /// Maps a raw class label to its category.
    #[must_use]
    pub fn from_label(label: u32) -> Self {
        match label {
            0 => Self::Low,
            1 => Self::Moderate,
            2 => Self::High,
            _ => Self::Unknown,
        }
    }

    /// The label this category corresponds to, if it is a trained class.
    #[must_use]
    pub fn label(self) -> Option<u32> {
        match self {
            Self::Low => Some(0),
            Self::Moderate => Some(1),
            Self::High => Some(2),
            Self::Unknown => None,
        }
    }

    /// Background color of the result panel.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#FFAB91",
            Self::Moderate => "#FFE082",
            Self::High => "#FFB74D",
            Self::Unknown => "#E0E0E0",
        }
    }

    /// Heading shown on the result panel.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Low => "Low Fertility Soil",
            Self::Moderate => "Moderate Fertility Soil",
            Self::High => "High Fertility Soil",
            Self::Unknown => "Unknown Level",
        }
    }

    /// Guidance text for the category.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Low => {
                "This soil lacks sufficient nutrients. Use organic manure, compost, \
                 and soil enrichment methods."
            }
            Self::Moderate => {
                "The soil has moderate nutrients. Maintain balance using crop rotation \
                 and organic supplements."
            }
            Self::High => "Soil is nutrient-rich — ideal for commercial and high-yield crops.",
            Self::Unknown => {
                "Unable to classify fertility level — check input values or model integrity."
            }
        }
    }

    /// Recommended crops for the category.
    #[must_use]
    pub fn crops(self) -> &'static [&'static str] {
        match self {
            Self::Low => &["Millets", "Pulses", "Groundnut", "Sorghum", "Horse Gram"],
            Self::Moderate => &["Maize", "Cotton", "Sunflower", "Barley", "Mustard"],
            Self::High => &["Rice", "Wheat", "Sugarcane", "Vegetables", "Banana", "Mango"],
            Self::Unknown => &[],
        }
    }
}

impl fmt::Display for FertilityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
