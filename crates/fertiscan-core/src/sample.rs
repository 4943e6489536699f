use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FertiscanError, Result};

/// Number of nutrient readings consumed by the classifier.
pub const NUM_FEATURES: usize = 12;

/// The twelve soil nutrients, in model feature order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
    Ph,
    ElectricalConductivity,
    OrganicCarbon,
    Sulphur,
    Zinc,
    Iron,
    Copper,
    Manganese,
    Boron,
}

impl Nutrient {
    /// All nutrients in model feature order.
    pub const ALL: [Nutrient; NUM_FEATURES] = [
        Nutrient::Nitrogen,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Ph,
        Nutrient::ElectricalConductivity,
        Nutrient::OrganicCarbon,
        Nutrient::Sulphur,
        Nutrient::Zinc,
        Nutrient::Iron,
        Nutrient::Copper,
        Nutrient::Manganese,
        Nutrient::Boron,
    ];

    /// Label shown next to the reading on the input form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Nitrogen => "Nitrogen (N)",
            Self::Phosphorus => "Phosphorus (P)",
            Self::Potassium => "Potassium (K)",
            Self::Ph => "pH Level",
            Self::ElectricalConductivity => "Electrical Conductivity (EC)",
            Self::OrganicCarbon => "Organic Carbon (OC)",
            Self::Sulphur => "Sulphur (S)",
            Self::Zinc => "Zinc (Zn)",
            Self::Iron => "Iron (Fe)",
            Self::Copper => "Copper (Cu)",
            Self::Manganese => "Manganese (Mn)",
            Self::Boron => "Boron (B)",
        }
    }

    /// Form field key for this reading.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Nitrogen => "nitrogen",
            Self::Phosphorus => "phosphorus",
            Self::Potassium => "potassium",
            Self::Ph => "ph",
            Self::ElectricalConductivity => "electrical_conductivity",
            Self::OrganicCarbon => "organic_carbon",
            Self::Sulphur => "sulphur",
            Self::Zinc => "zinc",
            Self::Iron => "iron",
            Self::Copper => "copper",
            Self::Manganese => "manganese",
            Self::Boron => "boron",
        }
    }

    /// Largest reading accepted for this nutrient. The lower bound is
    /// always zero and the form step is [`INPUT_STEP`].
    #[must_use]
    pub fn max(self) -> f64 {
        match self {
            Self::Ph => 14.0,
            _ => 500.0,
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Granularity of the numeric inputs on the form.
pub const INPUT_STEP: f64 = 0.1;

/// One set of soil nutrient readings, assembled per prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SoilSample {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub electrical_conductivity: f64,
    pub organic_carbon: f64,
    pub sulphur: f64,
    pub zinc: f64,
    pub iron: f64,
    pub copper: f64,
    pub manganese: f64,
    pub boron: f64,
}

impl SoilSample {
    /// Readings as a feature vector in model order.
    #[must_use]
    pub fn to_features(&self) -> [f64; NUM_FEATURES] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.ph,
            self.electrical_conductivity,
            self.organic_carbon,
            self.sulphur,
            self.zinc,
            self.iron,
            self.copper,
            self.manganese,
            self.boron,
        ]
    }

    /// Builds a sample from a feature-ordered slice.
    pub fn from_features(features: &[f64]) -> Result<Self> {
        if features.len() != NUM_FEATURES {
            return Err(FertiscanError::FeatureCount {
                expected: NUM_FEATURES,
                found: features.len(),
            });
        }

        Ok(Self {
            nitrogen: features[0],
            phosphorus: features[1],
            potassium: features[2],
            ph: features[3],
            electrical_conductivity: features[4],
            organic_carbon: features[5],
            sulphur: features[6],
            zinc: features[7],
            iron: features[8],
            copper: features[9],
            manganese: features[10],
            boron: features[11],
        })
    }

    /// Reading for a single nutrient.
    #[must_use]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Nitrogen => self.nitrogen,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
            Nutrient::Ph => self.ph,
            Nutrient::ElectricalConductivity => self.electrical_conductivity,
            Nutrient::OrganicCarbon => self.organic_carbon,
            Nutrient::Sulphur => self.sulphur,
            Nutrient::Zinc => self.zinc,
            Nutrient::Iron => self.iron,
            Nutrient::Copper => self.copper,
            Nutrient::Manganese => self.manganese,
            Nutrient::Boron => self.boron,
        }
    }

    /// Checks every reading against its `0..=max` range.
    pub fn validate(&self) -> Result<()> {
        for nutrient in Nutrient::ALL {
            let value = self.get(nutrient);
            let max = nutrient.max();
            if !value.is_finite() || value < 0.0 || value > max {
                return Err(FertiscanError::OutOfRange {
                    nutrient,
                    value,
                    max,
                });
            }
        }
        Ok(())
    }
}
