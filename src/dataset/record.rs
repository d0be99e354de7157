// the compute script's contract
use serde::{Deserialize, Serialize};

use super::LoadError;
use crate::color::ColorSample;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgColorRecord {
    pub file: String,
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl TryFrom<AvgColorRecord> for ColorSample {
    type Error = LoadError;

    fn try_from(record: AvgColorRecord) -> Result<Self, Self::Error> {
        for (channel, value) in [("r", record.r), ("g", record.g), ("b", record.b)] {
            if !value.is_finite() {
                return Err(LoadError::InvalidChannel {
                    file: record.file,
                    channel,
                    value,
                });
            }
        }

        Ok(ColorSample::new(record.file, record.r, record.g, record.b))
    }
}

impl From<&ColorSample> for AvgColorRecord {
    fn from(sample: &ColorSample) -> Self {
        Self {
            file: sample.id.clone(),
            r: sample.color.r,
            g: sample.color.g,
            b: sample.color.b,
        }
    }
}
