use serde::{Deserialize, Serialize};

/// Cut-offs used by the classification cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub neuropathic_min_symptoms: u32,
    pub mixed_min_evaporative: u32,
    pub mixed_min_aqueous: u32,
    pub evaporative_min: u32,
    pub aqueous_deficit_min: u32,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            neuropathic_min_symptoms: 15,
            mixed_min_evaporative: 12,
            mixed_min_aqueous: 10,
            evaporative_min: 8,
            aqueous_deficit_min: 8,
        }
    }
}
