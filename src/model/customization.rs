use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How hot the kitchen should make a dish. Ordinal, `None` (0) through `ExtraHot` (4).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiceLevel {
    #[default]
    None,
    Mild,
    Medium,
    Hot,
    ExtraHot,
}

impl SpiceLevel {
    pub const ALL: [SpiceLevel; 5] = [
        SpiceLevel::None,
        SpiceLevel::Mild,
        SpiceLevel::Medium,
        SpiceLevel::Hot,
        SpiceLevel::ExtraHot,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Display for SpiceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// Dietary and preparation preferences attached to one ordered dish.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOptions {
    pub low_salt: bool,
    pub low_sugar: bool,
    pub low_oil: bool,
    pub spice_level: SpiceLevel,
    pub allergy_notes: String,
    pub special_requests: String,
}

impl CustomizationOptions {
    pub fn with_allergy(mut self, notes: impl Into<String>) -> Self {
        self.allergy_notes = notes.into();
        self
    }

    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.special_requests = request.into();
        self
    }

    pub fn with_spice(mut self, level: SpiceLevel) -> Self {
        self.spice_level = level;
        self
    }
}
