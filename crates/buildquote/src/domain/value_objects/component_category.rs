//! ComponentCategory - Part slots of a PC build

use serde::{Deserialize, Serialize};

/// Component category; a build holds exactly one part per category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ComponentCategory {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "RAM")]
    Ram,
}

impl ComponentCategory {
    /// All categories in display order
    pub const ALL: [ComponentCategory; 3] = [
        ComponentCategory::Cpu,
        ComponentCategory::Gpu,
        ComponentCategory::Ram,
    ];
}

impl std::fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentCategory::Cpu => write!(f, "CPU"),
            ComponentCategory::Gpu => write!(f, "GPU"),
            ComponentCategory::Ram => write!(f, "RAM"),
        }
    }
}

impl std::str::FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(ComponentCategory::Cpu),
            "gpu" => Ok(ComponentCategory::Gpu),
            "ram" => Ok(ComponentCategory::Ram),
            _ => Err(format!("Unknown component category: {}", s)),
        }
    }
}
