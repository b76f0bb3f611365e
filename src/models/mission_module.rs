use serde::{Deserialize, Serialize};

/// Thematic dashboard modules, each with its own accent colour on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MissionModule {
    #[default]
    CriticalMinerals,
    SovereignCompute,
    EsgReporting,
    RegulatoryCompliance,
    PredictiveMaintenance,
    EnergyTrading,
    EnergyManagement,
    EnvironmentalImpact,
    EdgeAi,
    GridModernization,
    CarbonCapture,
}

impl MissionModule {
    pub const ALL: [MissionModule; 11] = [
        MissionModule::CriticalMinerals,
        MissionModule::SovereignCompute,
        MissionModule::EsgReporting,
        MissionModule::RegulatoryCompliance,
        MissionModule::PredictiveMaintenance,
        MissionModule::EnergyTrading,
        MissionModule::EnergyManagement,
        MissionModule::EnvironmentalImpact,
        MissionModule::EdgeAi,
        MissionModule::GridModernization,
        MissionModule::CarbonCapture,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MissionModule::CriticalMinerals => "Critical Minerals",
            MissionModule::SovereignCompute => "Sovereign AI Compute",
            MissionModule::EsgReporting => "ESG Reporting",
            MissionModule::RegulatoryCompliance => "Regulatory Compliance",
            MissionModule::PredictiveMaintenance => "Predictive Maintenance",
            MissionModule::EnergyTrading => "Energy Trading",
            MissionModule::EnergyManagement => "Energy Management",
            MissionModule::EnvironmentalImpact => "Environmental Impact",
            MissionModule::EdgeAi => "Local AI Deployment",
            MissionModule::GridModernization => "Grid Modernization",
            MissionModule::CarbonCapture => "Carbon Capture",
        }
    }

    /// CSS accent colour for non-hot markers of this module
    pub fn accent_color(&self) -> &'static str {
        match self {
            MissionModule::CriticalMinerals => "#f5b700",
            MissionModule::SovereignCompute => "#7c5cff",
            MissionModule::EsgReporting => "#2ec4b6",
            MissionModule::RegulatoryCompliance => "#8d99ae",
            MissionModule::PredictiveMaintenance => "#00b4d8",
            MissionModule::EnergyTrading => "#06d6a0",
            MissionModule::EnergyManagement => "#4cc9f0",
            MissionModule::EnvironmentalImpact => "#80b918",
            MissionModule::EdgeAi => "#f72585",
            MissionModule::GridModernization => "#4361ee",
            MissionModule::CarbonCapture => "#adb5bd",
        }
    }

    /// Stable key used as `<option value>` in the module selector
    pub fn key(&self) -> &'static str {
        match self {
            MissionModule::CriticalMinerals => "minerals",
            MissionModule::SovereignCompute => "compute",
            MissionModule::EsgReporting => "esg",
            MissionModule::RegulatoryCompliance => "compliance",
            MissionModule::PredictiveMaintenance => "maintenance",
            MissionModule::EnergyTrading => "trading",
            MissionModule::EnergyManagement => "energy",
            MissionModule::EnvironmentalImpact => "environment",
            MissionModule::EdgeAi => "edge-ai",
            MissionModule::GridModernization => "grid",
            MissionModule::CarbonCapture => "ccus",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.key() == key)
    }
}
