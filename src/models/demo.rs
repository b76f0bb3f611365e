//! Demo sites so the dashboard has something to plot.

use super::marker::Marker;
use super::mission_module::MissionModule;

/// Marker tagged with the module it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSite {
    pub module: MissionModule,
    pub marker: Marker,
}

fn site(module: MissionModule, id: &str, name: &str, lat: f64, lng: f64, score: u8) -> DemoSite {
    DemoSite {
        module,
        marker: Marker::new(id, name, lat, lng, score),
    }
}

pub fn get_demo_sites() -> Vec<DemoSite> {
    use MissionModule::*;

    vec![
        site(CriticalMinerals, "min-ring-of-fire", "Ring of Fire, ON", 52.75, -86.30, 88),
        site(CriticalMinerals, "min-sudbury", "Sudbury Basin Nickel, ON", 46.49, -80.99, 82),
        site(CriticalMinerals, "min-thompson", "Thompson Nickel Belt, MB", 55.74, -97.86, 64),
        site(CriticalMinerals, "min-james-bay", "James Bay Lithium, QC", 52.23, -77.60, 79),
        site(SovereignCompute, "cmp-beauharnois", "Beauharnois Data Campus, QC", 45.31, -73.87, 91),
        site(SovereignCompute, "cmp-calgary", "Calgary AI Compute Hub, AB", 51.05, -114.07, 73),
        site(SovereignCompute, "cmp-kelowna", "Okanagan Sovereign Cloud, BC", 49.89, -119.50, 58),
        site(EsgReporting, "esg-toronto", "Toronto Financial ESG Desk, ON", 43.65, -79.38, 67),
        site(EsgReporting, "esg-vancouver", "Vancouver Green Bond Office, BC", 49.28, -123.12, 81),
        site(RegulatoryCompliance, "reg-ottawa", "Federal Permitting Office, ON", 45.42, -75.70, 55),
        site(RegulatoryCompliance, "reg-yellowknife", "NWT Land & Water Board, NT", 62.45, -114.37, 47),
        site(PredictiveMaintenance, "pm-churchill-falls", "Churchill Falls Generating, NL", 53.53, -63.97, 86),
        site(PredictiveMaintenance, "pm-bruce", "Bruce Nuclear, ON", 44.33, -81.60, 84),
        site(PredictiveMaintenance, "pm-site-c", "Site C Dam, BC", 56.19, -120.91, 69),
        site(EnergyTrading, "trd-alberta-pool", "Alberta Power Pool, AB", 53.55, -113.49, 77),
        site(EnergyTrading, "trd-ieso", "IESO Market Node, ON", 43.59, -79.64, 83),
        site(EnergyManagement, "em-montreal", "Montréal Smart Grid Pilot, QC", 45.50, -73.57, 72),
        site(EnergyManagement, "em-regina", "Regina Microgrid, SK", 50.45, -104.61, 61),
        site(EnvironmentalImpact, "env-athabasca", "Athabasca Watershed, AB", 57.00, -111.60, 42),
        site(EnvironmentalImpact, "env-boreal", "Boreal Carbon Sink Survey, MB", 54.00, -98.00, 80),
        site(EdgeAi, "edge-waterloo", "Waterloo Edge Inference Lab, ON", 43.46, -80.52, 89),
        site(EdgeAi, "edge-iqaluit", "Iqaluit Remote AI Node, NU", 63.75, -68.52, 63),
        site(GridModernization, "grid-saint-john", "Saint John Grid Upgrade, NB", 45.27, -66.06, 70),
        site(GridModernization, "grid-halifax", "Nova Scotia Intertie, NS", 44.65, -63.58, 81),
        site(CarbonCapture, "ccs-quest", "Quest CCS, AB", 53.78, -113.08, 92),
        site(CarbonCapture, "ccs-boundary-dam", "Boundary Dam CCS, SK", 49.10, -103.03, 74),
    ]
}

/// Markers for one module, in dataset order
pub fn markers_for(module: MissionModule) -> Vec<Marker> {
    get_demo_sites()
        .into_iter()
        .filter(|s| s.module == module)
        .map(|s| s.marker)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_module_has_sites() {
        for module in MissionModule::ALL {
            assert!(!markers_for(module).is_empty(), "{:?} has no demo sites", module);
        }
    }

    #[test]
    fn ids_are_unique_and_sites_valid() {
        let sites = get_demo_sites();
        let ids: HashSet<_> = sites.iter().map(|s| s.marker.id.clone()).collect();
        assert_eq!(ids.len(), sites.len());
        assert!(sites.iter().all(|s| {
            let m = &s.marker;
            !m.id.is_empty() && (-90.0..=90.0).contains(&m.latitude) && (-180.0..=180.0).contains(&m.longitude)
        }));
    }
}
