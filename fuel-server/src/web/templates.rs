//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Station, StationKind};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form and filter selects.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub total: usize,
    pub states: Vec<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Station list fragment (search results).
#[derive(Template)]
#[template(path = "station_list.html")]
pub struct StationListTemplate {
    pub stations: Vec<StationView>,
    pub count: usize,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub address: String,
    pub locality: String,
    pub category: String,
    pub badge_class: String,
    pub brand: String,
    pub routing_id: String,
    pub phone: Option<String>,
    pub exit_info: Option<String>,
    pub amenities: Vec<String>,
}

impl StationView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        let (exit_info, amenities) = match &station.kind {
            StationKind::Stop { exit_info, .. } => (exit_info.clone(), Vec::new()),
            StationKind::Terminal(info) => (None, info.amenities.clone()),
        };

        let category = station.category();

        Self {
            name: station.name.clone(),
            address: station.address.clone(),
            locality: locality(station),
            category: category.as_str().to_string(),
            badge_class: match category {
                crate::domain::Category::Exclusive => "badge-exclusive",
                crate::domain::Category::Primary => "badge-primary",
                crate::domain::Category::Limited => "badge-limited",
                crate::domain::Category::FleetTerminal => "badge-terminal",
            }
            .to_string(),
            brand: station.brand.as_str().to_string(),
            routing_id: station.routing_id.clone(),
            phone: station.phone.clone(),
            exit_info,
            amenities,
        }
    }

    /// Whether the view has any second-line details to show.
    pub fn has_details(&self) -> bool {
        self.phone.is_some() || self.exit_info.is_some() || !self.amenities.is_empty()
    }
}

/// Format "City, ST ZIP" from whichever components are present.
fn locality(station: &Station) -> String {
    let mut out = station.city.clone();
    if !station.state_str().is_empty() {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(station.state_str());
    }
    if !station.zip.is_empty() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&station.zip);
    }
    out
}
