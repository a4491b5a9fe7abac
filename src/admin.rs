//! The admin console: its screens, routes and left-hand menu.
//!
//! Everything here is data. [`manifest`] is the single source; the route
//! table and menu are built from it exactly like a manifest file would be.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::manifest::{Manifest, ManifestError, MenuEntry, RouteEntry};
use crate::nav::NavMenu;
use crate::router::RouteTable;

/// Root prefix the admin console is served under.
pub const ADMIN_ROOT: &str = "/admin/";

/// Capability names consulted by the admin menu.
pub mod caps {
    pub const DOCTORS_VIEW: &str = "doctors.view";
    pub const RESOURCE_GUIDES_VIEW: &str = "resource_guides.view";
    pub const RX_GUIDES_VIEW: &str = "rx_guides.view";
    pub const ANALYTICS_REPORTS_VIEW: &str = "analytics_reports.view";
    pub const ADMIN_ACCOUNTS_VIEW: &str = "admin_accounts.view";
    pub const PATHWAYS_VIEW: &str = "pathways.view";
    pub const FINANCIAL_VIEW: &str = "financial.view";
    pub const CASE_VIEW: &str = "case.view";
}

/// Screens of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AdminScreen {
    Dashboard,
    DoctorSearch,
    Doctor,
    CareProviderMappings,
    Guides,
    Analytics,
    AccountsList,
    Account,
    Drugs,
    Pathways,
    Financial,
    FavoriteTreatmentPlan,
    Visit,
}

impl AdminScreen {
    pub const ALL: [AdminScreen; 13] = [
        AdminScreen::Dashboard,
        AdminScreen::DoctorSearch,
        AdminScreen::Doctor,
        AdminScreen::CareProviderMappings,
        AdminScreen::Guides,
        AdminScreen::Analytics,
        AdminScreen::AccountsList,
        AdminScreen::Account,
        AdminScreen::Drugs,
        AdminScreen::Pathways,
        AdminScreen::Financial,
        AdminScreen::FavoriteTreatmentPlan,
        AdminScreen::Visit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdminScreen::Dashboard => "dashboard",
            AdminScreen::DoctorSearch => "doctorSearch",
            AdminScreen::Doctor => "doctor",
            AdminScreen::CareProviderMappings => "careProviderMappings",
            AdminScreen::Guides => "guides",
            AdminScreen::Analytics => "analytics",
            AdminScreen::AccountsList => "accountsList",
            AdminScreen::Account => "account",
            AdminScreen::Drugs => "drugs",
            AdminScreen::Pathways => "pathways",
            AdminScreen::Financial => "financial",
            AdminScreen::FavoriteTreatmentPlan => "favoriteTreatmentPlan",
            AdminScreen::Visit => "visit",
        }
    }
}

impl fmt::Display for AdminScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no admin screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScreen(pub String);

impl fmt::Display for UnknownScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown admin screen '{}'", self.0)
    }
}

impl std::error::Error for UnknownScreen {}

impl FromStr for AdminScreen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminScreen::ALL
            .iter()
            .copied()
            .find(|screen| screen.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

/// Routes and menu of the admin console.
///
/// Literal routes precede the parameter routes they compete with, so
/// `pathways` (page=list) is found before `pathways/:page`.
pub fn manifest() -> Manifest {
    use caps::*;

    let routes = vec![
        RouteEntry::new("", "dashboard"),
        RouteEntry::new("doctors", "doctorSearch"),
        RouteEntry::new("doctors/:doctorID/:page", "doctor"),
        RouteEntry::new("care_provider_mappings", "careProviderMappings"),
        RouteEntry::new("guides/:page", "guides"),
        RouteEntry::new("guides/:page/:guideID", "guides"),
        RouteEntry::new("analytics/:page", "analytics"),
        RouteEntry::new("analytics/:page/:reportID", "analytics"),
        RouteEntry::new("accounts", "accountsList"),
        RouteEntry::new("accounts/:accountID/:page", "account"),
        RouteEntry::new("drugs", "drugs"),
        RouteEntry::new("pathways", "pathways").with_default("page", "list"),
        RouteEntry::new("pathways/:page", "pathways"),
        RouteEntry::new("pathways/:page/:pathwayID", "pathways"),
        RouteEntry::new("financial", "financial").with_default("page", "incoming"),
        RouteEntry::new("financial/:page", "financial"),
        RouteEntry::new("treatment_plan/favorite/:ftpID/:page", "favoriteTreatmentPlan"),
        RouteEntry::new("case/visit", "visit").with_default("page", "overview"),
        RouteEntry::new("case/:caseID/visit/:visitID", "visit").with_default("page", "details"),
    ];

    let menu = vec![
        MenuEntry::new("dashboard", "", "Dashboard", &[]),
        MenuEntry::new("doctorSearch", "doctors", "Doctors", &[DOCTORS_VIEW]),
        MenuEntry::new(
            "careProviderMappings",
            "care_provider_mappings",
            "CP Mappings",
            &[DOCTORS_VIEW],
        ),
        MenuEntry::new(
            "guides",
            "guides/resources",
            "Guides",
            &[RESOURCE_GUIDES_VIEW, RX_GUIDES_VIEW],
        ),
        MenuEntry::new("analytics", "analytics/query", "Analytics", &[ANALYTICS_REPORTS_VIEW]),
        MenuEntry::new("accountsList", "accounts", "Accounts", &[ADMIN_ACCOUNTS_VIEW]),
        MenuEntry::new("drugs", "drugs", "Drugs", &[]),
        MenuEntry::new("pathways", "pathways", "Pathways", &[PATHWAYS_VIEW]),
        MenuEntry::new("financial", "financial/incoming", "Financial", &[FINANCIAL_VIEW]),
        MenuEntry::new("visit", "case/visit", "Visit Overview", &[CASE_VIEW]),
    ];

    Manifest {
        title: "Admin".to_string(),
        root: ADMIN_ROOT.to_string(),
        routes,
        menu,
        right_menu: Vec::new(),
    }
}

/// The admin console's route table.
pub fn route_table() -> Result<RouteTable<AdminScreen>, ManifestError> {
    manifest().build_table()
}

/// The admin console's unfiltered menu.
pub fn menu() -> Result<NavMenu<AdminScreen>, ManifestError> {
    manifest().build_menu()
}
