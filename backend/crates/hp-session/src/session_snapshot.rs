use hp_auth::GateStatus;
use hp_core::NavEntry;

use serde::Serialize;

/// Serializable state of a session, for the portal's client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: GateStatus,
    pub visitor: Option<VisitorSummary>,
    pub organization_id: Option<String>,
    pub tenant: Option<TenantBranding>,
    /// `false` while the tenant configuration is still being fetched
    pub tenant_loaded: bool,
    pub nav: Vec<NavEntry>,
    pub default_route: Option<&'static str>,
    /// Shown when the tenant configuration could not be loaded
    pub notice: Option<String>,
}

/// Header details of the signed-in visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorSummary {
    pub subject: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// `tenantid` from the namespaced user metadata claim
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantBranding {
    pub tenant_id: Option<String>,
    pub display_name: Option<String>,
    pub accent_color: Option<String>,
}
