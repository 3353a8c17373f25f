use crate::{
    ApplyOutcome, FetchTicket, Result as SessionResult, SessionError, SessionSettings,
    SessionSnapshot, ShellView, TenantBranding, VisitorSummary,
};

use std::sync::Arc;

use hp_auth::{AuthGate, GateDecision, IdentityClaims, UserMetadata, local_return_path};
use hp_core::{ROOT_PATH, RootRedirect, RouteResolution, RouteTable, UseCase};
use hp_tenant::{TenantConfigSource, TenantResolution, TenantResolver};
use log::{debug, info};

const TENANT_UNAVAILABLE_NOTICE: &str =
    "Your organization's modules could not be loaded. Please try again later.";

/// One visitor's portal.
///
/// Sign-in goes through the gate first; only once the organization id is
/// known is a [`FetchTicket`] issued for the tenant configuration. Every
/// logout starts a new epoch so results of fetches issued before it are
/// dropped on arrival.
pub struct PortalSession {
    settings: Arc<SessionSettings>,
    source: Arc<dyn TenantConfigSource>,
    gate: AuthGate,
    epoch: u64,
    organization_id: Option<String>,
    tenant: Option<TenantResolution>,
    route_table: RouteTable,
    root_redirect: RootRedirect,
    resolver: Arc<TenantResolver>,
}

impl PortalSession {
    pub fn new(settings: Arc<SessionSettings>, source: Arc<dyn TenantConfigSource>) -> Self {
        let resolver = Arc::new(TenantResolver::new(
            Arc::clone(&source),
            settings.tenant_timeout,
        ));

        Self {
            gate: AuthGate::new(settings.login_timeout),
            settings,
            source,
            epoch: 0,
            organization_id: None,
            tenant: None,
            route_table: RouteTable::empty(),
            root_redirect: RootRedirect::new(),
            resolver,
        }
    }

    pub fn gate(&self) -> &AuthGate {
        &self.gate
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }

    pub fn route_table(&self) -> &RouteTable {
        &self.route_table
    }

    pub fn tenant(&self) -> Option<&TenantResolution> {
        self.tenant.as_ref()
    }

    /// Resolver scoped to this session's current epoch.
    pub fn resolver(&self) -> Arc<TenantResolver> {
        Arc::clone(&self.resolver)
    }

    /// Decide what a navigation to `path` shows.
    pub fn visit(&mut self, path: &str) -> ShellView {
        match self.gate.visit(path) {
            GateDecision::StartLogin { nonce } => ShellView::StartLogin { nonce },
            GateDecision::Loading => ShellView::Loading,
            GateDecision::ShowError { message } => ShellView::Error { message },
            GateDecision::Render => self.render(path),
        }
    }

    /// Start a login explicitly. Returns the nonce for the provider `state`.
    pub fn begin_login(&mut self, return_to: &str) -> SessionResult<String> {
        Ok(self.gate.begin_login(return_to)?)
    }

    /// Authorize the pending login and issue the ticket for the tenant fetch.
    pub fn complete_login(
        &mut self,
        nonce: &str,
        claims: IdentityClaims,
    ) -> SessionResult<FetchTicket> {
        let org_id = claims.organization_id(&self.settings.org_claim_fallback);
        self.gate.authorize(nonce, claims)?;

        if org_id.is_empty() {
            info!("Signed-in visitor has no organization claim");
        }

        self.organization_id = Some(org_id.clone());
        self.clear_tenant();

        Ok(FetchTicket {
            epoch: self.epoch,
            org_id,
        })
    }

    pub fn fail_login(&mut self, message: impl Into<String>) {
        self.gate.fail(message);
    }

    /// Ticket for re-fetching the current organization's configuration.
    pub fn retry_ticket(&self) -> SessionResult<FetchTicket> {
        match (&self.organization_id, self.gate.is_authenticated()) {
            (Some(org_id), true) => Ok(FetchTicket {
                epoch: self.epoch,
                org_id: org_id.clone(),
            }),
            _ => Err(SessionError::not_signed_in()),
        }
    }

    /// Apply a settled fetch if the ticket still belongs to this session.
    pub fn apply_tenant(
        &mut self,
        ticket: &FetchTicket,
        resolution: TenantResolution,
    ) -> ApplyOutcome {
        let current = ticket.epoch == self.epoch
            && self.gate.is_authenticated()
            && self.organization_id.as_deref() == Some(ticket.org_id.as_str());

        if !current {
            debug!(
                "Discarding tenant result for '{}' from epoch {} (now {})",
                ticket.org_id, ticket.epoch, self.epoch
            );
            return ApplyOutcome::Discarded;
        }

        self.route_table = RouteTable::build(&resolution.use_cases);
        self.tenant = Some(resolution);

        ApplyOutcome::Applied {
            default_path: self.route_table.default_route().path(),
        }
    }

    /// First destination after sign-in: the captured path if it is still
    /// reachable, else the default route, else `/`.
    pub fn landing_path(&mut self) -> String {
        let captured = self.gate.take_return_to(None);
        let reachable = captured.filter(|path| {
            matches!(self.route_table.resolve(path), RouteResolution::Page(_))
        });

        reachable
            .or_else(|| self.route_table.default_route().path().map(String::from))
            .unwrap_or_else(|| String::from(ROOT_PATH))
    }

    /// Where a signed-in visitor asking for `return_to` is sent.
    ///
    /// Only same-origin paths are honored; anything else lands on the
    /// default route, else `/`.
    pub fn destination_for(&self, return_to: &str) -> String {
        local_return_path(return_to)
            .or_else(|| self.route_table.default_route().path().map(String::from))
            .unwrap_or_else(|| String::from(ROOT_PATH))
    }

    /// End the session. Any fetch still in flight belongs to the old epoch.
    pub fn logout(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.gate.logout();
        self.organization_id = None;
        self.clear_tenant();
        self.resolver = Arc::new(TenantResolver::new(
            Arc::clone(&self.source),
            self.settings.tenant_timeout,
        ));
        debug!("Session entered epoch {}", self.epoch);
    }

    pub fn snapshot(&self, current_path: Option<&str>) -> SessionSnapshot {
        let visitor = self.gate.claims().map(|claims| VisitorSummary {
            subject: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            tenant_id: UserMetadata::from_claims(claims, &self.settings.metadata_namespace)
                .tenant_id,
        });

        let tenant = self
            .tenant
            .as_ref()
            .and_then(|resolution| resolution.config.as_ref())
            .map(|config| TenantBranding {
                tenant_id: config.tenant_id.clone(),
                display_name: config.display_name.clone(),
                accent_color: config.accent_color.clone(),
            });

        let nav = match current_path {
            Some(path) => self.route_table.nav_for(path),
            None => self.route_table.nav_entries().to_vec(),
        };

        SessionSnapshot {
            status: self.gate.status(),
            visitor,
            organization_id: self.organization_id.clone(),
            tenant,
            tenant_loaded: self.tenant.is_some(),
            nav,
            default_route: self.route_table.default_route().path(),
            notice: self.notice(),
        }
    }

    fn render(&mut self, path: &str) -> ShellView {
        if self.tenant.is_none() {
            return ShellView::Loading;
        }

        match self.route_table.resolve(path) {
            // The first `/` for an enabled set redirects; later ones mount
            // the default page in place.
            RouteResolution::RedirectTo(default) => {
                match self.root_redirect.decide(&self.route_table, path) {
                    Some(target) => ShellView::Redirect {
                        to: target.to_string(),
                    },
                    None => self.page(default, default.path()),
                }
            }
            RouteResolution::Page(use_case) => self.page(use_case, path),
            RouteResolution::NoModulesEnabled => ShellView::NoModulesEnabled {
                notice: self.notice(),
            },
            RouteResolution::NotFound => ShellView::NotFound {
                path: path.to_string(),
            },
        }
    }

    fn page(&self, use_case: UseCase, path: &str) -> ShellView {
        if use_case.is_external()
            && let Some(url) = &self.settings.voice_assistant_url
        {
            return ShellView::External {
                use_case,
                url: url.clone(),
            };
        }

        ShellView::Page {
            use_case,
            path: use_case.path(),
            nav: self.route_table.nav_for(path),
        }
    }

    fn notice(&self) -> Option<String> {
        self.tenant
            .as_ref()
            .filter(|resolution| resolution.is_failed())
            .map(|_| TENANT_UNAVAILABLE_NOTICE.to_string())
    }

    fn clear_tenant(&mut self) {
        self.tenant = None;
        self.route_table = RouteTable::empty();
        self.root_redirect.reset();
    }
}
