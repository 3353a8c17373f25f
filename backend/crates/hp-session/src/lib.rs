//! Per-visitor portal session.
//!
//! A [`PortalSession`] owns everything one visitor's portal needs: the
//! authentication gate, the fetch epoch, the resolved tenant and the route
//! table derived from it. Nothing in a session is shared with another one.

mod apply_outcome;
mod error;
mod fetch_ticket;
mod portal_session;
mod session_id;
mod session_settings;
mod session_snapshot;
mod session_store;
mod shell_view;

pub use apply_outcome::ApplyOutcome;
pub use error::{Result, SessionError};
pub use fetch_ticket::FetchTicket;
pub use portal_session::PortalSession;
pub use session_id::SessionId;
pub use session_settings::SessionSettings;
pub use session_snapshot::{SessionSnapshot, TenantBranding, VisitorSummary};
pub use session_store::{SessionStore, SharedSession};
pub use shell_view::ShellView;

#[cfg(test)]
mod tests;
