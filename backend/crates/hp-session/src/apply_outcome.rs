/// Result of handing a settled tenant fetch to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Route table rebuilt. Carries the default route path, if any module is
    /// enabled.
    Applied { default_path: Option<&'static str> },
    /// The session moved on (logout, new login) since the ticket was issued.
    Discarded,
}
