/// What the gate allows for a requested protected path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Start the provider login flow; the requested path has been captured.
    StartLogin { nonce: String },
    /// Sign-in in progress, show a placeholder.
    Loading,
    Render,
    ShowError { message: String },
}
