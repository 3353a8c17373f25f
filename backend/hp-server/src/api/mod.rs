pub mod auth;
pub mod error;
pub mod session;
pub mod session_cookie;
pub mod shell;
