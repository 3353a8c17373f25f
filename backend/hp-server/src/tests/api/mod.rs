mod error;
mod session_cookie;
mod shell;
