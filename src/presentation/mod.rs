// Presentation layer - HTTP routes, handlers and the session cookie
pub mod app_state;
pub mod handlers;
pub mod session_cookie;
