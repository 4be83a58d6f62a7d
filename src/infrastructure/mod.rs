// Infrastructure layer - Configuration and HTML delivery
pub mod chunked_html;
pub mod config;
pub mod html;
