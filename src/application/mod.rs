// Application layer - Use cases for navigation and page streaming
pub mod navigation_shell;
pub mod progress;
pub mod streaming_service;
