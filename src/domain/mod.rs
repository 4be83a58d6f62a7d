// Domain layer - pages, session state and render elements
pub mod dashboard;
pub mod element;
pub mod page;
pub mod session;
