// Application state for HTTP handlers
use crate::application::navigation_shell::NavigationShell;
use crate::application::progress::Pacing;
use crate::application::streaming_service::StreamingPageService;

#[derive(Clone)]
pub struct AppState {
    pub shell: NavigationShell,
    pub streaming_service: StreamingPageService,
}

impl AppState {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            shell: NavigationShell::new(),
            streaming_service: StreamingPageService::new(pacing),
        }
    }
}
