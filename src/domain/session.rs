// Session state - the previously rendered page, threaded through each cycle
use super::element::Toast;
use super::page::Page;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub last_page: Option<Page>,
}

impl SessionState {
    pub fn new(last_page: Option<Page>) -> Self {
        Self { last_page }
    }

    /// Record `page` as the rendered page.
    ///
    /// Returns the transition notification when the selection differs from
    /// the previous cycle. The first selection of a session only seeds
    /// `last_page`.
    pub fn select(self, page: Page) -> (SessionState, Option<Toast>) {
        let notification = match self.last_page {
            Some(last) if last != page => Some(Toast::new("🔄", format!("Switched to {}", page))),
            _ => None,
        };

        (Self::new(Some(page)), notification)
    }
}
