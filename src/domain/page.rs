// Page domain model - the closed set of navigation destinations
use crate::error::HubError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    SocialMedia,
    Complaint,
    Trend,
    About,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::SocialMedia,
        Page::Complaint,
        Page::Trend,
        Page::About,
    ];

    /// Label shown in the sidebar and in transition notifications
    pub fn label(self) -> &'static str {
        match self {
            Page::Overview => "🏠 Dashboard Overview",
            Page::SocialMedia => "📊 Social Media Analysis",
            Page::Complaint => "📋 Complaint Analysis",
            Page::Trend => "📉 Trend Analysis",
            Page::About => "ℹ️ About",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::SocialMedia => "social-media",
            Page::Complaint => "complaint",
            Page::Trend => "trend",
            Page::About => "about",
        }
    }

    pub fn path(self) -> String {
        format!("/pages/{}", self.slug())
    }
}

impl FromStr for Page {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| HubError::UnknownPage(s.to_string()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
