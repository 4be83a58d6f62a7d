// Dashboard domain model - fixed embed descriptors for the hosted reports
use super::page::Page;
use serde::Serialize;

pub const EMBED_HEIGHT: u32 = 550;

const SOCIAL_MEDIA_URL: &str =
    "https://lookerstudio.google.com/embed/reporting/66dbd436-1ac5-46fa-9a67-b4384db6a2d6/page/JrlWF";
const COMPLAINT_URL: &str =
    "https://lookerstudio.google.com/embed/u/0/reporting/fb60b83c-ea69-4f1a-993c-f329fd21f366/page/tMxWF";
const TREND_URL: &str =
    "https://lookerstudio.google.com/embed/reporting/12e0f067-f32d-43f9-bf6d-e04e82ffaac8/page/p_c5tagt8dwd";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardDescriptor {
    pub url: &'static str,
    pub height: u32,
    pub scrolling: bool,
}

impl DashboardDescriptor {
    const fn embedded(url: &'static str) -> Self {
        Self {
            url,
            height: EMBED_HEIGHT,
            scrolling: true,
        }
    }

    pub const SOCIAL_MEDIA: Self = Self::embedded(SOCIAL_MEDIA_URL);
    pub const COMPLAINT: Self = Self::embedded(COMPLAINT_URL);
    pub const TREND: Self = Self::embedded(TREND_URL);

    /// Descriptor for a page, `None` for pages without an embedded report
    pub fn for_page(page: Page) -> Option<Self> {
        match page {
            Page::SocialMedia => Some(Self::SOCIAL_MEDIA),
            Page::Complaint => Some(Self::COMPLAINT),
            Page::Trend => Some(Self::TREND),
            Page::Overview | Page::About => None,
        }
    }
}
