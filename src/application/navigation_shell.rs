// Navigation shell - Use case for rendering one page selection
use crate::domain::dashboard::DashboardDescriptor;
use crate::domain::element::{Block, Element, Span, Toast, Tone};
use crate::domain::page::Page;
use crate::domain::session::SessionState;

const READY_ICON: &str = "✅";
const FINALIZING_TEXT: &str = "Finalizing dashboard...";

/// Output of one render cycle
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCycle {
    pub page: Page,
    pub state: SessionState,
    pub transition: Option<Toast>,
    pub elements: Vec<Element>,
}

impl RenderCycle {
    pub fn embeds(&self) -> impl Iterator<Item = &DashboardDescriptor> {
        self.elements.iter().filter_map(|e| match e {
            Element::Block(Block::Embed(descriptor)) => Some(descriptor),
            _ => None,
        })
    }
}

/// Copy that differs between the three embedded dashboards
struct DashboardCopy {
    header: &'static str,
    caption: &'static str,
    loading_label: &'static str,
    embed: DashboardDescriptor,
    closing_tone: Tone,
    closing_text: &'static str,
    ready_toast: &'static str,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationShell;

impl NavigationShell {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, state: SessionState, page: Page) -> RenderCycle {
        let (state, transition) = state.select(page);

        let elements = match page {
            Page::Overview => self.overview(),
            Page::SocialMedia => self.dashboard(DashboardCopy {
                header: "📊 Social Media Analysis",
                caption: "Get a complete overview of social media feedback and sentiment.",
                loading_label: "Loading Social Media Dashboard...",
                embed: DashboardDescriptor::SOCIAL_MEDIA,
                closing_tone: Tone::Info,
                closing_text: "💡 Tip: Use filters in the dashboard for deeper insights.",
                ready_toast: "Social Media Dashboard is ready.",
            }),
            Page::Complaint => self.dashboard(DashboardCopy {
                header: "📋 Complaint Analysis",
                caption: "Analyze customer complaints and track resolution performance.",
                loading_label: "Loading Complaint Dashboard...",
                embed: DashboardDescriptor::COMPLAINT,
                closing_tone: Tone::Warning,
                closing_text: "Review complaint trends to improve customer satisfaction.",
                ready_toast: "Complaint Dashboard is ready.",
            }),
            Page::Trend => self.dashboard(DashboardCopy {
                header: "📉 Trend Analysis",
                caption: "Drill down into specific product feedback and attribute performance.",
                loading_label: "Loading Performance Trend Dashboard...",
                embed: DashboardDescriptor::TREND,
                closing_tone: Tone::Success,
                closing_text: "Analyze product strengths and weaknesses to guide improvements.",
                ready_toast: "Performance Trend Dashboard is ready.",
            }),
            Page::About => self.about(),
        };

        RenderCycle {
            page,
            state,
            transition,
            elements,
        }
    }

    fn overview(&self) -> Vec<Element> {
        vec![
            Element::header("🏠 Dashboard Overview"),
            Element::info("Select a dashboard from the sidebar to view detailed analytics."),
            Block::List(vec![
                vec![
                    Span::plain("📊 "),
                    Span::strong("Social Media Analysis:"),
                    Span::plain(" Explore customer sentiment and trends across social platforms."),
                ],
                vec![
                    Span::plain("📋 "),
                    Span::strong("Complaint Analysis:"),
                    Span::plain(
                        " Dive into complaint data and identify key areas for improvement.",
                    ),
                ],
                vec![
                    Span::plain("📉 "),
                    Span::strong("Performance Trend Analysis:"),
                    Span::plain(
                        " Analyze detailed product feedback and performance metrics from historical data.",
                    ),
                ],
            ])
            .into(),
            Element::success("Your analytics journey starts here."),
            Element::toast("👋", "Welcome to the Dashboard Overview."),
            Block::Progress {
                percent: 100,
                text: "Dashboard loaded.".to_string(),
            }
            .into(),
        ]
    }

    fn dashboard(&self, copy: DashboardCopy) -> Vec<Element> {
        vec![
            Element::header(copy.header),
            Element::text(copy.caption),
            Element::LoadingSequence {
                label: copy.loading_label.to_string(),
            },
            Element::Finalizing {
                text: FINALIZING_TEXT.to_string(),
            },
            Block::Embed(copy.embed).into(),
            Element::callout(copy.closing_tone, copy.closing_text),
            Element::toast(READY_ICON, copy.ready_toast),
        ]
    }

    fn about(&self) -> Vec<Element> {
        vec![
            Element::header("ℹ️ About This App"),
            Block::Paragraph(vec![
                Span::strong("Agent Analytics Hub"),
                Span::plain(
                    " is designed to help teams understand customer feedback and improve service quality.",
                ),
            ])
            .into(),
            Block::List(vec![
                vec![Span::plain("Built with Rust and Google BigQuery")],
                vec![Span::plain("Integrates Looker Studio dashboards for rich visual analytics")],
            ])
            .into(),
            Element::success("For questions or feedback, contact your analytics team."),
            Element::toast("ℹ️", "Thanks for checking out the About section."),
        ]
    }
}
