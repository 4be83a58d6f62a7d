// Streaming page service - Progressive rendering of one cycle over a channel
use crate::application::navigation_shell::RenderCycle;
use crate::application::progress::{Pacing, ProgressSequence};
use crate::domain::element::{Block, Element, Toast};
use crate::domain::page::Page;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 32;

/// One chunk of a streamed page
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    DocumentStart { active: Page },
    Notify(Toast),
    Block(Block),
    ProgressStarted { id: usize, text: String },
    ProgressAdvanced { id: usize, percent: u8, text: String },
    ProgressCleared { id: usize },
    SpinnerStarted { id: usize, text: String },
    SpinnerCleared { id: usize },
    DocumentEnd,
}

#[derive(Clone)]
pub struct StreamingPageService {
    pacing: Pacing,
}

impl StreamingPageService {
    pub fn new(pacing: Pacing) -> Self {
        Self { pacing }
    }

    /// Spawn the producer for `cycle` and hand back the receiving end.
    ///
    /// The producer stops early if the receiver is dropped.
    pub fn stream_page(&self, cycle: RenderCycle) -> mpsc::Receiver<PageEvent> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        let pacing = self.pacing;

        tokio::spawn(async move {
            if produce(cycle, pacing, &tx).await.is_err() {
                tracing::debug!("Page stream closed by client");
            }
        });

        rx
    }
}

type Closed = mpsc::error::SendError<PageEvent>;

async fn produce(
    cycle: RenderCycle,
    pacing: Pacing,
    tx: &mpsc::Sender<PageEvent>,
) -> Result<(), Closed> {
    tx.send(PageEvent::DocumentStart { active: cycle.page }).await?;

    if let Some(toast) = cycle.transition {
        tx.send(PageEvent::Notify(toast)).await?;
    }

    // Ids are unique within one document
    let mut next_id = 0;

    for element in cycle.elements {
        match element {
            Element::LoadingSequence { label } => {
                let id = next_id;
                next_id += 1;
                play_loading_sequence(id, &label, pacing, tx).await?;
            }
            Element::Finalizing { text } => {
                let id = next_id;
                next_id += 1;
                tx.send(PageEvent::SpinnerStarted { id, text }).await?;
                tokio::time::sleep(pacing.finalize_delay).await;
                tx.send(PageEvent::SpinnerCleared { id }).await?;
            }
            Element::Toast(toast) => tx.send(PageEvent::Notify(toast)).await?,
            Element::Block(block) => tx.send(PageEvent::Block(block)).await?,
        }
    }

    tx.send(PageEvent::DocumentEnd).await
}

async fn play_loading_sequence(
    id: usize,
    label: &str,
    pacing: Pacing,
    tx: &mpsc::Sender<PageEvent>,
) -> Result<(), Closed> {
    tx.send(PageEvent::ProgressStarted {
        id,
        text: label.to_string(),
    })
    .await?;

    for percent in ProgressSequence::new() {
        tokio::time::sleep(pacing.step_delay).await;
        tx.send(PageEvent::ProgressAdvanced {
            id,
            percent,
            text: format!("{} {}%", label, percent),
        })
        .await?;
    }

    tx.send(PageEvent::ProgressCleared { id }).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigation_shell::NavigationShell;
    use crate::domain::session::SessionState;
    use std::time::Duration;
    use tokio::time::Instant;

    async fn collect(cycle: RenderCycle) -> Vec<PageEvent> {
        let mut rx = StreamingPageService::new(Pacing::immediate()).stream_page(cycle);
        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_dashboard_stream_reaches_one_hundred() {
        let cycle = NavigationShell::new().render(SessionState::default(), Page::SocialMedia);
        let events = collect(cycle).await;

        let percents: Vec<u8> = events
            .iter()
            .filter_map(|e| match e {
                PageEvent::ProgressAdvanced { percent, .. } => Some(*percent),
                _ => None,
            })
            .collect();
        assert_eq!(percents.len(), 11);
        assert_eq!(percents.last(), Some(&100));

        assert!(events.contains(&PageEvent::ProgressAdvanced {
            id: 0,
            percent: 50,
            text: "Loading Social Media Dashboard... 50%".to_string(),
        }));
        assert!(events.contains(&PageEvent::ProgressCleared { id: 0 }));
        assert!(events.contains(&PageEvent::SpinnerCleared { id: 1 }));

        assert_eq!(
            events.first(),
            Some(&PageEvent::DocumentStart {
                active: Page::SocialMedia
            })
        );
        assert_eq!(events.last(), Some(&PageEvent::DocumentEnd));
    }

    #[tokio::test]
    async fn test_embed_follows_spinner() {
        let cycle = NavigationShell::new().render(SessionState::default(), Page::Complaint);
        let events = collect(cycle).await;

        let spinner_cleared = events
            .iter()
            .position(|e| matches!(e, PageEvent::SpinnerCleared { .. }))
            .unwrap();
        let embed = events
            .iter()
            .position(|e| matches!(e, PageEvent::Block(Block::Embed(_))))
            .unwrap();
        assert!(spinner_cleared < embed);
    }

    #[tokio::test]
    async fn test_transition_notified_first() {
        let previous = SessionState::new(Some(Page::Trend));
        let cycle = NavigationShell::new().render(previous, Page::About);
        let events = collect(cycle).await;

        assert_eq!(
            events.get(1),
            Some(&PageEvent::Notify(Toast::new("🔄", "Switched to ℹ️ About")))
        );
        assert!(!events.iter().any(|e| matches!(e, PageEvent::ProgressStarted { .. })));
    }

    /// Drains the stream for `page` and reports how long it took
    async fn time_page(page: Page, pacing: Pacing) -> Duration {
        let cycle = NavigationShell::new().render(SessionState::default(), page);
        let start = Instant::now();
        let mut rx = StreamingPageService::new(pacing).stream_page(cycle);
        while rx.recv().await.is_some() {}
        start.elapsed()
    }

    #[tokio::test(start_paused = true)]
    async fn test_dashboard_stream_is_paced() {
        let pacing = Pacing::new(Duration::from_millis(10), Duration::from_millis(100));
        let expected = pacing.dashboard_load_time();
        assert_eq!(expected, Duration::from_millis(210));

        for page in [Page::SocialMedia, Page::Complaint, Page::Trend] {
            let elapsed = time_page(page, pacing).await;
            // Timer deadlines round up to the next millisecond
            assert!(
                elapsed >= expected && elapsed <= expected + Duration::from_millis(12),
                "{} took {:?}",
                page,
                elapsed
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_finalize_pause_precedes_embed() {
        let pacing = Pacing::new(Duration::ZERO, Duration::from_millis(100));
        let cycle = NavigationShell::new().render(SessionState::default(), Page::Complaint);
        let start = Instant::now();
        let mut rx = StreamingPageService::new(pacing).stream_page(cycle);

        while let Some(event) = rx.recv().await {
            match event {
                PageEvent::SpinnerStarted { .. } => {
                    assert!(start.elapsed() < pacing.finalize_delay)
                }
                PageEvent::Block(Block::Embed(_)) => {
                    assert!(start.elapsed() >= pacing.finalize_delay)
                }
                _ => {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_static_pages_are_not_paced() {
        let pacing = Pacing::new(Duration::from_millis(10), Duration::from_millis(100));
        for page in [Page::Overview, Page::About] {
            assert_eq!(time_page(page, pacing).await, Duration::ZERO, "{}", page);
        }
    }

    #[tokio::test]
    async fn test_dropped_receiver_stops_producer() {
        let cycle = NavigationShell::new().render(SessionState::default(), Page::Trend);
        let pacing = Pacing::new(
            std::time::Duration::from_millis(5),
            std::time::Duration::from_millis(5),
        );
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        assert!(produce(cycle, pacing, &tx).await.is_err());
    }
}
