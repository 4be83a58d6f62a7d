// Cosmetic loading sequence - bounded percentage steps with a fixed pause
use std::time::Duration;

pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_DONE: u8 = 100;

/// Yields 0, 10, 20, ..., 100 and then stops.
#[derive(Debug, Clone)]
pub struct ProgressSequence {
    next: Option<u8>,
}

impl ProgressSequence {
    pub fn new() -> Self {
        Self { next: Some(0) }
    }
}

impl Default for ProgressSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ProgressSequence {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let current = self.next?;
        self.next = current
            .checked_add(PROGRESS_STEP)
            .filter(|value| *value <= PROGRESS_DONE);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|n| usize::from((PROGRESS_DONE - n) / PROGRESS_STEP) + 1)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProgressSequence {}

/// Pauses used while streaming a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub step_delay: Duration,
    pub finalize_delay: Duration,
}

impl Pacing {
    pub fn new(step_delay: Duration, finalize_delay: Duration) -> Self {
        Self {
            step_delay,
            finalize_delay,
        }
    }

    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Total time a full loading sequence plus finalization takes
    pub fn dashboard_load_time(&self) -> Duration {
        self.step_delay * ProgressSequence::new().len() as u32 + self.finalize_delay
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_millis(30), Duration::from_millis(300))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_reaches_one_hundred() {
        let steps: Vec<u8> = ProgressSequence::new().collect();
        assert_eq!(steps, vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_sequence_is_bounded() {
        let mut seq = ProgressSequence::new();
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.by_ref().last(), Some(PROGRESS_DONE));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_dashboard_load_time() {
        assert_eq!(Pacing::default().dashboard_load_time(), Duration::from_millis(630));
        assert_eq!(Pacing::immediate().dashboard_load_time(), Duration::ZERO);
    }
}
