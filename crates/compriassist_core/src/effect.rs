use std::time::Duration;

use crate::{DescriptionRequest, FileSelection, RequestToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SendChatMessage {
        token: RequestToken,
        message: String,
        user_id: String,
    },
    AnalyzeSentiment {
        token: RequestToken,
        text: String,
    },
    SearchSimilar {
        token: RequestToken,
        file: FileSelection,
        top_k: u32,
    },
    GenerateDescription {
        token: RequestToken,
        request: DescriptionRequest,
    },
    CheckBackend,
    /// One-shot timer. Scheduling a key that is still pending replaces it,
    /// which is what debounces the scroll handlers.
    Schedule { key: TimerKey, delay: Duration },
    /// Fires `ticks` times, `interval` apart, then stops on its own.
    StartTicker {
        key: TimerKey,
        interval: Duration,
        ticks: u32,
    },
    CancelTimer { key: TimerKey },
    CancelAllTimers,
    /// Animated scroll to a document offset.
    ScrollTo { top: f64 },
    Focus { target: FocusTarget },
    Alert { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    NavigationScroll,
    ScrollTopScroll,
    RevealScroll,
    CardReveal(usize),
    StatsCounter,
    Typewriter(RequestToken),
    ContactSent,
    ContactReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    ChatInput,
    ReviewText,
    ProductName,
}
