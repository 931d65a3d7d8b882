use crate::widgets::{
    chat::ChatView, contact::ContactView, generative::GenerativeView,
    navigation::NavigationView, scroll::ScrollEffectsView, sentiment::SentimentView,
    tabs::TabView, visual::VisualSearchView,
};
use crate::BackendStatus;

/// Render-ready snapshot of the whole page. All text that came from the
/// user or the backend is already HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub backend: BackendStatus,
    pub navigation: NavigationView,
    pub tabs: Vec<TabView>,
    pub chat: ChatView,
    pub sentiment: SentimentView,
    pub visual: VisualSearchView,
    pub generative: GenerativeView,
    pub scroll: ScrollEffectsView,
    pub contact: ContactView,
    pub dirty: bool,
}
