use std::sync::Arc;

use crate::geometry::Viewport;
use crate::view_model::AppViewModel;
use crate::widgets::{
    chat::Chat, contact::ContactForm, generative::GenerativeDemo, navigation::Navigation,
    scroll::ScrollEffects, sentiment::SentimentDemo, tabs::Tabs, visual::VisualSearch,
};
use crate::{Config, PageLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

/// Whole-page state: one controller per widget plus the shared viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) config: Arc<Config>,
    pub(crate) viewport: Viewport,
    pub(crate) backend: BackendStatus,
    pub(crate) navigation: Navigation,
    pub(crate) tabs: Tabs,
    pub(crate) chat: Chat,
    pub(crate) sentiment: SentimentDemo,
    pub(crate) visual: VisualSearch,
    pub(crate) generative: GenerativeDemo,
    pub(crate) scroll_effects: ScrollEffects,
    pub(crate) contact: ContactForm,
    dirty: bool,
}

impl AppState {
    pub fn new(config: Arc<Config>, layout: PageLayout) -> Self {
        let PageLayout {
            viewport,
            sections,
            nav_links,
            tab_panes,
            cards,
            stats_region,
            stats,
        } = layout;
        Self {
            config,
            viewport,
            backend: BackendStatus::Unknown,
            navigation: Navigation::new(sections, nav_links),
            tabs: Tabs::new(tab_panes),
            chat: Chat::default(),
            sentiment: SentimentDemo::default(),
            visual: VisualSearch::default(),
            generative: GenerativeDemo::default(),
            scroll_effects: ScrollEffects::new(cards, stats_region, stats),
            contact: ContactForm::default(),
            dirty: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            backend: self.backend,
            navigation: self.navigation.view(),
            tabs: self.tabs.view(),
            chat: self.chat.view(),
            sentiment: self.sentiment.view(),
            visual: self.visual.view(),
            generative: self.generative.view(&self.config),
            scroll: self.scroll_effects.view(),
            contact: self.contact.view(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}
