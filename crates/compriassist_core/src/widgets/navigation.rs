use assist_logging::assist_debug;

use crate::{Config, SectionBounds};

#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    sections: Vec<SectionBounds>,
    links: Vec<String>,
    scrolled: bool,
    active: Option<String>,
    menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationView {
    pub scrolled: bool,
    pub menu_open: bool,
    pub links: Vec<NavLinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinkView {
    pub target: String,
    pub active: bool,
}

impl Navigation {
    pub fn new(sections: Vec<SectionBounds>, links: Vec<String>) -> Self {
        Self {
            sections,
            links,
            scrolled: false,
            active: None,
            menu_open: false,
        }
    }

    /// Debounced scroll handler: recomputes the scrolled style and the
    /// active link. With no matching section the previous link stays active.
    pub fn scroll_settled(&mut self, offset: f64, config: &Config) {
        self.scrolled = offset > config.scroll_threshold;
        if let Some(id) = self.section_at(offset, config.section_offset) {
            if self.active.as_deref() != Some(id) {
                assist_debug!("active section -> {}", id);
                self.active = Some(id.to_string());
            }
        }
    }

    /// First section whose shifted span `[top - lead, top - lead + height)`
    /// contains `offset`.
    pub fn section_at(&self, offset: f64, lead: f64) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| {
                let start = section.top - lead;
                offset >= start && offset < start + section.height
            })
            .map(|section| section.id.as_str())
    }

    /// Returns the scroll target when `target` names a known section; the
    /// clicked link becomes active right away.
    pub fn link_clicked(&mut self, target: &str) -> Option<f64> {
        let top = self
            .sections
            .iter()
            .find(|section| section.id == target)?
            .top;
        self.menu_open = false;
        self.active = Some(target.to_string());
        Some(top)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Returns whether anything changed.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn view(&self) -> NavigationView {
        NavigationView {
            scrolled: self.scrolled,
            menu_open: self.menu_open,
            links: self
                .links
                .iter()
                .map(|target| NavLinkView {
                    target: target.clone(),
                    active: self.active.as_deref() == Some(target.as_str()),
                })
                .collect(),
        }
    }
}
