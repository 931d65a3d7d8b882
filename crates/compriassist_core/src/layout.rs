use crate::geometry::{Rect, Viewport};

/// A page section that navigation links can point at.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Everything the widgets need to know about the host page, handed over at
/// construction instead of being looked up by element id.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub sections: Vec<SectionBounds>,
    /// Section ids that have a navigation link, in menu order.
    pub nav_links: Vec<String>,
    /// Tab pane ids, in button order. The first one starts active.
    pub tab_panes: Vec<String>,
    /// Card-like elements that fade in on first sight.
    pub cards: Vec<Rect>,
    pub stats_region: Option<Rect>,
    /// Statistic texts exactly as the page shows them.
    pub stats: Vec<String>,
}
