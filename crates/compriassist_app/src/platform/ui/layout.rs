use compriassist_core::{PageLayout, Rect, SectionBounds, Viewport};

pub const VIEWPORT_WIDTH: f64 = 1280.0;
pub const VIEWPORT_HEIGHT: f64 = 800.0;

const SECTIONS: [(&str, f64, f64); 5] = [
    ("inicio", 0.0, 800.0),
    ("modulos", 800.0, 1000.0),
    ("demo", 1800.0, 1400.0),
    ("beneficios", 3200.0, 700.0),
    ("contacto", 3900.0, 700.0),
];

const TABS: [&str; 4] = ["chatbot", "sentiment", "visual", "generative"];

const STATS: [&str; 3] = ["10K+", "95%", "24/7"];

/// Geometry of the landing page as the console host lays it out.
pub fn page_layout() -> PageLayout {
    PageLayout {
        viewport: Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
        sections: SECTIONS
            .iter()
            .map(|(id, top, height)| SectionBounds::new(*id, *top, *height))
            .collect(),
        nav_links: SECTIONS.iter().map(|(id, _, _)| id.to_string()).collect(),
        tab_panes: TABS.iter().map(|pane| pane.to_string()).collect(),
        cards: module_cards(),
        stats_region: Some(Rect::new(520.0, 80.0, 1120.0, 140.0)),
        stats: STATS.iter().map(|stat| stat.to_string()).collect(),
    }
}

/// Two rows of module cards, then a row of benefit cards.
fn module_cards() -> Vec<Rect> {
    let row = |top: f64| {
        (0..3).map(move |column| Rect::new(top, 80.0 + column as f64 * 380.0, 340.0, 300.0))
    };
    row(880.0).chain(row(1220.0)).chain(row(3280.0)).collect()
}
