//! Page geometry in document coordinates.

/// An element's box in document coordinates (top measured from page start).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Visible window: its size plus the current vertical scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            ..self
        }
    }

    /// True iff `rect` lies entirely inside the visible window.
    pub fn contains(&self, rect: &Rect) -> bool {
        let top = rect.top - self.scroll_y;
        let bottom = rect.bottom() - self.scroll_y;
        top >= 0.0 && rect.left >= 0.0 && bottom <= self.height && rect.right() <= self.width
    }
}

/// Free-function form of [`Viewport::contains`].
pub fn is_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    viewport.contains(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_fully_visible_only_after_scrolling() {
        let viewport = Viewport::new(1280.0, 800.0);
        let card = Rect::new(900.0, 40.0, 300.0, 200.0);

        assert!(!viewport.contains(&card));
        assert!(viewport.scrolled_to(300.0).contains(&card));
        // Top edge above the window.
        assert!(!viewport.scrolled_to(950.0).contains(&card));
    }

    #[test]
    fn overflowing_width_is_never_visible() {
        let viewport = Viewport::new(600.0, 800.0);
        let wide = Rect::new(10.0, 0.0, 700.0, 100.0);
        assert!(!is_in_viewport(&wide, &viewport));
    }
}
