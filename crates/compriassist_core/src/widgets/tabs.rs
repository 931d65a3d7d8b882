use assist_logging::assist_warn;

/// Mutually exclusive tab panes; the button and its pane share one id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabs {
    panes: Vec<String>,
    active: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub pane: String,
    pub active: bool,
}

impl Tabs {
    pub fn new(panes: Vec<String>) -> Self {
        let active = (!panes.is_empty()).then_some(0);
        Self { panes, active }
    }

    /// Returns whether the click named a known pane.
    pub fn select(&mut self, target: &str) -> bool {
        match self.panes.iter().position(|pane| pane == target) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => {
                assist_warn!("tab button points at unknown pane {:?}", target);
                false
            }
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|index| self.panes[index].as_str())
    }

    pub fn view(&self) -> Vec<TabView> {
        self.panes
            .iter()
            .enumerate()
            .map(|(index, pane)| TabView {
                pane: pane.clone(),
                active: self.active == Some(index),
            })
            .collect()
    }
}
