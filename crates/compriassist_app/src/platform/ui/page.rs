use std::collections::{BTreeMap, BTreeSet};

/// One change to a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    SetText { id: String, text: String },
    SetHtml { id: String, html: String },
    SetClass { id: String, class: String, on: bool },
    SetEnabled { id: String, enabled: bool },
    SetVisible { id: String, visible: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    content: Option<String>,
    classes: BTreeSet<String>,
    enabled: bool,
    visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            content: None,
            classes: BTreeSet::new(),
            enabled: true,
            visible: true,
        }
    }
}

/// Headless element registry. Applying commands reports only what changed,
/// one line per change, so the console shows the page as a diff.
#[derive(Debug, Default)]
pub struct ConsolePage {
    elements: BTreeMap<String, Element>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, commands: Vec<PageCommand>) -> Vec<String> {
        commands
            .into_iter()
            .filter_map(|command| self.apply_one(command))
            .collect()
    }

    fn apply_one(&mut self, command: PageCommand) -> Option<String> {
        match command {
            PageCommand::SetText { id, text } | PageCommand::SetHtml { id, html: text } => {
                let element = self.elements.entry(id.clone()).or_default();
                if element.content.as_deref() == Some(text.as_str()) {
                    return None;
                }
                element.content = Some(text.clone());
                Some(format!("#{id}: {text}"))
            }
            PageCommand::SetClass { id, class, on } => {
                let element = self.elements.entry(id.clone()).or_default();
                let changed = if on {
                    element.classes.insert(class.clone())
                } else {
                    element.classes.remove(&class)
                };
                changed.then(|| format!("#{id} {}{class}", if on { "+" } else { "-" }))
            }
            PageCommand::SetEnabled { id, enabled } => {
                let element = self.elements.entry(id.clone()).or_default();
                if element.enabled == enabled {
                    return None;
                }
                element.enabled = enabled;
                Some(format!(
                    "#{id} {}",
                    if enabled { "enabled" } else { "disabled" }
                ))
            }
            PageCommand::SetVisible { id, visible } => {
                let element = self.elements.entry(id.clone()).or_default();
                if element.visible == visible {
                    return None;
                }
                element.visible = visible;
                Some(format!("#{id} {}", if visible { "shown" } else { "hidden" }))
            }
        }
    }
}

#[cfg(test)]
impl ConsolePage {
    pub fn content(&self, id: &str) -> Option<&str> {
        self.elements.get(id)?.content.as_deref()
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.elements.get(id).map_or(true, |element| element.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(id: &str, text: &str) -> PageCommand {
        PageCommand::SetText {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn unchanged_elements_report_nothing() {
        let mut page = ConsolePage::new();
        assert_eq!(page.apply(vec![text("a", "uno")]), vec!["#a: uno".to_string()]);
        assert!(page.apply(vec![text("a", "uno")]).is_empty());
        assert_eq!(page.apply(vec![text("a", "dos")]), vec!["#a: dos".to_string()]);
        assert_eq!(page.content("a"), Some("dos"));
    }

    #[test]
    fn classes_toggle_once() {
        let mut page = ConsolePage::new();
        let on = PageCommand::SetClass {
            id: "navbar".to_string(),
            class: "scrolled".to_string(),
            on: true,
        };
        assert_eq!(page.apply(vec![on.clone()]), vec!["#navbar +scrolled".to_string()]);
        assert!(page.apply(vec![on]).is_empty());
        assert!(page.has_class("navbar", "scrolled"));

        let off = PageCommand::SetClass {
            id: "navbar".to_string(),
            class: "scrolled".to_string(),
            on: false,
        };
        assert_eq!(page.apply(vec![off]), vec!["#navbar -scrolled".to_string()]);
        assert!(!page.has_class("navbar", "scrolled"));
    }

    #[test]
    fn elements_start_enabled_and_visible() {
        let mut page = ConsolePage::new();
        let show = PageCommand::SetVisible {
            id: "x".to_string(),
            visible: true,
        };
        assert!(page.apply(vec![show]).is_empty());
        assert!(page.is_enabled("x"));

        let disable = PageCommand::SetEnabled {
            id: "x".to_string(),
            enabled: false,
        };
        assert_eq!(page.apply(vec![disable]), vec!["#x disabled".to_string()]);
        assert!(!page.is_enabled("x"));
    }
}
