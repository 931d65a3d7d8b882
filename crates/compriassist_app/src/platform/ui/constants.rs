//! Element ids of the console page.

pub const NAVBAR: &str = "navbar";
pub const NAV_MENU: &str = "nav-menu";
pub const NAV_LINK_PREFIX: &str = "nav-link-";
pub const TAB_PREFIX: &str = "tab-";
pub const SCROLL_TOP: &str = "scroll-top";
pub const CARD_PREFIX: &str = "card-";
pub const STAT_PREFIX: &str = "stat-";
pub const BACKEND_STATUS: &str = "backend-status";

pub const CHAT_WINDOW: &str = "chat-window";
pub const CHAT_INPUT: &str = "chat-input";
pub const CHAT_MESSAGES: &str = "chat-messages";
pub const CHAT_SUGGESTIONS: &str = "chat-suggestions";

pub const REVIEW_TEXT: &str = "review-text";
pub const SENTIMENT_BUTTON: &str = "analyze-button";
pub const SENTIMENT_RESULT: &str = "sentiment-result";

pub const UPLOAD_AREA: &str = "upload-area";
pub const UPLOAD_PREVIEW: &str = "upload-preview";
pub const VISUAL_RESULTS: &str = "visual-results";

pub const PRODUCT_NAME: &str = "product-name";
pub const GENERATE_BUTTON: &str = "generate-button";
pub const GENERATED_OUTPUT: &str = "generated-output";
pub const MODEL_BADGE: &str = "model-badge";

pub const CONTACT_BUTTON: &str = "contact-button";

pub fn nav_link(target: &str) -> String {
    format!("{NAV_LINK_PREFIX}{target}")
}

pub fn tab(pane: &str) -> String {
    format!("{TAB_PREFIX}{pane}")
}

pub fn card(index: usize) -> String {
    format!("{CARD_PREFIX}{index}")
}

pub fn stat(index: usize) -> String {
    format!("{STAT_PREFIX}{index}")
}
