#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Once};

use compriassist_core::{
    update, AppState, Config, Effect, FileSelection, Msg, PageLayout, Rect, RequestToken,
    SectionBounds, Viewport,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(assist_logging::initialize_for_tests);
}

pub fn layout() -> PageLayout {
    PageLayout {
        viewport: Viewport::new(1280.0, 800.0),
        sections: vec![
            SectionBounds::new("inicio", 0.0, 800.0),
            SectionBounds::new("modulos", 800.0, 900.0),
            SectionBounds::new("demo", 1700.0, 1200.0),
            SectionBounds::new("contacto", 2900.0, 600.0),
        ],
        nav_links: vec![
            "inicio".to_string(),
            "modulos".to_string(),
            "demo".to_string(),
            "contacto".to_string(),
        ],
        tab_panes: vec![
            "chatbot".to_string(),
            "sentiment".to_string(),
            "visual".to_string(),
            "generative".to_string(),
        ],
        cards: vec![
            Rect::new(820.0, 40.0, 300.0, 250.0),
            Rect::new(820.0, 380.0, 300.0, 250.0),
            Rect::new(1200.0, 40.0, 300.0, 250.0),
        ],
        stats_region: Some(Rect::new(500.0, 40.0, 800.0, 120.0)),
        stats: vec!["10K+".to_string(), "95%".to_string(), "24/7".to_string()],
    }
}

pub fn new_state() -> AppState {
    init_logging();
    AppState::new(Arc::new(Config::default()), layout())
}

/// Applies messages in order, collecting every effect.
pub fn run(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Effect>) {
    msgs.into_iter()
        .fold((state, Vec::new()), |(state, mut all), msg| {
            let (state, effects) = update(state, msg);
            all.extend(effects);
            (state, all)
        })
}

pub fn is_request(effect: &Effect) -> bool {
    matches!(
        effect,
        Effect::SendChatMessage { .. }
            | Effect::AnalyzeSentiment { .. }
            | Effect::SearchSimilar { .. }
            | Effect::GenerateDescription { .. }
    )
}

pub fn is_alert(effect: &Effect) -> bool {
    matches!(effect, Effect::Alert { .. })
}

/// Token of the single request effect in `effects`.
pub fn request_token(effects: &[Effect]) -> RequestToken {
    let tokens: Vec<RequestToken> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SendChatMessage { token, .. }
            | Effect::AnalyzeSentiment { token, .. }
            | Effect::SearchSimilar { token, .. }
            | Effect::GenerateDescription { token, .. } => Some(*token),
            _ => None,
        })
        .collect();
    assert_eq!(tokens.len(), 1, "expected exactly one request in {effects:?}");
    tokens[0]
}

pub fn file(name: &str, mime: &str) -> FileSelection {
    FileSelection {
        path: PathBuf::from(format!("/tmp/{name}")),
        name: name.to_string(),
        mime: mime.to_string(),
    }
}
