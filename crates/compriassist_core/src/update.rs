use assist_logging::assist_debug;

use crate::{AppState, BackendStatus, Effect, Msg, TimerKey};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let config = state.config.clone();
    let effects = match msg {
        Msg::PageLoaded => {
            let viewport = state.viewport;
            let mut effects = vec![Effect::CheckBackend];
            effects.extend(state.scroll_effects.reveal_visible(&viewport, &config));
            effects
        }
        Msg::PageUnloaded => {
            return (state, vec![Effect::CancelAllTimers]);
        }
        Msg::Scrolled { offset } => {
            state.viewport = state.viewport.scrolled_to(offset);
            let viewport = state.viewport;
            let mut effects = Vec::with_capacity(4);
            // The stats check runs on every raw scroll event.
            effects.extend(state.scroll_effects.check_stats(&viewport, &config));
            effects.push(Effect::Schedule {
                key: TimerKey::NavigationScroll,
                delay: config.navigation_debounce,
            });
            effects.push(Effect::Schedule {
                key: TimerKey::ScrollTopScroll,
                delay: config.scroll_top_debounce,
            });
            effects.push(Effect::Schedule {
                key: TimerKey::RevealScroll,
                delay: config.reveal_debounce,
            });
            effects
        }
        Msg::TimerFired { key } => on_timer(&mut state, key),
        Msg::TimerTicked { key, tick } => {
            match key {
                TimerKey::StatsCounter => state.scroll_effects.counter_tick(tick, &config),
                TimerKey::Typewriter(token) => state.generative.typewriter_tick(token),
                other => assist_debug!("tick for one-shot timer {:?} ignored", other),
            }
            Vec::new()
        }
        Msg::BackendChecked { reachable } => {
            state.backend = if reachable {
                BackendStatus::Reachable
            } else {
                BackendStatus::Unreachable
            };
            Vec::new()
        }
        Msg::NavLinkClicked { target } => match state.navigation.link_clicked(&target) {
            Some(top) => vec![Effect::ScrollTo { top }],
            None => return (state, Vec::new()),
        },
        Msg::MenuToggled => {
            state.navigation.toggle_menu();
            Vec::new()
        }
        Msg::ClickedOutsideNav => {
            if !state.navigation.close_menu() {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::ScrollTopClicked => vec![Effect::ScrollTo { top: 0.0 }],
        Msg::TabClicked { target } => {
            if !state.tabs.select(&target) {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::ChatToggled => state.chat.toggle(),
        Msg::ChatInputChanged(value) => {
            state.chat.set_input(value);
            Vec::new()
        }
        Msg::ChatSubmitted => state.chat.send(None, &config),
        Msg::SuggestionClicked(index) => state.chat.suggestion_clicked(index, &config),
        Msg::ChatReplied { token, result } => {
            state.chat.replied(token, result);
            Vec::new()
        }
        Msg::ReviewChanged(review) => {
            state.sentiment.set_review(review);
            Vec::new()
        }
        Msg::AnalyzeClicked => state.sentiment.analyze(),
        Msg::SentimentAnalyzed { token, result } => {
            if !state.sentiment.analyzed(token, result) {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::UploadHovered(hovering) => {
            if !state.visual.set_hovering(hovering) {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::FileDropped(file) => state.visual.file_dropped(file, &config),
        Msg::SimilarProductsFound { token, result } => {
            if !state.visual.found(token, result) {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::ProductFieldChanged { field, value } => {
            state.generative.set_field(field, value);
            Vec::new()
        }
        Msg::GenerateClicked => state.generative.generate(&config),
        Msg::DescriptionGenerated { token, result } => {
            state.generative.generated(token, result, &config)
        }
        Msg::ContactFieldChanged { field, value } => {
            state.contact.set_field(field, value);
            Vec::new()
        }
        Msg::ContactSubmitted => state.contact.submit(&config),
        Msg::NoOp => return (state, Vec::new()),
    };

    state.mark_dirty();
    (state, effects)
}

fn on_timer(state: &mut AppState, key: TimerKey) -> Vec<Effect> {
    let config = state.config.clone();
    let viewport = state.viewport;
    match key {
        TimerKey::NavigationScroll => {
            state.navigation.scroll_settled(viewport.scroll_y, &config);
            Vec::new()
        }
        TimerKey::ScrollTopScroll => {
            state.scroll_effects.refresh_scroll_top(viewport.scroll_y, &config);
            Vec::new()
        }
        TimerKey::RevealScroll => state.scroll_effects.reveal_visible(&viewport, &config),
        TimerKey::CardReveal(index) => {
            state.scroll_effects.card_revealed(index);
            Vec::new()
        }
        TimerKey::ContactSent => state.contact.sent(&config),
        TimerKey::ContactReset => {
            state.contact.reset();
            Vec::new()
        }
        TimerKey::StatsCounter | TimerKey::Typewriter(_) => Vec::new(),
    }
}
