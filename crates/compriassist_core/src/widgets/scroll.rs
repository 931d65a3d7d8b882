use crate::{
    animation::CounterAnimation,
    geometry::{Rect, Viewport},
    Config, Effect, TimerKey,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardState {
    Hidden,
    Scheduled,
    Shown,
}

/// Scroll-to-top button, card entrance animation and the stats counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollEffects {
    scroll_top_visible: bool,
    cards: Vec<(Rect, CardState)>,
    stats_region: Option<Rect>,
    counters: Vec<CounterAnimation>,
    stats_started: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrollEffectsView {
    pub scroll_top_visible: bool,
    /// Whether each card has reached its resting state.
    pub cards_shown: Vec<bool>,
    pub stats: Vec<String>,
}

impl ScrollEffects {
    pub fn new(cards: Vec<Rect>, stats_region: Option<Rect>, stats: Vec<String>) -> Self {
        Self {
            scroll_top_visible: false,
            cards: cards
                .into_iter()
                .map(|rect| (rect, CardState::Hidden))
                .collect(),
            stats_region,
            counters: stats.into_iter().map(CounterAnimation::new).collect(),
            stats_started: false,
        }
    }

    pub fn refresh_scroll_top(&mut self, offset: f64, config: &Config) {
        self.scroll_top_visible = offset > config.scroll_top_threshold;
    }

    /// Schedules the entrance of every visible card not yet revealed,
    /// staggered by its index on the page.
    pub fn reveal_visible(&mut self, viewport: &Viewport, config: &Config) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (index, (rect, state)) in self.cards.iter_mut().enumerate() {
            if *state == CardState::Hidden && viewport.contains(rect) {
                *state = CardState::Scheduled;
                effects.push(Effect::Schedule {
                    key: TimerKey::CardReveal(index),
                    delay: config.reveal_stagger * index as u32,
                });
            }
        }
        effects
    }

    pub fn card_revealed(&mut self, index: usize) {
        if let Some((_, state)) = self.cards.get_mut(index) {
            *state = CardState::Shown;
        }
    }

    /// Starts the counters the first time the stats region is fully visible.
    pub fn check_stats(&mut self, viewport: &Viewport, config: &Config) -> Option<Effect> {
        if self.stats_started {
            return None;
        }
        let region = self.stats_region?;
        if !viewport.contains(&region) {
            return None;
        }
        self.stats_started = true;
        Some(Effect::StartTicker {
            key: TimerKey::StatsCounter,
            interval: config.counter_interval,
            ticks: config.counter_steps,
        })
    }

    pub fn counter_tick(&mut self, tick: u32, config: &Config) {
        for counter in &mut self.counters {
            counter.show_step(tick, config.counter_steps);
        }
    }

    pub fn view(&self) -> ScrollEffectsView {
        ScrollEffectsView {
            scroll_top_visible: self.scroll_top_visible,
            cards_shown: self
                .cards
                .iter()
                .map(|(_, state)| *state == CardState::Shown)
                .collect(),
            stats: self
                .counters
                .iter()
                .map(|counter| counter.display().to_string())
                .collect(),
        }
    }
}
