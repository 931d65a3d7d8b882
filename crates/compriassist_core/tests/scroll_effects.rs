mod common;

use std::time::Duration;

use compriassist_core::{update, BackendStatus, ContactField, Effect, Msg, TimerKey};

use common::{new_state, run};

fn stats_tickers(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|effect| {
            matches!(
                effect,
                Effect::StartTicker {
                    key: TimerKey::StatsCounter,
                    ..
                }
            )
        })
        .count()
}

#[test]
fn page_load_probes_backend_and_checks_cards() {
    let (state, effects) = update(new_state(), Msg::PageLoaded);
    assert_eq!(effects, vec![Effect::CheckBackend]);
    assert_eq!(state.view().backend, BackendStatus::Unknown);

    let (state, _) = update(state, Msg::BackendChecked { reachable: false });
    assert_eq!(state.view().backend, BackendStatus::Unreachable);
}

#[test]
fn stats_animation_starts_only_once() {
    let (state, effects) = run(
        new_state(),
        [
            Msg::Scrolled { offset: 0.0 },
            Msg::Scrolled { offset: 10.0 },
            Msg::Scrolled { offset: 2000.0 },
            Msg::Scrolled { offset: 20.0 },
        ],
    );
    assert_eq!(stats_tickers(&effects), 1);
    assert!(effects.contains(&Effect::StartTicker {
        key: TimerKey::StatsCounter,
        interval: Duration::from_millis(30),
        ticks: 50,
    }));
    assert_eq!(state.view().scroll.stats, vec!["10K+", "95%", "24/7"]);
}

#[test]
fn stats_not_started_while_region_hidden() {
    let (_, effects) = update(new_state(), Msg::Scrolled { offset: 1200.0 });
    assert_eq!(stats_tickers(&effects), 0);
}

#[test]
fn counters_count_up_then_restore_original_text() {
    let (state, _) = update(new_state(), Msg::Scrolled { offset: 0.0 });
    let (state, _) = update(
        state,
        Msg::TimerTicked {
            key: TimerKey::StatsCounter,
            tick: 25,
        },
    );
    assert_eq!(state.view().scroll.stats, vec!["5", "47%", "12"]);

    let (state, _) = update(
        state,
        Msg::TimerTicked {
            key: TimerKey::StatsCounter,
            tick: 50,
        },
    );
    assert_eq!(state.view().scroll.stats, vec!["10K+", "95%", "24/7"]);
}

#[test]
fn visible_cards_are_revealed_with_index_stagger() {
    let (state, _) = update(new_state(), Msg::Scrolled { offset: 300.0 });
    let (state, effects) = update(
        state,
        Msg::TimerFired {
            key: TimerKey::RevealScroll,
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::Schedule {
                key: TimerKey::CardReveal(0),
                delay: Duration::ZERO,
            },
            Effect::Schedule {
                key: TimerKey::CardReveal(1),
                delay: Duration::from_millis(100),
            },
        ]
    );
    assert_eq!(state.view().scroll.cards_shown, vec![false, false, false]);

    let (state, _) = run(
        state,
        [
            Msg::TimerFired {
                key: TimerKey::CardReveal(0),
            },
            Msg::TimerFired {
                key: TimerKey::CardReveal(1),
            },
        ],
    );
    assert_eq!(state.view().scroll.cards_shown, vec![true, true, false]);

    // Already revealed cards are not scheduled again; the third card is.
    let (state, _) = update(state, Msg::Scrolled { offset: 700.0 });
    let (_, effects) = update(
        state,
        Msg::TimerFired {
            key: TimerKey::RevealScroll,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            key: TimerKey::CardReveal(2),
            delay: Duration::from_millis(200),
        }]
    );
}

#[test]
fn scroll_top_button_follows_threshold() {
    let (state, _) = run(
        new_state(),
        [
            Msg::Scrolled { offset: 501.0 },
            Msg::TimerFired {
                key: TimerKey::ScrollTopScroll,
            },
        ],
    );
    assert!(state.view().scroll.scroll_top_visible);

    let (state, _) = run(
        state,
        [
            Msg::Scrolled { offset: 500.0 },
            Msg::TimerFired {
                key: TimerKey::ScrollTopScroll,
            },
        ],
    );
    assert!(!state.view().scroll.scroll_top_visible);
}

#[test]
fn unload_cancels_all_timers() {
    let (state, _) = update(new_state(), Msg::Scrolled { offset: 0.0 });
    let (_, effects) = update(state, Msg::PageUnloaded);
    assert_eq!(effects, vec![Effect::CancelAllTimers]);
}

#[test]
fn contact_form_walks_sending_sent_reset() {
    let (state, effects) = run(
        new_state(),
        [
            Msg::ContactFieldChanged {
                field: ContactField::Email,
                value: "ana@example.com".into(),
            },
            Msg::ContactSubmitted,
            Msg::ContactSubmitted,
        ],
    );
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            key: TimerKey::ContactSent,
            delay: Duration::from_millis(1500),
        }]
    );
    assert_eq!(state.view().contact.button_label, "Enviando...");

    let (state, effects) = update(
        state,
        Msg::TimerFired {
            key: TimerKey::ContactSent,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::Schedule {
            key: TimerKey::ContactReset,
            delay: Duration::from_millis(2000),
        }]
    );
    assert_eq!(state.view().contact.button_label, "¡Mensaje Enviado!");

    let (state, _) = update(
        state,
        Msg::TimerFired {
            key: TimerKey::ContactReset,
        },
    );
    let contact = state.view().contact;
    assert_eq!(contact.button_label, "Enviar Mensaje");
    assert_eq!(contact.email, "");
    assert!(!contact.button_disabled);
}
