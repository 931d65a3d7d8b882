mod common;

use std::time::Duration;

use compriassist_core::{update, Effect, Msg, TimerKey};

use common::{new_state, run};

fn active_panes(state: &compriassist_core::AppState) -> Vec<String> {
    state
        .view()
        .tabs
        .into_iter()
        .filter(|tab| tab.active)
        .map(|tab| tab.pane)
        .collect()
}

#[test]
fn first_tab_is_active_initially() {
    let state = new_state();
    assert_eq!(active_panes(&state), vec!["chatbot"]);
}

#[test]
fn exactly_one_pane_active_after_every_click() {
    let mut state = new_state();
    let clicks = [
        "visual",
        "visual",
        "sentiment",
        "generative",
        "chatbot",
        "sentiment",
    ];
    for target in clicks {
        let (next, effects) = update(
            state,
            Msg::TabClicked {
                target: target.to_string(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(active_panes(&next), vec![target]);
        state = next;
    }
}

#[test]
fn unknown_tab_keeps_current_pane() {
    let (state, _) = run(
        new_state(),
        [
            Msg::TabClicked {
                target: "visual".into(),
            },
            Msg::TabClicked {
                target: "pricing".into(),
            },
        ],
    );
    assert_eq!(active_panes(&state), vec!["visual"]);
}

#[test]
fn scroll_is_debounced_per_handler() {
    let state = new_state();
    let (_, effects) = update(state, Msg::Scrolled { offset: 2000.0 });

    assert_eq!(
        effects,
        vec![
            Effect::Schedule {
                key: TimerKey::NavigationScroll,
                delay: Duration::from_millis(10),
            },
            Effect::Schedule {
                key: TimerKey::ScrollTopScroll,
                delay: Duration::from_millis(100),
            },
            Effect::Schedule {
                key: TimerKey::RevealScroll,
                delay: Duration::from_millis(50),
            },
        ]
    );
}

#[test]
fn navigation_updates_only_when_debounce_fires() {
    let (state, _) = run(
        new_state(),
        [
            Msg::Scrolled { offset: 50.0 },
            Msg::Scrolled { offset: 900.0 },
        ],
    );
    let view = state.view().navigation;
    assert!(!view.scrolled);
    assert!(view.links.iter().all(|link| !link.active));

    let (state, _) = update(
        state,
        Msg::TimerFired {
            key: TimerKey::NavigationScroll,
        },
    );
    let view = state.view().navigation;
    assert!(view.scrolled);
    let active: Vec<_> = view
        .links
        .iter()
        .filter(|link| link.active)
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(active, vec!["modulos"]);
}

#[test]
fn scrolled_style_needs_offset_past_threshold() {
    let (state, _) = run(
        new_state(),
        [
            Msg::Scrolled { offset: 100.0 },
            Msg::TimerFired {
                key: TimerKey::NavigationScroll,
            },
        ],
    );
    assert!(!state.view().navigation.scrolled);

    let (state, _) = run(
        state,
        [
            Msg::Scrolled { offset: 101.0 },
            Msg::TimerFired {
                key: TimerKey::NavigationScroll,
            },
        ],
    );
    assert!(state.view().navigation.scrolled);
}

#[test]
fn nav_click_scrolls_closes_menu_and_activates_link() {
    let (state, _) = update(new_state(), Msg::MenuToggled);
    assert!(state.view().navigation.menu_open);

    let (state, effects) = update(
        state,
        Msg::NavLinkClicked {
            target: "demo".into(),
        },
    );
    assert_eq!(effects, vec![Effect::ScrollTo { top: 1700.0 }]);
    let view = state.view().navigation;
    assert!(!view.menu_open);
    assert!(view
        .links
        .iter()
        .all(|link| link.active == (link.target == "demo")));
}

#[test]
fn outside_click_closes_menu() {
    let (state, _) = run(new_state(), [Msg::MenuToggled, Msg::ClickedOutsideNav]);
    assert!(!state.view().navigation.menu_open);

    let mut state = state;
    assert!(state.consume_dirty());
    let (mut state, _) = update(state, Msg::ClickedOutsideNav);
    assert!(!state.consume_dirty());
}

#[test]
fn scroll_top_click_scrolls_to_origin() {
    let (_, effects) = update(new_state(), Msg::ScrollTopClicked);
    assert_eq!(effects, vec![Effect::ScrollTo { top: 0.0 }]);
}
