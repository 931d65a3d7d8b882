use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use assist_logging::{assist_debug, assist_info};
use compriassist_core::{update, AppState, Effect, FocusTarget, Msg};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::settings;
use super::ui;
use super::ui::constants::{CHAT_INPUT, PRODUCT_NAME, REVIEW_TEXT};
use super::ui::input::Command;
use super::ui::page::ConsolePage;

/// Frames used to emulate smooth scrolling.
const SCROLL_FRAMES: u32 = 10;

pub struct AppOptions {
    pub settings_path: PathBuf,
    pub base_url: Option<String>,
    pub log: LogDestination,
    pub verbose: bool,
}

pub fn run_app(options: AppOptions) -> anyhow::Result<()> {
    logging::initialize(options.log, options.verbose);

    let settings = settings::load_settings(&options.settings_path)?;
    let (config, client) = settings.resolve(options.base_url)?;
    assist_info!(
        "ComprIAssist starting; backend {} (chat user {:?}, top_k {})",
        config.api_base_url,
        config.chat_user_id,
        config.visual_top_k
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner =
        EffectRunner::new(client, msg_tx.clone()).context("failed to start the engine")?;
    let config = Arc::new(config);
    let animation = config.animation_duration;

    let mut host = Host {
        page: ConsolePage::new(),
        runner,
        msg_tx: msg_tx.clone(),
        animation,
    };
    let mut state = AppState::new(config, ui::layout::page_layout());

    println!("ComprIAssist. Escribe `help` para ver los comandos.");
    host.print(ui::render::render(&state.view()));
    spawn_console_reader(msg_tx);

    state = host.dispatch(state, Msg::PageLoaded);
    while let Ok(msg) = msg_rx.recv() {
        let closing = matches!(msg, Msg::PageUnloaded);
        state = host.dispatch(state, msg);
        if closing {
            break;
        }
    }

    assist_info!("ComprIAssist closed");
    Ok(())
}

struct Host {
    page: ConsolePage,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    animation: Duration,
}

impl Host {
    fn dispatch(&mut self, state: AppState, msg: Msg) -> AppState {
        assist_debug!("dispatch {:?}", msg);
        let (mut state, effects) = update(state, msg);
        for effect in self.runner.enqueue(effects) {
            self.apply_local(&state, effect);
        }
        if state.consume_dirty() {
            self.print(ui::render::render(&state.view()));
        }
        state
    }

    fn apply_local(&mut self, state: &AppState, effect: Effect) {
        match effect {
            Effect::Alert { message } => println!("[!] {message}"),
            Effect::Focus { target } => {
                let id = match target {
                    FocusTarget::ChatInput => CHAT_INPUT,
                    FocusTarget::ReviewText => REVIEW_TEXT,
                    FocusTarget::ProductName => PRODUCT_NAME,
                };
                println!("#{id} focused");
            }
            Effect::ScrollTo { top } => {
                spawn_smooth_scroll(
                    self.msg_tx.clone(),
                    state.viewport().scroll_y,
                    top,
                    self.animation,
                );
            }
            other => assist_debug!("effect {:?} has no local handler", other),
        }
    }

    fn print(&mut self, commands: Vec<ui::page::PageCommand>) {
        for line in self.page.apply(commands) {
            println!("{line}");
        }
    }
}

/// Reads commands from stdin until `quit` or end of input, then unloads
/// the page.
fn spawn_console_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match ui::input::parse(&line) {
                Ok(Command::Dispatch(msgs)) => {
                    for msg in msgs {
                        if msg_tx.send(msg).is_err() {
                            return;
                        }
                    }
                }
                Ok(Command::Help) => println!("{}", ui::input::HELP),
                Ok(Command::Quit) => break,
                Ok(Command::Nothing) => {}
                Err(err) => println!("? {err}"),
            }
        }
        let _ = msg_tx.send(Msg::PageUnloaded);
    });
}

/// Eased scroll from `from` to `to`, reported as raw scroll events.
fn spawn_smooth_scroll(msg_tx: mpsc::Sender<Msg>, from: f64, to: f64, duration: Duration) {
    let frame = duration / SCROLL_FRAMES;
    thread::spawn(move || {
        for step in 1..=SCROLL_FRAMES {
            thread::sleep(frame);
            let t = f64::from(step) / f64::from(SCROLL_FRAMES);
            let eased = 1.0 - (1.0 - t).powi(3);
            let offset = from + (to - from) * eased;
            if msg_tx.send(Msg::Scrolled { offset }).is_err() {
                break;
            }
        }
    });
}
