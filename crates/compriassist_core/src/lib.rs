//! ComprIAssist core: pure page state machine and view-model helpers.
//!
//! Every widget on the page is driven through [`update`]: a [`Msg`] goes in,
//! the next [`AppState`] and a list of [`Effect`]s come out. Network calls,
//! timers and scrolling are effects; the core never performs IO itself.
mod animation;
mod config;
mod effect;
mod geometry;
mod layout;
mod model;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub mod text;
pub mod widgets;

pub use animation::{CounterAnimation, TextReveal};
pub use config::{Config, ConfigError};
pub use effect::{Effect, FocusTarget, TimerKey};
pub use geometry::{is_in_viewport, Rect, Viewport};
pub use layout::{PageLayout, SectionBounds};
pub use model::{
    ChatReply, DescriptionRequest, FileSelection, GeneratedDescription, GenerationOutcome,
    Sentiment, SentimentResult, SentimentStyle, SimilarProduct,
};
pub use msg::{ContactField, Msg, ProductField};
pub use request::{ButtonView, RequestFailure, RequestSlot, RequestToken, TriggerButton};
pub use state::{AppState, BackendStatus};
pub use update::update;
pub use view_model::AppViewModel;
