//! ComprIAssist engine: backend HTTP calls and timers, run off the UI thread.
mod client;
mod engine;
mod timers;
mod types;
mod upload;

pub use client::{Backend, ReqwestBackend};
pub use engine::{perform, ChannelEventSink, EngineEvents, EngineHandle, EventSink};
pub use timers::{TimerHandle, TimerRegistry};
pub use types::{
    BackendCall, BackendError, BackendReply, ChatRequest, ChatResponse, ClientSettings,
    DescriptionData, DescriptionRequest, DescriptionResponse, Endpoint, EngineError,
    EngineEvent, FailureKind, HealthResponse, RequestId, SentimentRequest, SentimentResponse,
    SimilarProduct, TimerId, VisualSearchResponse,
};
pub use upload::{file_display_name, guess_mime, ImageUpload};
