use crate::{
    ChatReply, FileSelection, GenerationOutcome, RequestFailure, RequestToken, SentimentResult,
    SimilarProduct, TimerKey,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page structure is ready; run first-paint checks.
    PageLoaded,
    /// Page is going away; every live timer must be torn down.
    PageUnloaded,
    /// Raw (undebounced) scroll to a document offset.
    Scrolled { offset: f64 },
    /// A one-shot timer elapsed.
    TimerFired { key: TimerKey },
    /// A ticker fired its `tick`-th tick (1-based).
    TimerTicked { key: TimerKey, tick: u32 },
    BackendChecked { reachable: bool },

    NavLinkClicked { target: String },
    MenuToggled,
    ClickedOutsideNav,
    ScrollTopClicked,

    TabClicked { target: String },

    ChatToggled,
    ChatInputChanged(String),
    ChatSubmitted,
    SuggestionClicked(usize),
    ChatReplied {
        token: RequestToken,
        result: Result<ChatReply, RequestFailure>,
    },

    ReviewChanged(String),
    AnalyzeClicked,
    SentimentAnalyzed {
        token: RequestToken,
        result: Result<SentimentResult, RequestFailure>,
    },

    UploadHovered(bool),
    FileDropped(FileSelection),
    SimilarProductsFound {
        token: RequestToken,
        result: Result<Vec<SimilarProduct>, RequestFailure>,
    },

    ProductFieldChanged { field: ProductField, value: String },
    GenerateClicked,
    DescriptionGenerated {
        token: RequestToken,
        result: Result<GenerationOutcome, RequestFailure>,
    },

    ContactFieldChanged { field: ContactField, value: String },
    ContactSubmitted,

    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Category,
    Features,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}
