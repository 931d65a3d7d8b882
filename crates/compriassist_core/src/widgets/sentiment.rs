use assist_logging::{assist_info, assist_warn};

use crate::{
    request::{ButtonView, TriggerButton},
    text::{escape_html, percent},
    Effect, FocusTarget, RequestFailure, RequestSlot, RequestToken, Sentiment, SentimentResult,
};

pub const SENTIMENT_EMPTY_MESSAGE: &str = "Por favor, escribe una reseña para analizar.";
pub const SENTIMENT_LOADING_MESSAGE: &str = "Analizando emociones y detectando veracidad...";
pub const SENTIMENT_FAILURE_MESSAGE: &str = "Error de conexión con el servidor.";

#[derive(Debug, Clone, PartialEq)]
enum Panel {
    Hidden,
    Loading,
    Ready(SentimentResult),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDemo {
    review: String,
    button: TriggerButton,
    slot: RequestSlot,
    panel: Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentView {
    pub review: String,
    pub button: ButtonView,
    pub panel: SentimentPanelView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentPanelView {
    Hidden,
    Loading { message: String },
    Card(SentimentCard),
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentCard {
    pub sentiment: Sentiment,
    pub label: String,
    pub icon: String,
    pub color: String,
    /// Confidence as a one-decimal percentage, e.g. `"80.0"`.
    pub confidence: String,
    /// Fraud probability percentage, present only for flagged reviews.
    pub fraud_alert: Option<String>,
    pub bars: Vec<ProbabilityBar>,
}

/// One proportion bar; `percent` doubles as its CSS width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityBar {
    pub key: String,
    pub label: String,
    pub class: String,
    pub percent: String,
}

impl Default for SentimentDemo {
    fn default() -> Self {
        Self {
            review: String::new(),
            button: TriggerButton::new("Analizar Sentimiento", "Analizando..."),
            slot: RequestSlot::default(),
            panel: Panel::Hidden,
        }
    }
}

impl SentimentDemo {
    pub fn set_review(&mut self, review: String) {
        self.review = review;
    }

    pub fn analyze(&mut self) -> Vec<Effect> {
        let text = self.review.trim();
        if text.is_empty() {
            assist_info!("sentiment: empty review not analyzed");
            return vec![
                Effect::Alert {
                    message: SENTIMENT_EMPTY_MESSAGE.to_string(),
                },
                Effect::Focus {
                    target: FocusTarget::ReviewText,
                },
            ];
        }
        if self.button.is_busy() {
            return Vec::new();
        }

        self.button.begin();
        self.panel = Panel::Loading;
        let token = self.slot.issue();
        assist_info!("sentiment: analyzing review {} ({} chars)", token, text.len());
        vec![Effect::AnalyzeSentiment {
            token,
            text: text.to_string(),
        }]
    }

    /// Returns false when the completion was stale and ignored.
    pub fn analyzed(
        &mut self,
        token: RequestToken,
        result: Result<SentimentResult, RequestFailure>,
    ) -> bool {
        if !self.slot.settle(token) {
            assist_info!("sentiment: dropping stale result {}", token);
            return false;
        }
        self.button.restore();
        self.panel = match result {
            Ok(result) => Panel::Ready(result),
            Err(failure) => {
                assist_warn!("sentiment: request {} failed: {}", token, failure);
                Panel::Failed
            }
        };
        true
    }

    pub fn view(&self) -> SentimentView {
        SentimentView {
            review: self.review.clone(),
            button: self.button.view(),
            panel: match &self.panel {
                Panel::Hidden => SentimentPanelView::Hidden,
                Panel::Loading => SentimentPanelView::Loading {
                    message: SENTIMENT_LOADING_MESSAGE.to_string(),
                },
                Panel::Ready(result) => SentimentPanelView::Card(card(result)),
                Panel::Failed => SentimentPanelView::Error {
                    message: SENTIMENT_FAILURE_MESSAGE.to_string(),
                },
            },
        }
    }
}

fn card(result: &SentimentResult) -> SentimentCard {
    let sentiment = Sentiment::resolve(&result.sentiment);
    let style = sentiment.style();
    SentimentCard {
        sentiment,
        label: style.label.to_string(),
        icon: style.icon.to_string(),
        color: style.color.to_string(),
        confidence: percent(result.confidence),
        fraud_alert: result.fraud_probability.map(percent),
        bars: result
            .probabilities
            .iter()
            .map(|(key, value)| {
                let style = Sentiment::resolve(key).style();
                ProbabilityBar {
                    key: escape_html(key),
                    label: style.label.to_string(),
                    class: style.class.to_string(),
                    percent: percent(*value),
                }
            })
            .collect(),
    }
}
