//! Results handed back to the core once a backend call completes.
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// Raw reply; may contain newlines.
    pub text: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Display style for a sentiment headline or probability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub class: &'static str,
}

impl Sentiment {
    /// Accepts both the short model labels (`POS`) and the long ones
    /// (`positive`), in any casing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "pos" | "positive" => Some(Self::Positive),
            "neu" | "neutral" => Some(Self::Neutral),
            "neg" | "negative" => Some(Self::Negative),
            _ => None,
        }
    }

    /// Like [`Sentiment::from_key`] but unknown keys fall back to neutral.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::Neutral)
    }

    pub fn style(self) -> SentimentStyle {
        match self {
            Self::Positive => SentimentStyle {
                label: "Positivo",
                icon: "fa-smile",
                color: "#10b981",
                class: "fill-pos",
            },
            Self::Neutral => SentimentStyle {
                label: "Neutral",
                icon: "fa-meh",
                color: "#f59e0b",
                class: "fill-neu",
            },
            Self::Negative => SentimentStyle {
                label: "Negativo",
                icon: "fa-frown",
                color: "#ef4444",
                class: "fill-neg",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentimentResult {
    /// Label exactly as the backend sent it.
    pub sentiment: String,
    pub confidence: f64,
    /// Present only when the review was flagged as fake.
    pub fraud_probability: Option<f64>,
    /// Label → probability, in the order the backend listed them.
    pub probabilities: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarProduct {
    pub name: String,
    pub similarity: f64,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDescription {
    pub text: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(GeneratedDescription),
    /// The backend answered but reported `success: false`.
    Declined,
}

/// A file picked or dropped onto the visual search area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub path: PathBuf,
    pub name: String,
    /// Guessed MIME type, e.g. `image/png`.
    pub mime: String,
}

impl FileSelection {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Payload for the description generator.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionRequest {
    pub product_name: String,
    pub features: Vec<String>,
    pub category: String,
    pub price: f64,
    pub temperature: f64,
}
