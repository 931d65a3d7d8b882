use assist_logging::{assist_debug, assist_info, assist_warn};

use crate::{
    animation::TextReveal,
    request::{ButtonView, TriggerButton},
    text::{escape_html, parse_features, parse_price},
    Config, DescriptionRequest, Effect, FocusTarget, GenerationOutcome, ProductField,
    RequestFailure, RequestSlot, RequestToken, TimerKey,
};

pub const GENERATIVE_EMPTY_MESSAGE: &str = "Por favor, ingresa al menos el nombre del producto.";
pub const GENERATIVE_LOADING_MESSAGE: &str = "La IA está redactando la descripción...";
pub const GENERATIVE_DECLINED_MESSAGE: &str = "Error: No se pudo generar la descripción.";
pub const GENERATIVE_PROCESSING_BADGE: &str = "Procesando...";
pub const DEFAULT_MODEL_LABEL: &str = "IA Generativa";
pub const PRIMARY_MODEL_COLOR: &str = "#10b981";
pub const FALLBACK_MODEL_COLOR: &str = "#d97706";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Output {
    Hidden,
    Loading,
    Typing {
        token: RequestToken,
        reveal: TextReveal,
    },
    Declined,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Badge {
    Empty,
    Processing,
    Model { name: String, fallback: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerativeDemo {
    name: String,
    category: String,
    features: String,
    price: String,
    button: TriggerButton,
    slot: RequestSlot,
    output: Output,
    badge: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeView {
    pub button: ButtonView,
    pub output: GenerativeOutputView,
    pub badge: Option<ModelBadgeView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerativeOutputView {
    Hidden,
    Loading { message: String },
    /// Escaped, partially revealed text.
    Text { visible: String, complete: bool },
    Declined { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBadgeView {
    pub text: String,
    pub color: Option<String>,
}

impl Default for GenerativeDemo {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            features: String::new(),
            price: String::new(),
            button: TriggerButton::new("Generar Descripción", "Generando..."),
            slot: RequestSlot::default(),
            output: Output::Hidden,
            badge: Badge::Empty,
        }
    }
}

impl GenerativeDemo {
    pub fn set_field(&mut self, field: ProductField, value: String) {
        match field {
            ProductField::Name => self.name = value,
            ProductField::Category => self.category = value,
            ProductField::Features => self.features = value,
            ProductField::Price => self.price = value,
        }
    }

    /// Payload built from the current form; `None` without a product name.
    pub fn request(&self, config: &Config) -> Option<DescriptionRequest> {
        let product_name = self.name.trim();
        if product_name.is_empty() {
            return None;
        }
        let category = match self.category.trim() {
            "" => config.default_category.clone(),
            category => category.to_string(),
        };
        Some(DescriptionRequest {
            product_name: product_name.to_string(),
            features: parse_features(&self.features),
            category,
            price: parse_price(&self.price),
            temperature: config.generation_temperature,
        })
    }

    pub fn generate(&mut self, config: &Config) -> Vec<Effect> {
        let Some(request) = self.request(config) else {
            assist_info!("generative: missing product name");
            return vec![
                Effect::Alert {
                    message: GENERATIVE_EMPTY_MESSAGE.to_string(),
                },
                Effect::Focus {
                    target: FocusTarget::ProductName,
                },
            ];
        };
        if self.button.is_busy() {
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        if let Some(key) = self.running_typewriter() {
            effects.push(Effect::CancelTimer { key });
        }

        self.button.begin();
        self.output = Output::Loading;
        self.badge = Badge::Processing;
        let token = self.slot.issue();
        assist_info!(
            "generative: describing {:?} with {} features {}",
            request.product_name,
            request.features.len(),
            token
        );
        effects.push(Effect::GenerateDescription { token, request });
        effects
    }

    pub fn generated(
        &mut self,
        token: RequestToken,
        result: Result<GenerationOutcome, RequestFailure>,
        config: &Config,
    ) -> Vec<Effect> {
        if !self.slot.settle(token) {
            assist_info!("generative: dropping stale result {}", token);
            return Vec::new();
        }
        self.button.restore();

        match result {
            Ok(GenerationOutcome::Generated(description)) => {
                let name = description
                    .model
                    .filter(|model| !model.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_MODEL_LABEL.to_string());
                let fallback = name.contains("templates");
                self.badge = Badge::Model { name, fallback };

                let reveal = TextReveal::new(description.text);
                let ticks = u32::try_from(reveal.len()).unwrap_or(u32::MAX);
                let complete = reveal.is_complete();
                self.output = Output::Typing { token, reveal };
                if complete {
                    Vec::new()
                } else {
                    vec![Effect::StartTicker {
                        key: TimerKey::Typewriter(token),
                        interval: config.typing_speed,
                        ticks,
                    }]
                }
            }
            Ok(GenerationOutcome::Declined) => {
                assist_warn!("generative: backend declined request {}", token);
                self.output = Output::Declined;
                self.badge = Badge::Empty;
                Vec::new()
            }
            Err(failure) => {
                assist_warn!("generative: request {} failed: {}", token, failure);
                self.output = Output::Failed;
                self.badge = Badge::Empty;
                Vec::new()
            }
        }
    }

    pub fn typewriter_tick(&mut self, token: RequestToken) {
        match &mut self.output {
            Output::Typing {
                token: current,
                reveal,
            } if *current == token => {
                reveal.advance();
                if reveal.is_complete() {
                    assist_debug!("generative: reveal {} complete", token);
                }
            }
            _ => assist_debug!("generative: ignoring tick for {}", token),
        }
    }

    /// Key of a typewriter still revealing text, if any.
    pub fn running_typewriter(&self) -> Option<TimerKey> {
        match &self.output {
            Output::Typing { token, reveal } if !reveal.is_complete() => {
                Some(TimerKey::Typewriter(*token))
            }
            _ => None,
        }
    }

    pub fn view(&self, config: &Config) -> GenerativeView {
        GenerativeView {
            button: self.button.view(),
            output: match &self.output {
                Output::Hidden => GenerativeOutputView::Hidden,
                Output::Loading => GenerativeOutputView::Loading {
                    message: GENERATIVE_LOADING_MESSAGE.to_string(),
                },
                Output::Typing { reveal, .. } => GenerativeOutputView::Text {
                    visible: escape_html(reveal.visible()),
                    complete: reveal.is_complete(),
                },
                Output::Declined => GenerativeOutputView::Declined {
                    message: GENERATIVE_DECLINED_MESSAGE.to_string(),
                },
                Output::Failed => GenerativeOutputView::Error {
                    message: format!(
                        "Error: No se pudo conectar con el módulo generativo. Verifica que el backend esté corriendo en {}",
                        config.api_base_url
                    ),
                },
            },
            badge: match &self.badge {
                Badge::Empty => None,
                Badge::Processing => Some(ModelBadgeView {
                    text: GENERATIVE_PROCESSING_BADGE.to_string(),
                    color: None,
                }),
                Badge::Model { name, fallback } => Some(ModelBadgeView {
                    text: format!("Generado con: {}", escape_html(name)),
                    color: Some(
                        if *fallback {
                            FALLBACK_MODEL_COLOR
                        } else {
                            PRIMARY_MODEL_COLOR
                        }
                        .to_string(),
                    ),
                }),
            },
        }
    }
}
