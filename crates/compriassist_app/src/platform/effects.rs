use std::sync::mpsc;
use std::thread;

use assist_logging::{assist_debug, assist_info, assist_warn};
use compriassist_core::{
    ChatReply, Effect, GeneratedDescription, GenerationOutcome, Msg, RequestFailure, RequestToken,
    SentimentResult, SimilarProduct, TimerKey,
};
use compriassist_engine::{
    BackendCall, BackendError, BackendReply, ChatRequest, ClientSettings, DescriptionRequest,
    Endpoint, EngineError, EngineEvent, EngineEvents, EngineHandle, SentimentRequest, TimerId,
};

/// Request id used for health probes; they have no widget token.
const HEALTH_REQUEST: u64 = 0;

/// Runs core effects on the engine and feeds engine events back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, EngineError> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { engine })
    }

    /// Hands engine-bound effects to the engine and returns the rest
    /// (alerts, focus, scrolling) for the page to apply.
    pub fn enqueue(&self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut local = Vec::new();
        for effect in effects {
            match effect {
                Effect::SendChatMessage {
                    token,
                    message,
                    user_id,
                } => {
                    assist_info!("chat request {} ({} chars)", token, message.chars().count());
                    self.engine.call(
                        token.get(),
                        BackendCall::Chat(ChatRequest { message, user_id }),
                    );
                }
                Effect::AnalyzeSentiment { token, text } => {
                    assist_info!("sentiment request {}", token);
                    self.engine
                        .call(token.get(), BackendCall::Sentiment(SentimentRequest { text }));
                }
                Effect::SearchSimilar { token, file, top_k } => {
                    assist_info!("visual search {} for {}", token, file.name);
                    self.engine.call(
                        token.get(),
                        BackendCall::VisualSearch {
                            image: file.path,
                            top_k,
                        },
                    );
                }
                Effect::GenerateDescription { token, request } => {
                    assist_info!("description request {} for {:?}", token, request.product_name);
                    self.engine.call(
                        token.get(),
                        BackendCall::Describe(DescriptionRequest {
                            nombre_producto: request.product_name,
                            caracteristicas: request.features,
                            categoria: request.category,
                            precio: request.price,
                            temperatura: request.temperature,
                        }),
                    );
                }
                Effect::CheckBackend => self.engine.call(HEALTH_REQUEST, BackendCall::Health),
                Effect::Schedule { key, delay } => self.engine.schedule(timer_id(key), delay),
                Effect::StartTicker {
                    key,
                    interval,
                    ticks,
                } => self.engine.ticker(timer_id(key), interval, ticks),
                Effect::CancelTimer { key } => self.engine.cancel(timer_id(key)),
                Effect::CancelAllTimers => self.engine.cancel_all(),
                other @ (Effect::ScrollTo { .. } | Effect::Focus { .. } | Effect::Alert { .. }) => {
                    local.push(other)
                }
            }
        }
        local
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let Some(msg) = translate(event) else {
                continue;
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
        assist_debug!("engine event loop finished");
    });
}

const TAG_BITS: u32 = 4;
const TAG_MASK: u64 = (1 << TAG_BITS) - 1;

/// Packs a timer key into an engine timer id. Distinct keys never share an id.
pub fn timer_id(key: TimerKey) -> TimerId {
    let (tag, payload) = match key {
        TimerKey::NavigationScroll => (0, 0),
        TimerKey::ScrollTopScroll => (1, 0),
        TimerKey::RevealScroll => (2, 0),
        TimerKey::CardReveal(index) => (3, index as u64),
        TimerKey::StatsCounter => (4, 0),
        TimerKey::Typewriter(token) => (5, token.get()),
        TimerKey::ContactSent => (6, 0),
        TimerKey::ContactReset => (7, 0),
    };
    (payload << TAG_BITS) | tag
}

pub fn timer_key(id: TimerId) -> Option<TimerKey> {
    let payload = id >> TAG_BITS;
    let key = match id & TAG_MASK {
        0 => TimerKey::NavigationScroll,
        1 => TimerKey::ScrollTopScroll,
        2 => TimerKey::RevealScroll,
        3 => TimerKey::CardReveal(usize::try_from(payload).ok()?),
        4 => TimerKey::StatsCounter,
        5 => TimerKey::Typewriter(RequestToken::from_raw(payload)),
        6 => TimerKey::ContactSent,
        7 => TimerKey::ContactReset,
        _ => return None,
    };
    Some(key)
}

/// Maps an engine event onto the message the page expects.
pub fn translate(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::TimerFired { timer_id } => {
            timer_key(timer_id).map(|key| Msg::TimerFired { key })
        }
        EngineEvent::TimerTicked { timer_id, tick } => {
            timer_key(timer_id).map(|key| Msg::TimerTicked { key, tick })
        }
        EngineEvent::Completed {
            request_id,
            endpoint,
            result,
        } => {
            if let Err(err) = &result {
                assist_warn!("{:?} request {} failed: {}", endpoint, request_id, err);
            }
            Some(completion(RequestToken::from_raw(request_id), endpoint, result))
        }
    }
}

fn completion(
    token: RequestToken,
    endpoint: Endpoint,
    result: Result<BackendReply, BackendError>,
) -> Msg {
    let result = result.map_err(|err| RequestFailure::new(err.to_string()));
    match endpoint {
        Endpoint::Chat => Msg::ChatReplied {
            token,
            result: result.and_then(|reply| match reply {
                BackendReply::Chat(response) => Ok(ChatReply {
                    text: response.response,
                    suggestions: response.suggestions.unwrap_or_default(),
                }),
                other => Err(mismatch(endpoint, &other)),
            }),
        },
        Endpoint::Sentiment => Msg::SentimentAnalyzed {
            token,
            result: result.and_then(|reply| match reply {
                BackendReply::Sentiment(response) => sentiment_result(response),
                other => Err(mismatch(endpoint, &other)),
            }),
        },
        Endpoint::VisualSearch => Msg::SimilarProductsFound {
            token,
            result: result.and_then(|reply| match reply {
                BackendReply::VisualSearch(response) => Ok(response
                    .similar_products
                    .into_iter()
                    .map(|product| SimilarProduct {
                        name: product.name,
                        similarity: product.similarity,
                        category: product.category,
                        price: product.price,
                        image_url: product.image_url,
                    })
                    .collect()),
                other => Err(mismatch(endpoint, &other)),
            }),
        },
        Endpoint::Describe => Msg::DescriptionGenerated {
            token,
            result: result.and_then(|reply| match reply {
                BackendReply::Describe(response) if !response.success => {
                    assist_info!(
                        "description {} declined: {}",
                        token,
                        response.message.as_deref().unwrap_or("no reason given")
                    );
                    Ok(GenerationOutcome::Declined)
                }
                BackendReply::Describe(response) => response
                    .data
                    .map(|data| {
                        GenerationOutcome::Generated(GeneratedDescription {
                            text: data.descripcion,
                            model: data.modelo_usado,
                        })
                    })
                    .ok_or_else(|| RequestFailure::new("description missing from reply")),
                other => Err(mismatch(endpoint, &other)),
            }),
        },
        Endpoint::Health => Msg::BackendChecked {
            reachable: result.is_ok(),
        },
    }
}

fn sentiment_result(
    response: compriassist_engine::SentimentResponse,
) -> Result<SentimentResult, RequestFailure> {
    let invalid = |err: BackendError| RequestFailure::new(err.to_string());
    Ok(SentimentResult {
        fraud_probability: response.fraud_probability().map_err(invalid)?,
        probabilities: response.probability_entries().map_err(invalid)?,
        sentiment: response.sentiment,
        confidence: response.confidence,
    })
}

fn mismatch(endpoint: Endpoint, reply: &BackendReply) -> RequestFailure {
    RequestFailure::new(format!("unexpected reply to {endpoint:?}: {reply:?}"))
}
