use assist_logging::{assist_info, assist_warn};

use crate::{
    text::{escape_html, format_chat_reply},
    ChatReply, Config, Effect, FocusTarget, RequestFailure, RequestSlot, RequestToken,
};

pub const CHAT_EMPTY_MESSAGE: &str = "Escribe un mensaje antes de enviarlo.";
pub const CHAT_FAILURE_MESSAGE: &str =
    "Lo siento, no puedo conectarme con el servidor. Verifica que el backend esté en ejecución.";
pub const CHAT_PENDING_TEXT: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    /// Display-ready (already escaped) message.
    Message { html: String, sender: Sender },
    /// Placeholder for a reply that has not arrived yet.
    Pending(RequestToken),
}

/// Floating chat widget. The transcript only grows; a pending placeholder is
/// swapped in place for its reply so replies keep their send order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Chat {
    open: bool,
    input: String,
    transcript: Vec<Entry>,
    suggestions: Vec<String>,
    slot: RequestSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatView {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessageView>,
    /// Escaped chip labels.
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessageView {
    pub sender: Sender,
    pub html: String,
    pub pending: bool,
}

impl Chat {
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        if self.open {
            vec![Effect::Focus {
                target: FocusTarget::ChatInput,
            }]
        } else {
            Vec::new()
        }
    }

    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// Sends `text`, or the input box when `text` is `None`.
    pub fn send(&mut self, text: Option<String>, config: &Config) -> Vec<Effect> {
        let message = match text {
            Some(text) => text.trim().to_string(),
            None => self.input.trim().to_string(),
        };
        if message.is_empty() {
            assist_info!("chat: empty message not sent");
            return vec![Effect::Alert {
                message: CHAT_EMPTY_MESSAGE.to_string(),
            }];
        }

        self.transcript.push(Entry::Message {
            html: escape_html(&message),
            sender: Sender::User,
        });
        self.input.clear();
        self.suggestions.clear();

        let token = self.slot.issue();
        self.transcript.push(Entry::Pending(token));
        assist_info!("chat: sending message {}", token);
        vec![Effect::SendChatMessage {
            token,
            message,
            user_id: config.chat_user_id.clone(),
        }]
    }

    /// Suggestion chips re-send their own text.
    pub fn suggestion_clicked(&mut self, index: usize, config: &Config) -> Vec<Effect> {
        match self.suggestions.get(index).cloned() {
            Some(text) => self.send(Some(text), config),
            None => {
                assist_warn!("chat: no suggestion at index {}", index);
                Vec::new()
            }
        }
    }

    pub fn replied(&mut self, token: RequestToken, result: Result<ChatReply, RequestFailure>) {
        let latest = self.slot.is_current(token);
        self.slot.settle(token);

        let (html, suggestions) = match result {
            Ok(reply) => (format_chat_reply(&reply.text), reply.suggestions),
            Err(failure) => {
                assist_warn!("chat: request {} failed: {}", token, failure);
                (CHAT_FAILURE_MESSAGE.to_string(), Vec::new())
            }
        };
        let message = Entry::Message {
            html,
            sender: Sender::Bot,
        };

        match self
            .transcript
            .iter()
            .position(|entry| *entry == Entry::Pending(token))
        {
            Some(index) => self.transcript[index] = message,
            None => self.transcript.push(message),
        }

        // An older reply landing late must not clobber newer chips.
        if latest {
            self.suggestions = suggestions
                .into_iter()
                .map(|chip| chip.trim().to_string())
                .filter(|chip| !chip.is_empty())
                .collect();
        }
    }

    pub fn view(&self) -> ChatView {
        ChatView {
            open: self.open,
            input: self.input.clone(),
            messages: self
                .transcript
                .iter()
                .map(|entry| match entry {
                    Entry::Message { html, sender } => ChatMessageView {
                        sender: *sender,
                        html: html.clone(),
                        pending: false,
                    },
                    Entry::Pending(_) => ChatMessageView {
                        sender: Sender::Bot,
                        html: CHAT_PENDING_TEXT.to_string(),
                        pending: true,
                    },
                })
                .collect(),
            suggestions: self
                .suggestions
                .iter()
                .map(|chip| escape_html(chip))
                .collect(),
        }
    }
}
