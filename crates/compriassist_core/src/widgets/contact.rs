use crate::{Config, ContactField, Effect, TimerKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Contact form with a simulated submit: sending, then sent, then reset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    phase: ContactPhase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub button_label: String,
    pub button_disabled: bool,
}

impl ContactForm {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn submit(&mut self, config: &Config) -> Vec<Effect> {
        if self.phase != ContactPhase::Idle {
            return Vec::new();
        }
        self.phase = ContactPhase::Sending;
        vec![Effect::Schedule {
            key: TimerKey::ContactSent,
            delay: config.contact_sending_delay,
        }]
    }

    pub fn sent(&mut self, config: &Config) -> Vec<Effect> {
        if self.phase != ContactPhase::Sending {
            return Vec::new();
        }
        self.phase = ContactPhase::Sent;
        vec![Effect::Schedule {
            key: TimerKey::ContactReset,
            delay: config.contact_reset_delay,
        }]
    }

    pub fn reset(&mut self) {
        if self.phase == ContactPhase::Sent {
            *self = Self::default();
        }
    }

    pub fn view(&self) -> ContactView {
        let button_label = match self.phase {
            ContactPhase::Idle => "Enviar Mensaje",
            ContactPhase::Sending => "Enviando...",
            ContactPhase::Sent => "¡Mensaje Enviado!",
        };
        ContactView {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            button_label: button_label.to_string(),
            button_disabled: self.phase != ContactPhase::Idle,
        }
    }
}
