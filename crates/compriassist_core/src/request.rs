use std::fmt;

/// Identifies one outbound request issued by a widget.
///
/// Tokens grow monotonically per widget; a completion carrying anything but
/// the latest token for its widget is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Per-widget request generation counter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestSlot {
    latest: u64,
    in_flight: bool,
}

impl RequestSlot {
    /// Issues a fresh token, superseding whatever was in flight.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        self.in_flight = true;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Marks the current request as finished. Returns false (and changes
    /// nothing) when `token` has been superseded.
    pub fn settle(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.in_flight = false;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn latest(&self) -> Option<RequestToken> {
        (self.latest > 0).then_some(RequestToken(self.latest))
    }
}

/// Transport or server failure, as seen by the core. The reason is for logs;
/// widgets always show their own generic failure text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub reason: String,
}

impl RequestFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Button that triggers a request: disabled with a busy label while the
/// request runs, then back to exactly its idle label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerButton {
    idle_label: &'static str,
    busy_label: &'static str,
    busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

impl TriggerButton {
    pub const fn new(idle_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            idle_label,
            busy_label,
            busy: false,
        }
    }

    pub fn begin(&mut self) {
        self.busy = true;
    }

    pub fn restore(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn view(&self) -> ButtonView {
        ButtonView {
            label: if self.busy {
                self.busy_label
            } else {
                self.idle_label
            }
            .to_string(),
            disabled: self.busy,
        }
    }
}
