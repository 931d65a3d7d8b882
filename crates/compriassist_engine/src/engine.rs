use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use assist_logging::{assist_debug, assist_info};

use crate::client::{Backend, ReqwestBackend};
use crate::timers::TimerRegistry;
use crate::{
    BackendCall, BackendError, BackendReply, ClientSettings, EngineError, EngineEvent, RequestId,
    TimerId,
};

/// Where the engine delivers results and timer notifications.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Call {
        request_id: RequestId,
        call: BackendCall,
    },
    Schedule {
        timer_id: TimerId,
        delay: Duration,
    },
    Ticker {
        timer_id: TimerId,
        interval: Duration,
        ticks: u32,
    },
    Cancel {
        timer_id: TimerId,
    },
    CancelAll,
}

/// Receiving half of the engine's event stream.
pub struct EngineEvents {
    rx: mpsc::Receiver<EngineEvent>,
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.rx.try_recv().ok()
    }

    /// Blocks until an event arrives; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

/// Runs backend calls and timers on a private tokio runtime.
///
/// Dropping the handle stops the worker thread, which cancels every timer
/// still pending.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings) -> Result<(Self, EngineEvents), EngineError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(
        backend: Arc<dyn Backend>,
    ) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;

        thread::spawn(move || {
            let sink: Arc<dyn EventSink> = Arc::new(ChannelEventSink::new(event_tx));
            let mut timers = TimerRegistry::new(runtime.handle().clone());
            while let Ok(command) = cmd_rx.recv() {
                run_command(&runtime, &mut timers, &backend, &sink, command);
            }
            let cancelled = timers.cancel_all();
            assist_debug!("engine stopped, {} timers cancelled", cancelled);
        });

        assist_info!("engine started");
        Ok((Self { cmd_tx }, EngineEvents { rx: event_rx }))
    }

    pub fn call(&self, request_id: RequestId, call: BackendCall) {
        let _ = self.cmd_tx.send(EngineCommand::Call { request_id, call });
    }

    /// Fires once after `delay`. Replaces any timer already under `timer_id`.
    pub fn schedule(&self, timer_id: TimerId, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Schedule { timer_id, delay });
    }

    pub fn ticker(&self, timer_id: TimerId, interval: Duration, ticks: u32) {
        let _ = self.cmd_tx.send(EngineCommand::Ticker {
            timer_id,
            interval,
            ticks,
        });
    }

    pub fn cancel(&self, timer_id: TimerId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { timer_id });
    }

    pub fn cancel_all(&self) {
        let _ = self.cmd_tx.send(EngineCommand::CancelAll);
    }
}

fn run_command(
    runtime: &tokio::runtime::Runtime,
    timers: &mut TimerRegistry,
    backend: &Arc<dyn Backend>,
    sink: &Arc<dyn EventSink>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::Call { request_id, call } => {
            let backend = backend.clone();
            let sink = sink.clone();
            runtime.spawn(async move {
                let endpoint = call.endpoint();
                let result = perform(backend.as_ref(), call).await;
                sink.emit(EngineEvent::Completed {
                    request_id,
                    endpoint,
                    result,
                });
            });
        }
        EngineCommand::Schedule { timer_id, delay } => {
            let sink = sink.clone();
            timers.schedule(timer_id, delay, move || {
                sink.emit(EngineEvent::TimerFired { timer_id });
            });
        }
        EngineCommand::Ticker {
            timer_id,
            interval,
            ticks,
        } => {
            let sink = sink.clone();
            timers.ticker(timer_id, interval, ticks, move |tick| {
                sink.emit(EngineEvent::TimerTicked { timer_id, tick });
            });
        }
        EngineCommand::Cancel { timer_id } => {
            timers.cancel(timer_id);
        }
        EngineCommand::CancelAll => {
            let cancelled = timers.cancel_all();
            assist_debug!("cancelled {} timers", cancelled);
        }
    }
}

/// Executes one call against the backend.
pub async fn perform(
    backend: &dyn Backend,
    call: BackendCall,
) -> Result<BackendReply, BackendError> {
    match call {
        BackendCall::Chat(request) => backend.chat(&request).await.map(BackendReply::Chat),
        BackendCall::Sentiment(request) => backend
            .sentiment(&request)
            .await
            .map(BackendReply::Sentiment),
        BackendCall::VisualSearch { image, top_k } => backend
            .visual_search(&image, top_k)
            .await
            .map(BackendReply::VisualSearch),
        BackendCall::Describe(request) => {
            backend.describe(&request).await.map(BackendReply::Describe)
        }
        BackendCall::Health => backend.health().await.map(BackendReply::Health),
    }
}
