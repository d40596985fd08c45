//! Dictation session: the single-threaded event dispatcher

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::domain::transcript::Point;

use super::events::SessionEvent;
use super::ports::{PresentationSink, TranscriptStorage, UtteranceSource};
use super::store::TranscriptStore;

/// Session start-up behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Try to start listening as soon as the session is up
    pub auto_listen: bool,
}

/// One dictation session: owns the transcript store, the listening flag,
/// and the last pointer position, and drains the session event channel.
///
/// All mutations run inside `run`'s loop, one event at a time, which is
/// what makes the store's read-modify-write persistence safe without
/// locks.
pub struct DictationSession<U, P, S>
where
    U: UtteranceSource,
    P: PresentationSink,
    S: TranscriptStorage,
{
    source: U,
    sink: P,
    store: TranscriptStore<S>,
    listening: bool,
    cursor: Point,
}

impl<U, P, S> DictationSession<U, P, S>
where
    U: UtteranceSource,
    P: PresentationSink,
    S: TranscriptStorage,
{
    pub fn new(source: U, sink: P, store: TranscriptStore<S>) -> Self {
        Self {
            source,
            sink,
            store,
            listening: false,
            cursor: Point::default(),
        }
    }

    /// Whether utterances are currently accepted.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The store, for inspection after the loop has exited.
    pub fn store(&self) -> &TranscriptStore<S> {
        &self.store
    }

    /// Hydrate, render the initial state, then drain events until
    /// `Shutdown` or the channel closes.
    pub async fn run(&mut self, mut events: mpsc::Receiver<SessionEvent>, options: SessionOptions) {
        self.store.hydrate().await;
        info!(entries = self.store.entries().len(), "session hydrated");

        if !self.source.available() {
            warn!("speech capture unavailable, dictation disabled for this session");
        } else if options.auto_listen {
            self.toggle_listening().await;
        }
        self.render().await;

        while let Some(event) = events.recv().await {
            if !self.handle(event).await {
                break;
            }
        }

        if self.listening {
            if let Err(e) = self.source.stop().await {
                warn!(error = %e, "failed to stop listening on shutdown");
            }
        }
    }

    // Returns false when the session should end.
    async fn handle(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::UtteranceFinalized(text) => {
                if !self.listening {
                    debug!(utterance = %text, "dropping utterance, not listening");
                    return true;
                }
                match self.store.dictate(&text, self.cursor).await {
                    Ok(entry) => debug!(kind = %entry.kind, "utterance classified"),
                    Err(e) => {
                        error!(error = %e, "failed to persist utterance");
                        return true;
                    }
                }
                self.render().await;
            }
            SessionEvent::ContentEdited { index, content } => {
                if let Err(e) = self.store.edit_content(index, &content).await {
                    error!(error = %e, index, "failed to persist edit");
                    return true;
                }
                self.render().await;
            }
            SessionEvent::PointerClicked(point) => {
                self.cursor = point;
            }
            SessionEvent::ClearRequested => {
                if let Err(e) = self.store.clear().await {
                    error!(error = %e, "failed to clear transcript");
                    return true;
                }
                self.render().await;
            }
            SessionEvent::ListenToggled => {
                self.toggle_listening().await;
            }
            SessionEvent::RecognitionFailed(message) => {
                warn!(%message, "recognition error, listening reset");
                self.listening = false;
            }
            SessionEvent::Shutdown => return false,
        }
        true
    }

    async fn toggle_listening(&mut self) {
        if !self.source.available() {
            warn!("cannot listen, speech capture unavailable");
            return;
        }
        let result = if self.listening {
            self.source.stop().await
        } else {
            self.source.start().await
        };
        match result {
            Ok(()) => {
                self.listening = !self.listening;
                info!(listening = self.listening, "listening toggled");
            }
            Err(e) => warn!(error = %e, "listening toggle failed"),
        }
    }

    // Sink failures are logged, never fatal: the log itself is safe.
    async fn render(&self) {
        if let Err(e) = self.sink.render(self.store.entries()).await {
            warn!(error = %e, "presentation sink failed");
        }
    }
}
