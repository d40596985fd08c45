//! Typed session events

use crate::domain::transcript::Point;

/// Everything that can happen to a dictation session, as one typed
/// event stream. Speech capture, the editing surface, and the host UI
/// all feed the same single-consumer channel, so no two mutations ever
/// interleave.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The speech engine finalized one utterance.
    UtteranceFinalized(String),
    /// The user edited an entry's content on the presentation surface.
    ContentEdited { index: usize, content: String },
    /// The user clicked the surface; the x coordinate anchors the next entry.
    PointerClicked(Point),
    /// The user asked for the transcript to be wiped.
    ClearRequested,
    /// The user toggled listening on or off.
    ListenToggled,
    /// The speech engine reported a mid-session error.
    RecognitionFailed(String),
    /// End the session.
    Shutdown,
}
