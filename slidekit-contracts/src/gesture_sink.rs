use slidekit_model::GestureEvent;

/// What the sink did with a gesture sample, so the host knows whether to let
/// the platform's default action (page scroll, click) proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResponse {
    /// Not intercepted; the default action must proceed.
    PassThrough,
    /// Consumed without needing to suppress the default action.
    Observed,
    /// Consumed; the default action must be suppressed.
    Stifled,
}

impl GestureResponse {
    pub fn prevents_default(self) -> bool {
        matches!(self, GestureResponse::Stifled)
    }

    pub fn is_handled(self) -> bool {
        !matches!(self, GestureResponse::PassThrough)
    }
}

/// Capability for any component that consumes classified gesture samples.
pub trait GestureSink {
    /// Whether the sink currently wants gestures at all. Hosts skip
    /// delivery entirely when this is `false`.
    fn accepts_gestures(&self) -> bool;

    fn on_gesture(&mut self, event: &GestureEvent) -> GestureResponse;

    /// Deliver a sample only if the sink accepts gestures.
    fn dispatch_gesture(&mut self, event: &GestureEvent) -> GestureResponse {
        if !self.accepts_gestures() {
            log::trace!("gesture {:?} dropped: sink inactive", event.kind);
            return GestureResponse::PassThrough;
        }
        self.on_gesture(event)
    }
}
