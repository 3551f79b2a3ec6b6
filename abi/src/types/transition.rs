use crate::BookingStatus;

/// Decides which booking-status transitions the lifecycle manager accepts.
/// The manager takes this as a swappable policy so deployments can tighten
/// the state machine without touching the transition code itself.
pub trait TransitionPolicy: Send + Sync {
    fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool;
}

/// Permissive policy: any status may move to any other. This matches the
/// historical behavior of the update endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyTransition;

impl TransitionPolicy for AnyTransition {
    fn allows(&self, _from: BookingStatus, _to: BookingStatus) -> bool {
        true
    }
}

/// Strict policy: pending may confirm or cancel, confirmed may complete or
/// cancel, cancelled and completed are terminal. Re-applying the current
/// status is allowed so a confirm can be replayed to resync its payment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForwardOnly;

impl TransitionPolicy for ForwardOnly {
    fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool {
        use BookingStatus::*;
        if from == to {
            return true;
        }
        matches!(
            (from, to),
            (Pending, Confirmed) | (Pending, Cancelled) | (Confirmed, Completed) | (Confirmed, Cancelled)
        )
    }
}
