use thiserror::Error;

use crate::models::EventId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarpoolError {
    #[error("No drivers available for event {event_id}")]
    NoDriversAvailable { event_id: EventId },
}
