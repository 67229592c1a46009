use thiserror::Error;

/// Everything that can go wrong between collecting inputs and producing an estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TripError {
    /// The distance is not a positive, finite number of kilometres.
    ///
    /// Advisory only: callers should ask for a new distance, not abort.
    #[error("distance must be greater than 0 km (got {distance_km})")]
    InvalidInput { distance_km: f64 },

    /// A label does not name any variant of a fixed enumeration.
    #[error("unknown {kind} '{label}'")]
    Configuration { kind: &'static str, label: String },

    #[error("invalid departure time '{input}', expected HH:MM or HH:MM:SS")]
    InvalidTime { input: String },
}

impl TripError {
    /// `true` for conditions the user can fix by re-entering a value.
    pub fn is_advisory(&self) -> bool {
        matches!(self, TripError::InvalidInput { .. })
    }
}
