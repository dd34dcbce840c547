use thiserror::Error;

use crate::types::ObjectId;

/// Error taxonomy for the scene core.
///
/// Everything here is synchronous and deterministic; there are no transient
/// failures and no retry paths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// A designated object is referenced but not registered. Raised at
    /// session start, before the frame loop runs.
    #[error("scene configuration invalid: {role} designates {detail}, which is not registered")]
    Configuration { role: &'static str, detail: String },

    /// Unknown option name, wrong value type, or value outside its range.
    /// The prior value is always retained.
    #[error("invalid option {name:?}: {reason}")]
    InvalidOption { name: String, reason: String },

    /// Lookup of an unregistered object id.
    #[error("no object registered with id {0}")]
    NotFound(ObjectId),
}
