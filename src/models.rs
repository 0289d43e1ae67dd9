//! Defines models for responses received from eLabJournal.

/// A response object as sent by eLabJournal.
///
/// Responses are not uniformly typed across endpoints, so they are kept
/// as JSON values. Interpreting specific keys is up to the caller.
pub type Record = serde_json::Map<String, serde_json::Value>;
