/// API base URL of the University of Oslo eLabJournal instance.
pub const DEFAULT_ELAB_URL: &str = "https://uio.elabjournal.com/api/v1/";

/// Longest stretch of a response body quoted in error messages.
pub(crate) const BODY_SNIPPET_LEN: usize = 512;
