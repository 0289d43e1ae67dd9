/// Primitive eLabJournal API data types and NewType-patterns.
mod elab_url;
mod ids;
mod token;

pub use elab_url::*;
pub use ids::*;
pub use token::*;
