//! Quote resolution and selection

pub mod fallback;
pub mod resolver;
pub mod selector;

pub use fallback::fallback_quotes;
pub use resolver::{QuoteList, QuoteResolver};
pub use selector::RandomSelector;
