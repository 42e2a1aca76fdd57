pub use fuzzy::FuzzyMatcher;
pub use signature::{matches, SignatureMatcher};

mod fuzzy;
mod signature;
