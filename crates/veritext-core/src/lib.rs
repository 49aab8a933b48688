pub mod error;
pub mod flatten;
pub mod matching;
pub mod model;
pub mod spec;

pub use error::CoreError;
pub use flatten::{flatten, parse_and_flatten};
pub use matching::compare;
pub use model::{
    Comparison, DesignTextElement, FoundText, MatchKind, MatchResult, MatchStatus,
    SpecificationRecord, Summary,
};
pub use spec::{load_from_file, load_from_str};
