//! Model types for outline extraction.
//!
//! These form the pipeline's data flow: extracted [`Line`]s become
//! [`HeadingCandidate`]s, which resolve into final [`Heading`]s owned by
//! the [`Outline`] result.

mod heading;
mod line;
mod outline;

pub use heading::{Confidence, Heading, HeadingCandidate, HeadingLevel, LevelHint};
pub use line::Line;
pub use outline::Outline;
