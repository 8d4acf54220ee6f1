//! Hierarchy resolution.
//!
//! A depth-tracking automaton over the ordered candidate stream. The state
//! is an explicit stack of currently open heading levels; transitions
//! enforce monotonic nesting so the output never jumps more than one depth
//! step below its nearest ancestor.

use crate::config::OutlineOptions;
use crate::model::{Heading, HeadingCandidate, HeadingLevel, LevelHint};

/// Depth-stack automaton assigning final levels to heading candidates.
///
/// Initial state is the empty stack. There is no terminal close action:
/// the stack is simply discarded at end of input.
pub struct HierarchyBuilder {
    allcaps_level: HeadingLevel,
    depth_stack: Vec<HeadingLevel>,
}

impl HierarchyBuilder {
    /// Create a builder with an empty depth stack.
    pub fn new(options: &OutlineOptions) -> Self {
        Self {
            allcaps_level: options.allcaps_level,
            depth_stack: Vec::new(),
        }
    }

    /// Resolve a candidate stream into final headings, in input order.
    pub fn resolve(mut self, candidates: &[HeadingCandidate]) -> Vec<Heading> {
        candidates
            .iter()
            .map(|candidate| self.accept(candidate))
            .collect()
    }

    /// Feed one candidate through the automaton and produce its heading.
    pub fn accept(&mut self, candidate: &HeadingCandidate) -> Heading {
        // Keyword headers denote top-level document sections regardless of
        // surrounding context: force H1 and reset the stack.
        if candidate.hint == LevelHint::Keyword {
            self.depth_stack.clear();
            self.depth_stack.push(HeadingLevel::H1);
            return Heading::new(HeadingLevel::H1, candidate.text.clone(), candidate.page);
        }

        let tentative = self.tentative_level(candidate.hint);
        let structural = matches!(candidate.hint, LevelHint::Numbered(_));
        let level = self.clamp(tentative, structural);

        // Close all deeper (and equal) open levels, then open this one.
        while self
            .depth_stack
            .last()
            .is_some_and(|open| open.depth() >= level.depth())
        {
            self.depth_stack.pop();
        }
        self.depth_stack.push(level);

        Heading::new(level, candidate.text.clone(), candidate.page)
    }

    /// Currently open levels, shallowest first. Exposed for inspection.
    pub fn open_levels(&self) -> &[HeadingLevel] {
        &self.depth_stack
    }

    /// Map a classification hint to its tentative level.
    fn tentative_level(&self, hint: LevelHint) -> HeadingLevel {
        match hint {
            LevelHint::Numbered(segments) => HeadingLevel::from_depth(segments),
            LevelHint::Keyword => HeadingLevel::H1,
            LevelHint::AllCaps => self.allcaps_level,
            LevelHint::TitleCase => HeadingLevel::H2,
            LevelHint::ColonTerminated => HeadingLevel::H3,
        }
    }

    /// Clamp a tentative level to at most one step below the deepest open
    /// level.
    ///
    /// Numbered candidates make an explicit depth claim, so with no
    /// ancestors open they demote all the way to H1. Style-based
    /// candidates (all-caps, title-case, colon) keep their configured
    /// level when no section structure is open yet.
    fn clamp(&self, tentative: HeadingLevel, structural: bool) -> HeadingLevel {
        let deepest_open = self.depth_stack.last().map_or(0, |l| l.depth());
        if deepest_open == 0 && !structural {
            return tentative;
        }
        if tentative.depth() > deepest_open + 1 {
            HeadingLevel::from_depth(deepest_open + 1)
        } else {
            tentative
        }
    }
}
