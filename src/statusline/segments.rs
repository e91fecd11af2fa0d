//! Status-line segment plugins.
//!
//! Each segment turns one fact (directory, branch, model, time, delta,
//! thinking mode) into a styled fragment, or an empty string when it has
//! nothing to say. Segments hold no state; configuration is passed in
//! explicitly. Filesystem probes are best-effort and never fail the render —
//! a missing or unreadable file degrades to the segment's default output.
//!
//! Invariant: no fragment contains a newline.

pub mod git;
pub mod lines;
pub mod model;
pub mod project;
pub mod thinking;
pub mod time;

pub use git::GitSegment;
pub use lines::LinesSegment;
pub use model::ModelSegment;
pub use project::ProjectSegment;
pub use thinking::ThinkingSegment;
pub use time::TimeSegment;
