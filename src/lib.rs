//! aiterm: terminal workflow optimizer for AI coding sessions.
//!
//! The library surface is the status-line rendering engine behind
//! `aiterm statusline`: a JSON status event goes in, a two-line ANSI banner
//! comes out. The [`statusline`] module holds the engine; [`git`],
//! [`session`], and [`term`] are the small local collaborators it reads from.

pub mod git;
pub mod session;
pub mod statusline;
pub mod styling;
pub mod term;
pub mod utils;
