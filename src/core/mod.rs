//! Core state machines – scroll-spy, carousel, tilt, reveal, and the static
//! content they run over.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every piece is pure state or arithmetic driven from the event loop.

pub mod carousel;
pub mod content;
pub mod geometry;
pub mod reveal;
pub mod spy;
pub mod tilt;
