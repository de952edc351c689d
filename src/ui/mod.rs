//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the *core* data structures and turns them into cells on
//! the terminal.  Widgets that take mouse input return hit zones after
//! rendering so the handler can dispatch clicks without re-deriving layout.

pub mod card;
pub mod layout;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod theme;
pub mod timeline;
