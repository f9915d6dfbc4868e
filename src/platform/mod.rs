//! Platform abstraction layer
//!
//! Browser event names and key codes stop here; the rest of the crate only
//! sees `Command`s.

pub mod input;

pub use input::{InputAction, key_down, key_up};
