//! Caret state and relocation

mod cursor;

pub use cursor::{relocated_caret, Caret};
