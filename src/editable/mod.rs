//! Editable text fields for the composer form.
//!
//! Two kinds of input live in the form:
//! - the message body (multi-line)
//! - the hashtag draft (single-line, Enter submits)
//!
//! Both are backed by [`TextField`], a `String` plus a caret stored as a char
//! offset. [`EditConstraints`] decides what a field accepts.
//!
//! Edits are total: every operation either changes the text or leaves it
//! as-is, nothing returns an error.

mod constraints;
mod field;

pub use constraints::EditConstraints;
pub use field::{MoveTarget, Position, TextField};
