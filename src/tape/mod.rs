//! Stages for turning a document into a zkVM input tape.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ layout ──▶ words
//! (path)    (bytes)    (hex)
//!                        │
//!           decode ◀─────┘
//! ```
//!
//! 1. [`input`]  — read the document from disk; the only stage with I/O
//! 2. [`layout`] — length prefixes, alignment padding and the page selector
//! 3. [`words`]  — big-endian words rendered as 8 lowercase hex digits each
//! 4. [`decode`] — the inverse of `layout` + `words`, for inspecting tapes

pub mod decode;
pub mod input;
pub mod layout;
pub mod words;
