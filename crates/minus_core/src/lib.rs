//! Canonical vocabulary for the `minus` assignment language.
//!
//! This crate is intentionally small and dependency-free. It names the token kinds that the (external) lexer produces
//! and the parser consumes, together with their spellings and metadata.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no parser types.
//! - Callers work with the stable [`lang::tokens::TokenKind`] IDs and look up names/spellings through the registry.

pub mod lang;
