//! Cross-crate integration scenarios.

mod flows;
mod persistence;
