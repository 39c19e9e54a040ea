//! Library components for the bomparse CLI.

pub mod logging;
pub mod render;
pub mod stream;
