/// Presentation layer: draws engine state, never mutates it.
pub mod figure;
mod render;

pub use render::render;
