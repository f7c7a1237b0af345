pub mod grid;
pub mod quad;

pub use grid::{GridSpec, LineGrid};
pub use quad::Quad;
