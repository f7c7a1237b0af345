// src/core/renderer/backend/mod.rs
#[cfg(feature = "opengl")]
pub mod opengl;

// Re-export the selected backend under a common name:
#[cfg(feature = "opengl")]
pub use opengl::GlRenderer as SelectedRenderer;
