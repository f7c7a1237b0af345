// src/core/renderer/backend/opengl/mod.rs
mod opengl;

pub use opengl::GlRenderer;
