pub mod api;
pub mod backend;
#[cfg(feature = "opengl")]
pub mod primitive;
#[cfg(feature = "opengl")]
pub mod shader;
pub mod transform;
