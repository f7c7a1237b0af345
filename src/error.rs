use std::{error::Error as StdError, fmt};

use winit::error::{EventLoopError, OsError};

/// Shader stage tag carried in compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "VERTEX"),
            Self::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    Window(OsError),       // window creation failures
    Loader(String),        // GL display/context/surface/function-loading failures
    ShaderCompile { stage: ShaderStage, log: String },
    ShaderLink { log: String },
    Winit(EventLoopError), // winit’s EventLoopError
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window(e) => write!(f, "window creation failed: {e}"),
            Self::Loader(msg) => write!(f, "graphics loader: {msg}"),
            Self::ShaderCompile { stage, log } => {
                write!(f, "shader compilation failed [{stage}]: {log}")
            }
            Self::ShaderLink { log } => write!(f, "shader linking failed [PROGRAM]: {log}"),
            Self::Winit(e) => write!(f, "winit: {e}"),
        }
    }
}

impl StdError for AppError {}

/// `?` conversions
impl From<OsError> for AppError {
    fn from(e: OsError) -> Self {
        Self::Window(e)
    }
}
impl From<EventLoopError> for AppError {
    fn from(e: EventLoopError) -> Self {
        Self::Winit(e)
    }
}
#[cfg(feature = "opengl")]
impl From<glutin::error::Error> for AppError {
    fn from(e: glutin::error::Error) -> Self {
        Self::Loader(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
