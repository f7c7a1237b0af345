//! Shared shader compile–link–check utility.
//!
//! Every primitive builds its program through [`ShaderProgram::build`], which
//! returns a typed error instead of leaving a half-linked program behind.

use glam::Mat4;
use glow::HasContext;
use log::warn;
use smallvec::SmallVec;

use crate::error::{AppError, Result, ShaderStage};

/// A linked vertex+fragment program with a lazy uniform-location cache.
pub struct ShaderProgram {
    program: glow::Program,
    // Two or three uniforms per program in practice; linear scan is fine.
    uniforms: SmallVec<[(&'static str, Option<glow::UniformLocation>); 4]>,
}

impl ShaderProgram {
    /// Compiles both stages and links them. On failure the partially built
    /// GL objects are deleted before the error is returned, so no value of
    /// this type ever wraps an unlinked program.
    pub fn build(gl: &glow::Context, vertex_src: &str, fragment_src: &str) -> Result<Self> {
        let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
        let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
            Ok(shader) => shader,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = unsafe { gl.create_program() }.map_err(AppError::Loader)?;
        unsafe {
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(AppError::ShaderLink { log });
            }
        }

        Ok(Self {
            program,
            uniforms: SmallVec::new(),
        })
    }

    pub fn bind(&self, gl: &glow::Context) {
        unsafe { gl.use_program(Some(self.program)) };
    }

    /// Sets a mat4 uniform on the bound program. Unknown names are cached as
    /// absent and warned about once.
    pub fn set_mat4(&mut self, gl: &glow::Context, name: &'static str, value: &Mat4) {
        if let Some(location) = self.location(gl, name) {
            unsafe {
                gl.uniform_matrix_4_f32_slice(Some(&location), false, &value.to_cols_array());
            }
        }
    }

    fn location(&mut self, gl: &glow::Context, name: &'static str) -> Option<glow::UniformLocation> {
        if let Some((_, cached)) = self.uniforms.iter().find(|(n, _)| *n == name) {
            return cached.clone();
        }
        let location = unsafe { gl.get_uniform_location(self.program, name) };
        if location.is_none() {
            warn!("uniform {name:?} not found in program");
        }
        self.uniforms.push((name, location.clone()));
        location
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn compile_stage(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader> {
    let shader_type = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let shader = unsafe { gl.create_shader(shader_type) }.map_err(AppError::Loader)?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            return Err(AppError::ShaderCompile { stage, log });
        }
    }
    Ok(shader)
}
