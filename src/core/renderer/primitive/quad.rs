//! Unit quad drawn as a 4-vertex triangle strip.

use glam::{Mat4, Vec2};
use glow::HasContext;

use crate::core::renderer::shader::ShaderProgram;
use crate::core::renderer::transform::model_matrix;
use crate::error::{AppError, Result};

const VERTEX_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 a_pos;
uniform mat4 model;
uniform mat4 projection;
void main() {
    gl_Position = projection * model * vec4(a_pos.xy, 0.0, 1.0);
}
"#;

const FRAGMENT_SRC: &str = r#"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0, 0.0, 1.0, 1.0);
}
"#;

// Centered on the origin; scaled per draw call.
const QUAD_VERTICES: [f32; 12] = [
    -0.5, 0.5, 0.0, // lt
    0.5, 0.5, 0.0, // rt
    -0.5, -0.5, 0.0, // lb
    0.5, -0.5, 0.0, // rb
];

pub struct Quad {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    program: ShaderProgram,
}

impl Quad {
    /// Uploads the strip geometry, builds the shader pair and sets the fixed
    /// projection once.
    pub fn new(gl: &glow::Context, projection: &Mat4) -> Result<Self> {
        let mut program = ShaderProgram::build(gl, VERTEX_SRC, FRAGMENT_SRC)?;

        let vao = unsafe { gl.create_vertex_array() }.map_err(AppError::Loader)?;
        let vbo = unsafe { gl.create_buffer() }.map_err(AppError::Loader)?;
        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            let bytes = std::slice::from_raw_parts(
                QUAD_VERTICES.as_ptr() as *const u8,
                size_of_val(&QUAD_VERTICES),
            );
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 3 * 4, 0);
            gl.enable_vertex_attrib_array(0);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        program.bind(gl);
        program.set_mat4(gl, "projection", projection);

        Ok(Self { vao, vbo, program })
    }

    /// Draws the quad with `model = translate(pos) · rotate_z(angle) · scale`.
    pub fn draw(&mut self, gl: &glow::Context, pos: Vec2, angle_degrees: f32, scale: f32) {
        let model = model_matrix(pos, angle_degrees, scale);

        self.program.bind(gl);
        self.program.set_mat4(gl, "model", &model);
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
            gl.bind_vertex_array(None);
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_vertex_array(self.vao);
            gl.delete_buffer(self.vbo);
        }
        self.program.destroy(gl);
    }
}
