//! Line grid in pixel coordinates.

use glam::Mat4;
use glow::HasContext;

use crate::core::renderer::shader::ShaderProgram;
use crate::error::{AppError, Result};

const VERTEX_SRC: &str = r#"#version 330 core
layout (location = 0) in vec3 a_pos;
uniform mat4 projection;
void main() {
    gl_Position = projection * vec4(a_pos.xy, 0.0, 1.0);
}
"#;

const FRAGMENT_SRC: &str = r#"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(0.16, 0.16, 0.16, 1.0);
}
"#;

#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub step: f32,
}

/// Generates line-segment endpoints (x, y, z triples) for the grid:
/// horizontal lines first, then vertical, both inset by `padding`.
/// Returns the flattened endpoints and the number of lines generated.
fn line_endpoints(spec: &GridSpec) -> (Vec<f32>, u32) {
    let min_x = spec.padding;
    let min_y = spec.padding;
    let max_x = spec.width - spec.padding;
    let max_y = spec.height - spec.padding;

    let mut vertices = Vec::new();
    let mut lines = 0u32;

    let mut y = min_y;
    while y <= max_y {
        vertices.extend_from_slice(&[min_x, y, 0.0, max_x, y, 0.0]);
        lines += 1;
        y += spec.step;
    }

    let mut x = min_x;
    while x <= max_x {
        vertices.extend_from_slice(&[x, min_y, 0.0, x, max_y, 0.0]);
        lines += 1;
        x += spec.step;
    }

    (vertices, lines)
}

pub struct LineGrid {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    program: ShaderProgram,
    vertex_count: i32,
}

impl LineGrid {
    pub fn new(gl: &glow::Context, spec: GridSpec, projection: &Mat4) -> Result<Self> {
        let mut program = ShaderProgram::build(gl, VERTEX_SRC, FRAGMENT_SRC)?;
        let (vertices, lines) = line_endpoints(&spec);

        let vao = unsafe { gl.create_vertex_array() }.map_err(AppError::Loader)?;
        let vbo = unsafe { gl.create_buffer() }.map_err(AppError::Loader)?;
        unsafe {
            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            let bytes = std::slice::from_raw_parts(
                vertices.as_ptr() as *const u8,
                vertices.len() * size_of::<f32>(),
            );
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, 3 * 4, 0);
            gl.enable_vertex_attrib_array(0);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        program.bind(gl);
        program.set_mat4(gl, "projection", projection);

        Ok(Self {
            vao,
            vbo,
            program,
            vertex_count: (2 * lines) as i32,
        })
    }

    pub fn draw(&self, gl: &glow::Context) {
        self.program.bind(gl);
        unsafe {
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::LINES, 0, self.vertex_count);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_grid_counts() {
        let spec = GridSpec {
            width: 512.0,
            height: 512.0,
            padding: 64.0,
            step: 48.0,
        };
        let (vertices, lines) = line_endpoints(&spec);
        // y = 64, 112, …, 448: nine horizontal lines, nine vertical.
        assert_eq!(lines, 18);
        assert_eq!(vertices.len(), 18 * 2 * 3);
    }

    #[test]
    fn asymmetric_grid_counts_axes_independently() {
        let spec = GridSpec {
            width: 512.0,
            height: 256.0,
            padding: 64.0,
            step: 48.0,
        };
        let (_, lines) = line_endpoints(&spec);
        // Horizontal: y = 64, 112, 160 (three). Vertical: x = 64…448 (nine).
        assert_eq!(lines, 12);
    }

    #[test]
    fn first_horizontal_line_spans_padded_width() {
        let spec = GridSpec {
            width: 512.0,
            height: 512.0,
            padding: 64.0,
            step: 48.0,
        };
        let (vertices, _) = line_endpoints(&spec);
        assert_eq!(vertices[..6], [64.0, 64.0, 0.0, 448.0, 64.0, 0.0]);
    }
}
