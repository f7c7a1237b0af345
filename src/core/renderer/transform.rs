//! Model and projection matrix helpers shared by the primitives.

use glam::{Mat4, Vec2, Vec3};

/// Per-object model transform: translate, then rotate about z, then scale.
/// The order is fixed; the primitives rely on it.
pub fn model_matrix(pos: Vec2, angle_degrees: f32, scale: f32) -> Mat4 {
    Mat4::from_translation(pos.extend(0.0))
        * Mat4::from_rotation_z(angle_degrees.to_radians())
        * Mat4::from_scale(Vec3::new(scale, scale, 0.0))
}

/// Pixel-space orthographic projection, origin top-left, y pointing down.
pub fn pixel_projection(width: f32, height: f32) -> Mat4 {
    Mat4::orthographic_rh_gl(0.0, width, height, 0.0, -1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn model_applies_scale_rotate_translate_in_order() {
        let m = model_matrix(Vec2::new(10.0, 20.0), 90.0, 2.0);
        // (1, 0): scaled to (2, 0), rotated 90° to (0, 2), translated to (10, 22).
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(10.0, 22.0, 0.0), EPS), "got {p}");
    }

    #[test]
    fn composition_order_is_not_commutative() {
        let pos = Vec2::new(10.0, 20.0);
        let forward = model_matrix(pos, 90.0, 2.0);
        let reversed = Mat4::from_scale(Vec3::new(2.0, 2.0, 0.0))
            * Mat4::from_rotation_z(90.0_f32.to_radians())
            * Mat4::from_translation(pos.extend(0.0));
        let probe = Vec3::new(1.0, 0.0, 0.0);
        assert!(
            !forward
                .transform_point3(probe)
                .abs_diff_eq(reversed.transform_point3(probe), EPS)
        );
    }

    #[test]
    fn zero_angle_keeps_axes() {
        let m = model_matrix(Vec2::new(5.0, 5.0), 0.0, 3.0);
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 0.0));
        assert!(p.abs_diff_eq(Vec3::new(8.0, 8.0, 0.0), EPS), "got {p}");
    }

    #[test]
    fn projection_maps_pixels_to_ndc_y_down() {
        let proj = pixel_projection(512.0, 512.0);
        let top_left = proj.transform_point3(Vec3::ZERO);
        let bottom_right = proj.transform_point3(Vec3::new(512.0, 512.0, 0.0));
        assert!(top_left.abs_diff_eq(Vec3::new(-1.0, 1.0, 0.0), EPS), "got {top_left}");
        assert!(
            bottom_right.abs_diff_eq(Vec3::new(1.0, -1.0, 0.0), EPS),
            "got {bottom_right}"
        );
    }
}
