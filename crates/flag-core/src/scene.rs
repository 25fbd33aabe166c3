//! Camera and GPU-shared plain-old-data types.
//!
//! The uniform and instance structs here are `bytemuck`-backed mirrors of the
//! WGSL declarations in `shaders/flag.wgsl`; field order and padding must
//! stay in lockstep with the shader.

use crate::animate::AnimationParams;
use crate::constants::*;
use crate::field::ParticleField;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Unit quad expanded per instance in the vertex shader. Corner offsets are
/// in [-0.5, 0.5] so the quad spans exactly one sprite diameter.
pub const QUAD_VERTICES: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Front-facing view of the flag plane from the +z axis.
    pub fn flag_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Uniform block for the flag pipeline. 112 bytes, layout-matched to the
/// `Uniforms` struct in WGSL.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4],
    pub viewport: [f32; 2],
    pub time: f32,
    pub expansion: f32,
    pub wave_strength: f32,
    pub wave_speed: f32,
    pub point_size: f32,
    pub _pad: f32,
}

impl ParticleUniforms {
    pub fn new(camera: &Camera, params: &AnimationParams, viewport: [f32; 2]) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: [camera.eye.x, camera.eye.y, camera.eye.z, 1.0],
            viewport,
            time: params.time,
            expansion: params.expansion,
            wave_strength: params.wave_strength,
            wave_speed: params.wave_speed,
            point_size: params.point_size,
            _pad: 0.0,
        }
    }
}

/// One particle as uploaded to the instance buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub pos: [f32; 3],
    pub color: [f32; 3],
}

pub fn pack_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    field
        .positions
        .iter()
        .zip(&field.colors)
        .map(|(&pos, &color)| ParticleInstance { pos, color })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn uniform_struct_matches_shader_block_size() {
        assert_eq!(std::mem::size_of::<ParticleUniforms>(), 112);
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 24);
    }

    #[test]
    fn default_camera_looks_down_negative_z() {
        let camera = Camera::flag_default(16.0 / 9.0);
        let clip = camera.view_proj() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "origin must project to screen center");

        let flag_edge = camera.view_proj() * Vec3::new(FLAG_WIDTH / 2.0, 0.0, 0.0).extend(1.0);
        let edge_ndc = flag_edge.truncate() / flag_edge.w;
        assert!(edge_ndc.x > 0.0 && edge_ndc.x < 1.0, "flag must fit the default view");
    }

    #[test]
    fn instances_pair_positions_with_colors() {
        let field = field::generate(1_000);
        let instances = pack_instances(&field);
        assert_eq!(instances.len(), field.len());
        for (instance, (pos, color)) in instances
            .iter()
            .zip(field.positions.iter().zip(&field.colors))
        {
            assert_eq!(&instance.pos, pos);
            assert_eq!(&instance.color, color);
        }
    }
}
