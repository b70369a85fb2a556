use bytemuck::{Pod, Zeroable};

use crate::systems::shatter::{FragmentPose, ShatteredSprite};
use super::geometry::{build_fragment_vertices, FRAGMENT_VERTEX_FLOATS};

/// Per-fragment render data for the external renderer.
/// 16 floats = 64 bytes stride, world space.
///
/// The renderer draws a `2 * half_w` by `2 * half_h` quad sampling the UV
/// rectangle, masked to the triangle picked by `variant`
/// (0 = upper-left, 1 = lower-right).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FragmentInstance {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Uniform scale factor.
    pub scale: f32,
    pub alpha: f32,
    pub u: f32,
    pub v: f32,
    pub uv_width: f32,
    pub uv_height: f32,
    pub half_w: f32,
    pub half_h: f32,
    pub variant: f32,
    pub tint_r: f32,
    pub tint_g: f32,
    pub tint_b: f32,
    /// Draw order of the shatter root.
    pub z: f32,
}

impl FragmentInstance {
    pub const FLOATS: usize = 16;
}

/// Render buffers for one shattered sprite, rebuilt every frame.
#[derive(Debug, Default)]
pub struct FragmentBuffer {
    /// One instance per fragment, in fragment order.
    pub instances: Vec<FragmentInstance>,
    /// Masked triangle list, `FRAGMENT_VERTEX_FLOATS` floats per vertex.
    pub vertices: Vec<f32>,
}

impl FragmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_fragments: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max_fragments),
            vertices: Vec::with_capacity(max_fragments * 3 * FRAGMENT_VERTEX_FLOATS),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.vertices.clear();
    }

    /// Rebuild both buffers from shatter-local `poses`, one per fragment.
    pub fn write_poses<T>(
        &mut self,
        shattered: &ShatteredSprite<T>,
        poses: impl IntoIterator<Item = FragmentPose>,
    ) {
        self.clear();
        let fragments = shattered.result.fragments();
        for (i, (fragment, pose)) in fragments.iter().zip(poses).enumerate() {
            let pose = shattered.to_world(pose);
            let region = fragment.source_region;
            let tint = shattered.tint(i);
            self.instances.push(FragmentInstance {
                x: pose.position.x,
                y: pose.position.y,
                rotation: pose.rotation,
                scale: pose.scale,
                alpha: pose.alpha,
                u: region.x,
                v: region.y,
                uv_width: region.width,
                uv_height: region.height,
                half_w: fragment.size.x / 2.0,
                half_h: fragment.size.y / 2.0,
                variant: fragment.variant.index() as f32,
                tint_r: tint[0],
                tint_g: tint[1],
                tint_b: tint[2],
                z: shattered.z,
            });
            build_fragment_vertices(fragment, &pose, &mut self.vertices);
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn vertex_count(&self) -> u32 {
        (self.vertices.len() / FRAGMENT_VERTEX_FLOATS) as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr()
    }

    /// Instance data as a flat float slice.
    pub fn instance_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}
