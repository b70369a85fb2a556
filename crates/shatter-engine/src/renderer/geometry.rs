//! Masked triangle geometry for fragments.

use glam::Vec2;

use crate::systems::shatter::{Fragment, FragmentPose};

/// Floats per vertex: x, y, u, v, alpha.
pub const FRAGMENT_VERTEX_FLOATS: usize = 5;

/// Append the visible triangle of `fragment` at `pose` to `out` as a
/// triangle list (3 vertices, [`FRAGMENT_VERTEX_FLOATS`] floats each).
///
/// Corners are scaled, rotated and translated by the pose; texture
/// coordinates stay pinned to the untransformed corners.
pub fn build_fragment_vertices(fragment: &Fragment, pose: &FragmentPose, out: &mut Vec<f32>) {
    let rotation = Vec2::from_angle(pose.rotation);
    for corner in fragment.mask_vertices() {
        let uv = fragment.uv_at(corner);
        let p = pose.position + rotation.rotate(corner * pose.scale);
        out.extend_from_slice(&[p.x, p.y, uv.x, uv.y, pose.alpha]);
    }
}
