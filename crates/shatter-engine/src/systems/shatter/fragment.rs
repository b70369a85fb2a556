//! Triangular fragments cut from a sprite.

use glam::Vec2;

use super::motion::{FragmentPose, MotionProfile};
use crate::components::sprite::TextureRect;

/// Which half of a grid cell a fragment covers. Every cell is split along the
/// diagonal from bottom-left to top-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TriangleVariant {
    /// Bottom-left, top-left, top-right.
    UpperLeft = 0,
    /// Top-right, bottom-right, bottom-left.
    LowerRight = 1,
}

impl TriangleVariant {
    /// Both halves in emission order.
    pub const ALL: [TriangleVariant; 2] = [Self::UpperLeft, Self::LowerRight];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Corners of this half for a cell centered on the origin.
    pub fn mask_vertices(self, half: Vec2) -> [Vec2; 3] {
        match self {
            Self::UpperLeft => [
                Vec2::new(-half.x, -half.y),
                Vec2::new(-half.x, half.y),
                Vec2::new(half.x, half.y),
            ],
            Self::LowerRight => [
                Vec2::new(half.x, half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(-half.x, -half.y),
            ],
        }
    }

    /// Spin direction. The two halves of a cell counter-rotate.
    pub fn spin_sign(self) -> f32 {
        match self {
            Self::UpperLeft => -1.0,
            Self::LowerRight => 1.0,
        }
    }
}

/// One triangular piece of a shattered sprite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Grid cell (column, row). Row 0 is the bottom of the image.
    pub cell: (u32, u32),
    pub variant: TriangleVariant,
    /// Part of the source texture this piece shows.
    pub source_region: TextureRect,
    /// Cell center relative to the image center, before any displacement.
    pub rest_position: Vec2,
    /// Cell size in image units.
    pub size: Vec2,
    /// 1 next to the blast origin, 0 at the corner cells.
    pub blast_intensity: f32,
    /// Present once trajectories have been generated.
    pub motion: Option<MotionProfile>,
}

impl Fragment {
    /// Corners of the visible triangle, relative to the fragment center.
    pub fn mask_vertices(&self) -> [Vec2; 3] {
        self.variant.mask_vertices(self.size / 2.0)
    }

    /// Texture coordinate for a point relative to the fragment center.
    /// Texture space shares the image's bottom-left origin.
    pub fn uv_at(&self, local: Vec2) -> Vec2 {
        let t = local / self.size + Vec2::splat(0.5);
        let region = &self.source_region;
        Vec2::new(region.x + t.x * region.width, region.y + t.y * region.height)
    }

    /// Pose at `progress`, or the rest pose if no trajectory exists.
    pub fn pose(&self, progress: f32, floor_y: Option<f32>) -> FragmentPose {
        match &self.motion {
            Some(motion) => motion.evaluate_with_floor(progress, floor_y),
            None => FragmentPose::at_rest(self.rest_position),
        }
    }
}
