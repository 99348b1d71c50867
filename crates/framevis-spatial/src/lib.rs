//! Transform application for coordinate-frame plotting.
//!
//! A frame renderer only needs two things from a transform: apply it to a
//! point, and read its translation component. `FrameTransform2` and
//! `FrameTransform3` capture exactly that, implemented for the `glam`
//! rotation types (`DMat2`, `DMat3`, `DQuat`) and rigid types (`DAffine2`,
//! `DAffine3`). Rotation-only transforms report a zero translation.

use glam::{DAffine2, DAffine3, DMat2, DMat3, DQuat, DVec2, DVec3};

/// A planar transform mapping points from a local frame into the reference
/// frame.
pub trait FrameTransform2 {
    /// Apply the transform to a point.
    fn apply(&self, point: DVec2) -> DVec2;

    /// Translation component; zero for rotation-only transforms.
    fn translation(&self) -> DVec2;
}

/// A spatial transform mapping points from a local frame into the reference
/// frame.
pub trait FrameTransform3 {
    /// Apply the transform to a point.
    fn apply(&self, point: DVec3) -> DVec3;

    /// Translation component; zero for rotation-only transforms.
    fn translation(&self) -> DVec3;
}

impl FrameTransform2 for DMat2 {
    fn apply(&self, point: DVec2) -> DVec2 {
        *self * point
    }

    fn translation(&self) -> DVec2 {
        DVec2::ZERO
    }
}

impl FrameTransform2 for DAffine2 {
    fn apply(&self, point: DVec2) -> DVec2 {
        self.transform_point2(point)
    }

    fn translation(&self) -> DVec2 {
        self.translation
    }
}

impl FrameTransform3 for DMat3 {
    fn apply(&self, point: DVec3) -> DVec3 {
        *self * point
    }

    fn translation(&self) -> DVec3 {
        DVec3::ZERO
    }
}

impl FrameTransform3 for DQuat {
    fn apply(&self, point: DVec3) -> DVec3 {
        *self * point
    }

    fn translation(&self) -> DVec3 {
        DVec3::ZERO
    }
}

impl FrameTransform3 for DAffine3 {
    fn apply(&self, point: DVec3) -> DVec3 {
        self.transform_point3(point)
    }

    fn translation(&self) -> DVec3 {
        self.translation
    }
}
