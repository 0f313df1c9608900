//! Interface rotation sets.
//!
//! The mask is the mechanism by which a lock is actually enforced: the
//! platform's window subsystem polls the currently supported set and only
//! performs physical rotations contained in it. Lock state is therefore
//! not advisory; it is projected into this set.

use bitflags::bitflags;

bitflags! {
    /// Set of interface rotations the window subsystem may render.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OrientationMask: u8 {
        /// Upright portrait.
        const PORTRAIT = 1 << 0;
        /// Inverted portrait.
        const PORTRAIT_UPSIDE_DOWN = 1 << 1;
        /// Landscape with the top of the screen to the left.
        const LANDSCAPE_LEFT = 1 << 2;
        /// Landscape with the top of the screen to the right.
        const LANDSCAPE_RIGHT = 1 << 3;
        /// Unrestricted rotation.
        const ALL = Self::PORTRAIT.bits()
            | Self::PORTRAIT_UPSIDE_DOWN.bits()
            | Self::LANDSCAPE_LEFT.bits()
            | Self::LANDSCAPE_RIGHT.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    #[test]
    fn all_contains_every_interface_orientation() {
        for orientation in [
            Orientation::Portrait,
            Orientation::PortraitUpsideDown,
            Orientation::LandscapeLeft,
            Orientation::LandscapeRight,
        ] {
            assert!(OrientationMask::ALL.contains(orientation.interface_mask()));
        }
    }

    #[test]
    fn single_orientation_masks_are_disjoint() {
        let masks = [
            Orientation::Portrait.interface_mask(),
            Orientation::PortraitUpsideDown.interface_mask(),
            Orientation::LandscapeLeft.interface_mask(),
            Orientation::LandscapeRight.interface_mask(),
        ];
        for (i, a) in masks.iter().enumerate() {
            for (j, b) in masks.iter().enumerate() {
                if i != j {
                    assert!((*a & *b).is_empty());
                }
            }
        }
    }
}
