//! Variant-specific hull profiles.
//!
//! Consolidates the per-variant capabilities the collision and motion
//! systems dispatch on, so nothing branches on level identity.

use glam::DVec2;
use radiant_core::components::Part;
use radiant_core::enums::BattleshipVariant;

/// Behavioral profile for a battleship variant.
pub struct HullProfile {
    /// Hit-test against the tweened render slot instead of the logical offset.
    pub hit_uses_visual_offset: bool,
    /// Non-core hits remove the part from the hull instead of marking it destroyed.
    pub removes_destroyed_parts: bool,
    /// Run the reflow after each non-core removal.
    pub reflows: bool,
    /// Parts tween toward their targets every frame.
    pub tweens: bool,
    /// A core hit also destroys (and marks) the core part itself.
    pub core_hit_marks_part: bool,
}

impl HullProfile {
    /// Grid offset a part is hit-tested at under this profile.
    pub fn hit_offset(&self, part: &Part) -> DVec2 {
        if self.hit_uses_visual_offset {
            part.visual_offset
        } else {
            part.offset
        }
    }
}

/// Get the hull profile for a given variant.
pub fn get_profile(variant: BattleshipVariant) -> HullProfile {
    match variant {
        BattleshipVariant::FixedShape => HullProfile {
            hit_uses_visual_offset: false,
            removes_destroyed_parts: false,
            reflows: false,
            tweens: false,
            core_hit_marks_part: true,
        },
        BattleshipVariant::Reflowing => HullProfile {
            hit_uses_visual_offset: true,
            removes_destroyed_parts: true,
            reflows: true,
            tweens: true,
            core_hit_marks_part: false,
        },
    }
}
