//! Boss reflow and part tween.
//!
//! Reflow rewrites only `target_offset`. `tween` then walks each part's
//! `visual_offset` toward its target and commits `offset` on arrival.

use glam::DVec2;
use radiant_core::components::Part;
use radiant_core::constants::*;
use rand::Rng;

/// What a reflow did to the surviving parts of the hit row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// Left wing collapsed toward the spine.
    LeftCollapsed { moved: usize },
    /// Right wing collapsed toward the spine.
    RightCollapsed { moved: usize },
    /// The larger (or coin-flipped) side slid one column into the spine.
    MiddleFilled { from_left: bool, moved: usize },
    /// Nothing in the row could move.
    Unchanged,
}

/// Grid column of a target offset, if it is a whole column.
fn column_of(x: f64) -> Option<i32> {
    let rounded = x.round();
    if (x - rounded).abs() < BOSS_ROW_TOLERANCE {
        Some(rounded as i32)
    } else {
        None
    }
}

fn in_left_wing(col: i32) -> bool {
    (0..BOSS_LEFT_WING_END).contains(&col)
}

fn in_right_wing(col: i32) -> bool {
    (BOSS_RIGHT_WING_START..BOSS_RIGHT_WING_END).contains(&col)
}

/// Recompute target slots after the part at `destroyed` (its target offset)
/// was removed from `parts`.
pub fn reflow<R: Rng>(parts: &mut [Part], destroyed: DVec2, rng: &mut R) -> ReflowOutcome {
    let row: Vec<usize> = parts
        .iter()
        .enumerate()
        .filter(|(_, p)| (p.target_offset.y - destroyed.y).abs() < BOSS_ROW_TOLERANCE)
        .map(|(i, _)| i)
        .collect();

    let Some(destroyed_col) = column_of(destroyed.x) else {
        return ReflowOutcome::Unchanged;
    };

    if in_left_wing(destroyed_col) {
        let mut wing: Vec<usize> = row
            .iter()
            .copied()
            .filter(|&i| column_of(parts[i].target_offset.x).is_some_and(in_left_wing))
            .collect();
        // Centre-outward
        wing.sort_by(|&a, &b| {
            parts[b]
                .target_offset
                .x
                .total_cmp(&parts[a].target_offset.x)
        });
        for (slot, &i) in wing.iter().enumerate() {
            let col = BOSS_MIDDLE_COLUMN - 1 - slot as i32;
            parts[i].target_offset = DVec2::new(col as f64, destroyed.y);
        }
        return ReflowOutcome::LeftCollapsed { moved: wing.len() };
    }

    if in_right_wing(destroyed_col) {
        let mut wing: Vec<usize> = row
            .iter()
            .copied()
            .filter(|&i| column_of(parts[i].target_offset.x).is_some_and(in_right_wing))
            .collect();
        wing.sort_by(|&a, &b| {
            parts[a]
                .target_offset
                .x
                .total_cmp(&parts[b].target_offset.x)
        });
        for (slot, &i) in wing.iter().enumerate() {
            let col = BOSS_MIDDLE_COLUMN + 1 + slot as i32;
            parts[i].target_offset = DVec2::new(col as f64, destroyed.y);
        }
        return ReflowOutcome::RightCollapsed { moved: wing.len() };
    }

    if destroyed_col == BOSS_MIDDLE_COLUMN {
        let middle = BOSS_MIDDLE_COLUMN as f64;
        let left: Vec<usize> = row
            .iter()
            .copied()
            .filter(|&i| parts[i].target_offset.x < middle)
            .collect();
        let right: Vec<usize> = row
            .iter()
            .copied()
            .filter(|&i| parts[i].target_offset.x > middle)
            .collect();
        if left.is_empty() && right.is_empty() {
            return ReflowOutcome::Unchanged;
        }

        let from_left = if left.len() == right.len() {
            rng.gen_bool(0.5)
        } else {
            left.len() > right.len()
        };
        let (group, shift) = if from_left {
            (&left, 1.0)
        } else {
            (&right, -1.0)
        };
        for &i in group {
            parts[i].target_offset.x += shift;
        }
        return ReflowOutcome::MiddleFilled {
            from_left,
            moved: group.len(),
        };
    }

    ReflowOutcome::Unchanged
}

/// Advance every part's visual offset one step toward its target. Returns
/// true while any part is still in motion.
pub fn tween(parts: &mut [Part], speed: f64) -> bool {
    let mut moving_any = false;
    for part in parts.iter_mut() {
        let delta = part.target_offset - part.visual_offset;
        if delta.x.abs() <= BOSS_SETTLE_EPSILON && delta.y.abs() <= BOSS_SETTLE_EPSILON {
            continue;
        }
        let distance = delta.length();
        if distance <= speed {
            part.visual_offset = part.target_offset;
            part.offset = part.target_offset;
        } else {
            part.visual_offset += delta / distance * speed;
            moving_any = true;
        }
    }
    moving_any
}
