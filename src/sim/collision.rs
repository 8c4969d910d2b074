//! Collision predicates for axis-aligned boxes
//!
//! One predicate decides every rectangle interaction in the game (walls,
//! hazards, target), so the edge rule only has to be picked once.

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::rect::Rect;

/// How boxes that only share an edge are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRule {
    /// Half-open boxes: touching edges do not collide
    #[default]
    Exclusive,
    /// Closed boxes: touching edges collide
    Inclusive,
}

impl EdgeRule {
    /// True iff the two boxes overlap on both axes under this rule
    #[inline]
    pub fn intersects(self, a: &Rect, b: &Rect) -> bool {
        match self {
            EdgeRule::Exclusive => !(a.right() <= b.left()
                || a.left() >= b.right()
                || a.bottom() <= b.top()
                || a.top() >= b.bottom()),
            EdgeRule::Inclusive => !(a.right() < b.left()
                || a.left() > b.right()
                || a.bottom() < b.top()
                || a.top() > b.bottom()),
        }
    }
}

/// Clamp `value` into `[min, max]`; a collapsed range resolves to `min`
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Classification of a candidate character box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Movement into this box must be rejected
    pub solid: bool,
    /// The box overlaps at least one hazard
    pub danger: bool,
}

/// Classify a candidate box against walls, hazards and the arena boundary
///
/// Hazard overlap always sets `danger`; it only makes the box `solid` when
/// danger is not being ignored (i.e. the character is not recovering).
pub fn detect_contact<I>(
    candidate: &Rect,
    arena: &Arena,
    hazards: I,
    rule: EdgeRule,
    ignore_danger: bool,
) -> Contact
where
    I: IntoIterator<Item = Rect>,
{
    let mut contact = Contact::default();

    for hazard in hazards {
        if rule.intersects(candidate, &hazard) {
            contact.danger = true;
            if !ignore_danger {
                contact.solid = true;
            }
        }
    }

    if arena.walls().iter().any(|wall| rule.intersects(candidate, wall)) {
        contact.solid = true;
    }

    if !arena.contains(candidate) {
        contact.solid = true;
    }

    contact
}
