//! Autonomous walking: edge-bounded horizontal motion over the union of
//! all monitor rectangles.

use glam::IVec2;

/// Horizontal displacement per walking tick, in physical pixels.
pub const MOVE_SPEED: i32 = 3;

/// The union of every monitor's bounding rectangle, fixed at startup.
///
/// Monitor hot-plug is not tracked; the walkable region is whatever was
/// attached when the pet started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    min: IVec2,
    max: IVec2,
}

impl ScreenBounds {
    /// Bounds of a single rectangle given its origin and size.
    #[must_use]
    pub fn new(origin: IVec2, size: IVec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    /// Union over monitor rectangles given as `(origin, size)` pairs.
    ///
    /// Returns `None` when the iterator is empty (no monitors reported).
    pub fn union_of(
        rects: impl IntoIterator<Item = (IVec2, IVec2)>,
    ) -> Option<Self> {
        rects
            .into_iter()
            .map(|(origin, size)| Self::new(origin, size))
            .reduce(|a, b| Self {
                min: a.min.min(b.min),
                max: a.max.max(b.max),
            })
    }

    /// Leftmost walkable x coordinate.
    #[must_use]
    pub fn left(&self) -> i32 {
        self.min.x
    }

    /// One past the rightmost walkable x coordinate.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.max.x
    }
}

/// Advance one walking tick.
///
/// Clamp-then-move: a window at or past an edge is first clamped onto it
/// and turned around, then the displacement is applied — so the step after
/// a bounce always walks away from the edge. `y` is never altered.
///
/// Pure function of its inputs; the caller owns the direction flag and
/// writes the returned value back.
#[must_use]
pub fn step_walk(
    position: IVec2,
    width: i32,
    bounds: &ScreenBounds,
    walking_right: bool,
) -> (IVec2, bool) {
    let mut x = position.x;
    let mut heading_right = walking_right;

    if x <= bounds.left() {
        x = bounds.left();
        heading_right = true;
    } else if x + width >= bounds.right() {
        x = bounds.right() - width;
        heading_right = false;
    }

    if heading_right {
        x += MOVE_SPEED;
    } else {
        x -= MOVE_SPEED;
    }

    (IVec2::new(x, position.y), heading_right)
}
