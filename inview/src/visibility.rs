/// The result handed to the engine callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    pub visible: bool,
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Visibility {
    pub fn any_quadrant(&self) -> bool {
        self.top_left || self.top_right || self.bottom_left || self.bottom_right
    }

    pub fn all_quadrants(&self) -> bool {
        self.top_left && self.top_right && self.bottom_left && self.bottom_right
    }
}

/// Edge positions of a box, in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Every predicate computed when comparing a subject's box against a context's visible box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection {
    pub top_visible: bool,
    pub bottom_visible: bool,
    pub left_visible: bool,
    pub right_visible: bool,
    /// The subject straddles the context vertically.
    pub overflow_y: bool,
    /// The subject straddles the context horizontally.
    pub overflow_x: bool,
}

impl Intersection {
    /// Compares `child` (already offset-adjusted) against the visible box `parent`.
    ///
    /// Edge ranges are half-open `[start, end)`, except the right edge which also accepts
    /// `parent.right`.
    pub fn compute(parent: Bounds, child: Bounds) -> Self {
        let in_y = |v: f64| v >= parent.top && v < parent.bottom;
        let in_x = |v: f64| v >= parent.left && v < parent.right;
        Self {
            top_visible: in_y(child.top),
            bottom_visible: in_y(child.bottom),
            left_visible: in_x(child.left),
            right_visible: child.right >= parent.left && child.right <= parent.right,
            overflow_y: child.top <= parent.top && child.bottom >= parent.bottom,
            overflow_x: child.left <= parent.left && child.right >= parent.right,
        }
    }

    /// Collapses the predicates into the callback result.
    ///
    /// Quadrant flags ignore overflow, so a subject larger than the context on both axes is
    /// `visible` with no quadrant set.
    pub fn visibility(&self) -> Visibility {
        let y = self.top_visible || self.bottom_visible || self.overflow_y;
        let x = self.left_visible || self.right_visible || self.overflow_x;
        Visibility {
            visible: y && x,
            top_left: self.top_visible && self.left_visible,
            top_right: self.top_visible && self.right_visible,
            bottom_left: self.bottom_visible && self.left_visible,
            bottom_right: self.bottom_visible && self.right_visible,
        }
    }
}
