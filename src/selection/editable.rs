//! The box currently under interactive edit

use crate::core::types::{BVec3, IVec3};
use super::selection_box::SelectionBox;

/// Whether an editable box follows the cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoxPhase {
    /// Free edges track the cursor
    Dynamic,
    /// Corners are fixed
    Static,
}

/// A selection box that can be dragged out, locked and unlocked again.
///
/// `point1` is the anchor. `point2` is the moving corner; only its axes
/// flagged in `free_axes` follow the cursor while the box is dynamic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditableBox {
    point1: IVec3,
    point2: IVec3,
    free_axes: BVec3,
    phase: BoxPhase,
}

impl EditableBox {
    /// New dynamic box anchored at `position`, both corners on it
    pub fn from_cursor(position: IVec3) -> Self {
        Self {
            point1: position,
            point2: position,
            free_axes: BVec3::TRUE,
            phase: BoxPhase::Dynamic,
        }
    }

    /// Static copy of a committed box
    pub fn locked(selection: &SelectionBox) -> Self {
        Self {
            point1: selection.point1,
            point2: selection.point2,
            free_axes: BVec3::FALSE,
            phase: BoxPhase::Static,
        }
    }

    pub fn point1(&self) -> IVec3 {
        self.point1
    }

    pub fn point2(&self) -> IVec3 {
        self.point2
    }

    pub fn is_static(&self) -> bool {
        self.phase == BoxPhase::Static
    }

    pub fn is_dynamic(&self) -> bool {
        self.phase == BoxPhase::Dynamic
    }

    /// Axes of `point2` that follow the cursor while dynamic
    pub fn free_axes(&self) -> BVec3 {
        self.free_axes
    }

    /// Fix every edge in place
    pub fn lock(&mut self) {
        self.phase = BoxPhase::Static;
        self.free_axes = BVec3::FALSE;
    }

    /// Release the edges the cursor is resting on.
    ///
    /// Along each axis where `position` lies on one of the box's faces, that
    /// face becomes the moving one (swapping the corners on that axis if the
    /// anchor was grabbed). If the cursor touches no face the whole of
    /// `point2` is released.
    pub fn unlock(&mut self, position: IVec3) {
        let grabbed_anchor = position.cmpeq(self.point1) & !position.cmpeq(self.point2);
        let (point1, point2) = (
            IVec3::select(grabbed_anchor, self.point2, self.point1),
            IVec3::select(grabbed_anchor, self.point1, self.point2),
        );
        self.point1 = point1;
        self.point2 = point2;

        let on_face = position.cmpeq(self.point2);
        self.free_axes = if on_face.any() { on_face } else { BVec3::TRUE };
        self.phase = BoxPhase::Dynamic;
        self.set_active_point(position);
    }

    /// Move the free edges to `position`. No effect while static.
    pub fn set_active_point(&mut self, position: IVec3) {
        if self.is_dynamic() {
            self.point2 = IVec3::select(self.free_axes, position, self.point2);
        }
    }

    /// Snapshot of the current corners
    pub fn selection_box(&self) -> SelectionBox {
        SelectionBox::new(self.point1, self.point2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cursor_is_dynamic() {
        let b = EditableBox::from_cursor(IVec3::new(1, 2, 3));
        assert!(b.is_dynamic());
        assert_eq!(b.point1(), IVec3::new(1, 2, 3));
        assert_eq!(b.point2(), IVec3::new(1, 2, 3));
    }

    #[test]
    fn test_drag_moves_only_point2() {
        let mut b = EditableBox::from_cursor(IVec3::ZERO);
        b.set_active_point(IVec3::new(4, 5, 6));
        assert_eq!(b.point1(), IVec3::ZERO);
        assert_eq!(b.point2(), IVec3::new(4, 5, 6));
    }

    #[test]
    fn test_static_ignores_cursor() {
        let mut b = EditableBox::from_cursor(IVec3::ZERO);
        b.set_active_point(IVec3::ONE);
        b.lock();
        b.set_active_point(IVec3::splat(9));
        assert!(b.is_static());
        assert_eq!(b.point2(), IVec3::ONE);
    }

    #[test]
    fn test_unlock_on_corner_releases_all_axes() {
        let mut b = EditableBox::locked(&SelectionBox::new(IVec3::ZERO, IVec3::splat(4)));
        b.unlock(IVec3::splat(4));
        assert!(b.is_dynamic());
        assert_eq!(b.free_axes(), BVec3::TRUE);

        b.set_active_point(IVec3::new(6, 7, 8));
        assert_eq!(b.selection_box(), SelectionBox::new(IVec3::ZERO, IVec3::new(6, 7, 8)));
    }

    #[test]
    fn test_unlock_on_face_releases_one_axis() {
        let mut b = EditableBox::locked(&SelectionBox::new(IVec3::ZERO, IVec3::splat(4)));
        // Cursor on the +x face
        b.unlock(IVec3::new(4, 2, 2));
        assert_eq!(b.free_axes(), BVec3::new(true, false, false));

        b.set_active_point(IVec3::new(10, 1, 1));
        assert_eq!(b.point1(), IVec3::ZERO);
        assert_eq!(b.point2(), IVec3::new(10, 4, 4));
    }

    #[test]
    fn test_unlock_on_anchor_face_swaps_axis() {
        let mut b = EditableBox::locked(&SelectionBox::new(IVec3::ZERO, IVec3::splat(4)));
        // Cursor on the -x face
        b.unlock(IVec3::new(0, 2, 2));
        assert_eq!(b.point1(), IVec3::new(4, 0, 0));
        assert_eq!(b.point2(), IVec3::new(0, 4, 4));

        b.set_active_point(IVec3::new(-3, 0, 0));
        let sel = b.selection_box();
        assert_eq!(sel.min(), IVec3::new(-3, 0, 0));
        assert_eq!(sel.max(), IVec3::splat(4));
    }

    #[test]
    fn test_unlock_off_face_moves_point2_to_cursor() {
        let mut b = EditableBox::locked(&SelectionBox::new(IVec3::ZERO, IVec3::splat(4)));
        b.unlock(IVec3::new(9, 9, 9));
        assert!(b.is_dynamic());
        assert_eq!(b.point2(), IVec3::splat(9));
    }
}
