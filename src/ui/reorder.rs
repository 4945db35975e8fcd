//! Drag placement for reorderable cards.
//!
//! The placement math is pure: given the pointer's vertical position and the
//! vertical midpoints of the non-dragged sibling cards (in display order),
//! pick the sibling the dragged card should be inserted before. The reorder
//! is presentation-only; the underlying stat collection keeps its order.

/// Insertion point for a dragged card.
///
/// For each sibling midpoint, the offset `pointer_y - midpoint` is negative
/// when the pointer sits above that sibling's midpoint. Among siblings with a
/// negative offset, the one closest to the pointer wins; equal offsets keep
/// the first sibling in display order. `None` means the pointer is below
/// every midpoint and the card belongs at the end.
pub fn insertion_index(pointer_y: f32, midpoints: &[f32]) -> Option<usize> {
    let mut closest: Option<(f32, usize)> = None;

    for (i, midpoint) in midpoints.iter().enumerate() {
        let offset = pointer_y - midpoint;
        if offset < 0.0 {
            match closest {
                Some((best, _)) if offset <= best => {}
                _ => closest = Some((offset, i)),
            }
        }
    }

    closest.map(|(_, i)| i)
}

/// Move `dragged` within `order` according to the pointer position.
///
/// `midpoints` must correspond one-to-one with `order` minus the dragged
/// entry, in display order. Ids absent from `order` are ignored.
pub fn apply_drag<T: PartialEq + Copy>(
    order: &mut Vec<T>,
    dragged: T,
    pointer_y: f32,
    midpoints: &[f32],
) {
    let Some(from) = order.iter().position(|id| *id == dragged) else {
        return;
    };
    order.remove(from);

    match insertion_index(pointer_y, midpoints) {
        Some(i) if i <= order.len() => order.insert(i, dragged),
        _ => order.push(dragged),
    }
}

/// Transient reference to the card being dragged, if any.
///
/// Exists only for the duration of a drag gesture; a drag that starts on a
/// non-card region never acquires one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState<T> {
    dragged: Option<T>,
}

impl<T: PartialEq + Copy> DragState<T> {
    /// No active drag.
    pub fn new() -> Self {
        Self { dragged: None }
    }

    /// Begin dragging a card.
    pub fn start(&mut self, id: T) {
        self.dragged = Some(id);
    }

    /// Finish the gesture. The card stays wherever the last drag-over put it.
    pub fn clear(&mut self) {
        self.dragged = None;
    }

    /// The card currently being dragged.
    pub fn dragged(&self) -> Option<T> {
        self.dragged
    }

    /// Whether this card is the one being dragged.
    pub fn is_dragging(&self, id: T) -> bool {
        self.dragged == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_above_first_midpoint() {
        assert_eq!(insertion_index(10.0, &[50.0, 150.0, 250.0]), Some(0));
    }

    #[test]
    fn test_pointer_between_midpoints() {
        // Pointer at 120 sits above the 150 midpoint: insert before it.
        assert_eq!(insertion_index(120.0, &[50.0, 150.0, 250.0]), Some(1));
    }

    #[test]
    fn test_pointer_below_all_midpoints_appends() {
        assert_eq!(insertion_index(260.0, &[50.0, 150.0, 250.0]), None);
    }

    #[test]
    fn test_tie_keeps_first_in_order() {
        // Two siblings share a midpoint; the first encountered wins.
        assert_eq!(insertion_index(100.0, &[150.0, 150.0]), Some(0));
    }

    #[test]
    fn test_empty_siblings() {
        assert_eq!(insertion_index(100.0, &[]), None);
    }

    #[test]
    fn test_apply_drag_moves_card_before_target() {
        let mut order = vec!['a', 'b', 'c'];
        // Dragging 'c' up between 'a' and 'b' (midpoints are for a, b).
        apply_drag(&mut order, 'c', 120.0, &[50.0, 150.0]);
        assert_eq!(order, vec!['a', 'c', 'b']);
    }

    #[test]
    fn test_apply_drag_appends_below_all() {
        let mut order = vec!['a', 'b', 'c'];
        apply_drag(&mut order, 'a', 400.0, &[150.0, 250.0]);
        assert_eq!(order, vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_apply_drag_unknown_id_is_ignored() {
        let mut order = vec!['a', 'b'];
        apply_drag(&mut order, 'z', 100.0, &[50.0, 150.0]);
        assert_eq!(order, vec!['a', 'b']);
    }

    #[test]
    fn test_drag_that_crosses_nothing_keeps_order() {
        let mut order = vec!['a', 'b', 'c'];
        // Pointer still above 'b' and 'c' midpoints: 'a' reinserts at front.
        apply_drag(&mut order, 'a', 40.0, &[150.0, 250.0]);
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_drag_state_lifecycle() {
        let mut drag: DragState<char> = DragState::new();
        assert_eq!(drag.dragged(), None);

        drag.start('b');
        assert!(drag.is_dragging('b'));
        assert!(!drag.is_dragging('a'));

        drag.clear();
        assert_eq!(drag.dragged(), None);
    }
}
