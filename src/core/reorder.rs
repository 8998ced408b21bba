//=========================================================================
// Reorder Surface
//=========================================================================
//
// Drag-and-drop reordering of answer items.
//
// Architecture:
//   pointer y → stacked-height layout → nearest-below candidate → reinsert
//
// The insertion point is recomputed from scratch on every pointer move,
// never tracked incrementally. This keeps the algorithm stateless with
// respect to prior pointer positions and robust to fast movement that
// skips over items.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Imports ====================================================

use crate::core::geometry::Rect;

//=== ReorderItem =========================================================

/// One draggable answer item: an opaque value plus its rendered height.
///
/// Ordering is the item's position in the surface's sequence; there is no
/// identity beyond value and position.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderItem {
    value: String,
    height: f32,
}

impl ReorderItem {
    /// Creates an item from its submitted value and rendered height.
    pub fn new(value: impl Into<String>, height: f32) -> Self {
        Self {
            value: value.into(),
            height,
        }
    }

    /// The value this item contributes to the serialized answer.
    pub fn value(&self) -> &str {
        &self.value
    }
}

//=== ReorderSurface ======================================================

/// Manages a mutable ordered sequence of draggable items.
///
/// Item positions are derived from the anchor's top edge and the stacked
/// heights of the items in current order; the dragged item keeps
/// occupying its slot while the drag is live.
///
/// Constructed without an anchor (the page has no sortable list), the
/// surface is inactive: every operation is a no-op and `serialize()`
/// yields an empty string.
pub struct ReorderSurface {
    anchor: Option<Rect>,
    items: Vec<ReorderItem>,
    dragging: Option<usize>,
}

impl ReorderSurface {
    //--- Construction -----------------------------------------------------

    /// Creates a surface from its optional page anchor and the authored
    /// item order.
    pub fn new(anchor: Option<Rect>, items: Vec<ReorderItem>) -> Self {
        Self {
            anchor,
            items,
            dragging: None,
        }
    }

    /// Creates an inactive surface (no sortable list on this page).
    pub fn inactive() -> Self {
        Self::new(None, Vec::new())
    }

    /// Returns `true` if the surface has an anchor to operate on.
    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns `true` while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    //--- Drag Gesture -----------------------------------------------------

    /// Marks the item with `value` as the dragged element.
    ///
    /// Silent no-op if the surface is inactive, a drag is already in
    /// progress, or the value is unknown. In practice only one drag can
    /// exist per pointer.
    pub fn start_drag(&mut self, value: &str) {
        if !self.is_active() || self.dragging.is_some() {
            return;
        }

        if let Some(index) = self.items.iter().position(|item| item.value == value) {
            debug!("Drag started on {:?} at position {}", value, index);
            self.dragging = Some(index);
        }
    }

    /// Returns the value of the item under the vertical coordinate, if any.
    ///
    /// Used to begin pointer drags: the platform has no notion of which
    /// item a press landed on, so the surface resolves it from its own
    /// layout.
    pub fn item_at(&self, y: f32) -> Option<&str> {
        let anchor = self.anchor?;
        if y < anchor.y {
            return None;
        }

        let mut top = anchor.y;
        for item in &self.items {
            if y < top + item.height {
                return Some(&item.value);
            }
            top += item.height;
        }
        None
    }

    /// Like [`item_at`](Self::item_at), but also requires the point to be
    /// horizontally inside the list.
    pub fn hit_item(&self, x: f32, y: f32) -> Option<&str> {
        let anchor = self.anchor?;
        if x < anchor.x || x >= anchor.x + anchor.w {
            return None;
        }
        self.item_at(y)
    }

    /// Repositions the dragged item according to the pointer's vertical
    /// coordinate.
    ///
    /// Among all items except the dragged one, with centers derived from
    /// the current stacking order, the candidate with the greatest
    /// `offset = pointer_y - center` that is still strictly negative (the
    /// first item whose center lies below the pointer) becomes the
    /// insertion point; the dragged item is reinserted immediately before
    /// it, or appended when no candidate qualifies. The strict comparison
    /// means the first item encountered in sequence order wins when two
    /// centers coincide (zero-height items).
    ///
    /// Returns `true` if the order changed.
    pub fn drag_over(&mut self, pointer_y: f32) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        let Some(drag_index) = self.dragging else {
            return false;
        };

        //--- Find the nearest candidate whose center lies below ----------
        let mut best_offset = f32::NEG_INFINITY;
        let mut insert_before: Option<usize> = None;

        let mut top = anchor.y;
        for (index, item) in self.items.iter().enumerate() {
            let center = top + item.height / 2.0;
            top += item.height;

            if index == drag_index {
                continue;
            }

            let offset = pointer_y - center;
            if offset < 0.0 && offset > best_offset {
                best_offset = offset;
                insert_before = Some(index);
            }
        }

        //--- Reinsert the dragged item -----------------------------------
        let target = match insert_before {
            // Removing the dragged item shifts later indices down by one.
            Some(index) if index > drag_index => index - 1,
            Some(index) => index,
            None => self.items.len() - 1,
        };

        if target == drag_index {
            return false;
        }

        let dragged = self.items.remove(drag_index);
        self.items.insert(target, dragged);
        self.dragging = Some(target);

        debug!("Dragged item moved to position {}", target);
        true
    }

    /// Clears the dragged marker. The order at this point is final until
    /// another drag starts.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    //--- Serialization ----------------------------------------------------

    /// Returns the item values in current order, comma-separated.
    ///
    /// An empty (or inactive) surface serializes to an empty string.
    pub fn serialize(&self) -> String {
        self.items
            .iter()
            .map(|item| item.value.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Item values in current order, for view output.
    pub fn order(&self) -> Vec<String> {
        self.items.iter().map(|item| item.value.clone()).collect()
    }

    /// Value of the item currently being dragged, if any.
    pub fn dragging_value(&self) -> Option<&str> {
        self.dragging.map(|index| self.items[index].value.as_str())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
