//=========================================================================
// Input Buffer
//
// Collects and normalizes mapped input events (keyboard, pointer, touch)
// into two categories: discrete and continuous. Acts as a transient
// event aggregator between the Platform and the page orchestrator.
//
// Responsibilities:
// - Store incoming platform events per frame
// - Deduplicate repeated discrete inputs (e.g., KeyDown)
// - Coalesce continuous inputs (e.g., PointerMoved, one slot per stream)
// - Provide unified access to collected events via `drain()`
//
// Notes:
// The InputBuffer exists only for the current frame and is reset after
// being drained. Coalescing relies on `UiEvent` equality, which compares
// movement events by stream (pointer, or finger id) and ignores their
// coordinates, so a `HashSet` keeps exactly the latest position of each
// stream.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::event::UiEvent;

//=== InputBuffer Struct ==================================================
//
// Represents the transient event store for one frame of input.
//
// Internally maintains:
// - `discrete`: unique, one-shot inputs (e.g., KeyDown, TouchBegan)
// - `continuous`: last-known state of movement streams
//
pub struct InputBuffer {
    discrete: Vec<UiEvent>,
    continuous: HashSet<UiEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Creates a new input buffer with preallocated capacity to minimize
    // reallocations under typical interaction rates.
    //
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Routes an event to the matching store. Movement events replace any
    // previous event of their stream; other events append, with duplicate
    // consecutive events ignored to prevent flooding.
    //
    pub fn push(&mut self, event: UiEvent) {
        match event {
            UiEvent::PointerMoved { .. } | UiEvent::TouchMoved { .. } => {
                self.continuous.replace(event);
            }
            _ => {
                if self.discrete.last() != Some(&event) {
                    self.discrete.push(event);
                }
            }
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns all collected events for this frame and clears the buffer,
    // or `None` when nothing was buffered so empty frames cost no send.
    //
    pub fn drain(&mut self) -> Option<(Vec<UiEvent>, Vec<UiEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;

    fn key_down(code: KeyCode) -> UiEvent {
        UiEvent::KeyDown(code)
    }

    fn pointer_move(x: f32, y: f32) -> UiEvent {
        UiEvent::PointerMoved { x, y }
    }

    #[test]
    fn test_discrete_deduplication() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(key_down(KeyCode::KeyB));
        assert_eq!(buffer.discrete.len(), 2, "Duplicates should be ignored");
    }

    #[test]
    fn test_continuous_overwrite() {
        let mut buffer = InputBuffer::new();

        buffer.push(pointer_move(10.0, 10.0));
        buffer.push(pointer_move(20.0, 30.0));

        assert_eq!(
            buffer.continuous.len(),
            1,
            "Continuous buffer should keep only the latest event"
        );

        let event = buffer.continuous.iter().next().unwrap();
        if let UiEvent::PointerMoved { x, y } = event {
            assert_eq!((*x, *y), (20.0, 30.0));
        } else {
            panic!("Expected PointerMoved event, found {:?}", event);
        }
    }

    #[test]
    fn test_touch_streams_coalesce_per_finger() {
        let mut buffer = InputBuffer::new();

        buffer.push(UiEvent::TouchMoved { id: 1, x: 5.0, y: 5.0 });
        buffer.push(UiEvent::TouchMoved { id: 1, x: 9.0, y: 9.0 });
        buffer.push(UiEvent::TouchMoved { id: 2, x: 1.0, y: 1.0 });

        assert_eq!(
            buffer.continuous.len(),
            2,
            "Each finger keeps its own latest position"
        );
    }

    #[test]
    fn test_touch_begin_end_are_discrete() {
        let mut buffer = InputBuffer::new();
        buffer.push(UiEvent::TouchBegan { id: 1, x: 0.0, y: 0.0 });
        buffer.push(UiEvent::TouchEnded { id: 1, x: 0.0, y: 0.0 });
        assert_eq!(buffer.discrete.len(), 2);
        assert!(buffer.continuous.is_empty());
    }

    #[test]
    fn test_drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push(key_down(KeyCode::KeyA));
        buffer.push(pointer_move(5.0, 5.0));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 1);
        assert_eq!(continuous.len(), 1);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_drain_empty_is_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }
}
