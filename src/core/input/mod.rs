//=========================================================================
// Input Tracking
//
// Page-wide record of which tracked inputs are currently held.
//
// Responsibilities:
// - Maintain the set of active (held) canonical input identifiers
// - Reject duplicate activations and spurious releases
// - Provide superset queries for gauge run conditions
// - Detect state changes for efficient logging
//
// The tracker is owned by the `PageOrchestrator` and mutated only on the
// logic thread, so no locking is required. It is deliberately agnostic
// to the originating device: keyboard keys and touch regions both arrive
// as `InputId` activate/deactivate signals.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bindings;
pub mod event;

//=== Standard Library Imports ============================================

use std::collections::HashSet;
use std::fmt;

//=== External Crates =====================================================

use log::debug;

//=== Internal Imports ====================================================

use event::InputId;

//=== InputTracker ========================================================

/// Tracks the set of currently held inputs.
///
/// Activation and deactivation are pure set-membership toggles; rapid
/// toggling is delivered in arrival order with no debouncing.
pub struct InputTracker {
    active: HashSet<InputId>,
    has_changed: bool,
}

impl InputTracker {
    //--- Construction -----------------------------------------------------

    /// Creates a tracker with no inputs held.
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
            has_changed: false,
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Marks an input as held.
    ///
    /// Returns `true` if the input was newly activated. Duplicate
    /// activations (OS key repeat, a second finger on the same region)
    /// leave the set untouched and return `false`.
    pub fn activate(&mut self, id: InputId) -> bool {
        let newly = self.active.insert(id);
        if newly {
            self.has_changed = true;
            debug!("Input activated, {} now held", self.active.len());
        }
        newly
    }

    /// Marks an input as released.
    ///
    /// Returns `true` if the input was actually held. Spurious releases
    /// (release without a matching activation) are ignored.
    pub fn deactivate(&mut self, id: &InputId) -> bool {
        let was_held = self.active.remove(id);
        if was_held {
            self.has_changed = true;
            debug!("Input released, {} still held", self.active.len());
        }
        was_held
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` while the input is held.
    pub fn is_active(&self, id: &InputId) -> bool {
        self.active.contains(id)
    }

    /// Returns `true` if every identifier in `required` is currently held.
    ///
    /// An empty requirement is trivially covered.
    pub fn covers<'a, I>(&self, required: I) -> bool
    where
        I: IntoIterator<Item = &'a InputId>,
    {
        required.into_iter().all(|id| self.active.contains(id))
    }

    /// Number of inputs currently held.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns whether the held set changed since the last reset.
    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    /// Clears the change flag after the caller has observed it.
    pub fn reset_changed(&mut self) {
        self.has_changed = false;
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=== Debug Trait ==========================================================
//
// Custom `Debug` that prints only the held identifiers.
//
impl fmt::Debug for InputTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut held: Vec<_> = self.active.iter().map(InputId::as_str).collect();
        held.sort_unstable();

        f.debug_struct("InputTracker")
            .field("held", &held)
            .field("has_changed", &self.has_changed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
