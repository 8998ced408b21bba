//=========================================================================
// Switch Panel
//=========================================================================
//
// Multi-switch light puzzle: a row of toggle switches and a lamp that
// lights when every switch is on. The solve fires exactly once; toggling
// afterwards still updates the view but never re-fires it.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;

//=== Internal Imports ====================================================

use crate::core::geometry::Rect;
use crate::core::view::{ViewCommand, ViewSink};

//=== SwitchPanel =========================================================

/// The light puzzle's switch row.
///
/// Each switch is anchored to its own page region; a panel constructed
/// with no regions is inactive. The optional submission payload is
/// returned from the solving toggle so the orchestrator can finalize the
/// answer.
pub struct SwitchPanel {
    regions: Vec<Rect>,
    states: Vec<bool>,
    solved: bool,
    submission: Option<(String, String)>,
}

impl SwitchPanel {
    //--- Construction -----------------------------------------------------

    /// Creates the panel from per-switch anchors, all switches off.
    pub fn new(regions: Vec<Rect>) -> Self {
        let states = vec![false; regions.len()];
        Self {
            regions,
            states,
            solved: false,
            submission: None,
        }
    }

    /// Creates an inactive panel (no puzzle on this page).
    pub fn inactive() -> Self {
        Self::new(Vec::new())
    }

    /// Configures the answer submitted when the puzzle is solved.
    pub fn with_submission(mut self, field: &str, value: &str) -> Self {
        self.submission = Some((field.to_string(), value.to_string()));
        self
    }

    /// Returns `true` if the panel has any switches to operate on.
    pub fn is_active(&self) -> bool {
        !self.regions.is_empty()
    }

    //--- Queries ----------------------------------------------------------

    /// Number of switches currently on.
    pub fn lit_count(&self) -> usize {
        self.states.iter().filter(|&&on| on).count()
    }

    /// Returns `true` once the puzzle has been solved.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Index of the switch under the point, if any.
    pub fn switch_at(&self, x: f32, y: f32) -> Option<usize> {
        self.regions.iter().position(|rect| rect.contains(x, y))
    }

    //--- Input ------------------------------------------------------------

    /// Flips one switch and pushes the resulting visual state.
    ///
    /// Returns the submission payload if this toggle solved the puzzle.
    /// Out-of-range indices are ignored.
    pub fn toggle(
        &mut self,
        index: usize,
        view: &mut dyn ViewSink,
    ) -> Option<(String, String)> {
        let Some(state) = self.states.get_mut(index) else {
            return None;
        };

        *state = !*state;
        let on = *state;
        view.apply(ViewCommand::SetSwitch { index, on });

        let all_on = self.lit_count() == self.states.len();
        view.apply(ViewCommand::SetLampLit(all_on));

        if all_on && !self.solved {
            self.solved = true;
            info!("Switch puzzle solved ({} switches)", self.states.len());
            return self.submission.clone();
        }
        None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
