//=========================================================================
// Hold-to-Charge Gauge
//=========================================================================
//
// Bounded progress accumulated while the required inputs are held.
//
// Architecture:
//   activate/deactivate → active set → run condition → ticked level
//
// One implementation covers both variants: a single-input gauge is a
// required set of one, the multi-tap gauge a required set of several.
// Input sources only toggle set membership; the run condition is
// re-evaluated after every toggle, so a second input's release can never
// cancel a gauge only the first input controls.
//
// Phase machine:
//   Idle ──covered──► Charging ──level=max──► Settling ──delay──► Completed
//     ▲                   │
//     └──lost coverage────┘  (level reset to 0, no partial credit)
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Imports ====================================================

use super::input::event::InputId;

//=== GaugePhase ==========================================================

/// Lifecycle phase of a charge gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugePhase {
    /// Level is zero, required inputs not fully held.
    Idle,

    /// Required inputs held, level increasing each tick.
    Charging,

    /// Level reached the maximum; completion fires after the settle
    /// delay. Releases no longer cancel.
    Settling,

    /// Terminal. Re-arming requires recreating the gauge.
    Completed,
}

//=== GaugeSignal =========================================================

/// One-shot signal emitted by [`ChargeGauge::tick`].
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeSignal {
    /// The gauge completed; carries the configured submission payload.
    Completed {
        field: Option<(String, String)>,
    },
}

//=== GaugeBuilder ========================================================

/// Builder for configuring a [`ChargeGauge`].
///
/// # Default Values
///
/// - **step**: 1.0 level units per tick
/// - **max**: 100.0
/// - **settle ticks**: 30 (≈0.5 s at 60 TPS)
///
/// # Examples
///
/// ```
/// use riddle_runtime::core::gauge::ChargeGauge;
///
/// let gauge = ChargeGauge::builder("hack")
///     .require("c")
///     .require("enter")
///     .step(0.4)
///     .submits("hackerAnswer", "charged")
///     .build();
/// ```
pub struct GaugeBuilder {
    label: String,
    required: HashSet<InputId>,
    step: f32,
    max: f32,
    settle_ticks: u32,
    submission: Option<(String, String)>,
}

impl GaugeBuilder {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            required: HashSet::new(),
            step: 1.0,
            max: 100.0,
            settle_ticks: 30,
            submission: None,
        }
    }

    /// Adds a required input. Call once per input; the gauge charges only
    /// while every required input is held.
    pub fn require(mut self, id: &str) -> Self {
        self.required.insert(InputId::new(id));
        self
    }

    /// Sets the level increment applied per tick.
    ///
    /// # Panics
    ///
    /// Panics if `step <= 0.0`.
    pub fn step(mut self, step: f32) -> Self {
        assert!(step > 0.0, "Gauge step must be positive, got {}", step);
        self.step = step;
        self
    }

    /// Sets the completion bound.
    ///
    /// # Panics
    ///
    /// Panics if `max <= 0.0`.
    pub fn max(mut self, max: f32) -> Self {
        assert!(max > 0.0, "Gauge max must be positive, got {}", max);
        self.max = max;
        self
    }

    /// Sets the settle delay, in ticks, between reaching the bound and
    /// firing completion.
    pub fn settle_ticks(mut self, ticks: u32) -> Self {
        self.settle_ticks = ticks;
        self
    }

    /// Configures the submission payload carried by the completion signal.
    pub fn submits(mut self, field: &str, value: &str) -> Self {
        self.submission = Some((field.to_string(), value.to_string()));
        self
    }

    /// Builds the gauge, idle at level zero.
    ///
    /// # Panics
    ///
    /// Panics if no required input was configured.
    pub fn build(self) -> ChargeGauge {
        assert!(
            !self.required.is_empty(),
            "Gauge {:?} requires at least one input",
            self.label
        );

        ChargeGauge {
            label: self.label,
            required: self.required,
            active: HashSet::new(),
            level: 0.0,
            step: self.step,
            max: self.max,
            settle_ticks: self.settle_ticks,
            settle_remaining: 0,
            submission: self.submission,
            phase: GaugePhase::Idle,
        }
    }
}

//=== ChargeGauge =========================================================

/// Accumulates a bounded level while its required inputs are held.
///
/// The gauge is agnostic to input modality: keyboard keys and touch
/// regions both arrive as canonical [`InputId`] activate/deactivate
/// signals. An interrupted charge is fully discarded, not paused.
pub struct ChargeGauge {
    label: String,
    required: HashSet<InputId>,
    active: HashSet<InputId>,
    level: f32,
    step: f32,
    max: f32,
    settle_ticks: u32,
    settle_remaining: u32,
    submission: Option<(String, String)>,
    phase: GaugePhase,
}

impl ChargeGauge {
    //--- Construction -----------------------------------------------------

    /// Starts building a gauge with the given view label.
    pub fn builder(label: &str) -> GaugeBuilder {
        GaugeBuilder::new(label)
    }

    //--- Activation Signals -----------------------------------------------

    /// Notes that a tracked input began being held.
    ///
    /// Ids outside the required set are ignored, as are signals once the
    /// level has reached the bound. Charging starts the instant the
    /// required set becomes fully covered.
    pub fn activate(&mut self, id: &InputId) {
        if !self.accepts_signals() || !self.required.contains(id) {
            return;
        }

        self.active.insert(id.clone());
        self.evaluate_run_condition();
    }

    /// Notes that a tracked input ceased being held.
    ///
    /// Losing coverage while charging discards all progress; there is no
    /// partial credit.
    pub fn deactivate(&mut self, id: &InputId) {
        if !self.accepts_signals() || !self.required.contains(id) {
            return;
        }

        self.active.remove(id);
        self.evaluate_run_condition();
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the gauge by one tick.
    ///
    /// While charging the level increases by the configured step, clamped
    /// to the bound; reaching the bound enters the settle phase. The
    /// completion signal is emitted exactly once, when the settle delay
    /// expires.
    pub fn tick(&mut self) -> Option<GaugeSignal> {
        match self.phase {
            GaugePhase::Charging => {
                self.level = (self.level + self.step).min(self.max);

                if self.level >= self.max {
                    info!("Gauge {:?} fully charged", self.label);
                    self.phase = GaugePhase::Settling;
                    self.settle_remaining = self.settle_ticks;

                    if self.settle_remaining == 0 {
                        return Some(self.complete());
                    }
                }
                None
            }

            GaugePhase::Settling => {
                self.settle_remaining -= 1;
                if self.settle_remaining == 0 {
                    Some(self.complete())
                } else {
                    None
                }
            }

            GaugePhase::Idle | GaugePhase::Completed => None,
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Current phase.
    pub fn phase(&self) -> GaugePhase {
        self.phase
    }

    /// Current level, in `[0, max]`.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Current level as a percentage of the bound, for width-style view
    /// output.
    pub fn percent(&self) -> f32 {
        self.level / self.max * 100.0
    }

    /// Returns `true` while the gauge is accumulating.
    pub fn is_running(&self) -> bool {
        self.phase == GaugePhase::Charging
    }

    /// View label for rendering sinks.
    pub fn label(&self) -> &str {
        &self.label
    }

    //--- Internal Helpers -------------------------------------------------

    fn accepts_signals(&self) -> bool {
        matches!(self.phase, GaugePhase::Idle | GaugePhase::Charging)
    }

    /// Re-derives the phase from set coverage. Invariant: the gauge is
    /// running iff the required set is fully covered.
    fn evaluate_run_condition(&mut self) {
        let covered = self.required.iter().all(|id| self.active.contains(id));

        match (self.phase, covered) {
            (GaugePhase::Idle, true) => {
                debug!("Gauge {:?} charging", self.label);
                self.phase = GaugePhase::Charging;
            }
            (GaugePhase::Charging, false) => {
                debug!("Gauge {:?} released early, progress discarded", self.label);
                self.level = 0.0;
                self.phase = GaugePhase::Idle;
            }
            _ => {}
        }
    }

    fn complete(&mut self) -> GaugeSignal {
        info!("Gauge {:?} completed", self.label);
        self.phase = GaugePhase::Completed;
        GaugeSignal::Completed {
            field: self.submission.clone(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
