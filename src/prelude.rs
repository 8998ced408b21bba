//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use riddle_runtime::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime entry points
pub use crate::runtime::{Runtime, RuntimeBuilder};

// Page orchestration
pub use crate::core::PageOrchestrator;

// Input abstractions
pub use crate::core::input::bindings::{InputBindings, PageContext};
pub use crate::core::input::event::{InputId, KeyCode, UiEvent};
pub use crate::core::input::InputTracker;

// Geometry
pub use crate::core::geometry::Rect;

// Components
pub use crate::core::gauge::{ChargeGauge, GaugePhase, GaugeSignal};
pub use crate::core::reorder::{ReorderItem, ReorderSurface};
pub use crate::core::widgets::{MarqueeAnswer, MenuToggle, SwitchPanel};

// Collaborators
pub use crate::core::submit::{MemorySink, SubmissionSink};
pub use crate::core::view::{NullView, RecordingView, ViewCommand, ViewSink};
