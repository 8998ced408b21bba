//=========================================================================
// Marquee Answer
//=========================================================================
//
// Pausable moving-answer widget: the answer text slides across its track
// at a fixed speed, wrapping at the track width. A pause button freezes
// it in place so the answer can be read (and clicked).
//
//=========================================================================

//=== Internal Imports ====================================================

use crate::core::geometry::Rect;
use crate::core::view::{ViewCommand, ViewSink};

//=== MarqueeAnswer =======================================================

/// A horizontally scrolling answer with a pause/resume button.
///
/// Ticked by the orchestrator at the page tick rate; paused ticks hold
/// position. Without a track anchor the widget is inactive.
pub struct MarqueeAnswer {
    track: Option<Rect>,
    pause_button: Option<Rect>,
    speed: f32,
    offset: f32,
    paused: bool,
}

impl MarqueeAnswer {
    //--- Construction -----------------------------------------------------

    /// Creates the widget from its optional track and pause-button
    /// anchors and the per-tick speed in pixels.
    pub fn new(track: Option<Rect>, pause_button: Option<Rect>, speed: f32) -> Self {
        Self {
            track,
            pause_button,
            speed,
            offset: 0.0,
            paused: false,
        }
    }

    /// Creates an inactive widget (no marquee on this page).
    pub fn inactive() -> Self {
        Self::new(None, None, 0.0)
    }

    /// Returns `true` if the widget has a track to move along.
    pub fn is_active(&self) -> bool {
        self.track.is_some()
    }

    //--- Queries ----------------------------------------------------------

    /// Current horizontal offset within the track.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Returns `true` while movement is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns `true` if the point hits the pause button.
    pub fn hit_pause(&self, x: f32, y: f32) -> bool {
        self.pause_button.is_some_and(|rect| rect.contains(x, y))
    }

    //--- Input ------------------------------------------------------------

    /// Flips between moving and paused.
    pub fn toggle_pause(&mut self) {
        if self.is_active() {
            self.paused = !self.paused;
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the answer by one tick, wrapping at the track width.
    ///
    /// Pushes the new offset while moving; paused or inactive ticks emit
    /// nothing.
    pub fn tick(&mut self, view: &mut dyn ViewSink) {
        let Some(track) = self.track else {
            return;
        };
        if self.paused {
            return;
        }

        self.offset = (self.offset + self.speed) % track.w;
        view.apply(ViewCommand::SetMarqueeOffset(self.offset));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
