//=========================================================================
// Menu Toggle
//=========================================================================
//
// Collapsible side menu behind a hamburger button. Clicking the button
// shows the menu and swaps the glyph to '×'; clicking again hides it and
// restores '≡'.
//
//=========================================================================

//=== Internal Imports ====================================================

use crate::core::geometry::Rect;
use crate::core::view::{ViewCommand, ViewSink};

//=== Glyphs ==============================================================

const GLYPH_CLOSED: char = '≡';
const GLYPH_OPEN: char = '×';

//=== MenuToggle ==========================================================

/// Show/hide toggle for the side menu.
///
/// Without a button anchor the toggle is inactive and clicks fall
/// through to other components.
pub struct MenuToggle {
    button: Option<Rect>,
    open: bool,
}

impl MenuToggle {
    //--- Construction -----------------------------------------------------

    /// Creates the toggle from its optional button anchor; the menu
    /// starts hidden.
    pub fn new(button: Option<Rect>) -> Self {
        Self {
            button,
            open: false,
        }
    }

    /// Returns `true` if the toggle has a button to operate on.
    pub fn is_active(&self) -> bool {
        self.button.is_some()
    }

    /// Returns `true` while the menu is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    //--- Input ------------------------------------------------------------

    /// Returns `true` if the point hits the toggle button.
    pub fn hit(&self, x: f32, y: f32) -> bool {
        self.button.is_some_and(|rect| rect.contains(x, y))
    }

    /// Flips the menu and pushes the resulting visual state.
    pub fn toggle(&mut self, view: &mut dyn ViewSink) {
        if !self.is_active() {
            return;
        }

        self.open = !self.open;
        view.apply(ViewCommand::SetMenuVisible(self.open));
        view.apply(ViewCommand::SetMenuGlyph(if self.open {
            GLYPH_OPEN
        } else {
            GLYPH_CLOSED
        }));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
