//=========================================================================
// UI Event Types
//
// Defines the internal representation of low-level page input events.
//
// This module abstracts away platform-specific input (e.g. Winit, a
// browser shim) into a unified, portable format used by the interaction
// core.
//
// Responsibilities:
// - Represent keyboard, pointer, and touch inputs in a stable way
// - Provide canonical lowercase identifiers for tracked inputs
// - Provide equality and hashing semantics for per-frame coalescing
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//      UiEvent (this module)
//         ↓
//    PageOrchestrator (routes to components)
//         ↓
//    Gauges / Reorder Surface / Widgets
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Coverage is the subset the quiz pages actually bind: letters, digits,
/// arrows, and the common special keys.
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Canonical lowercase name of the key, matching the identifier form
    /// used by page markup and touch regions ("c", "enter", "arrowup", ...).
    pub fn canonical_name(self) -> &'static str {
        use KeyCode::*;
        match self {
            Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3",
            Digit4 => "4", Digit5 => "5", Digit6 => "6", Digit7 => "7",
            Digit8 => "8", Digit9 => "9",

            KeyA => "a", KeyB => "b", KeyC => "c", KeyD => "d", KeyE => "e",
            KeyF => "f", KeyG => "g", KeyH => "h", KeyI => "i", KeyJ => "j",
            KeyK => "k", KeyL => "l", KeyM => "m", KeyN => "n", KeyO => "o",
            KeyP => "p", KeyQ => "q", KeyR => "r", KeyS => "s", KeyT => "t",
            KeyU => "u", KeyV => "v", KeyW => "w", KeyX => "x", KeyY => "y",
            KeyZ => "z",

            ArrowDown => "arrowdown",
            ArrowLeft => "arrowleft",
            ArrowRight => "arrowright",
            ArrowUp => "arrowup",

            Space => " ",
            Enter => "enter",
            Escape => "escape",

            Unidentified => "unidentified",
        }
    }
}

//=== InputId =============================================================

/// Canonical identifier for a tracked input source.
///
/// Both keyboard keys and touch regions normalize to the same identifier
/// space, so the gauges are agnostic to which modality produced a signal.
/// Construction lowercases the raw name; `InputId::new("Enter")` and
/// `InputId::new("enter")` are the same input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputId(String);

impl InputId {
    /// Creates a canonical identifier from a raw name.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_ascii_lowercase())
    }

    /// The canonical (lowercase) identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<KeyCode> for InputId {
    fn from(key: KeyCode) -> Self {
        // canonical_name() is already lowercase; skip re-normalization
        Self(key.canonical_name().to_string())
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

//=== UiEvent =============================================================

/// Low-level page input event from the platform layer.
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + source, with coordinates ignored for
/// movement, so the frame buffer can coalesce movement streams (last
/// position wins):
///
/// ```text
/// Equality Rules:
/// KeyDown(C)          == KeyDown(C)            ✓
/// KeyDown(C)          == KeyUp(C)              ✗ (different type)
/// PointerMoved{..}    == PointerMoved{..}      ✓ (always equal)
/// TouchMoved{id:1,..} == TouchMoved{id:1,..}   ✓ (same finger)
/// TouchMoved{id:1,..} == TouchMoved{id:2,..}   ✗ (independent fingers)
/// ```
///
/// # Event Types
///
/// - **KeyDown/KeyUp**: Discrete keyboard events
/// - **PointerPressed/PointerReleased**: Discrete primary-button events
/// - **PointerMoved**: Continuous cursor position updates
/// - **TouchBegan/TouchEnded**: Discrete per-finger contact events
/// - **TouchMoved**: Continuous per-finger position updates
/// - **Unidentified**: Unknown/unsupported events (ignored by the core)
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Primary pointer button pressed at a position.
    PointerPressed { x: f32, y: f32 },

    /// Primary pointer button released at a position.
    PointerReleased { x: f32, y: f32 },

    /// Pointer cursor moved to a new position.
    ///
    /// Multiple consecutive moves are coalesced per frame by the
    /// platform layer before reaching the core.
    PointerMoved { x: f32, y: f32 },

    /// A finger made contact at a position.
    TouchBegan { id: u64, x: f32, y: f32 },

    /// A finger moved while in contact.
    TouchMoved { id: u64, x: f32, y: f32 },

    /// A finger lifted (or the OS cancelled the contact).
    TouchEnded { id: u64, x: f32, y: f32 },

    /// Unrecognized or unsupported event, silently ignored.
    Unidentified,
}

//--- Equality and Hashing ------------------------------------------------
//
// Movement events compare by stream (all pointer moves are one stream,
// touch moves are one stream per finger), ignoring coordinates. Discrete
// events compare by type + key/finger, also ignoring coordinates, which
// makes consecutive-duplicate suppression position-insensitive.
//

impl PartialEq for UiEvent {
    fn eq(&self, other: &Self) -> bool {
        use UiEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (PointerPressed { .. }, PointerPressed { .. }) => true,
            (PointerReleased { .. }, PointerReleased { .. }) => true,
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            (TouchBegan { id: a, .. }, TouchBegan { id: b, .. }) => a == b,
            (TouchMoved { id: a, .. }, TouchMoved { id: b, .. }) => a == b,
            (TouchEnded { id: a, .. }, TouchEnded { id: b, .. }) => a == b,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for UiEvent {}

impl Hash for UiEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use UiEvent::*;
        std::mem::discriminant(self).hash(state);
        match self {
            KeyDown(key) | KeyUp(key) => key.hash(state),
            TouchBegan { id, .. } | TouchMoved { id, .. } | TouchEnded { id, .. } => {
                id.hash(state)
            }
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    //--- KeyCode ----------------------------------------------------------

    #[test]
    fn canonical_names_are_lowercase() {
        assert_eq!(KeyCode::KeyC.canonical_name(), "c");
        assert_eq!(KeyCode::Enter.canonical_name(), "enter");
        assert_eq!(KeyCode::ArrowUp.canonical_name(), "arrowup");
        assert_eq!(KeyCode::Digit7.canonical_name(), "7");
    }

    //--- InputId ----------------------------------------------------------

    #[test]
    fn input_id_normalizes_case() {
        assert_eq!(InputId::new("Enter"), InputId::new("enter"));
        assert_eq!(InputId::new("C").as_str(), "c");
    }

    #[test]
    fn input_id_from_key_matches_canonical_name() {
        let id = InputId::from(KeyCode::Enter);
        assert_eq!(id, InputId::new("enter"));
    }

    #[test]
    fn input_id_is_hashable() {
        let mut set = HashSet::new();
        set.insert(InputId::new("c"));
        set.insert(InputId::new("C"));
        set.insert(InputId::new("enter"));
        assert_eq!(set.len(), 2);
    }

    //--- UiEvent Equality -------------------------------------------------

    #[test]
    fn pointer_moves_compare_equal_regardless_of_position() {
        let a = UiEvent::PointerMoved { x: 1.0, y: 2.0 };
        let b = UiEvent::PointerMoved { x: 99.0, y: 42.0 };
        assert_eq!(a, b);
    }

    #[test]
    fn touch_moves_compare_per_finger() {
        let a = UiEvent::TouchMoved { id: 1, x: 0.0, y: 0.0 };
        let b = UiEvent::TouchMoved { id: 1, x: 50.0, y: 50.0 };
        let c = UiEvent::TouchMoved { id: 2, x: 0.0, y: 0.0 };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn key_down_and_up_are_distinct() {
        assert_ne!(UiEvent::KeyDown(KeyCode::KeyC), UiEvent::KeyUp(KeyCode::KeyC));
        assert_ne!(UiEvent::KeyDown(KeyCode::KeyC), UiEvent::KeyDown(KeyCode::Enter));
    }

    #[test]
    fn hash_is_consistent_with_equality_for_moves() {
        let mut set = HashSet::new();
        set.insert(UiEvent::PointerMoved { x: 1.0, y: 1.0 });
        set.replace(UiEvent::PointerMoved { x: 2.0, y: 2.0 });
        set.insert(UiEvent::TouchMoved { id: 7, x: 0.0, y: 0.0 });
        set.replace(UiEvent::TouchMoved { id: 7, x: 9.0, y: 9.0 });

        assert_eq!(set.len(), 2, "One entry per movement stream");
    }
}
