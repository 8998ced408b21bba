//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to runtime-level `UiEvent` types. Provides
// a clean separation between OS-specific input and the runtime's internal
// event representation.
//
// Responsibilities:
// - Translate keyboard, mouse and touch events
// - Track the cursor position so button events carry coordinates
// - Provide fallbacks (`Unidentified`) for unmapped inputs
//
//=========================================================================

use winit::event::{ElementState, KeyEvent, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::event::{KeyCode, UiEvent};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the runtime's internal `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Whitespace and control -------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified
        }
    }
}

//=== EventMapper =========================================================
//
// Stateful converter from `WindowEvent` to `UiEvent`.
//
// Winit reports mouse button presses without coordinates, so the mapper
// remembers the latest cursor position and stamps it onto pointer
// events. Touch events carry their own location and need no state.
//
pub(crate) struct EventMapper {
    cursor_x: f32,
    cursor_y: f32,
}

impl EventMapper {
    pub fn new() -> Self {
        Self {
            cursor_x: 0.0,
            cursor_y: 0.0,
        }
    }

    /// Converts one window event, returning `None` for events the
    /// runtime does not consume.
    pub fn map(&mut self, event: &WindowEvent) -> Option<UiEvent> {
        match event {
            //--- Keyboard Input ------------------------------------------
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat,
                        ..
                    },
                ..
            } => {
                // OS key repeat would re-trigger activations mid-hold.
                if *repeat {
                    return None;
                }

                let key = match physical_key {
                    PhysicalKey::Code(code) => KeyCode::from(*code),
                    _ => KeyCode::Unidentified,
                };

                Some(match state {
                    ElementState::Pressed => UiEvent::KeyDown(key),
                    ElementState::Released => UiEvent::KeyUp(key),
                })
            }

            //--- Pointer Input -------------------------------------------
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x as f32;
                self.cursor_y = position.y as f32;
                Some(UiEvent::PointerMoved {
                    x: self.cursor_x,
                    y: self.cursor_y,
                })
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(match state {
                ElementState::Pressed => UiEvent::PointerPressed {
                    x: self.cursor_x,
                    y: self.cursor_y,
                },
                ElementState::Released => UiEvent::PointerReleased {
                    x: self.cursor_x,
                    y: self.cursor_y,
                },
            }),

            //--- Touch Input ---------------------------------------------
            WindowEvent::Touch(touch) => {
                let (x, y) = (touch.location.x as f32, touch.location.y as f32);
                let id = touch.id;
                Some(match touch.phase {
                    TouchPhase::Started => UiEvent::TouchBegan { id, x, y },
                    TouchPhase::Moved => UiEvent::TouchMoved { id, x, y },
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        UiEvent::TouchEnded { id, x, y }
                    }
                })
            }

            //--- Unhandled Events ----------------------------------------
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
