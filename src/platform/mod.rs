//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the runtime's core thread via MPSC.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  PageOrchestrator    │
//  │   ↓                      │    │                      │
//  │  EventMapper             │    │  InputBindings       │
//  │   ├─ Converts Winit      │    │  ↓                   │
//  │   └─ Tracks cursor       │    │  Gauges / Reorder /  │
//  │   ↓                      │    │  Widgets             │
//  │  InputBuffer             │    │                      │
//  │   ├─ discrete: Vec<>     │    └──────────────────────┘
//  │   └─ continuous: Set<>   │             ↑
//  │   ↓                      │             │
//  │  RedrawRequested         │             │
//  │   ↓ (flush)              │             │
//  │  MPSC Channel ───────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
//
//  Frame Boundary: RedrawRequested
//    → All buffered input sent atomically
//    → Core processes at fixed TPS (independent of refresh rate)
//    → Empty buffers NOT sent (optimization)
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: Batches all input atomically,
//   ensuring deterministic order even with high event rates
// - **Movement coalescing**: Only the latest position of each pointer or
//   finger stream crosses the channel per frame
// - **Graceful channel disconnect**: If core thread dies, platform logs
//   warning but continues running to allow window closure
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Runtime::run()`
//
// Responsibilities:
// - Create and manage OS window
// - Poll Winit events at refresh rate
// - Convert Winit types → runtime UiEvents
// - Buffer input until frame boundary
// - Send batched events to core thread
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::event::UiEvent;
use event_mapper::EventMapper;
use input_buffer::InputBuffer;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core thread.
///
/// These are the only messages that cross the thread boundary. All
/// variants are cloneable for flexibility (e.g., logging, debugging),
/// though typically consumed immediately by the core thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a single frame.
    ///
    /// Sent on every `RedrawRequested` event (typically 60-144Hz depending
    /// on monitor refresh rate). Contains:
    /// - `discrete`: Key, button and touch begin/end events (order significant)
    /// - `continuous`: Movement, coalesced to one event per stream
    ///
    /// **Note**: Empty batches are NOT sent (optimization).
    Inputs {
        discrete: Vec<UiEvent>,
        continuous: Vec<UiEvent>,
    },

    /// Window close requested by user or OS.
    ///
    /// Core thread should terminate cleanly upon receiving this.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created, the
/// runtime cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and input event aggregator.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and sends
/// batched events to the core thread via MPSC channel.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(sender)` - initializes subsystems
/// 2. **Execution**: `platform.run()` - starts event loop (never returns)
/// 3. **Event processing**: Winit calls `ApplicationHandler` methods
/// 4. **Shutdown**: User closes window → sends `WindowClosed` → exits
///
/// # Thread Safety
///
/// This type is NOT Send/Sync - it must remain on the main thread.
/// Communication with other threads occurs exclusively via the MPSC
/// sender.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Buffers discrete/continuous input until frame boundary.
    buffer: InputBuffer,

    /// Channel to send events to core thread.
    event_sender: Sender<PlatformEvent>,

    /// Converts Winit events to runtime UiEvents.
    mapper: EventMapper,

    /// Window title, configurable through the runtime builder.
    title: String,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance with the given event sender.
    ///
    /// Does not create window yet - that happens lazily in `resumed()`.
    pub fn new(event_sender: Sender<PlatformEvent>, title: String) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            buffer: InputBuffer::new(),
            event_sender,
            mapper: EventMapper::new(),
            title,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop (never returns normally).
    ///
    /// This method blocks forever, running the Winit event loop. It only
    /// returns if event loop creation fails. Once running, the loop
    /// continues until `exit()` is called.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] only if event loop creation fails before
    /// starting. Once started, errors are handled internally (logged and
    /// graceful shutdown attempted).
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input events to the core thread.
    ///
    /// Drains both discrete and continuous event buffers, sending them as
    /// a single [`PlatformEvent::Inputs`] message. Called on every
    /// `RedrawRequested` event.
    ///
    /// # Error Handling
    ///
    /// If the channel is disconnected (core thread panicked or exited
    /// early), logs a warning and drops the events. This prevents the
    /// platform thread from panicking and allows the user to close the
    /// window normally.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events ({} discrete, {} continuous)",
                    discrete_count + continuous_count,
                    discrete_count,
                    continuous_count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet. On mobile, this may be
    /// called multiple times (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                // Notify core of fatal error
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush all buffered input
                self.flush_input_buffer();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(mapped) = self.mapper.map(other) {
                    self.buffer.push(mapped);
                } else {
                    trace!(target: "platform::input", "Unmapped event ignored");
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::KeyCode;
    use crossbeam_channel::unbounded;

    //=====================================================================
    // PlatformEvent Tests
    //=====================================================================

    #[test]
    fn platform_event_inputs_is_cloneable() {
        let event = PlatformEvent::Inputs {
            discrete: vec![],
            continuous: vec![],
        };
        let _cloned = event.clone();
    }

    #[test]
    fn platform_event_is_debug() {
        let event = PlatformEvent::WindowClosed;
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("WindowClosed"));
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, "Test".to_string());
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test".to_string());

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test".to_string());

        platform.buffer.push(UiEvent::KeyDown(KeyCode::Space));

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete.len(), 1, "Should have 1 discrete event");
                assert!(continuous.is_empty(), "Should have no continuous events");
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test".to_string());

        platform.buffer.push(UiEvent::KeyDown(KeyCode::Space));

        // Drop receiver to disconnect
        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, "Test".to_string());

        platform.buffer.push(UiEvent::KeyDown(KeyCode::KeyA));

        platform.flush_input_buffer();
        platform.flush_input_buffer(); // Second flush should be no-op

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
