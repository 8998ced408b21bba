//=========================================================================
// Riddle Runtime
//
// Main entry point and coordinator for the interaction runtime.
//
// Architecture:
// ```text
//     RuntimeBuilder  ──build()──>  Runtime  ──run()──>  [blocks]
//         │                           │
//         ├─ with_tps()               └─ spawns logic thread
//         ├─ with_channel_capacity()     runs platform
//         └─ with_title()                blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::PageOrchestrator;
use crate::platform::{Platform, PlatformEvent};

//=== RuntimeBuilder ======================================================

/// Builder for configuring and constructing a [`Runtime`].
///
/// Provides a fluent API for setting runtime parameters before
/// construction. The page orchestrator is created automatically.
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 events
/// - **Window title**: "Riddle Runtime"
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use riddle_runtime::RuntimeBuilder;
///
/// RuntimeBuilder::new().build().run();
/// ```
///
/// With page configuration:
/// ```no_run
/// use riddle_runtime::RuntimeBuilder;
/// use riddle_runtime::core::gauge::ChargeGauge;
/// use riddle_runtime::core::input::bindings::PageContext;
/// use riddle_runtime::core::input::event::{InputId, KeyCode};
///
/// RuntimeBuilder::new()
///     .with_tps(60.0)
///     .build()
///     .init(|page| {
///         page.bindings_mut()
///             .bind_key(KeyCode::KeyC, InputId::new("c"), PageContext::Primary);
///         page.add_gauge(
///             ChargeGauge::builder("charge")
///                 .require("c")
///                 .step(1.5)
///                 .submits("chargeAnswer", "full")
///                 .build(),
///         );
///     })
///     .run();
/// ```
pub struct RuntimeBuilder {
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl RuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            title: "Riddle Runtime".to_string(),
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// The logic thread maintains this update rate using a fixed
    /// timestep loop. Gauge charge rates and marquee speeds are defined
    /// per tick, so changing the TPS changes their wall-clock speed.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Larger values provide more buffering during frame spikes but
    /// increase memory usage.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Builds the runtime instance.
    ///
    /// Consumes the builder and produces a configured [`Runtime`] ready
    /// for initialization or execution. Call [`Runtime::init`] to
    /// configure the page before running, or call [`Runtime::run`]
    /// directly for an empty page.
    pub fn build(self) -> Runtime {
        info!(
            "Building runtime (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Runtime {
            page: PageOrchestrator::new(),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            title: self.title,
        }
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Runtime =============================================================

/// The interaction runtime.
///
/// Coordinates the platform layer and the page orchestrator and manages
/// the main execution loop. Create via [`RuntimeBuilder`].
///
/// # Architecture
///
/// ```text
/// Runtime (Main Thread)
///   ├─► PageOrchestrator (Logic Thread @ TPS)
///   │     └─► Gauges, Reorder Surface, Widgets
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling
///
/// Communication: MPSC Channel (PlatformEvent)
/// ```
pub struct Runtime {
    page: PageOrchestrator,
    tps: f64,
    channel_capacity: usize,
    title: String,
}

impl Runtime {
    //--- Initialization ---------------------------------------------------

    /// Configures the page before execution.
    ///
    /// Provides mutable access to the [`PageOrchestrator`] for installing
    /// components and bindings before the runtime starts. After calling
    /// [`Runtime::run`] the runtime consumes itself and cannot be
    /// reconfigured.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use riddle_runtime::RuntimeBuilder;
    /// use riddle_runtime::core::geometry::Rect;
    /// use riddle_runtime::core::reorder::{ReorderItem, ReorderSurface};
    ///
    /// RuntimeBuilder::new()
    ///     .build()
    ///     .init(|page| {
    ///         page.set_reorder(ReorderSurface::new(
    ///             Some(Rect::new(40.0, 100.0, 300.0, 150.0)),
    ///             vec![
    ///                 ReorderItem::new("red", 50.0),
    ///                 ReorderItem::new("green", 50.0),
    ///                 ReorderItem::new("blue", 50.0),
    ///             ],
    ///         ));
    ///         page.set_reorder_submit("hiddenAnswer", Rect::new(40.0, 270.0, 120.0, 40.0));
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut PageOrchestrator),
    {
        info!("Configuring page");

        init_fn(&mut self.page);

        info!("Page configuration complete");
        self
    }

    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the application exits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates MPSC channel for platform → core communication
    /// 2. Spawns logic thread running at configured TPS
    /// 3. Runs platform event loop (blocks here)
    /// 4. On window close: platform exits → channel disconnects → logic
    ///    thread terminates
    ///
    /// # Thread Panic Handling
    ///
    /// If the logic thread panics, the error is logged and the runtime
    /// attempts graceful shutdown. The platform continues running to
    /// allow the user to close the window normally.
    pub fn run(self) {
        info!("Starting runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        info!("MPSC channel created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.page.spawn_core_thread(rx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.title);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {:?}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => {
                info!("Core thread terminated cleanly");
            }
            Err(e) => {
                error!("Core thread panicked: {:?}", e);
            }
        }

        info!("Runtime shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
