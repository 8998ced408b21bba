//=========================================================================
// Page Orchestrator
//
// Central coordinator for all interactive page components running on the
// logic (non-platform) thread.
//
// Responsibilities:
// - Own and update all components (gauges, reorder surface, widgets)
// - Receive and route platform events via MPSC channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Forward completions and final orders to the submission sink
//
// Notes:
// The orchestrator runs independently from the platform layer. It owns
// every component directly and mutates them only from its own thread, so
// gauge state needs no locking. Communication with the platform occurs
// only through message passing (MPSC), ensuring isolation and thread
// safety.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod gauge;
pub mod geometry;
pub mod input;
pub mod reorder;
pub mod submit;
pub mod view;
pub mod widgets;

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::info;

//=== Internal Imports ====================================================

use crate::platform::PlatformEvent;
use gauge::{ChargeGauge, GaugeSignal};
use geometry::Rect;
use input::bindings::{InputBindings, PageContext};
use input::event::{InputId, UiEvent};
use input::InputTracker;
use reorder::ReorderSurface;
use submit::{MemorySink, SubmissionSink};
use view::{NullView, ViewCommand, ViewSink};
use widgets::{MarqueeAnswer, MenuToggle, SwitchPanel};

//=== TickControl =========================================================
//
// Defines control flow for the core update loop. Each tick can signal
// either to continue or terminate the loop.
//
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== PageOrchestrator ====================================================

/// Owns and coordinates every interactive component on the page.
///
/// Constructed with every component inactive; [`crate::Runtime::init`]
/// hands the orchestrator to application code for configuration (install
/// gauges, anchor the reorder surface, bind keys and touch regions).
///
/// The orchestrator is fully headless: [`handle_event`] and [`tick`] are
/// the only inputs, and view commands / submissions are the only
/// outputs, so the whole page can be driven from tests.
///
/// [`handle_event`]: Self::handle_event
/// [`tick`]: Self::tick
pub struct PageOrchestrator {
    //--- Input Routing ----------------------------------------------------
    tracker: InputTracker,
    bindings: InputBindings,

    /// Finger id → input currently held through that finger. A capture
    /// releases on TouchEnded even if the finger drifted off the region.
    touch_captures: HashMap<u64, InputId>,

    /// Input held through the pointer button, if any.
    pointer_capture: Option<InputId>,

    //--- Components -------------------------------------------------------
    gauges: Vec<ChargeGauge>,
    reorder: ReorderSurface,
    menu: MenuToggle,
    switches: SwitchPanel,
    marquee: MarqueeAnswer,

    //--- Reorder Submission -----------------------------------------------
    reorder_field: String,
    submit_button: Option<Rect>,

    //--- External Collaborators -------------------------------------------
    sink: Box<dyn SubmissionSink>,
    view: Box<dyn ViewSink>,
}

impl PageOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all components inactive; a component only participates
    // once configuration gives it an anchor.
    //
    pub fn new() -> Self {
        Self {
            tracker: InputTracker::new(),
            bindings: InputBindings::new(),
            touch_captures: HashMap::new(),
            pointer_capture: None,
            gauges: Vec::new(),
            reorder: ReorderSurface::inactive(),
            menu: MenuToggle::new(None),
            switches: SwitchPanel::inactive(),
            marquee: MarqueeAnswer::inactive(),
            reorder_field: "hiddenAnswer".to_string(),
            submit_button: None,
            sink: Box::new(MemorySink::new()),
            view: Box::new(NullView),
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Mutable access to the key/region bindings.
    pub fn bindings_mut(&mut self) -> &mut InputBindings {
        &mut self.bindings
    }

    /// Sets the active page context on the bindings.
    pub fn set_context(&mut self, context: PageContext) {
        self.bindings.set_context(context);
    }

    /// Installs a charge gauge. Gauges receive every activate/deactivate
    /// signal and ignore ids outside their required set.
    pub fn add_gauge(&mut self, gauge: ChargeGauge) {
        self.gauges.push(gauge);
    }

    /// Installs the reorder surface.
    pub fn set_reorder(&mut self, surface: ReorderSurface) {
        self.reorder = surface;
    }

    /// Configures the reorder submission: the hidden field name and the
    /// submit button region.
    pub fn set_reorder_submit(&mut self, field: &str, button: Rect) {
        self.reorder_field = field.to_string();
        self.submit_button = Some(button);
    }

    /// Installs the menu toggle.
    pub fn set_menu(&mut self, menu: MenuToggle) {
        self.menu = menu;
    }

    /// Installs the switch puzzle panel.
    pub fn set_switches(&mut self, switches: SwitchPanel) {
        self.switches = switches;
    }

    /// Installs the moving-answer widget.
    pub fn set_marquee(&mut self, marquee: MarqueeAnswer) {
        self.marquee = marquee;
    }

    /// Replaces the submission sink (defaults to an in-memory recorder).
    pub fn set_submission_sink(&mut self, sink: Box<dyn SubmissionSink>) {
        self.sink = sink;
    }

    /// Replaces the view sink (defaults to discarding).
    pub fn set_view_sink(&mut self, view: Box<dyn ViewSink>) {
        self.view = view;
    }

    //--- Event Routing ----------------------------------------------------

    /// Routes one platform event to the owning component.
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            //--- Keyboard ------------------------------------------------
            UiEvent::KeyDown(key) => {
                if let Some(id) = self.bindings.map_key(key) {
                    self.signal(id, true);
                }
            }
            UiEvent::KeyUp(key) => {
                if let Some(id) = self.bindings.map_key(key) {
                    self.signal(id, false);
                }
            }

            //--- Touch ---------------------------------------------------
            UiEvent::TouchBegan { id, x, y } => {
                if let Some(input) = self.bindings.region_at(x, y) {
                    self.touch_captures.insert(id, input.clone());
                    self.signal(input, true);
                } else {
                    self.press_at(x, y);
                }
            }
            UiEvent::TouchMoved { id, x, y } => {
                // Captured fingers are holding a region; drift is fine.
                if !self.touch_captures.contains_key(&id) {
                    self.pointer_moved(x, y);
                }
            }
            UiEvent::TouchEnded { id, .. } => {
                if let Some(input) = self.touch_captures.remove(&id) {
                    self.signal(input, false);
                } else {
                    self.release();
                }
            }

            //--- Pointer -------------------------------------------------
            UiEvent::PointerPressed { x, y } => {
                if let Some(input) = self.bindings.region_at(x, y) {
                    self.pointer_capture = Some(input.clone());
                    self.signal(input, true);
                } else {
                    self.press_at(x, y);
                }
            }
            UiEvent::PointerReleased { .. } => {
                if let Some(input) = self.pointer_capture.take() {
                    self.signal(input, false);
                } else {
                    self.release();
                }
            }
            UiEvent::PointerMoved { x, y } => {
                self.pointer_moved(x, y);
            }

            UiEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances time-driven components by one tick.
    ///
    /// Gauges accumulate while their inputs are held; a completion writes
    /// its payload to the submission sink and finalizes. The marquee
    /// advances unless paused.
    pub fn tick(&mut self) {
        for gauge in &mut self.gauges {
            let before = gauge.level();
            let signal = gauge.tick();

            if gauge.level() != before {
                self.view.apply(ViewCommand::SetGaugePercent {
                    label: gauge.label().to_string(),
                    percent: gauge.percent(),
                });
            }

            if let Some(GaugeSignal::Completed { field }) = signal {
                if let Some((name, value)) = field {
                    self.sink.set_field(&name, &value);
                    self.sink.submit();
                }
            }
        }

        self.marquee.tick(self.view.as_mut());
    }

    //--- Submission -------------------------------------------------------

    /// Serializes the current item order into the configured hidden
    /// field and finalizes the submission.
    pub fn submit_order(&mut self) {
        let answer = self.reorder.serialize();
        info!("Submitting order {:?}", answer);
        self.sink.set_field(&self.reorder_field, &answer);
        self.sink.submit();
    }

    //--- Internal Helpers -------------------------------------------------

    /// Fans an activate/deactivate signal out to the tracker and every
    /// gauge. Each gauge only toggles its own set membership, so one
    /// input's release can never cancel a gauge it does not feed.
    fn signal(&mut self, id: InputId, active: bool) {
        if active {
            self.tracker.activate(id.clone());
        } else {
            self.tracker.deactivate(&id);
        }

        if self.tracker.has_changed() {
            info!("Input updated: {:?}", self.tracker);
            self.tracker.reset_changed();
        }

        for gauge in &mut self.gauges {
            let before = gauge.level();
            if active {
                gauge.activate(&id);
            } else {
                gauge.deactivate(&id);
            }

            // An early release resets the bar; make the reset visible.
            if gauge.level() != before {
                self.view.apply(ViewCommand::SetGaugePercent {
                    label: gauge.label().to_string(),
                    percent: gauge.percent(),
                });
            }
        }
    }

    /// Routes an unbound press to the widget under the point.
    fn press_at(&mut self, x: f32, y: f32) {
        if self.menu.hit(x, y) {
            self.menu.toggle(self.view.as_mut());
            return;
        }

        if let Some(index) = self.switches.switch_at(x, y) {
            if let Some((name, value)) = self.switches.toggle(index, self.view.as_mut()) {
                self.sink.set_field(&name, &value);
                self.sink.submit();
            }
            return;
        }

        if self.marquee.hit_pause(x, y) {
            self.marquee.toggle_pause();
            return;
        }

        if self.submit_button.is_some_and(|rect| rect.contains(x, y)) {
            self.submit_order();
            return;
        }

        if let Some(value) = self.reorder.hit_item(x, y) {
            let value = value.to_string();
            self.reorder.start_drag(&value);
            self.view.apply(ViewCommand::SetItemDragging {
                value,
                dragging: true,
            });
        }
    }

    /// Continuous movement: repositions a live drag.
    fn pointer_moved(&mut self, _x: f32, y: f32) {
        if self.reorder.is_dragging() && self.reorder.drag_over(y) {
            self.view
                .apply(ViewCommand::SetItemOrder(self.reorder.order()));
        }
    }

    /// Unbound release: finishes a live drag.
    fn release(&mut self) {
        if let Some(value) = self.reorder.dragging_value() {
            let value = value.to_string();
            self.reorder.end_drag();
            self.view.apply(ViewCommand::SetItemDragging {
                value,
                dragging: false,
            });
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread responsible for routing events and ticking
    // all components at a fixed update frequency (TPS).
    //
    // Each tick:
    //  1. Collects and routes platform events
    //  2. Advances time-driven components
    //  3. Sleeps to maintain fixed pacing
    //  4. Exits cleanly when a shutdown signal is received
    //
    pub(crate) fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut page = self;
            let mut events: Vec<UiEvent> = Vec::with_capacity(64);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events -----------------------
                if let TickControl::Exit =
                    Self::collect_platform_events(&receiver, &mut events, frame_duration)
                {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Route events and advance components ----------
                for event in events.drain(..) {
                    page.handle_event(event);
                }
                page.tick();

                //--- Step 3: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- collect_platform_events() ---------------------------------------
    //
    // Aggregates all input events received from the platform during this
    // frame. Discrete events keep arrival order; coalesced continuous
    // events follow them. Returns a TickControl indicating whether to
    // continue or exit.
    //
    fn collect_platform_events(
        receiver: &Receiver<PlatformEvent>,
        events: &mut Vec<UiEvent>,
        frame_duration: Duration,
    ) -> TickControl {
        events.clear();

        let push_batch = |events: &mut Vec<UiEvent>,
                          discrete: Vec<UiEvent>,
                          continuous: Vec<UiEvent>| {
            events.extend(discrete);
            events.extend(continuous);
        };

        // Wait for at least one event this frame
        match receiver.recv_timeout(frame_duration) {
            Ok(PlatformEvent::Inputs {
                discrete,
                continuous,
            }) => push_batch(events, discrete, continuous),
            Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
            Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // Drain additional events queued during this frame
        while let Ok(event) = receiver.try_recv() {
            match event {
                PlatformEvent::Inputs {
                    discrete,
                    continuous,
                } => push_batch(events, discrete, continuous),
                PlatformEvent::WindowClosed => return TickControl::Exit,
            }
        }

        TickControl::Continue
    }
}

impl Default for PageOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::input::event::KeyCode;
    use super::reorder::ReorderItem;
    use super::*;
    use std::sync::{Arc, Mutex};

    //--- Test Helpers -----------------------------------------------------

    /// Submission sink shared with the test through an Arc.
    #[derive(Default)]
    struct SharedSink(Arc<Mutex<MemorySink>>);

    impl SubmissionSink for SharedSink {
        fn set_field(&mut self, name: &str, value: &str) {
            self.0.lock().unwrap().set_field(name, value);
        }
        fn submit(&mut self) {
            self.0.lock().unwrap().submit();
        }
    }

    fn shared_sink(page: &mut PageOrchestrator) -> Arc<Mutex<MemorySink>> {
        let shared = Arc::new(Mutex::new(MemorySink::new()));
        page.set_submission_sink(Box::new(SharedSink(Arc::clone(&shared))));
        shared
    }

    /// Sort page: three 40px items from y=100, submit button at the right.
    fn sort_page() -> PageOrchestrator {
        let mut page = PageOrchestrator::new();
        page.set_reorder(ReorderSurface::new(
            Some(Rect::new(0.0, 100.0, 200.0, 120.0)),
            vec![
                ReorderItem::new("red", 40.0),
                ReorderItem::new("green", 40.0),
                ReorderItem::new("blue", 40.0),
            ],
        ));
        page.set_reorder_submit("hiddenAnswer", Rect::new(300.0, 100.0, 60.0, 30.0));
        page
    }

    /// Hacker page: dual-input gauge on C+Enter plus touch regions.
    fn hacker_page() -> PageOrchestrator {
        let mut page = PageOrchestrator::new();
        page.add_gauge(
            ChargeGauge::builder("hack")
                .require("c")
                .require("enter")
                .step(10.0)
                .settle_ticks(0)
                .submits("hackerAnswer", "charged")
                .build(),
        );
        page.bindings_mut()
            .bind_key(KeyCode::KeyC, InputId::new("c"), PageContext::Primary);
        page.bindings_mut()
            .bind_key(KeyCode::Enter, InputId::new("enter"), PageContext::Primary);
        page.bindings_mut().bind_touch_region(
            Rect::new(0.0, 400.0, 100.0, 50.0),
            InputId::new("c"),
            PageContext::Primary,
        );
        page.bindings_mut().bind_touch_region(
            Rect::new(100.0, 400.0, 100.0, 50.0),
            InputId::new("enter"),
            PageContext::Primary,
        );
        page
    }

    //=====================================================================
    // Reorder Routing Tests
    //=====================================================================

    #[test]
    fn pointer_drag_reorders_and_submits() {
        let mut page = sort_page();
        let sink = shared_sink(&mut page);

        // Drag blue (slot y≈190) above red, release, press submit.
        page.handle_event(UiEvent::PointerPressed { x: 50.0, y: 190.0 });
        page.handle_event(UiEvent::PointerMoved { x: 50.0, y: 105.0 });
        page.handle_event(UiEvent::PointerReleased { x: 50.0, y: 105.0 });
        page.handle_event(UiEvent::PointerPressed { x: 310.0, y: 110.0 });

        let sink = sink.lock().unwrap();
        assert_eq!(sink.field("hiddenAnswer"), Some("blue,red,green"));
        assert_eq!(sink.submit_count(), 1);
    }

    #[test]
    fn submit_without_drags_preserves_original_order() {
        let mut page = sort_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::PointerPressed { x: 310.0, y: 110.0 });

        assert_eq!(
            sink.lock().unwrap().field("hiddenAnswer"),
            Some("red,green,blue")
        );
    }

    #[test]
    fn touch_drag_moves_items_too() {
        let mut page = sort_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::TouchBegan { id: 1, x: 50.0, y: 110.0 });
        page.handle_event(UiEvent::TouchMoved { id: 1, x: 50.0, y: 175.0 });
        page.handle_event(UiEvent::TouchEnded { id: 1, x: 50.0, y: 175.0 });
        page.submit_order();

        assert_eq!(
            sink.lock().unwrap().field("hiddenAnswer"),
            Some("green,red,blue")
        );
    }

    #[test]
    fn presses_outside_any_component_do_nothing() {
        let mut page = sort_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::PointerPressed { x: 500.0, y: 500.0 });
        page.handle_event(UiEvent::PointerReleased { x: 500.0, y: 500.0 });

        assert_eq!(sink.lock().unwrap().submit_count(), 0);
    }

    //=====================================================================
    // Gauge Routing Tests
    //=====================================================================

    #[test]
    fn keyboard_hold_charges_and_submits() {
        let mut page = hacker_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::KeyDown(KeyCode::KeyC));
        page.handle_event(UiEvent::KeyDown(KeyCode::Enter));
        for _ in 0..10 {
            page.tick();
        }

        let sink = sink.lock().unwrap();
        assert_eq!(sink.field("hackerAnswer"), Some("charged"));
        assert_eq!(sink.submit_count(), 1);
    }

    #[test]
    fn releasing_one_key_discards_progress() {
        let mut page = hacker_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::KeyDown(KeyCode::KeyC));
        page.handle_event(UiEvent::KeyDown(KeyCode::Enter));
        for _ in 0..5 {
            page.tick();
        }
        page.handle_event(UiEvent::KeyUp(KeyCode::Enter));
        for _ in 0..4 {
            page.tick();
        }

        assert_eq!(sink.lock().unwrap().submit_count(), 0);
    }

    #[test]
    fn touch_regions_feed_the_same_gauge() {
        let mut page = hacker_page();
        let sink = shared_sink(&mut page);

        // One finger per region; modality mix is irrelevant to the gauge.
        page.handle_event(UiEvent::TouchBegan { id: 1, x: 50.0, y: 420.0 });
        page.handle_event(UiEvent::KeyDown(KeyCode::Enter));
        for _ in 0..10 {
            page.tick();
        }

        assert_eq!(sink.lock().unwrap().field("hackerAnswer"), Some("charged"));
    }

    #[test]
    fn touch_release_off_region_still_deactivates() {
        let mut page = hacker_page();
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::TouchBegan { id: 1, x: 50.0, y: 420.0 });
        page.handle_event(UiEvent::TouchBegan { id: 2, x: 150.0, y: 420.0 });
        for _ in 0..5 {
            page.tick();
        }

        // Finger 2 drifted away before lifting; its input must release.
        page.handle_event(UiEvent::TouchEnded { id: 2, x: 700.0, y: 700.0 });
        for _ in 0..5 {
            page.tick();
        }

        assert_eq!(sink.lock().unwrap().submit_count(), 0);
    }

    #[test]
    fn gauge_reset_is_pushed_to_the_view() {
        let mut page = hacker_page();

        // Swap in a recording view via the keyed commands it produces.
        struct Capture(Arc<Mutex<Vec<ViewCommand>>>);
        impl ViewSink for Capture {
            fn apply(&mut self, command: ViewCommand) {
                self.0.lock().unwrap().push(command);
            }
        }
        let captured = Arc::new(Mutex::new(Vec::new()));
        page.set_view_sink(Box::new(Capture(Arc::clone(&captured))));

        page.handle_event(UiEvent::KeyDown(KeyCode::KeyC));
        page.handle_event(UiEvent::KeyDown(KeyCode::Enter));
        page.tick();
        page.handle_event(UiEvent::KeyUp(KeyCode::KeyC));

        let commands = captured.lock().unwrap();
        let percents: Vec<f32> = commands
            .iter()
            .filter_map(|cmd| match cmd {
                ViewCommand::SetGaugePercent { percent, .. } => Some(*percent),
                _ => None,
            })
            .collect();
        assert_eq!(percents, vec![10.0, 0.0], "Charge then visible reset");
    }

    //=====================================================================
    // Widget Routing Tests
    //=====================================================================

    #[test]
    fn menu_press_toggles_instead_of_dragging() {
        let mut page = sort_page();
        page.set_menu(MenuToggle::new(Some(Rect::new(0.0, 0.0, 40.0, 40.0))));

        page.handle_event(UiEvent::PointerPressed { x: 10.0, y: 10.0 });
        assert!(!page.reorder.is_dragging());
        assert!(page.menu.is_open());
    }

    #[test]
    fn solving_switch_puzzle_submits() {
        let mut page = PageOrchestrator::new();
        page.set_switches(
            SwitchPanel::new(vec![
                Rect::new(0.0, 0.0, 40.0, 40.0),
                Rect::new(50.0, 0.0, 40.0, 40.0),
            ])
            .with_submission("puzzle", "lit"),
        );
        let sink = shared_sink(&mut page);

        page.handle_event(UiEvent::PointerPressed { x: 10.0, y: 10.0 });
        page.handle_event(UiEvent::PointerReleased { x: 10.0, y: 10.0 });
        page.handle_event(UiEvent::PointerPressed { x: 60.0, y: 10.0 });

        let sink = sink.lock().unwrap();
        assert_eq!(sink.field("puzzle"), Some("lit"));
        assert_eq!(sink.submit_count(), 1);
    }

    #[test]
    fn marquee_pause_button_freezes_motion() {
        let mut page = PageOrchestrator::new();
        page.set_marquee(MarqueeAnswer::new(
            Some(Rect::new(0.0, 300.0, 100.0, 30.0)),
            Some(Rect::new(110.0, 300.0, 30.0, 30.0)),
            8.0,
        ));

        page.tick();
        page.handle_event(UiEvent::PointerPressed { x: 120.0, y: 310.0 });
        page.tick();
        page.tick();

        assert_eq!(page.marquee.offset(), 8.0);
    }

    //=====================================================================
    // Inactive Page Tests
    //=====================================================================

    #[test]
    fn unconfigured_page_absorbs_all_events() {
        let mut page = PageOrchestrator::new();

        page.handle_event(UiEvent::KeyDown(KeyCode::KeyC));
        page.handle_event(UiEvent::PointerPressed { x: 10.0, y: 10.0 });
        page.handle_event(UiEvent::PointerMoved { x: 20.0, y: 20.0 });
        page.handle_event(UiEvent::PointerReleased { x: 20.0, y: 20.0 });
        page.handle_event(UiEvent::Unidentified);
        page.tick();
    }
}
