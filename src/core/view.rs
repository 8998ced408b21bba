//=========================================================================
// View Output
//=========================================================================
//
// One-way rendering commands from the interaction core to a view layer.
//
// The core pushes visual state changes (classes, glyphs, widths) and
// never reads visual state back. A real frontend translates commands
// into DOM/canvas mutations; tests use a recording sink; the default is
// a discard sink.
//
//=========================================================================

//=== ViewCommand =========================================================

/// A single visual state change.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Charge level of a labeled gauge, as a bar-width percentage.
    SetGaugePercent { label: String, percent: f32 },

    /// Side menu visibility.
    SetMenuVisible(bool),

    /// Menu button glyph ('≡' closed, '×' open).
    SetMenuGlyph(char),

    /// Dragging highlight on a reorder item.
    SetItemDragging { value: String, dragging: bool },

    /// Current reorder sequence, top to bottom.
    SetItemOrder(Vec<String>),

    /// On/off state of one puzzle switch.
    SetSwitch { index: usize, on: bool },

    /// Puzzle lamp lit state (all switches on).
    SetLampLit(bool),

    /// Horizontal offset of the moving-answer widget.
    SetMarqueeOffset(f32),
}

//=== ViewSink ============================================================

/// Receives view commands emitted by the core.
pub trait ViewSink: Send {
    /// Applies one visual state change.
    fn apply(&mut self, command: ViewCommand);
}

//=== NullView ============================================================

/// Discards all view commands (headless operation).
#[derive(Debug, Default)]
pub struct NullView;

impl ViewSink for NullView {
    fn apply(&mut self, _command: ViewCommand) {}
}

//=== RecordingView =======================================================

/// Records every command in order.
///
/// Lets tests assert on the visual output stream without a rendering
/// surface.
#[derive(Debug, Default)]
pub struct RecordingView {
    commands: Vec<ViewCommand>,
}

impl RecordingView {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands applied so far, in order.
    pub fn commands(&self) -> &[ViewCommand] {
        &self.commands
    }
}

impl ViewSink for RecordingView {
    fn apply(&mut self, command: ViewCommand) {
        self.commands.push(command);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
