//=========================================================================
// Page Widgets
//
// Minor interactive behaviors beyond the reorder surface and the charge
// gauges: the collapsible side menu, the multi-switch light puzzle, and
// the pausable moving-answer widget.
//
// Each widget follows the same conventions as the larger components:
// anchors are optional constructor parameters, a widget without its
// anchor reports inactive and ignores input, and all visual changes flow
// out as one-way `ViewCommand`s.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod marquee;
pub mod menu;
pub mod switches;

//=== Public Exports ======================================================

pub use marquee::MarqueeAnswer;
pub use menu::MenuToggle;
pub use switches::SwitchPanel;
