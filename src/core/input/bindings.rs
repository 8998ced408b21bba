//=========================================================================
// Input Bindings
//=========================================================================
//
// Maps raw inputs to canonical input identifiers based on configured
// bindings and the active page context.
//
// Architecture:
//   (key, context) → HashMap → InputId
//   (point, context) → region scan → InputId
//
// Only bindings in the active context resolve. One script serves several
// distinct page types (sort page, hacker page, casual page), so the same
// key can feed different inputs per page.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== Internal Imports ====================================================

use super::event::{InputId, KeyCode};
use crate::core::geometry::Rect;

//=== PageContext =========================================================

/// Identifies which set of input bindings is currently active.
///
/// # Variants
///
/// - `Primary`: Default context for the main quiz page
/// - `Custom(u32)`: Additional page types (sort page, hacker page, ...)
///
/// # Recommended Pattern
///
/// Define semantic constants:
/// ```
/// # use riddle_runtime::core::input::bindings::PageContext;
/// const SORT_PAGE: PageContext = PageContext::custom(0);
/// const HACKER_PAGE: PageContext = PageContext::custom(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageContext {
    /// Default context for the primary page.
    Primary,

    /// User-defined page context.
    Custom(u32),
}

impl PageContext {
    /// Creates a custom context.
    #[inline]
    pub const fn custom(id: u32) -> Self {
        Self::Custom(id)
    }
}

impl Default for PageContext {
    fn default() -> Self {
        Self::Primary
    }
}

//=== InputBindings =======================================================

/// Resolves keys and touch regions to canonical input identifiers.
///
/// Regions are scanned in binding order; the first region containing the
/// point wins, so overlapping regions resolve deterministically.
pub struct InputBindings {
    /// Key bindings: (key, context) → input id
    key_bindings: HashMap<(KeyCode, PageContext), InputId>,

    /// Touch region bindings, scanned in insertion order.
    regions: Vec<(Rect, PageContext, InputId)>,

    /// Currently active page context.
    current_context: PageContext,
}

impl InputBindings {
    /// Creates empty bindings with the Primary context active.
    pub fn new() -> Self {
        Self {
            key_bindings: HashMap::new(),
            regions: Vec::new(),
            current_context: PageContext::Primary,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key to an input identifier in a context.
    pub fn bind_key(&mut self, key: KeyCode, id: InputId, context: PageContext) {
        self.key_bindings.insert((key, context), id);
    }

    /// Removes a key binding from a context.
    pub fn unbind_key(&mut self, key: KeyCode, context: PageContext) {
        self.key_bindings.remove(&(key, context));
    }

    /// Binds a touch region to an input identifier in a context.
    pub fn bind_touch_region(&mut self, region: Rect, id: InputId, context: PageContext) {
        self.regions.push((region, context, id));
    }

    /// Clears all bindings for a context (keys and regions).
    pub fn clear_context(&mut self, context: PageContext) {
        self.key_bindings.retain(|&(_, ctx), _| ctx != context);
        self.regions.retain(|&(_, ctx, _)| ctx != context);
    }

    //--- Resolution -------------------------------------------------------

    /// Resolves a key press/release to an input id in the active context.
    pub fn map_key(&self, key: KeyCode) -> Option<InputId> {
        self.key_bindings
            .get(&(key, self.current_context))
            .cloned()
    }

    /// Resolves a point to the first bound touch region containing it,
    /// in the active context.
    pub fn region_at(&self, x: f32, y: f32) -> Option<InputId> {
        self.regions
            .iter()
            .find(|(rect, ctx, _)| *ctx == self.current_context && rect.contains(x, y))
            .map(|(_, _, id)| id.clone())
    }

    //--- Context ----------------------------------------------------------

    /// Sets the active page context.
    pub fn set_context(&mut self, context: PageContext) {
        self.current_context = context;
    }

    /// Returns the active page context.
    pub fn current_context(&self) -> PageContext {
        self.current_context
    }
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> InputId {
        InputId::new(name)
    }

    //=====================================================================
    // Key Binding Tests
    //=====================================================================

    #[test]
    fn bind_and_map_simple_key() {
        let mut bindings = InputBindings::new();
        bindings.bind_key(KeyCode::KeyC, id("c"), PageContext::Primary);

        assert_eq!(bindings.map_key(KeyCode::KeyC), Some(id("c")));
    }

    #[test]
    fn map_key_returns_none_if_unbound() {
        let bindings = InputBindings::new();
        assert_eq!(bindings.map_key(KeyCode::KeyC), None);
    }

    #[test]
    fn unbind_key_removes_binding() {
        let mut bindings = InputBindings::new();
        bindings.bind_key(KeyCode::Enter, id("enter"), PageContext::Primary);
        bindings.unbind_key(KeyCode::Enter, PageContext::Primary);

        assert_eq!(bindings.map_key(KeyCode::Enter), None);
    }

    //=====================================================================
    // Context Tests
    //=====================================================================

    #[test]
    fn bindings_resolve_only_in_active_context() {
        let mut bindings = InputBindings::new();
        let hacker = PageContext::custom(1);

        bindings.bind_key(KeyCode::KeyC, id("c"), hacker);
        assert_eq!(bindings.map_key(KeyCode::KeyC), None);

        bindings.set_context(hacker);
        assert_eq!(bindings.map_key(KeyCode::KeyC), Some(id("c")));
        assert_eq!(bindings.current_context(), hacker);
    }

    #[test]
    fn same_key_maps_differently_per_context() {
        let mut bindings = InputBindings::new();
        let casual = PageContext::custom(0);

        bindings.bind_key(KeyCode::Space, id("charge"), PageContext::Primary);
        bindings.bind_key(KeyCode::Space, id("pause"), casual);

        assert_eq!(bindings.map_key(KeyCode::Space), Some(id("charge")));

        bindings.set_context(casual);
        assert_eq!(bindings.map_key(KeyCode::Space), Some(id("pause")));
    }

    #[test]
    fn clear_context_removes_only_that_context() {
        let mut bindings = InputBindings::new();
        let other = PageContext::custom(2);

        bindings.bind_key(KeyCode::KeyC, id("c"), PageContext::Primary);
        bindings.bind_key(KeyCode::KeyC, id("c"), other);
        bindings.bind_touch_region(Rect::new(0.0, 0.0, 10.0, 10.0), id("tap"), other);

        bindings.clear_context(other);

        assert_eq!(bindings.map_key(KeyCode::KeyC), Some(id("c")));
        bindings.set_context(other);
        assert_eq!(bindings.map_key(KeyCode::KeyC), None);
        assert_eq!(bindings.region_at(5.0, 5.0), None);
    }

    //=====================================================================
    // Region Tests
    //=====================================================================

    #[test]
    fn region_resolves_contained_point() {
        let mut bindings = InputBindings::new();
        bindings.bind_touch_region(
            Rect::new(100.0, 100.0, 50.0, 50.0),
            id("tap-a"),
            PageContext::Primary,
        );

        assert_eq!(bindings.region_at(120.0, 120.0), Some(id("tap-a")));
        assert_eq!(bindings.region_at(10.0, 10.0), None);
    }

    #[test]
    fn overlapping_regions_first_bound_wins() {
        let mut bindings = InputBindings::new();
        bindings.bind_touch_region(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            id("under"),
            PageContext::Primary,
        );
        bindings.bind_touch_region(
            Rect::new(50.0, 50.0, 100.0, 100.0),
            id("over"),
            PageContext::Primary,
        );

        assert_eq!(bindings.region_at(60.0, 60.0), Some(id("under")));
    }

    #[test]
    fn region_ignores_other_contexts() {
        let mut bindings = InputBindings::new();
        let hacker = PageContext::custom(1);

        bindings.bind_touch_region(Rect::new(0.0, 0.0, 10.0, 10.0), id("tap"), hacker);
        assert_eq!(bindings.region_at(5.0, 5.0), None);

        bindings.set_context(hacker);
        assert_eq!(bindings.region_at(5.0, 5.0), Some(id("tap")));
    }
}
