//=========================================================================
// Riddle Runtime — Library Root
//
// This crate defines the public API surface of the riddle runtime: an
// interaction layer for quiz pages whose answers are produced by
// holding, dragging and toggling rather than typing.
//
// Responsibilities:
// - Expose the runtime interface (`Runtime`, `RuntimeBuilder`)
// - Expose the page components (`core`) for configuration and headless
//   testing
// - Keep internal modules (like `platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use riddle_runtime::RuntimeBuilder;
//
// fn main() {
//     RuntimeBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the page components (gauges, reorder surface, widgets)
// and input abstractions. It is exposed publicly so applications can
// configure pages and drive components headlessly in tests, but normal
// application code mostly uses the top-level `Runtime` facade.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop, etc.) and is kept private, as it is not part of the
// public API surface.
//
// `runtime` defines the main entry point and thread wiring.
//
mod platform;
mod runtime;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the runtime entry points so users can simply write
// `use riddle_runtime::RuntimeBuilder;` without having to know the
// internal module structure.
//
pub use runtime::{Runtime, RuntimeBuilder};
