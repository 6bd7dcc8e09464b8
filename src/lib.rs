#![forbid(unsafe_code)]

//! Frame-loop instrumentation and debug overlay.
//!
//! Attaches to a host rendering loop without touching the host's own
//! code: the hook manager wraps the update/draw entry points to record
//! per-frame timing, and the panel composites toggles, counters, a
//! heap-usage sparkline, and a spatial-index visualization onto a
//! dedicated surface layered above the main render target. Press `s`/`h`
//! (configurable) or click the checkboxes to drive the visualizations
//! live.

pub mod body;
pub mod error;
pub mod flags;
pub mod hook;
pub mod memory;
pub mod panel;
pub mod quadtree;
pub mod samples;
pub mod stats;
pub mod surface;
pub mod utils;

pub use body::{draw_body, BodyView};
pub use error::OverlayError;
pub use flags::{ClickRegions, DebugFlag, ToggleStore};
pub use hook::{AfterHook, HookManager, Hooked};
pub use memory::{HeapSnapshot, MemoryProbe, ProcessMemoryProbe};
pub use panel::{DebugPanel, HostFrame, LayerOpacity, PanelOptions, PANEL_HEIGHT};
pub use quadtree::SpatialNode;
pub use samples::{MemoryGraph, SampleRing, GRAPH_HEIGHT};
pub use stats::{FpsCounter, FrameTiming};
pub use surface::{DrawOp, RecordingSurface, Rgba, Surface};
pub use utils::{MouseInfo, Position, Rectangle, Size};
