use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use winit::keyboard::Key;

use crate::error::OverlayError;
use crate::flags::{ClickRegions, DebugFlag, ToggleStore};
use crate::hook::{HookManager, Hooked};
use crate::memory::MemoryProbe;
use crate::quadtree::{self, SpatialNode};
use crate::samples::MemoryGraph;
use crate::stats::{FpsCounter, FrameTiming};
use crate::surface::{Surface, BLACK, WHITE};
use crate::utils::{MouseInfo, Position, Rectangle, Size};

/// Unscaled panel height; the live height is this times the resize scale.
pub const PANEL_HEIGHT: f32 = 70.0;

const PANEL_ALPHA: f32 = 0.5;
const GRAPH_BASELINE_Y: f32 = 30.0;
const GRAPH_RIGHT_MARGIN: f32 = 25.0;
const HELP_TEXT: &str = "(s)how/(h)ide";
const HEAP_PLACEHOLDER: &str = "Heap : ??/?? MB";
const FPS_TEMPLATE: &str = "00/00 fps";
const SMALL_VIEWPORT_WIDTH: f32 = 500.0;
const SMALL_VIEWPORT_SCALE: f32 = 0.7;

/// External collision layer the collision-layer checkbox drives.
pub trait LayerOpacity {
    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, opacity: f32);
}

/// Host state read by one compositor pass. Built fresh each draw call;
/// the spatial root is borrowed for the duration of the call only.
#[derive(Debug, Default)]
pub struct HostFrame<'a> {
    pub object_count: usize,
    pub draw_count: usize,
    pub viewport_offset: Position,
    pub quad_tree: Option<&'a SpatialNode>,
}

/// Panel configuration. Key bindings use the Debug format of
/// `winit::keyboard::Key` (e.g. `Character("s")`, `Named(F9)`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelOptions {
    pub show_key: String,
    pub hide_key: String,
    pub target_fps: u32,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            show_key: r#"Character("s")"#.to_string(),
            hide_key: r#"Character("h")"#.to_string(),
            target_fps: 60,
        }
    }
}

/// The overlay panel: owns the toggle flags, click regions, sample
/// buffer, and per-frame timing handles, and composites them onto the
/// dedicated surface once per host draw cycle.
pub struct DebugPanel {
    id: Uuid,
    rect: Rectangle,
    ui_scale: f32,
    visible: bool,
    show_binding: Option<String>,
    hide_binding: Option<String>,
    target_fps: u32,
    toggles: ToggleStore,
    regions: ClickRegions,
    graph: MemoryGraph,
    probe: Option<Box<dyn MemoryProbe>>,
    timing: Rc<RefCell<FrameTiming>>,
    fps: Rc<RefCell<FpsCounter>>,
    repaint: Option<Box<dyn Fn()>>,
    help_width: f32,
    fps_width: f32,
    memory_x: f32,
}

impl DebugPanel {
    /// Build a hidden panel sized to the host viewport. `surface` is used
    /// once to precompute the text widths the compositor needs every
    /// frame; `probe` is the optional memory-introspection capability.
    pub fn new(
        surface: &dyn Surface,
        viewport: Size,
        pixel_ratio: f32,
        options: PanelOptions,
        probe: Option<Box<dyn MemoryProbe>>,
    ) -> Self {
        let base = if viewport.width < SMALL_VIEWPORT_WIDTH {
            SMALL_VIEWPORT_SCALE
        } else {
            1.0
        };
        let ui_scale = base * pixel_ratio;
        let rect = Rectangle::new(0.0, 0.0, viewport.width, PANEL_HEIGHT);
        let help_width = surface.measure_text(HELP_TEXT, ui_scale);
        let fps_width = surface.measure_text(FPS_TEMPLATE, ui_scale);
        let memory_x = surface.measure_text("Draw   : ", ui_scale) * 2.2 + 300.0 * ui_scale;
        let capacity = sample_capacity(rect.width, memory_x, help_width);
        if probe.is_none() {
            log::debug!("memory introspection unavailable, heap graph disabled");
        }
        Self {
            id: Uuid::new_v4(),
            rect,
            ui_scale,
            visible: false,
            show_binding: Some(options.show_key),
            hide_binding: Some(options.hide_key),
            target_fps: options.target_fps,
            toggles: ToggleStore::new(),
            regions: ClickRegions::panel_defaults(),
            graph: MemoryGraph::new(capacity),
            probe,
            timing: Rc::new(RefCell::new(FrameTiming::default())),
            fps: Rc::new(RefCell::new(FpsCounter::new())),
            repaint: None,
            help_width,
            fps_width,
            memory_x,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggles(&self) -> &ToggleStore {
        &self.toggles
    }

    pub fn toggles_mut(&mut self) -> &mut ToggleStore {
        &mut self.toggles
    }

    pub fn timing(&self) -> FrameTiming {
        *self.timing.borrow()
    }

    /// Host callback fired after every panel click.
    pub fn set_repaint_callback(&mut self, callback: Option<Box<dyn Fn()>>) {
        self.repaint = callback;
    }

    pub fn bind_show_key(&mut self, key: Key) {
        self.show_binding = Some(format!("{:?}", key));
    }

    pub fn bind_hide_key(&mut self, key: Key) {
        self.hide_binding = Some(format!("{:?}", key));
    }

    pub fn unbind_show_key(&mut self) {
        self.show_binding = None;
    }

    pub fn unbind_hide_key(&mut self) {
        self.hide_binding = None;
    }

    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            log::debug!("debug panel shown");
        }
    }

    pub fn hide(&mut self) {
        if self.visible {
            self.visible = false;
            log::debug!("debug panel hidden");
        }
    }

    /// Per-frame input poll. Show wins when both actions fire in the same
    /// frame.
    pub fn update(&mut self, pressed_keys: &[Key]) {
        let show = action_pressed(&self.show_binding, pressed_keys);
        let hide = action_pressed(&self.hide_binding, pressed_keys);
        if show {
            self.show();
        } else if hide {
            self.hide();
        }
    }

    /// Click listener. Ignored while hidden; checkbox hits flip their
    /// flag, the collision-layer checkbox additionally flips the external
    /// layer's opacity (a strict no-op without a layer). Every handled
    /// click requests a repaint.
    pub fn handle_click(&mut self, mouse: MouseInfo, layer: Option<&mut dyn LayerOpacity>) {
        if !self.visible || !mouse.is_lmb_clicked {
            return;
        }
        match self.regions.region_at(mouse.mouse_pos) {
            Some(DebugFlag::CollisionLayer) => {
                if let Some(layer) = layer {
                    if layer.opacity() == 0.0 {
                        layer.set_opacity(1.0);
                        self.toggles.set(DebugFlag::CollisionLayer, true);
                    } else {
                        layer.set_opacity(0.0);
                        self.toggles.set(DebugFlag::CollisionLayer, false);
                    }
                }
            }
            Some(flag) => {
                self.toggles.toggle(flag);
            }
            None => {}
        }
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }

    /// Re-apply the collision-layer flag to a freshly loaded layer.
    pub fn apply_layer_opacity(&self, layer: &mut dyn LayerOpacity) {
        let opacity = if self.toggles.get(DebugFlag::CollisionLayer) {
            1.0
        } else {
            0.0
        };
        layer.set_opacity(opacity);
    }

    /// Track the host viewport: width follows it, height stays the fixed
    /// constant scaled by `scale_y`. The sample buffer is resized to the
    /// new graph span.
    pub fn on_resize(&mut self, viewport: Size, scale_y: f32) {
        self.rect.resize(viewport.width, PANEL_HEIGHT * scale_y);
        let capacity = sample_capacity(self.rect.width, self.memory_x, self.help_width);
        self.graph.resize(capacity);
    }

    /// Terminal teardown: hides if visible and releases the key bindings
    /// and the repaint subscription. Safe to call even if never shown.
    pub fn on_detach(&mut self) {
        self.hide();
        self.show_binding = None;
        self.hide_binding = None;
        self.repaint = None;
        log::debug!("debug panel detached");
    }

    /// Wrap the host's update entry point. The returned interceptor feeds
    /// the update duration and the FPS counter on every call.
    pub fn instrument_update<A, R>(
        &self,
        hooks: &mut HookManager,
        original: Box<dyn FnMut(A) -> R>,
    ) -> Result<Hooked<A, R>, OverlayError> {
        let timing = Rc::clone(&self.timing);
        let fps = Rc::clone(&self.fps);
        hooks.install(
            "game",
            "update",
            original,
            Box::new(move |_, _, elapsed_ms| {
                if let Some(ms) = elapsed_ms {
                    timing.borrow_mut().update_ms = ms;
                }
                fps.borrow_mut().tick();
            }),
            true,
        )
    }

    /// Wrap the host's draw entry point, feeding the draw duration.
    pub fn instrument_draw<A, R>(
        &self,
        hooks: &mut HookManager,
        original: Box<dyn FnMut(A) -> R>,
    ) -> Result<Hooked<A, R>, OverlayError> {
        let timing = Rc::clone(&self.timing);
        hooks.install(
            "game",
            "draw",
            original,
            Box::new(move |_, _, elapsed_ms| {
                if let Some(ms) = elapsed_ms {
                    timing.borrow_mut().draw_ms = ms;
                }
            }),
            true,
        )
    }

    /// Compositor pass, invoked once per host draw cycle. May be called
    /// while hidden (timing stays accurate through the hooks); it then
    /// emits nothing.
    pub fn draw(&mut self, surface: &mut dyn Surface, frame: &HostFrame) {
        if !self.visible {
            return;
        }
        let s = self.ui_scale;
        let previous_alpha = surface.alpha();

        // spatial partition, beneath the panel
        if self.toggles.get(DebugFlag::QuadTree) {
            if let Some(root) = frame.quad_tree {
                quadtree::draw(surface, root, frame.viewport_offset);
            }
        }

        // translucent panel background
        surface.set_alpha(PANEL_ALPHA);
        surface.fill_rect(self.rect, BLACK);
        surface.set_alpha(1.0);

        self.text(
            surface,
            &format!("#objects : {}", frame.object_count),
            5.0,
            5.0,
        );
        self.text(
            surface,
            &format!("#draws   : {}", frame.draw_count),
            5.0,
            15.0,
        );

        self.text(
            surface,
            &format!("hitbox    [{}]", check(self.toggles.get(DebugFlag::HitBox))),
            85.0,
            5.0,
        );
        self.text(
            surface,
            &format!("velocity  [{}]", check(self.toggles.get(DebugFlag::Velocity))),
            85.0,
            15.0,
        );
        self.text(
            surface,
            &format!("QuadTree   [{}]", check(self.toggles.get(DebugFlag::QuadTree))),
            175.0,
            5.0,
        );
        self.text(
            surface,
            &format!(
                "col. layer [{}]",
                check(self.toggles.get(DebugFlag::CollisionLayer))
            ),
            175.0,
            15.0,
        );

        let timing = *self.timing.borrow();
        self.text(
            surface,
            &format!("Update : {:.2} ms", timing.update_ms),
            285.0,
            5.0,
        );
        self.text(
            surface,
            &format!("Draw   : {:.2} ms", timing.draw_ms),
            285.0,
            15.0,
        );

        // memory graph ends just left of the help string
        let end_x = self.rect.width - GRAPH_RIGHT_MARGIN;
        self.draw_memory(surface, end_x - self.help_width);

        surface.draw_text(
            HELP_TEXT,
            Position::new(end_x - self.help_width, 15.0 * s),
            WHITE,
            s,
        );

        let fps_text = format!("{}/{} fps", self.fps.borrow().fps(), self.target_fps);
        surface.draw_text(
            &fps_text,
            Position::new(self.rect.width - self.fps_width - 5.0, 5.0 * s),
            WHITE,
            s,
        );

        surface.set_alpha(previous_alpha);
    }

    fn draw_memory(&mut self, surface: &mut dyn Surface, graph_end: f32) {
        let snapshot = self.probe.as_mut().and_then(|probe| probe.snapshot());
        let Some(snapshot) = snapshot else {
            surface.draw_text(
                HEAP_PLACEHOLDER,
                Position::new(self.memory_x, 5.0 * self.ui_scale),
                WHITE,
                self.ui_scale,
            );
            return;
        };
        self.graph.record(&snapshot);
        let origin_x = graph_end - self.graph.ring().len() as f32;
        self.graph.render(
            surface,
            origin_x,
            GRAPH_BASELINE_Y * self.ui_scale,
            self.ui_scale,
        );
        surface.draw_text(
            &format!("Heap : {}/{} MB", snapshot.used_mb(), snapshot.total_mb()),
            Position::new(self.memory_x, 5.0 * self.ui_scale),
            WHITE,
            self.ui_scale,
        );
    }

    fn text(&self, surface: &mut dyn Surface, text: &str, x: f32, y: f32) {
        surface.draw_text(
            text,
            Position::new(x * self.ui_scale, y * self.ui_scale),
            WHITE,
            self.ui_scale,
        );
    }
}

fn sample_capacity(panel_width: f32, memory_x: f32, help_width: f32) -> usize {
    (panel_width - GRAPH_RIGHT_MARGIN - help_width - memory_x).max(0.0) as usize
}

fn action_pressed(binding: &Option<String>, pressed_keys: &[Key]) -> bool {
    let Some(binding) = binding else {
        return false;
    };
    pressed_keys
        .iter()
        .any(|key| format!("{:?}", key) == *binding)
}

fn check(on: bool) -> &'static str {
    if on {
        "x"
    } else {
        " "
    }
}
