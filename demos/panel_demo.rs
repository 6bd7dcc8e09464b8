use std::time::Duration;

use anyhow::Result;
use winit::keyboard::{Key, SmolStr};

use debug_overlay::{
    DebugPanel, HookManager, HostFrame, MemoryProbe, PanelOptions, Position, ProcessMemoryProbe,
    Rectangle, RecordingSurface, Size, SpatialNode,
};

// Headless walkthrough: wires the panel to a toy host loop and prints the
// timing it captured. A real host would swap RecordingSurface for its own
// panel surface and call the same entry points.
fn main() -> Result<()> {
    env_logger::init();

    let viewport = Size::new(800.0, 600.0);
    let mut surface = RecordingSurface::new(viewport);
    let probe = ProcessMemoryProbe::new().map(|p| Box::new(p) as Box<dyn MemoryProbe>);
    let mut panel = DebugPanel::new(&surface, viewport, 1.0, PanelOptions::default(), probe);

    let mut hooks = HookManager::new();
    let mut update = panel.instrument_update(
        &mut hooks,
        Box::new(|_dt: f32| {
            std::thread::sleep(Duration::from_millis(2));
        }),
    )?;
    let mut draw = panel.instrument_draw(
        &mut hooks,
        Box::new(|()| {
            std::thread::sleep(Duration::from_millis(1));
            37usize // draw calls issued by the host
        }),
    )?;

    panel.toggles_mut().set_named("quad-tree", true)?;
    panel.update(&[Key::Character(SmolStr::new("s"))]);

    for frame in 0..3u32 {
        update.call(1.0 / 60.0);
        let draw_count = draw.call(());

        let tree = SpatialNode::with_nodes(
            Rectangle::new(0.0, 0.0, 800.0, 600.0),
            3,
            vec![
                SpatialNode::new(Rectangle::new(0.0, 0.0, 400.0, 300.0), 8),
                SpatialNode::new(Rectangle::new(400.0, 0.0, 400.0, 300.0), 1),
            ],
        );
        panel.draw(
            &mut surface,
            &HostFrame {
                object_count: 12,
                draw_count,
                viewport_offset: Position::default(),
                quad_tree: Some(&tree),
            },
        );

        println!(
            "frame {}: {} ops, timing {}",
            frame,
            surface.ops.len(),
            serde_json::to_string(&panel.timing())?
        );
        surface.clear();
    }

    panel.on_detach();
    Ok(())
}
