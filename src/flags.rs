use crate::error::OverlayError;
use crate::utils::{Position, Rectangle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugFlag {
    HitBox,
    Velocity,
    QuadTree,
    CollisionLayer,
}

impl DebugFlag {
    pub const ALL: [DebugFlag; 4] = [
        DebugFlag::HitBox,
        DebugFlag::Velocity,
        DebugFlag::QuadTree,
        DebugFlag::CollisionLayer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DebugFlag::HitBox => "hit-box",
            DebugFlag::Velocity => "velocity",
            DebugFlag::QuadTree => "quad-tree",
            DebugFlag::CollisionLayer => "collision-layer",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, OverlayError> {
        DebugFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| OverlayError::UnknownFlag(name.to_string()))
    }
}

/// Named visualization flags. All default to off; a collaborator may
/// pre-seed a value with `set` before the panel is first drawn. Consumers
/// poll the store, it pushes no notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleStore {
    hit_box: bool,
    velocity: bool,
    quad_tree: bool,
    collision_layer: bool,
}

impl ToggleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: DebugFlag) -> bool {
        match flag {
            DebugFlag::HitBox => self.hit_box,
            DebugFlag::Velocity => self.velocity,
            DebugFlag::QuadTree => self.quad_tree,
            DebugFlag::CollisionLayer => self.collision_layer,
        }
    }

    pub fn set(&mut self, flag: DebugFlag, value: bool) {
        match flag {
            DebugFlag::HitBox => self.hit_box = value,
            DebugFlag::Velocity => self.velocity = value,
            DebugFlag::QuadTree => self.quad_tree = value,
            DebugFlag::CollisionLayer => self.collision_layer = value,
        }
    }

    /// Flip the flag and return its new value.
    pub fn toggle(&mut self, flag: DebugFlag) -> bool {
        let value = !self.get(flag);
        self.set(flag, value);
        value
    }

    pub fn get_named(&self, name: &str) -> Result<bool, OverlayError> {
        Ok(self.get(DebugFlag::from_name(name)?))
    }

    pub fn set_named(&mut self, name: &str, value: bool) -> Result<(), OverlayError> {
        self.set(DebugFlag::from_name(name)?, value);
        Ok(())
    }

    pub fn toggle_named(&mut self, name: &str) -> Result<bool, OverlayError> {
        Ok(self.toggle(DebugFlag::from_name(name)?))
    }
}

/// Clickable checkbox areas in panel-local coordinates, one per flag,
/// hit-tested in a fixed order. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ClickRegions {
    entries: Vec<(Rectangle, DebugFlag)>,
}

impl ClickRegions {
    /// The panel's checkbox layout.
    pub fn panel_defaults() -> Self {
        Self::new(vec![
            (Rectangle::new(160.0, 5.0, 15.0, 15.0), DebugFlag::HitBox),
            (Rectangle::new(165.0, 18.0, 15.0, 15.0), DebugFlag::Velocity),
            (Rectangle::new(270.0, 5.0, 15.0, 15.0), DebugFlag::QuadTree),
            (
                Rectangle::new(270.0, 18.0, 15.0, 15.0),
                DebugFlag::CollisionLayer,
            ),
        ])
    }

    fn new(entries: Vec<(Rectangle, DebugFlag)>) -> Self {
        // one region per flag, at most
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, (_, flag))| entries[..i].iter().all(|(_, seen)| seen != flag)),
            "duplicate flag in click-region table"
        );
        Self { entries }
    }

    /// First region containing `point`, in table order.
    pub fn region_at(&self, point: Position) -> Option<DebugFlag> {
        self.entries
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, flag)| *flag)
    }
}
