use tracing::debug;

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MovementMode {
    #[default]
    Slow,
    Fast,
}

/// Movement speeds per mode, in world units per second.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovementSpeed {
    pub slow: f32,
    pub fast: f32,
}

impl MovementSpeed {
    pub fn new(slow: f32, fast: f32) -> Self {
        Self { slow, fast }
    }

    pub fn for_mode(&self, mode: MovementMode) -> f32 {
        match mode {
            MovementMode::Slow => self.slow,
            MovementMode::Fast => self.fast,
        }
    }
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self {
            slow: 2.0,
            fast: 5.0,
        }
    }
}

/// Tuning shared by every movement variant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementSettings {
    pub speed: MovementSpeed,
    /// Beyond this distance to a navigation target the actor runs instead of walking.
    pub nav_target_walk_distance_threshold: f32,
    /// Arrival radius used when the blackboard does not override it.
    pub stopping_distance: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: MovementSpeed::default(),
            nav_target_walk_distance_threshold: 3.0,
            stopping_distance: 0.5,
        }
    }
}

/// What navigation needs from an actor's movement component.
///
/// Ground and flying actors implement this differently; navigation code only ever talks to the
/// trait.
pub trait Movement {
    fn position(&self) -> Vec2;

    fn movement_mode(&self) -> MovementMode;

    fn set_movement_mode(&mut self, mode: MovementMode);

    fn nav_target_walk_distance_threshold(&self) -> f32;

    fn stopping_distance(&self) -> f32;

    /// Request movement toward `position() + delta` at the current mode's speed.
    fn update_movement(&mut self, delta: Vec2);
}

#[derive(Debug, Clone, PartialEq)]
struct MotionState {
    position: Vec2,
    mode: MovementMode,
    settings: MovementSettings,
    // Requested displacement from the last `update_movement`, already projected onto the
    // variant's allowed axes.
    pending: Vec2,
}

impl MotionState {
    fn new(position: Vec2, settings: MovementSettings) -> Self {
        Self {
            position,
            mode: MovementMode::Slow,
            settings,
            pending: Vec2::ZERO,
        }
    }

    fn set_mode(&mut self, mode: MovementMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "movement mode changed");
            self.mode = mode;
        }
    }

    fn velocity(&self) -> Vec2 {
        self.pending.normalized() * self.settings.speed.for_mode(self.mode)
    }

    /// Advance by `dt` seconds without overshooting the requested displacement.
    fn step(&mut self, dt: f32) {
        let remaining = self.pending.length();
        if remaining <= f32::EPSILON {
            return;
        }
        let travel = (self.settings.speed.for_mode(self.mode) * dt.max(0.0)).min(remaining);
        let moved = self.pending.normalized() * travel;
        self.position += moved;
        self.pending -= moved;
    }
}

macro_rules! impl_motion_accessors {
    ($ty:ty) => {
        impl $ty {
            pub fn settings(&self) -> &MovementSettings {
                &self.state.settings
            }

            /// Velocity the actor is currently trying to move at.
            pub fn velocity(&self) -> Vec2 {
                self.state.velocity()
            }

            /// Displacement still to cover from the last movement request.
            pub fn pending_delta(&self) -> Vec2 {
                self.state.pending
            }

            pub fn step(&mut self, dt: f32) {
                self.state.step(dt);
            }

            pub fn teleport(&mut self, position: Vec2) {
                self.state.position = position;
                self.state.pending = Vec2::ZERO;
            }
        }
    };
}

/// Walking actor: gravity owns the vertical axis, so only horizontal deltas are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundMovement {
    state: MotionState,
}

impl GroundMovement {
    pub fn new(position: Vec2, settings: MovementSettings) -> Self {
        Self {
            state: MotionState::new(position, settings),
        }
    }
}

impl_motion_accessors!(GroundMovement);

impl Movement for GroundMovement {
    fn position(&self) -> Vec2 {
        self.state.position
    }

    fn movement_mode(&self) -> MovementMode {
        self.state.mode
    }

    fn set_movement_mode(&mut self, mode: MovementMode) {
        self.state.set_mode(mode);
    }

    fn nav_target_walk_distance_threshold(&self) -> f32 {
        self.state.settings.nav_target_walk_distance_threshold
    }

    fn stopping_distance(&self) -> f32 {
        self.state.settings.stopping_distance
    }

    fn update_movement(&mut self, delta: Vec2) {
        self.state.pending = Vec2::new(delta.x, 0.0);
    }
}

/// Flying actor: moves freely along both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightMovement {
    state: MotionState,
}

impl FlightMovement {
    pub fn new(position: Vec2, settings: MovementSettings) -> Self {
        Self {
            state: MotionState::new(position, settings),
        }
    }
}

impl_motion_accessors!(FlightMovement);

impl Movement for FlightMovement {
    fn position(&self) -> Vec2 {
        self.state.position
    }

    fn movement_mode(&self) -> MovementMode {
        self.state.mode
    }

    fn set_movement_mode(&mut self, mode: MovementMode) {
        self.state.set_mode(mode);
    }

    fn nav_target_walk_distance_threshold(&self) -> f32 {
        self.state.settings.nav_target_walk_distance_threshold
    }

    fn stopping_distance(&self) -> f32 {
        self.state.settings.stopping_distance
    }

    fn update_movement(&mut self, delta: Vec2) {
        self.state.pending = delta;
    }
}
