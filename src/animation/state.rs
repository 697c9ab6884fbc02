// src/animation/state.rs
//
// Per-node progress state machine.
// A node rests at 0 or 1 and moves to the other rest position one tick at a time.

/// Where a node is in its transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Advancing,
    Retreating,
}

/// Result of a single `AnimationState::update` tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateUpdate {
    Idle,
    Moving,
    Completed,
}

#[derive(Debug, Clone)]
pub struct AnimationState {
    scale: f32,
    direction: i8,
    prev_scale: f32,
    step: f32,
}

impl AnimationState {
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: 0,
            prev_scale: 0.0,
            step,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        match self.direction {
            0 => Phase::Idle,
            d if d > 0 => Phase::Advancing,
            _ => Phase::Retreating,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.direction == 0
    }

    /// Moves `scale` one step toward the opposite rest position.
    ///
    /// Once a full unit has been travelled the scale snaps onto the new rest
    /// position, the state returns to idle and `Completed` is reported.
    pub fn update(&mut self) -> StateUpdate {
        if self.direction == 0 {
            return StateUpdate::Idle;
        }

        let direction = f32::from(self.direction);
        self.scale += direction * self.step;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + direction;
            self.direction = 0;
            self.prev_scale = self.scale;
            return StateUpdate::Completed;
        }
        StateUpdate::Moving
    }

    /// Begins a transition away from the current rest position.
    ///
    /// Returns false, changing nothing, if a transition is already running.
    pub fn start_updating(&mut self) -> bool {
        if self.direction != 0 {
            return false;
        }
        // +1 when resting at 0, -1 when resting at 1
        self.direction = if self.prev_scale < 0.5 { 1 } else { -1 };
        true
    }
}
