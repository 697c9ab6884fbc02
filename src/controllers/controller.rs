// src/controllers/controller.rs
/// Controller coordinates between the host window and the animation.
/// Taps start the current node's transition and the Animator;
/// frame time is turned into ticks that drive the Sequence.
use log::{debug, info, trace};
use nannou::prelude::*;
use std::error::Error;
use std::time::Duration;

use crate::animation::Animator;
use crate::config::{Config, Palette, ShapeConfig};
use crate::draw::Geometry;
use crate::models::{NodeChain, Sequence, SequenceUpdate};

/// What happened during one `Controller::advance` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ticks: u32,
    pub redraw: bool,
    pub step_completed: bool,
}

pub struct Controller {
    animator: Animator,
    sequence: Sequence,
    palette: Palette,
    shape: ShapeConfig,
}

impl Controller {
    pub fn new(config: &Config) -> Result<Self, Box<dyn Error>> {
        let palette = Palette::from_config(&config.style)?;
        let chain = NodeChain::new(palette.len(), config.step());
        let sequence = Sequence::new(chain).ok_or("node chain is empty")?;
        info!(
            "Built chain of {} nodes, ticking every {:?}",
            sequence.chain().len(),
            config.animation.tick_interval()
        );

        Ok(Self {
            animator: Animator::new(config.animation.tick_interval()),
            sequence,
            palette,
            shape: config.shape.clone(),
        })
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn render(&self, draw: &Draw, rect: Rect) {
        let geometry = Geometry::new(rect, &self.shape);
        self.sequence.draw(draw, &geometry, &self.palette);
    }

    /// Starts animating the current node. Taps during a transition are
    /// ignored, not queued; returns whether an animation began.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequence.start_updating() {
            debug!(
                "Tap ignored, node {} is still moving",
                self.sequence.current()
            );
            return false;
        }
        debug!("Tap starts node {}", self.sequence.current());
        self.animator.start();
        true
    }

    /// Feeds elapsed time to the animator and runs every tick that is due.
    /// The tick that settles a node stops the animator; ticks still banked
    /// in that call are dropped.
    pub fn advance(&mut self, dt: Duration) -> TickReport {
        let due = self.animator.tick(dt);
        let mut report = TickReport::default();

        for _ in 0..due {
            report.ticks += 1;
            report.redraw = true;
            match self.sequence.update() {
                SequenceUpdate::Moving => {
                    trace!("tick: node {}", self.sequence.current());
                }
                SequenceUpdate::StepComplete { from, to, reversed } => {
                    self.animator.stop();
                    report.step_completed = true;
                    debug!(
                        "Node {} settled, current is now {} (reversed: {})",
                        from, to, reversed
                    );
                    break;
                }
                SequenceUpdate::Idle => {
                    // nothing is transitioning
                    self.animator.stop();
                    break;
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    const TICK: Duration = Duration::from_millis(20);

    fn controller() -> Controller {
        Controller::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_new_controller_is_idle() {
        let mut controller = controller();
        assert!(!controller.is_animating());
        assert_eq!(controller.sequence().current(), 0);
        assert_eq!(controller.advance(Duration::from_secs(1)), TickReport::default());
    }

    #[test]
    fn test_tap_starts_animator_once() {
        let mut controller = controller();
        assert!(controller.handle_tap());
        assert!(controller.is_animating());
        assert!(!controller.handle_tap());

        let report = controller.advance(TICK);
        assert_eq!(report.ticks, 1);
        assert!(report.redraw);
        assert!(!report.step_completed);
        assert!(!controller.handle_tap());
    }

    #[test]
    fn test_step_completion_stops_animator() {
        let mut controller = controller();
        controller.handle_tap();

        let mut ticks = 0;
        loop {
            let report = controller.advance(TICK);
            ticks += report.ticks;
            if report.step_completed {
                break;
            }
            assert!(ticks < 1000, "step never completed");
        }

        assert!(!controller.is_animating());
        assert_eq!(controller.sequence().current(), 1);
        assert_eq!(controller.advance(TICK), TickReport::default());
        // A new tap is accepted once the node has settled
        assert!(controller.handle_tap());
    }

    #[test]
    fn test_long_frame_completes_only_one_step() {
        let mut controller = controller();
        controller.handle_tap();

        let report = controller.advance(Duration::from_secs(60));
        assert!(report.step_completed);
        assert!(report.ticks < 200);
        assert_eq!(controller.sequence().current(), 1);
        assert_eq!(controller.sequence().direction(), Direction::Forward);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_invalid_palette_is_rejected() {
        let mut config = Config::default();
        config.style.colors = vec!["#12".to_string()];
        assert!(Controller::new(&config).is_err());

        config.style.colors.clear();
        assert!(Controller::new(&config).is_err());
    }
}
