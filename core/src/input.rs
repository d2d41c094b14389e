use crate::geometry::FlipperSide;
use crate::handlers::SteeringInput;

/// Keys held during the current fixed tick. Sampled by the host every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left_flipper: bool,
    pub right_flipper: bool,
    pub steering: SteeringInput,
    pub launch: bool,
}

impl InputState {
    pub fn flipper_held(&self, side: FlipperSide) -> bool {
        match side {
            FlipperSide::Left => self.left_flipper,
            FlipperSide::Right => self.right_flipper,
        }
    }
}
