/// Abstract input signals, independent of the physical device.
///
/// The host samples one snapshot per frame; the simulation never sees a
/// change mid-frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub restart: bool,
}

impl Intents {
    /// Horizontal axis in {-1, 0, +1}. Holding both directions cancels out.
    pub fn axis_x(&self) -> f64 {
        axis(self.left, self.right)
    }

    /// Vertical axis in {-1, 0, +1}; +1 is downward.
    pub fn axis_y(&self) -> f64 {
        axis(self.up, self.down)
    }
}

fn axis(negative: bool, positive: bool) -> f64 {
    (positive as i8 - negative as i8) as f64
}
