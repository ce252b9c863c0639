use crate::device::gamepad::{ButtonSnapshot, Player};

/// User controls as seen at a frame boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Buttons currently held, indexed by [`Player::index`].
    pub pads: [ButtonSnapshot; 2],
    /// The reset key is held down.
    pub reset_held: bool,
    /// Number of sync-polarity toggle requests since the last poll.
    pub polarity_toggles: u32,
    /// The user asked to quit.
    pub quit: bool,
}

impl ControlState {
    pub fn pad(&self, player: Player) -> ButtonSnapshot {
        self.pads[player.index()]
    }

    pub fn pad_mut(&mut self, player: Player) -> &mut ButtonSnapshot {
        &mut self.pads[player.index()]
    }
}

/// Source of user input, polled once per displayed frame.
///
/// Implementations hide the windowing toolkit: the harness only ever sees
/// the current button set per pad and a handful of requests.
pub trait ControlSource {
    /// Drain pending events and return the resulting state.
    fn poll(&mut self) -> ControlState;
}
