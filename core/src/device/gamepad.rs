//! Gamepad PMOD serial emulator.
//!
//! Generates the clock/data/latch waveform a gamepad adapter puts on the
//! input bus. Each 400-cycle period starts with 24 clock pulses (48 cycles)
//! that expose the 24-bit composite of both pads one bit at a time, followed
//! by a single-cycle latch pulse at phase 49. The rest of the period is idle.
//!
//! ```text
//! phase  0  1  2  3  4 ... 46 47 48 49 50 ... 399
//! clock  0  1  0  1  0 ...  0  1  0  0  0 ...   0
//! data   -  b0 b0 b1 b1 ... b22 b23 b23 b0 b0 ... b0
//! latch  0  0  0  0  0 ...  0  0  0  1  0 ...   0
//! ```
use crate::core::machine::InputButton;
use crate::core::pins::InputBus;

/// Length of one protocol period in cycles.
pub const PERIOD: u64 = 400;
/// Clock pulses per period: 12 buttons for each of two pads.
pub const PULSES: u64 = 24;
/// Phase at which the latch line is asserted.
pub const LATCH_PHASE: u64 = 2 * PULSES + 1;

/// Buttons on one pad, in wire order (bit 0 first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    B,
    Y,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
    A,
    X,
    L,
    R,
}

impl Button {
    pub const ALL: [Button; 12] = [
        Button::B,
        Button::Y,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::X,
        Button::L,
        Button::R,
    ];

    /// Bit position of this button within a [`ButtonSnapshot`].
    pub const fn bit(self) -> u16 {
        self as u16
    }
}

/// Which pad a snapshot belongs to.
///
/// `One` is pad 0: its snapshot occupies the upper 12 bits of the wire word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// Buttons held on one pad, packed one bit per [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonSnapshot(u16);

impl ButtonSnapshot {
    pub const MASK: u16 = 0x0FFF;

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub fn is_pressed(self, button: Button) -> bool {
        self.0 & (1 << button.bit()) != 0
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.0 |= 1 << button.bit();
        } else {
            self.0 &= !(1 << button.bit());
        }
    }

    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }
}

/// Compose the 24-bit wire word: pad 0 in bits 12-23, pad 1 in bits 0-11.
pub fn wire_word(pads: [ButtonSnapshot; 2]) -> u32 {
    ((pads[0].bits() as u32) << 12) | pads[1].bits() as u32
}

/// Input bus value for protocol phase `phase` (already reduced mod [`PERIOD`]).
///
/// Pure function of the phase and the wire word. At phase 0 the data index
/// would be -1; no bit is exposed there and data reads low.
pub fn encode_phase(phase: u64, word: u32) -> InputBus {
    let clock = phase < 2 * PULSES && phase % 2 == 1;
    let data = if phase == 0 {
        false
    } else {
        let index = if phase < 2 * PULSES + 1 {
            (phase - 1) >> 1
        } else {
            0
        };
        (word >> index) & 1 != 0
    };
    let latch = phase == LATCH_PHASE;
    InputBus::new(clock, data, latch)
}

/// Protocol state: a free-running cycle counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GamepadPmod {
    counter: u64,
}

impl GamepadPmod {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current protocol phase (`counter mod PERIOD`).
    pub fn phase(&self) -> u64 {
        self.counter % PERIOD
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Produce this cycle's input bus value and advance the counter.
    pub fn step(&mut self, pads: [ButtonSnapshot; 2]) -> InputBus {
        let bus = encode_phase(self.phase(), wire_word(pads));
        self.counter = self.counter.wrapping_add(1);
        bus
    }
}

// ---------------------------------------------------------------------------
// Input map
// ---------------------------------------------------------------------------

/// Button ID layout: `player * 16 + button bit`.
pub const fn button_id(player: Player, button: Button) -> u8 {
    (player.index() as u8) * 16 + button.bit() as u8
}

/// Inverse of [`button_id`].
pub fn decode_button_id(id: u8) -> Option<(Player, Button)> {
    let player = match id / 16 {
        0 => Player::One,
        1 => Player::Two,
        _ => return None,
    };
    Button::ALL
        .get((id % 16) as usize)
        .map(|&button| (player, button))
}

macro_rules! pad_buttons {
    ($player:expr, $prefix:literal) => {
        [
            InputButton { id: button_id($player, Button::B), name: concat!($prefix, " B") },
            InputButton { id: button_id($player, Button::Y), name: concat!($prefix, " Y") },
            InputButton { id: button_id($player, Button::Select), name: concat!($prefix, " Select") },
            InputButton { id: button_id($player, Button::Start), name: concat!($prefix, " Start") },
            InputButton { id: button_id($player, Button::Up), name: concat!($prefix, " Up") },
            InputButton { id: button_id($player, Button::Down), name: concat!($prefix, " Down") },
            InputButton { id: button_id($player, Button::Left), name: concat!($prefix, " Left") },
            InputButton { id: button_id($player, Button::Right), name: concat!($prefix, " Right") },
            InputButton { id: button_id($player, Button::A), name: concat!($prefix, " A") },
            InputButton { id: button_id($player, Button::X), name: concat!($prefix, " X") },
            InputButton { id: button_id($player, Button::L), name: concat!($prefix, " L") },
            InputButton { id: button_id($player, Button::R), name: concat!($prefix, " R") },
        ]
    };
}

const P1_BUTTONS: [InputButton; 12] = pad_buttons!(Player::One, "P1");
const P2_BUTTONS: [InputButton; 12] = pad_buttons!(Player::Two, "P2");

/// Every button of both pads, P1 first.
pub static GAMEPAD_INPUT_MAP: [InputButton; 24] = {
    let mut map = [const { InputButton { id: 0, name: "" } }; 24];
    let mut i = 0;
    while i < 12 {
        map[i] = InputButton {
            id: P1_BUTTONS[i].id,
            name: P1_BUTTONS[i].name,
        };
        map[i + 12] = InputButton {
            id: P2_BUTTONS[i].id,
            name: P2_BUTTONS[i].name,
        };
        i += 1;
    }
    map
};
