use ttsim_core::core::{HardwareModel, InputBus, Rgb222};
use ttsim_core::device::gamepad::{Button, Player};
use ttsim_core::device::raster::SyncPolarity;

use crate::clocked::{Clocked, Sequential};
use crate::pmod_rx::GamepadReceiver;
use crate::registry::ModelEntry;
use crate::vga_gen::VgaTimingGenerator;

// ---------------------------------------------------------------------------
// Layout: one row of twelve boxes per pad, in wire order (B first).
// ---------------------------------------------------------------------------

pub const BOX_LEFT: u32 = 32;
pub const BOX_PITCH: u32 = 48;
pub const BOX_SIZE: u32 = 40;
pub const ROW_TOP: [u32; 2] = [120, 280];
pub const ROW_HEIGHT: u32 = 80;

pub const BACKGROUND: Rgb222 = Rgb222::new(0, 0, 1);
pub const RELEASED: Rgb222 = Rgb222::new(1, 1, 1);
pub const PRESSED: [Rgb222; 2] = [Rgb222::new(0, 3, 0), Rgb222::new(3, 1, 0)];

/// Top-left corner of the box that shows `button` for `player`.
pub fn box_origin(player: Player, button: Button) -> (u32, u32) {
    (
        BOX_LEFT + button.bit() as u32 * BOX_PITCH,
        ROW_TOP[player.index()],
    )
}

/// Gamepad tester: shows the receiver's latched button state as lit boxes.
pub struct PadTest {
    vga: VgaTimingGenerator,
    rx: GamepadReceiver,
    out: u8,
}

impl PadTest {
    pub fn new() -> Self {
        Self {
            vga: VgaTimingGenerator::new(SyncPolarity::ActiveHigh),
            rx: GamepadReceiver::new(),
            out: 0,
        }
    }

    pub fn receiver(&self) -> &GamepadReceiver {
        &self.rx
    }

    fn color_at(&self, x: u32, y: u32) -> Rgb222 {
        let pads = self.rx.pads();
        for player in [Player::One, Player::Two] {
            let top = ROW_TOP[player.index()];
            if !(top..top + ROW_HEIGHT).contains(&y) || x < BOX_LEFT {
                continue;
            }
            let slot = (x - BOX_LEFT) / BOX_PITCH;
            let inside = (x - BOX_LEFT) % BOX_PITCH < BOX_SIZE;
            if inside && let Some(&button) = Button::ALL.get(slot as usize) {
                return if pads[player.index()].is_pressed(button) {
                    PRESSED[player.index()]
                } else {
                    RELEASED
                };
            }
        }
        BACKGROUND
    }
}

impl Default for PadTest {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequential for PadTest {
    fn posedge(&mut self, rst_n: bool, ui_in: u8) {
        if !rst_n {
            self.vga.reset();
            self.rx.reset();
            self.out = 0;
            return;
        }
        self.rx.clock(InputBus(ui_in));
        let color = self
            .vga
            .active()
            .map_or(Rgb222::BLACK, |(x, y)| self.color_at(x, y));
        self.out = self.vga.output(color).0;
        self.vga.tick();
    }

    fn uo_out(&self) -> u8 {
        self.out
    }
}

fn create() -> Box<dyn HardwareModel> {
    Box::new(Clocked::new(PadTest::new()))
}

inventory::submit! {
    ModelEntry::new("padtest", "gamepad tester, one box per button", create)
}
