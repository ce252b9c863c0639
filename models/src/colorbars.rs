use ttsim_core::core::{HardwareModel, Rgb222};
use ttsim_core::device::raster::SyncPolarity;

use crate::clocked::{Clocked, Sequential};
use crate::registry::ModelEntry;
use crate::vga_gen::VgaTimingGenerator;

/// Width of one vertical bar in pixels.
pub const BAR_WIDTH: u32 = 80;
/// First row of the grey ramp below the bars.
pub const RAMP_TOP: u32 = 400;

pub const BARS: [Rgb222; 8] = [
    Rgb222::new(3, 3, 3), // white
    Rgb222::new(3, 3, 0), // yellow
    Rgb222::new(0, 3, 3), // cyan
    Rgb222::new(0, 3, 0), // green
    Rgb222::new(3, 0, 3), // magenta
    Rgb222::new(3, 0, 0), // red
    Rgb222::new(0, 0, 3), // blue
    Rgb222::new(0, 0, 0), // black
];

/// Reference pattern: eight vertical color bars over a four-step grey ramp.
pub struct ColorBars {
    vga: VgaTimingGenerator,
    out: u8,
}

impl ColorBars {
    pub fn new(polarity: SyncPolarity) -> Self {
        Self {
            vga: VgaTimingGenerator::new(polarity),
            out: 0,
        }
    }

    /// Color the pattern has at an active pixel.
    pub fn color_at(x: u32, y: u32) -> Rgb222 {
        if y >= RAMP_TOP {
            let level = (x / 160) as u8;
            Rgb222::new(level, level, level)
        } else {
            BARS[(x / BAR_WIDTH) as usize % BARS.len()]
        }
    }

    pub fn generator(&self) -> &VgaTimingGenerator {
        &self.vga
    }
}

impl Sequential for ColorBars {
    fn posedge(&mut self, rst_n: bool, _ui_in: u8) {
        if !rst_n {
            self.vga.reset();
            self.out = 0;
            return;
        }
        let color = self
            .vga
            .active()
            .map_or(Rgb222::BLACK, |(x, y)| Self::color_at(x, y));
        self.out = self.vga.output(color).0;
        self.vga.tick();
    }

    fn uo_out(&self) -> u8 {
        self.out
    }
}

fn create_active_high() -> Box<dyn HardwareModel> {
    Box::new(Clocked::new(ColorBars::new(SyncPolarity::ActiveHigh)))
}

fn create_active_low() -> Box<dyn HardwareModel> {
    Box::new(Clocked::new(ColorBars::new(SyncPolarity::ActiveLow)))
}

inventory::submit! {
    ModelEntry::new(
        "colorbars",
        "color bars and grey ramp, active-high sync",
        create_active_high,
    )
}

inventory::submit! {
    ModelEntry::new(
        "colorbars-neg",
        "color bars and grey ramp, active-low sync",
        create_active_low,
    )
}
