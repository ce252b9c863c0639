//! Frame driver: runs fixed-length bursts of clock cycles against a
//! hardware model, decoding video and generating gamepad input as it goes.

use crate::core::control::ControlState;
use crate::core::machine::{InputButton, Machine};
use crate::core::model::HardwareModel;
use crate::core::pins::{InputBus, OutputBus};
use crate::device::clock;
use crate::device::compositor;
use crate::device::framebuffer::{BYTES_PER_PIXEL, FrameBuffer};
use crate::device::gamepad::{self, ButtonSnapshot, GAMEPAD_INPUT_MAP, GamepadPmod};
use crate::device::raster::{RasterTracker, SyncPolarity, VGA_640X480, VgaTiming};

/// Pixel clock of the 640x480 mode, in Hz.
pub const PIXEL_CLOCK_HZ: f64 = 25_175_000.0;

pub struct Harness<M: HardwareModel> {
    model: M,
    raster: RasterTracker,
    gamepad: GamepadPmod,
    pads: [ButtonSnapshot; 2],
    // Gamepad output computed during the previous cycle; driven on the next.
    ui_in: InputBus,
    polarity: SyncPolarity,
    reset_held: bool,
    framebuffer: FrameBuffer,
    cycles_per_frame: u64,
    frames: u64,
}

impl<M: HardwareModel> Harness<M> {
    /// Wrap a model with the standard 640x480 timing and reset it.
    pub fn new(model: M) -> Self {
        Self::with_timing(model, VGA_640X480)
    }

    pub fn with_timing(model: M, timing: VgaTiming) -> Self {
        let mut harness = Self {
            model,
            raster: RasterTracker::new(timing),
            gamepad: GamepadPmod::new(),
            pads: [ButtonSnapshot::default(); 2],
            ui_in: InputBus::IDLE,
            polarity: SyncPolarity::default(),
            reset_held: false,
            framebuffer: FrameBuffer::new(timing.h_active as usize, timing.v_active as usize),
            cycles_per_frame: timing.frame_cycles(),
            frames: 0,
        };
        harness.pulse_reset();
        log::info!(
            "power-on reset done, {} cycles per frame",
            harness.cycles_per_frame
        );
        harness
    }

    pub fn with_cycles_per_frame(mut self, cycles: u64) -> Self {
        self.cycles_per_frame = cycles;
        self
    }

    pub fn with_polarity(mut self, polarity: SyncPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn raster(&self) -> &RasterTracker {
        &self.raster
    }

    pub fn gamepad(&self) -> &GamepadPmod {
        &self.gamepad
    }

    pub fn polarity(&self) -> SyncPolarity {
        self.polarity
    }

    pub fn set_polarity(&mut self, polarity: SyncPolarity) {
        self.polarity = polarity;
    }

    pub fn cycles_per_frame(&self) -> u64 {
        self.cycles_per_frame
    }

    /// Frames completed since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pads(&self) -> [ButtonSnapshot; 2] {
        self.pads
    }

    pub fn set_pads(&mut self, pads: [ButtonSnapshot; 2]) {
        self.pads = pads;
    }

    /// One reset cycle with the input bus idle. Touches neither the raster
    /// nor the gamepad counter.
    fn pulse_reset(&mut self) {
        clock::advance_cycle(&mut self.model, true, InputBus::IDLE);
    }

    /// Run a single clock cycle and return the output bus it produced.
    ///
    /// Order within the cycle: clock both edges, resync the raster, compute
    /// next cycle's gamepad bits, composite the pixel, advance the raster.
    pub fn step(&mut self) -> OutputBus {
        let out = clock::advance_cycle(&mut self.model, self.reset_held, self.ui_in);
        self.raster.sync(out, self.polarity);
        self.ui_in = self.gamepad.step(self.pads);
        compositor::composite(&mut self.framebuffer, &self.raster, out);
        self.raster.advance();
        out
    }
}

impl<M: HardwareModel> Machine for Harness<M> {
    fn display_size(&self) -> (u32, u32) {
        (self.framebuffer.width() as u32, self.framebuffer.height() as u32)
    }

    fn run_frame(&mut self) {
        for _ in 0..self.cycles_per_frame {
            self.step();
        }
        self.frames += 1;
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        let bytes = self.framebuffer.as_bytes();
        let len = bytes.len().min(buffer.len() / BYTES_PER_PIXEL * BYTES_PER_PIXEL);
        buffer[..len].copy_from_slice(&bytes[..len]);
    }

    fn set_input(&mut self, button: u8, pressed: bool) {
        if let Some((player, button)) = gamepad::decode_button_id(button) {
            self.pads[player.index()].set(button, pressed);
        }
    }

    fn input_map(&self) -> &[InputButton] {
        &GAMEPAD_INPUT_MAP
    }

    fn apply_controls(&mut self, controls: &ControlState) {
        self.pads = controls.pads;
        self.set_reset_held(controls.reset_held);
        if controls.polarity_toggles % 2 == 1 {
            self.toggle_sync_polarity();
        }
    }

    fn reset(&mut self) {
        self.pulse_reset();
        self.pads = [ButtonSnapshot::default(); 2];
        log::info!("reset");
    }

    fn set_reset_held(&mut self, held: bool) {
        if held != self.reset_held {
            log::debug!("reset {}", if held { "held" } else { "released" });
        }
        self.reset_held = held;
    }

    fn toggle_sync_polarity(&mut self) {
        self.polarity = self.polarity.toggled();
        log::info!("sync polarity now {:?}", self.polarity);
    }

    fn frame_rate_hz(&self) -> f64 {
        PIXEL_CLOCK_HZ / self.cycles_per_frame.max(1) as f64
    }
}

impl<M: HardwareModel> Drop for Harness<M> {
    fn drop(&mut self) {
        self.model.finish();
    }
}
