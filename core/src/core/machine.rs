use crate::core::control::ControlState;
use crate::device::gamepad::decode_button_id;

/// Describes a single input button that a machine accepts.
pub struct InputButton {
    /// Machine-defined button identifier, passed to `set_input()`.
    pub id: u8,
    /// Human-readable name for display/configuration (e.g., "P1 Left", "P2 Start").
    pub name: &'static str,
}

/// Frontend-facing interface of a simulated system.
///
/// The frontend is a pure presentation layer: it knows nothing about pins,
/// sync pulses or the gamepad wire protocol. It polls events, forwards
/// button changes through `set_input()`, calls `run_frame()` once per
/// displayed frame and copies the result out with `render_frame()`.
pub trait Machine {
    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run one frame's worth of clock cycles.
    fn run_frame(&mut self);

    /// Copy the current frame into a packed 32-bit buffer.
    ///
    /// The buffer must be at least `width * height * 4` bytes (from `display_size()`).
    /// Pixels are stored left-to-right, top-to-bottom, 4 bytes per pixel in
    /// B, G, R, A order (little-endian ARGB8888).
    fn render_frame(&self, buffer: &mut [u8]);

    /// Handle an input event. `button` is a machine-defined ID from `input_map()`.
    /// `pressed` is true for key-down, false for key-up.
    ///
    /// May be called many times between frames; the accumulated state is
    /// what the next `run_frame()` sees.
    fn set_input(&mut self, button: u8, pressed: bool);

    /// Get the list of input buttons this machine accepts.
    fn input_map(&self) -> &[InputButton];

    /// Apply the control state polled at a frame boundary: button states,
    /// the reset key, and any polarity toggles (an even count cancels out).
    fn apply_controls(&mut self, controls: &ControlState) {
        let ids: Vec<u8> = self.input_map().iter().map(|b| b.id).collect();
        for id in ids {
            if let Some((player, button)) = decode_button_id(id) {
                self.set_input(id, controls.pad(player).is_pressed(button));
            }
        }
        self.set_reset_held(controls.reset_held);
        if controls.polarity_toggles % 2 == 1 {
            self.toggle_sync_polarity();
        }
    }

    /// Pulse the reset line for one cycle and clear input state.
    fn reset(&mut self);

    /// Hold (or release) the reset line for every cycle of subsequent frames.
    fn set_reset_held(&mut self, _held: bool) {}

    /// Swap the sync level the video decoder treats as active.
    fn toggle_sync_polarity(&mut self) {}

    /// Nominal frames per second, used by the frontend for pacing hints.
    fn frame_rate_hz(&self) -> f64 {
        60.0
    }
}
