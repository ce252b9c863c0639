use crate::core::pins::OutputBus;
use crate::device::framebuffer::FrameBuffer;
use crate::device::raster::RasterTracker;

/// Decode the color lines of an output bus value to 8-bit RGB.
#[inline]
pub fn decode_pixel(out: OutputBus) -> (u8, u8, u8) {
    out.color().to_rgb888()
}

/// Write this cycle's pixel if the raster is inside the active window.
///
/// Returns whether a write happened. Outside the window this is a no-op, so
/// the framebuffer bounds can never be exceeded.
#[inline]
pub fn composite(fb: &mut FrameBuffer, raster: &RasterTracker, out: OutputBus) -> bool {
    match raster.active_pixel() {
        Some((x, y)) if x < fb.width() && y < fb.height() => {
            fb.put(x, y, decode_pixel(out));
            true
        }
        _ => false,
    }
}
