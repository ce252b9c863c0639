use ttsim_core::core::Machine;
use ttsim_core::device::raster::SyncPolarity;
use ttsim_core::harness::Harness;
use ttsim_models::colorbars::{BARS, ColorBars};
use ttsim_models::Clocked;

fn harness(polarity: SyncPolarity) -> Harness<Clocked<ColorBars>> {
    Harness::new(Clocked::new(ColorBars::new(polarity)))
}

// The decoder resyncs on every cycle of the vertical sync pulse's
// hsync overlap, so from the second frame on the picture sits one pixel
// right of and two lines above the generator's coordinates.
fn decoded_source(x: u32, y: u32) -> (u32, u32) {
    (x - 1, y + 2)
}

#[test]
fn test_bars_decode() {
    let mut sys = harness(SyncPolarity::ActiveHigh);
    sys.run_frame();
    sys.run_frame();

    let fb = sys.framebuffer();
    for (k, bar) in BARS.iter().enumerate() {
        let x = 40 + 80 * k;
        assert_eq!(fb.get(x, 200), bar.to_rgb888(), "bar {k}");
    }
}

#[test]
fn test_grey_ramp_decodes() {
    let mut sys = harness(SyncPolarity::ActiveHigh);
    sys.run_frame();
    sys.run_frame();

    let fb = sys.framebuffer();
    for level in 0..4u8 {
        let x = 80 + 160 * level as usize;
        let v = level * 85;
        assert_eq!(fb.get(x, 440), (v, v, v), "level {level}");
    }
}

#[test]
fn test_picture_offset_after_resync() {
    let mut sys = harness(SyncPolarity::ActiveHigh);
    sys.run_frame();
    sys.run_frame();
    let fb = sys.framebuffer();

    for &(x, y) in &[(1u32, 0u32), (80, 10), (81, 399), (639, 477), (320, 398)] {
        let (sx, sy) = decoded_source(x, y);
        let expected = ColorBars::color_at(sx, sy).to_rgb888();
        assert_eq!(fb.get(x as usize, y as usize), expected, "pixel ({x}, {y})");
    }

    // Column 0 shows horizontal blanking; the last two rows show the
    // generator's first front-porch lines.
    assert_eq!(fb.get(0, 100), (0, 0, 0));
    assert_eq!(fb.get(320, 478), (0, 0, 0));
    assert_eq!(fb.get(320, 479), (0, 0, 0));
}

#[test]
fn test_active_low_model_needs_polarity_toggle() {
    let mut sys = harness(SyncPolarity::ActiveLow);
    sys.run_frame();
    sys.run_frame();
    assert!(sys.framebuffer().as_bytes().iter().all(|&b| b == 0));

    sys.toggle_sync_polarity();
    sys.run_frame();
    sys.run_frame();
    assert_eq!(sys.framebuffer().get(40, 200), BARS[0].to_rgb888());
    assert_eq!(sys.framebuffer().get(600, 200), BARS[7].to_rgb888());
}

#[test]
fn test_reset_held_blanks_output() {
    let mut sys = harness(SyncPolarity::ActiveHigh);
    sys.set_reset_held(true);
    sys.run_frame();
    assert_eq!(sys.model().design().generator().position(), (0, 0));
    assert!(sys.framebuffer().as_bytes().chunks_exact(4).all(|px| px[..3] == [0, 0, 0]));
}
