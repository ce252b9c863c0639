use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use ttsim_core::core::{ControlSource, Machine};

use crate::input::{FrontendAction, KeyMap, KeyboardControls};
use crate::screenshot;
use crate::video::Video;

pub struct RunOptions {
    pub model_name: String,
    pub scale: u32,
    pub screenshot_dir: PathBuf,
}

pub fn run(machine: &mut dyn Machine, key_map: KeyMap, opts: &RunOptions) -> anyhow::Result<()> {
    let sdl_context = sdl2::init().map_err(|e| anyhow!("cannot initialize SDL: {e}"))?;
    let sdl_video = sdl_context
        .video()
        .map_err(|e| anyhow!("cannot initialize SDL video: {e}"))?;

    let title = format!("ttsim - {}", opts.model_name);
    let (width, height) = machine.display_size();
    let mut video = Video::new(&sdl_video, &title, width, height, opts.scale)?;
    let event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow!("cannot get SDL event pump: {e}"))?;
    let mut controls = KeyboardControls::new(event_pump, key_map);

    let buffer_size = (width * height * 4) as usize;
    let mut framebuffer = vec![0u8; buffer_size];
    let mut fps = FpsCounter::new(Instant::now());
    let mut frame: u64 = 0;

    log::info!(
        "running {} at {:.1} Hz nominal",
        opts.model_name,
        machine.frame_rate_hz()
    );

    loop {
        let state = controls.poll();
        if state.quit {
            break;
        }

        let mut want_screenshot = false;
        for action in controls.drain_actions() {
            match action {
                FrontendAction::ToggleFullscreen => video.toggle_fullscreen(),
                FrontendAction::Screenshot => want_screenshot = true,
            }
        }

        machine.apply_controls(&state);
        machine.run_frame();
        frame += 1;

        machine.render_frame(&mut framebuffer);
        video.present(&framebuffer)?;

        if want_screenshot {
            let path = screenshot::screenshot_path(&opts.screenshot_dir, &opts.model_name, frame);
            match screenshot::save_png(&path, width, height, &framebuffer) {
                Ok(()) => log::info!("saved {}", path.display()),
                Err(e) => log::warn!("{}: {e}", path.display()),
            }
        }

        if let Some(rate) = fps.tick(Instant::now()) {
            video.set_title(&format!("{title} ({rate:.1} FPS)"));
            log::debug!("{rate:.1} FPS");
        }
    }

    log::info!("quit after {frame} frames");
    Ok(())
}

/// Frame counter that reports a rate about once per second.
struct FpsCounter {
    since: Instant,
    frames: u32,
}

impl FpsCounter {
    const INTERVAL: Duration = Duration::from_secs(1);

    fn new(now: Instant) -> Self {
        Self {
            since: now,
            frames: 0,
        }
    }

    fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frames += 1;
        let elapsed = now.duration_since(self.since);
        if elapsed < Self::INTERVAL {
            return None;
        }
        let rate = f64::from(self.frames) / elapsed.as_secs_f64();
        self.since = now;
        self.frames = 0;
        Some(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_reported_once_per_interval() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);
        for i in 1..60 {
            assert_eq!(fps.tick(start + Duration::from_millis(i * 10)), None);
        }
        let rate = fps.tick(start + Duration::from_secs(1)).unwrap();
        assert!((rate - 60.0).abs() < 1e-9);
        assert_eq!(fps.tick(start + Duration::from_millis(1010)), None);
    }
}
