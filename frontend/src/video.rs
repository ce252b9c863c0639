use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("cannot create window: {0}")]
    Window(String),

    #[error("cannot create renderer: {0}")]
    Renderer(String),

    #[error("cannot draw frame: {0}")]
    Present(String),
}

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    fullscreen: bool,
}

impl Video {
    /// Create an SDL window and renderer for the given native resolution.
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        native_width: u32,
        native_height: u32,
        scale: u32,
    ) -> Result<Self, VideoError> {
        let window = sdl_video
            .window(title, native_width * scale, native_height * scale)
            .position_centered()
            .build()
            .map_err(|e| VideoError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| VideoError::Renderer(e.to_string()))?;

        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            texture_creator,
            width: native_width,
            height: native_height,
            fullscreen: false,
        })
    }

    /// Upload a BGRA framebuffer to the texture and present it.
    pub fn present(&mut self, framebuffer: &[u8]) -> Result<(), VideoError> {
        let mut texture = self
            .texture_creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, self.width, self.height)
            .map_err(|e| VideoError::Present(e.to_string()))?;

        texture
            .update(None, framebuffer, (self.width * 4) as usize)
            .map_err(|e| VideoError::Present(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&texture, None, None)
            .map_err(VideoError::Present)?;
        self.canvas.present();
        Ok(())
    }

    /// Switch between windowed and desktop fullscreen. Failure is not fatal.
    pub fn toggle_fullscreen(&mut self) {
        let mode = if self.fullscreen {
            FullscreenType::Off
        } else {
            FullscreenType::Desktop
        };
        match self.canvas.window_mut().set_fullscreen(mode) {
            Ok(()) => {
                self.fullscreen = !self.fullscreen;
                log::debug!("fullscreen {}", if self.fullscreen { "on" } else { "off" });
            }
            Err(e) => log::warn!("cannot change fullscreen mode: {e}"),
        }
    }

    pub fn set_title(&mut self, title: &str) {
        if let Err(e) = self.canvas.window_mut().set_title(title) {
            log::warn!("cannot set window title: {e}");
        }
    }
}
