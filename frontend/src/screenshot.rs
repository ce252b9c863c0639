use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;
use ttsim_core::device::framebuffer::bgra_to_rgba;

#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("cannot write screenshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode screenshot: {0}")]
    Png(#[from] png::EncodingError),
}

/// `<dir>/ttsim-<model>-<frame>.png`
pub fn screenshot_path(dir: &Path, model: &str, frame: u64) -> PathBuf {
    dir.join(format!("ttsim-{model}-{frame:06}.png"))
}

/// Encode a BGRA frame (as produced by `Machine::render_frame`) as an 8-bit RGBA PNG.
pub fn save_png(path: &Path, width: u32, height: u32, bgra: &[u8]) -> Result<(), ScreenshotError> {
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&bgra_to_rgba(bgra))?;
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_format() {
        let path = screenshot_path(Path::new("/tmp"), "padtest", 42);
        assert_eq!(path, PathBuf::from("/tmp/ttsim-padtest-000042.png"));
    }

    #[test]
    fn test_png_round_trip() {
        let path = std::env::temp_dir().join(format!("ttsim-shot-{}.png", std::process::id()));
        // 2x1: pure red, then pure blue (BGRA).
        let bgra = [0, 0, 255, 255, 255, 0, 0, 255];
        save_png(&path, 2, 1, &bgra).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!((info.width, info.height), (2, 1));
        assert_eq!(info.color_type, png::ColorType::Rgba);
        assert_eq!(&buf[..info.buffer_size()], &[255, 0, 0, 255, 0, 0, 255, 255]);
    }
}
