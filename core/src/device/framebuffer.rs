/// Fixed-size 32-bit framebuffer, stored in the byte order the display
/// uploads directly: B, G, R, A per pixel.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

pub const BYTES_PER_PIXEL: usize = 4;

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row.
    pub fn pitch(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    /// Store an opaque pixel. Callers guarantee `x < width`, `y < height`.
    #[inline]
    pub fn put(&mut self, x: usize, y: usize, (r, g, b): (u8, u8, u8)) {
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&[b, g, r, 0xFF]);
    }

    /// Read back a pixel as (R, G, B).
    pub fn get(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        (self.pixels[i + 2], self.pixels[i + 1], self.pixels[i])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Convert to tightly packed RGBA rows (for image export).
    pub fn to_rgba(&self) -> Vec<u8> {
        bgra_to_rgba(&self.pixels)
    }
}

/// Swap the red and blue bytes of every BGRA pixel.
pub fn bgra_to_rgba(bgra: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bgra.len());
    for px in bgra.chunks_exact(BYTES_PER_PIXEL) {
        out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
    out
}
