// Window-side pixel storage.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,     // how wide the window content is (pixels)
    pub height: usize,    // how tall the window content is (pixels)
    pub pixels: Vec<u32>, // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}
