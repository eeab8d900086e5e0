// sRGB <-> linear lookup tables for the blit compositor.
// Blending a soft edge over the background in linear light avoids the dark
// fringe a plain sRGB mix leaves around the blur band.

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255), 4096 steps (index = (linear * 4095).round())
    linear_to_srgb: [u8; 4096],
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, out) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *out = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, out) in l2s.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *out = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// `over` on top of `under` with coverage `t` in [0,1], mixed in linear light.
    #[inline]
    pub fn mix(&self, under: u8, over: u8, t: f32) -> u8 {
        let u = self.srgb_u8_to_linear(under);
        let o = self.srgb_u8_to_linear(over);
        self.linear_to_srgb_u8(u + (o - u) * t)
    }
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_survive_round_trip() {
        let lut = GammaLut::new();
        for v in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(v)), v);
        }
    }

    #[test]
    fn mix_endpoints_and_linear_midpoint() {
        let lut = GammaLut::new();
        assert_eq!(lut.mix(10, 240, 0.0), 10);
        assert_eq!(lut.mix(10, 240, 1.0), 240);
        // Half coverage of white over black is brighter than the sRGB midpoint.
        assert!(lut.mix(0, 255, 0.5) > 128);
    }
}
