//! Continuous color scales for chart bars and word-cloud text

/// Named sequential color scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Viridis,
    Plasma,
    Blues,
    RdBu,
}

const VIRIDIS: &[(u8, u8, u8)] = &[
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x49, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6e, 0xce, 0x58),
    (0xb5, 0xde, 0x2b),
    (0xfd, 0xe7, 0x25),
];

const PLASMA: &[(u8, u8, u8)] = &[
    (0x0d, 0x08, 0x87),
    (0x46, 0x03, 0x9f),
    (0x72, 0x01, 0xa8),
    (0x9c, 0x17, 0x9e),
    (0xbd, 0x37, 0x86),
    (0xd8, 0x57, 0x6b),
    (0xed, 0x79, 0x53),
    (0xfb, 0x9f, 0x3a),
    (0xfd, 0xca, 0x26),
    (0xf0, 0xf9, 0x21),
];

const BLUES: &[(u8, u8, u8)] = &[
    (247, 251, 255),
    (222, 235, 247),
    (198, 219, 239),
    (158, 202, 225),
    (107, 174, 214),
    (66, 146, 198),
    (33, 113, 181),
    (8, 81, 156),
    (8, 48, 107),
];

const RDBU: &[(u8, u8, u8)] = &[
    (103, 0, 31),
    (178, 24, 43),
    (214, 96, 77),
    (244, 165, 130),
    (253, 219, 199),
    (247, 247, 247),
    (209, 229, 240),
    (146, 197, 222),
    (67, 147, 195),
    (33, 102, 172),
    (5, 48, 97),
];

impl ColorScale {
    fn stops(self) -> &'static [(u8, u8, u8)] {
        match self {
            ColorScale::Viridis => VIRIDIS,
            ColorScale::Plasma => PLASMA,
            ColorScale::Blues => BLUES,
            ColorScale::RdBu => RDBU,
        }
    }

    /// Color at position `t` in `[0, 1]`, linearly interpolated between stops
    pub fn at(self, t: f64) -> String {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(stops.len() - 1);
        let frac = scaled - lower as f64;

        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (r0, g0, b0) = stops[lower];
        let (r1, g1, b1) = stops[upper];
        format!("#{:02x}{:02x}{:02x}", lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Map each value onto the scale, spanning the observed minimum to maximum
    pub fn map_values(self, values: &[usize]) -> Vec<String> {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        let range = (max - min) as f64;

        values
            .iter()
            .map(|&value| {
                let t = if range == 0.0 {
                    1.0
                } else {
                    (value - min) as f64 / range
                };
                self.at(t)
            })
            .collect()
    }

    /// The first `n` stops, used as a discrete sequence
    pub fn discrete(self, n: usize) -> Vec<String> {
        self.stops()
            .iter()
            .cycle()
            .take(n)
            .map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
            .collect()
    }
}
