// ============================================================================
// COLORMAPS: named 256-entry intensity → RGB lookup tables
// ============================================================================
//
// The perceptually uniform maps ship as full tables (`colormap_tables.rs`).
// The rest are piecewise-linear by construction and are declared as control
// colors, expanded once into 256 entries and cached for the process.

use std::sync::OnceLock;

use super::colormap_tables;

/// One table: index is the 8-bit intensity, value is the RGB color.
pub type Lut = [[u8; 3]; 256];

/// Fallback when a requested map name is not recognised.
pub const DEFAULT_COLORMAP: Colormap = Colormap::Rainbow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Colormap {
    Autumn,
    Bone,
    Jet,
    Winter,
    Rainbow,
    Ocean,
    Summer,
    Spring,
    Cool,
    Hsv,
    Pink,
    Hot,
    Parula,
    Magma,
    Inferno,
    Plasma,
    Viridis,
    Cividis,
    Twilight,
    TwilightShifted,
    Turbo,
    DeepGreen,
}

impl Colormap {
    pub fn all() -> &'static [Colormap] {
        &[
            Colormap::Autumn,
            Colormap::Bone,
            Colormap::Jet,
            Colormap::Winter,
            Colormap::Rainbow,
            Colormap::Ocean,
            Colormap::Summer,
            Colormap::Spring,
            Colormap::Cool,
            Colormap::Hsv,
            Colormap::Pink,
            Colormap::Hot,
            Colormap::Parula,
            Colormap::Magma,
            Colormap::Inferno,
            Colormap::Plasma,
            Colormap::Viridis,
            Colormap::Cividis,
            Colormap::Twilight,
            Colormap::TwilightShifted,
            Colormap::Turbo,
            Colormap::DeepGreen,
        ]
    }

    /// Display name, as shown in the colormap picker.
    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Autumn => "Autumn",
            Colormap::Bone => "Bone",
            Colormap::Jet => "Jet",
            Colormap::Winter => "Winter",
            Colormap::Rainbow => "Rainbow",
            Colormap::Ocean => "Ocean",
            Colormap::Summer => "Summer",
            Colormap::Spring => "Spring",
            Colormap::Cool => "Cool",
            Colormap::Hsv => "HSV",
            Colormap::Pink => "Pink",
            Colormap::Hot => "Hot",
            Colormap::Parula => "Parula",
            Colormap::Magma => "Magma",
            Colormap::Inferno => "Inferno",
            Colormap::Plasma => "Plasma",
            Colormap::Viridis => "Viridis",
            Colormap::Cividis => "Cividis",
            Colormap::Twilight => "Twilight",
            Colormap::TwilightShifted => "Twilight Shifted",
            Colormap::Turbo => "Turbo",
            Colormap::DeepGreen => "Deep Green",
        }
    }

    /// Case-insensitive lookup by display name. Spaces, dashes and
    /// underscores are interchangeable ("deep-green", "Deep Green").
    pub fn from_name(name: &str) -> Option<Colormap> {
        let key = normalize(name);
        if key == "sprint" {
            // Legacy misspelling kept so old presets still resolve.
            return Some(Colormap::Spring);
        }
        Colormap::all().iter().copied().find(|c| normalize(c.name()) == key)
    }

    /// Like [`Colormap::from_name`] but falls back to [`DEFAULT_COLORMAP`].
    pub fn from_name_or_default(name: &str) -> Colormap {
        Colormap::from_name(name).unwrap_or(DEFAULT_COLORMAP)
    }

    fn index(&self) -> usize {
        Colormap::all().iter().position(|c| c == self).unwrap_or(0)
    }

    /// The 256-entry table for this map.
    pub fn lut(&self) -> &'static Lut {
        static TABLES: OnceLock<Vec<Lut>> = OnceLock::new();
        let tables = TABLES.get_or_init(|| {
            Colormap::all()
                .iter()
                .map(|c| match c.source() {
                    TableSource::Full(lut) => *lut,
                    TableSource::Stops(stops) => expand_stops(stops),
                })
                .collect()
        });
        &tables[self.index()]
    }

    fn source(&self) -> TableSource {
        match self {
            Colormap::Magma => TableSource::Full(&colormap_tables::MAGMA),
            Colormap::Inferno => TableSource::Full(&colormap_tables::INFERNO),
            Colormap::Plasma => TableSource::Full(&colormap_tables::PLASMA),
            Colormap::Viridis => TableSource::Full(&colormap_tables::VIRIDIS),
            other => TableSource::Stops(other.stops()),
        }
    }

    /// Control colors at positions in `[0, 1]`, ascending, first at 0 and last at 1.
    fn stops(&self) -> &'static [(f32, [u8; 3])] {
        match self {
            Colormap::Autumn => &[(0.0, [255, 0, 0]), (1.0, [255, 255, 0])],
            Colormap::Bone => &[
                (0.0, [0, 0, 0]),
                (0.365, [81, 81, 113]),
                (0.746, [166, 198, 198]),
                (1.0, [255, 255, 255]),
            ],
            Colormap::Jet => &[
                (0.0, [0, 0, 128]),
                (0.125, [0, 0, 255]),
                (0.375, [0, 255, 255]),
                (0.625, [255, 255, 0]),
                (0.875, [255, 0, 0]),
                (1.0, [128, 0, 0]),
            ],
            Colormap::Winter => &[(0.0, [0, 0, 255]), (1.0, [0, 255, 128])],
            Colormap::Rainbow => &[
                (0.0, [255, 0, 0]),
                (0.2, [255, 255, 0]),
                (0.4, [0, 255, 0]),
                (0.6, [0, 255, 255]),
                (0.8, [0, 0, 255]),
                (1.0, [255, 0, 255]),
            ],
            Colormap::Ocean => &[
                (0.0, [0, 128, 0]),
                (0.333, [0, 0, 85]),
                (0.667, [0, 128, 170]),
                (1.0, [255, 255, 255]),
            ],
            Colormap::Summer => &[(0.0, [0, 128, 102]), (1.0, [255, 255, 102])],
            Colormap::Spring => &[(0.0, [255, 0, 255]), (1.0, [255, 255, 0])],
            Colormap::Cool => &[(0.0, [0, 255, 255]), (1.0, [255, 0, 255])],
            Colormap::Hsv => &[
                (0.0, [255, 0, 0]),
                (0.1667, [255, 255, 0]),
                (0.3333, [0, 255, 0]),
                (0.5, [0, 255, 255]),
                (0.6667, [0, 0, 255]),
                (0.8333, [255, 0, 255]),
                (1.0, [255, 0, 0]),
            ],
            Colormap::Pink => &[
                (0.0, [30, 0, 0]),
                (0.375, [195, 128, 128]),
                (0.75, [235, 235, 181]),
                (1.0, [255, 255, 255]),
            ],
            Colormap::Hot => &[
                (0.0, [11, 0, 0]),
                (0.365, [255, 0, 0]),
                (0.746, [255, 255, 0]),
                (1.0, [255, 255, 255]),
            ],
            Colormap::Parula => &[
                (0.0, [53, 42, 135]),
                (0.25, [15, 92, 221]),
                (0.5, [18, 190, 185]),
                (0.75, [165, 190, 106]),
                (1.0, [249, 251, 14]),
            ],
            Colormap::Cividis => &[
                (0.0, [0, 34, 78]),
                (0.25, [65, 77, 108]),
                (0.5, [124, 123, 120]),
                (0.75, [187, 175, 113]),
                (1.0, [254, 232, 56]),
            ],
            Colormap::Twilight => &[
                (0.0, [226, 217, 226]),
                (0.25, [94, 130, 191]),
                (0.5, [47, 20, 57]),
                (0.75, [179, 82, 67]),
                (1.0, [226, 217, 226]),
            ],
            Colormap::TwilightShifted => &[
                (0.0, [47, 20, 57]),
                (0.25, [94, 130, 191]),
                (0.5, [226, 217, 226]),
                (0.75, [179, 82, 67]),
                (1.0, [47, 20, 57]),
            ],
            Colormap::Turbo => &[
                (0.0, [48, 18, 59]),
                (0.125, [70, 107, 227]),
                (0.25, [40, 188, 235]),
                (0.375, [50, 241, 152]),
                (0.5, [164, 252, 60]),
                (0.625, [237, 208, 58]),
                (0.75, [251, 128, 34]),
                (0.875, [207, 43, 4]),
                (1.0, [122, 4, 3]),
            ],
            Colormap::DeepGreen => &[
                (0.0, [1, 5, 1]),
                (0.25, [8, 68, 30]),
                (0.5, [22, 140, 62]),
                (0.75, [115, 201, 88]),
                (1.0, [255, 253, 178]),
            ],
            // Shipped as full tables.
            Colormap::Magma | Colormap::Inferno | Colormap::Plasma | Colormap::Viridis => &[],
        }
    }
}

enum TableSource {
    Full(&'static Lut),
    Stops(&'static [(f32, [u8; 3])]),
}

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn expand_stops(stops: &[(f32, [u8; 3])]) -> Lut {
    let mut lut = [[0u8; 3]; 256];
    let mut seg = 0usize;
    for (i, entry) in lut.iter_mut().enumerate() {
        let t = i as f32 / 255.0;
        while seg + 2 < stops.len() && t > stops[seg + 1].0 {
            seg += 1;
        }
        let (t0, c0) = stops[seg];
        let (t1, c1) = stops[(seg + 1).min(stops.len() - 1)];
        let f = if t1 > t0 { ((t - t0) / (t1 - t0)).clamp(0.0, 1.0) } else { 0.0 };
        for ch in 0..3 {
            let v = c0[ch] as f32 + (c1[ch] as f32 - c0[ch] as f32) * f;
            entry[ch] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    lut
}
