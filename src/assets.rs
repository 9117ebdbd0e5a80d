//! Sprite assets with per-pixel opacity, used for both rendering and
//! collision masks.
//!
//! Sprites load from plain text files (one character per pixel, non-space
//! means opaque). A missing or unparseable file falls back to a solid
//! placeholder of the same nominal size, so collision geometry never depends
//! on which assets are installed.

use ratatui::style::Color;
use std::fs;
use std::path::PathBuf;

/// Nominal bird sprite size in pixels.
pub const BIRD_SIZE: (usize, usize) = (50, 50);
/// Nominal pipe segment sprite size in pixels.
pub const PIPE_SIZE: (usize, usize) = (80, 300);

/// Per-pixel solidity grid used for exact collision testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl Mask {
    /// A fully solid mask.
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![true; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Solidity at (x, y); out-of-range coordinates are empty.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.bits[y as usize * self.width + x as usize]
    }

    /// Pixel-exact overlap test against `other` placed at `offset` relative
    /// to this mask's origin.
    pub fn overlap(&self, other: &Mask, offset: (i32, i32)) -> bool {
        let (dx, dy) = offset;

        let x_start = dx.max(0);
        let x_end = (dx + other.width as i32).min(self.width as i32);
        let y_start = dy.max(0);
        let y_end = (dy + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - dx, y - dy) {
                    return true;
                }
            }
        }
        false
    }
}

/// A fixed-size 2D image with per-pixel opacity and a display color.
#[derive(Debug, Clone)]
pub struct Sprite {
    width: usize,
    height: usize,
    opaque: Vec<bool>,
    pub color: Color,
}

impl Sprite {
    /// A solid rectangle sprite.
    pub fn solid(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            opaque: vec![true; width * height],
            color,
        }
    }

    /// Parse a sprite from text, one character per pixel. Non-space
    /// characters are opaque. Short lines are padded transparent to the
    /// widest line. Returns `None` for empty input.
    pub fn from_text(text: &str, color: Color) -> Option<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        if lines.is_empty() || width == 0 {
            return None;
        }

        let mut opaque = Vec::with_capacity(width * lines.len());
        for line in &lines {
            let mut count = 0;
            for ch in line.chars() {
                opaque.push(ch != ' ');
                count += 1;
            }
            while count < width {
                opaque.push(false);
                count += 1;
            }
        }

        Some(Self {
            width,
            height: lines.len(),
            opaque,
            color,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Opacity at (x, y); out-of-range coordinates are transparent.
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.opaque[y as usize * self.width + x as usize]
    }

    /// Derive the collision mask from the current silhouette.
    pub fn mask(&self) -> Mask {
        Mask {
            width: self.width,
            height: self.height,
            bits: self.opaque.clone(),
        }
    }

    /// The sprite mirrored top-to-bottom (used for the hanging pipe segment).
    pub fn flipped_vertical(&self) -> Self {
        let mut opaque = Vec::with_capacity(self.opaque.len());
        for row in (0..self.height).rev() {
            let start = row * self.width;
            opaque.extend_from_slice(&self.opaque[start..start + self.width]);
        }
        Self {
            width: self.width,
            height: self.height,
            opaque,
            color: self.color,
        }
    }
}

/// Loads sprites by logical name from a directory, with deterministic
/// placeholder fallback.
pub struct AssetProvider {
    root: PathBuf,
}

impl AssetProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read and parse `<root>/<name>.txt`. `None` when the file is missing
    /// or empty.
    pub fn try_load(&self, name: &str) -> Option<Sprite> {
        let path = self.root.join(format!("{}.txt", name));
        let text = fs::read_to_string(path).ok()?;
        Sprite::from_text(&text, display_color(name))
    }

    /// Load a sprite, substituting the placeholder when the asset is
    /// missing. Never fails.
    pub fn load(&self, name: &str) -> Sprite {
        self.try_load(name).unwrap_or_else(|| placeholder(name))
    }
}

/// Nominal size for a logical asset name.
pub fn nominal_size(name: &str) -> (usize, usize) {
    match name {
        "bird" => BIRD_SIZE,
        "pipe" => PIPE_SIZE,
        "background" => (
            crate::constants::PLAY_WIDTH as usize,
            crate::constants::PLAY_HEIGHT as usize,
        ),
        _ => BIRD_SIZE,
    }
}

fn display_color(name: &str) -> Color {
    match name {
        "bird" => Color::Yellow,
        "pipe" => Color::Green,
        "background" => Color::Blue,
        _ => Color::White,
    }
}

/// Deterministic solid substitute of the nominal size and shape.
pub fn placeholder(name: &str) -> Sprite {
    let (width, height) = nominal_size(name);
    Sprite::solid(width, height, display_color(name))
}

/// The sprite set one session renders and collides against.
pub struct GameAssets {
    pub bird: Sprite,
    pub pipe: Sprite,
    /// Vertical mirror of `pipe`, for the hanging top segment.
    pub pipe_top: Sprite,
    pub background: Sprite,
}

impl GameAssets {
    pub fn load(provider: &AssetProvider) -> Self {
        let pipe = provider.load("pipe");
        Self {
            bird: provider.load("bird"),
            pipe_top: pipe.flipped_vertical(),
            pipe,
            background: provider.load("background"),
        }
    }
}
