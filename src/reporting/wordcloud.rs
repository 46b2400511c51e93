//! Frequency-weighted word cloud rendered as inline SVG
//!
//! Words are sized linearly by frequency relative to the most frequent word
//! and placed largest first along an Archimedean spiral that starts at the
//! canvas center. A candidate position is accepted when the word's bounding box
//! lies inside the canvas and does not intersect any box placed before it.
//! A word that finds no position is shrunk and retried down to the minimum
//! font size, and no later word is drawn larger than the last one placed.
//! Once a word does not fit even at the minimum size the canvas is full and
//! layout stops, so the placed words are always the most frequent ones.

use log::debug;
use std::fmt::Write;

use crate::analysis::keywords::{KeywordCount, word_frequencies};
use crate::core::constants::wordcloud;
use crate::reporting::escape_html;
use crate::reporting::palette::ColorScale;

/// Approximate advance width of one glyph as a fraction of the font size
const GLYPH_WIDTH_RATIO: f64 = 0.6;
/// Gap kept around every word box
const PADDING: f64 = 2.0;
/// Largest angle increment between spiral probes, in radians
const SPIRAL_STEP: f64 = 0.1;
/// Distance along the spiral between probes once the radius grows
const ARC_STEP: f64 = 6.0;
/// Radial growth per radian
const SPIRAL_SPACING: f64 = 1.5;
/// Share of the canvas the largest word may occupy
const FIT_MARGIN: f64 = 0.95;
/// Factor applied to the font size after a failed placement
const SHRINK_FACTOR: f64 = 0.9;
/// Highest point of the color scale used for text; the top of Plasma is too pale on white
const MAX_COLOR_POSITION: f64 = 0.85;

/// Axis-aligned box in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    fn centered(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.width <= width && self.y + self.height <= height
    }

    fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A word that found a position on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    pub count: usize,
    pub font_size: f64,
    pub bounds: Rect,
    pub color: String,
}

/// Canvas and sizing settings for a word cloud
#[derive(Debug, Clone)]
pub struct WordCloudBuilder {
    width: u32,
    height: u32,
    max_words: usize,
    min_font_size: f64,
    max_font_size: f64,
    background: &'static str,
    scale: ColorScale,
}

impl Default for WordCloudBuilder {
    fn default() -> Self {
        Self {
            width: wordcloud::WIDTH,
            height: wordcloud::HEIGHT,
            max_words: wordcloud::MAX_WORDS,
            min_font_size: wordcloud::MIN_FONT_SIZE,
            max_font_size: wordcloud::MAX_FONT_SIZE,
            background: wordcloud::BACKGROUND,
            scale: ColorScale::Plasma,
        }
    }
}

impl WordCloudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the whitespace tokens of `text` and lay them out
    pub fn generate(&self, text: &str) -> WordCloud {
        let mut frequencies = word_frequencies(text);
        frequencies.truncate(self.max_words);
        self.generate_from_frequencies(&frequencies)
    }

    /// Lay out already counted words; the input must be sorted most frequent first
    pub fn generate_from_frequencies(&self, frequencies: &[KeywordCount]) -> WordCloud {
        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let sizes = self.font_sizes(frequencies, width, height);
        let total = frequencies.len().max(1) as f64;

        let mut words: Vec<PlacedWord> = Vec::with_capacity(frequencies.len());
        let mut occupied: Vec<Rect> = Vec::with_capacity(frequencies.len());
        let mut size_cap = self.max_font_size;
        for (rank, (entry, preferred)) in frequencies.iter().zip(sizes).enumerate() {
            let Some((bounds, font_size)) =
                self.place(&entry.keyword, preferred.min(size_cap), width, height, &occupied)
            else {
                debug!(
                    "Word cloud full after {} of {} words",
                    words.len(),
                    frequencies.len()
                );
                break;
            };

            size_cap = font_size;
            occupied.push(bounds);
            words.push(PlacedWord {
                text: entry.keyword.clone(),
                count: entry.count,
                font_size,
                bounds,
                color: self.scale.at(rank as f64 / total * MAX_COLOR_POSITION),
            });
        }

        WordCloud {
            width: self.width,
            height: self.height,
            background: self.background,
            words,
        }
    }

    /// Try `font_size` first, shrinking until the word fits or the minimum is reached
    fn place(
        &self,
        text: &str,
        mut font_size: f64,
        width: f64,
        height: f64,
        occupied: &[Rect],
    ) -> Option<(Rect, f64)> {
        loop {
            let box_width = text_width(text, font_size) + PADDING * 2.0;
            let box_height = font_size + PADDING * 2.0;
            if let Some(bounds) = find_position(box_width, box_height, width, height, occupied) {
                return Some((bounds, font_size));
            }
            if font_size <= self.min_font_size {
                return None;
            }
            font_size = (font_size * SHRINK_FACTOR).max(self.min_font_size);
        }
    }

    /// Linear in frequency, then scaled down uniformly so the largest words fit
    fn font_sizes(&self, frequencies: &[KeywordCount], width: f64, height: f64) -> Vec<f64> {
        let Some(max_count) = frequencies.first().map(|f| f.count as f64) else {
            return Vec::new();
        };

        let raw: Vec<f64> = frequencies
            .iter()
            .map(|f| self.max_font_size * f.count as f64 / max_count)
            .collect();

        let fit = frequencies
            .iter()
            .zip(&raw)
            .map(|(f, &size)| {
                let by_width = (width - PADDING * 2.0) * FIT_MARGIN / text_width(&f.keyword, size).max(1.0);
                let by_height = (height - PADDING * 2.0) * FIT_MARGIN / size.max(1.0);
                by_width.min(by_height)
            })
            .fold(1.0_f64, f64::min);

        raw.into_iter()
            .map(|size| (size * fit).max(self.min_font_size))
            .collect()
    }
}

fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
}

/// Walk the spiral until a free spot inside the canvas is found
fn find_position(
    box_width: f64,
    box_height: f64,
    width: f64,
    height: f64,
    placed: &[Rect],
) -> Option<Rect> {
    if box_width > width || box_height > height {
        return None;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let aspect = width / height;
    let max_radius = (width * width + height * height).sqrt() / 2.0;

    let mut theta: f64 = 0.0;
    loop {
        let radius = SPIRAL_SPACING * theta;
        if radius > max_radius {
            return None;
        }

        let x = cx + radius * theta.cos() * aspect;
        let y = cy + radius * theta.sin();
        let candidate = Rect::centered(x, y, box_width, box_height);
        if candidate.fits_within(width, height) && !placed.iter().any(|r| r.intersects(&candidate))
        {
            return Some(candidate);
        }

        theta += if radius > ARC_STEP {
            (ARC_STEP / radius).min(SPIRAL_STEP)
        } else {
            SPIRAL_STEP
        };
    }
}

/// Laid-out word cloud
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    background: &'static str,
    pub words: Vec<PlacedWord>,
}

impl WordCloud {
    /// Default 800x400 cloud with white background and Plasma colors
    pub fn generate(text: &str) -> Self {
        WordCloudBuilder::default().generate(text)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="wordcloud" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img"><rect width="{w}" height="{h}" fill="{bg}"/>"#,
            w = self.width,
            h = self.height,
            bg = self.background
        );

        for word in &self.words {
            let (x, y) = word.bounds.center();
            let _ = write!(
                svg,
                r#"<text x="{x:.1}" y="{y:.1}" font-size="{size:.1}" fill="{color}" text-anchor="middle" dominant-baseline="central" font-family="Helvetica, Arial, sans-serif"><title>{title}: {count}</title>{text}</text>"#,
                size = word.font_size,
                color = word.color,
                title = escape_html(&word.text),
                count = word.count,
                text = escape_html(&word.text),
            );
        }

        svg.push_str("</svg>");
        svg
    }
}
