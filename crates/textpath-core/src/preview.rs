//! Preview data extracted from toolpath text.
//!
//! Plot front ends draw the path as a polyline coloured by drawing order. This
//! module recovers the ordered points and their extent from serialized output
//! so a front end never has to parse the format itself.

use serde::{Deserialize, Serialize};

use crate::instruction::Motion;
use crate::serializer;

/// One point of the preview polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewPoint {
    pub x: f64,
    pub y: f64,
    /// `true` when the pen is down while moving to this point
    pub pen_down: bool,
    pub source_char: Option<char>,
}

/// Axis-aligned extent of a preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Ordered preview points with their bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub points: Vec<PreviewPoint>,
    pub bounds: Option<Bounds>,
}

impl Preview {
    /// Number of pen-down points.
    pub fn stroke_count(&self) -> usize {
        self.points.iter().filter(|p| p.pen_down).count()
    }

    /// Sum of segment lengths, split into (pen-down, pen-up) distance.
    pub fn path_lengths(&self) -> (f64, f64) {
        self.points
            .windows(2)
            .fold((0.0, 0.0), |(down, up), pair| {
                let length = (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y);
                if pair[1].pen_down {
                    (down + length, up)
                } else {
                    (down, up + length)
                }
            })
    }
}

/// Re-parses toolpath text into preview points, skipping malformed lines.
pub fn extract(text: &str) -> Preview {
    let points: Vec<PreviewPoint> = serializer::parse(text)
        .into_iter()
        .map(|instr| PreviewPoint {
            x: instr.x(),
            y: instr.y(),
            pen_down: instr.motion() == Motion::Write,
            source_char: instr.source_char(),
        })
        .collect();

    let bounds = points.iter().fold(None, |acc: Option<Bounds>, p| {
        Some(match acc {
            None => Bounds {
                min_x: p.x,
                max_x: p.x,
                min_y: p.y,
                max_y: p.y,
            },
            Some(b) => Bounds {
                min_x: b.min_x.min(p.x),
                max_x: b.max_x.max(p.x),
                min_y: b.min_y.min(p.y),
                max_y: b.max_y.max(p.y),
            },
        })
    });

    Preview { points, bounds }
}
