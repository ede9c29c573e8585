pub mod brush;
pub mod colormap;
mod colormap_tables;
pub mod filters;
pub mod transform;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use self::brush::StrokeSegment;
use self::colormap::Colormap;
use self::filters::Filter;

/// One editing step, as named on the command line (`--op sepia`,
/// `--op resize=640x480`, `--op stroke=0,0,10,10`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOp {
    Filter(Filter),
    /// Colormap lookup. `None` (bare `colormap` or an unknown name) means the
    /// session's default map.
    Colormap(Option<Colormap>),
    Resize { width: u32, height: u32 },
    /// Set the width, height follows the aspect ratio.
    Width(u32),
    /// Set the height, width follows the aspect ratio.
    Height(u32),
    Shrink,
    Enlarge,
    Stroke(StrokeSegment),
    ClearPaint,
    Revert,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpParseError {
    #[error("unknown operation '{0}'")]
    Unknown(String),
    #[error("operation '{op}' needs a value ({hint})")]
    MissingValue { op: String, hint: &'static str },
    #[error("invalid value '{value}' for '{op}' ({hint})")]
    BadValue {
        op: String,
        value: String,
        hint: &'static str,
    },
}

fn bad(op: &str, value: &str, hint: &'static str) -> OpParseError {
    OpParseError::BadValue {
        op: op.to_string(),
        value: value.to_string(),
        hint,
    }
}

fn parse_dimension(op: &str, value: &str) -> Result<u32, OpParseError> {
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(bad(op, value, "positive integer")),
    }
}

impl FromStr for EditOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = match s.split_once('=') {
            Some((n, v)) => (n.trim().to_ascii_lowercase(), Some(v.trim())),
            None => (s.trim().to_ascii_lowercase(), None),
        };
        let need = |hint: &'static str| {
            value.ok_or_else(|| OpParseError::MissingValue {
                op: name.clone(),
                hint,
            })
        };

        match name.as_str() {
            "grayscale" | "greyscale" | "gray" => Ok(EditOp::Filter(Filter::Grayscale)),
            "sepia" => Ok(EditOp::Filter(Filter::Sepia)),
            "invert" => Ok(EditOp::Filter(Filter::Invert)),
            "colormap" => {
                let cmap = value.and_then(|v| {
                    let found = Colormap::from_name(v);
                    if found.is_none() {
                        log::warn!("Unknown colormap '{}', using the default", v);
                    }
                    found
                });
                Ok(EditOp::Colormap(cmap))
            }
            "resize" => {
                let v = need("<W>x<H>")?;
                let (w, h) = v
                    .split_once(['x', 'X'])
                    .ok_or_else(|| bad(&name, v, "<W>x<H>"))?;
                Ok(EditOp::Resize {
                    width: parse_dimension(&name, w)?,
                    height: parse_dimension(&name, h)?,
                })
            }
            "width" => Ok(EditOp::Width(parse_dimension(&name, need("<W>")?)?)),
            "height" => Ok(EditOp::Height(parse_dimension(&name, need("<H>")?)?)),
            "shrink" => Ok(EditOp::Shrink),
            "enlarge" | "size-up" => Ok(EditOp::Enlarge),
            "stroke" => {
                let v = need("x0,y0,x1,y1")?;
                let coords: Vec<i32> = v
                    .split(',')
                    .map(|p| p.trim().parse::<i32>())
                    .collect::<Result<_, _>>()
                    .map_err(|_| bad(&name, v, "x0,y0,x1,y1"))?;
                match coords.as_slice() {
                    [x0, y0, x1, y1] => Ok(EditOp::Stroke(StrokeSegment::new(*x0, *y0, *x1, *y1))),
                    _ => Err(bad(&name, v, "x0,y0,x1,y1")),
                }
            }
            "clear-paint" | "clear" => Ok(EditOp::ClearPaint),
            "revert" => Ok(EditOp::Revert),
            _ => Err(OpParseError::Unknown(s.trim().to_string())),
        }
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Filter(filter) => write!(f, "{}", filter.label()),
            EditOp::Colormap(Some(cmap)) => write!(f, "Colormap ({})", cmap.name()),
            EditOp::Colormap(None) => write!(f, "Colormap (default)"),
            EditOp::Resize { width, height } => write!(f, "Resize to {width}x{height}"),
            EditOp::Width(w) => write!(f, "Width {w}"),
            EditOp::Height(h) => write!(f, "Height {h}"),
            EditOp::Shrink => write!(f, "Shrink"),
            EditOp::Enlarge => write!(f, "Size Up"),
            EditOp::Stroke(s) => write!(f, "Stroke ({},{}) -> ({},{})", s.x0, s.y0, s.x1, s.y1),
            EditOp::ClearPaint => write!(f, "Clear Paint"),
            EditOp::Revert => write!(f, "Revert"),
        }
    }
}
