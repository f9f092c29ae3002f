//! Plain-text export of picked points.
//!
//! Single mode writes an optional source-path line followed by one `x,y` row per point.
//! Dual mode writes two optional path lines followed by one `x1,y1,    x2,y2` row per
//! index-aligned pair, stopping at the shorter sequence.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::session::Point;
use crate::error::{PickError, Result};

/// Gap between the two coordinate pairs of a dual-mode row.
pub const PAIR_SEPARATOR: &str = "    ";

/// One picked sequence and the image it was picked on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickedSet {
    pub source: Option<PathBuf>,
    pub points: Vec<Point>,
}

impl PickedSet {
    pub fn new(source: Option<PathBuf>, points: Vec<Point>) -> Self {
        Self { source, points }
    }
}

/// Contents of a file written by [`save_points`].
#[derive(Debug, Clone, PartialEq)]
pub enum PickedFile {
    Single(PickedSet),
    Dual(PickedSet, PickedSet),
}

/// Write `first` (and `second`, when given) to `w`.
///
/// Returns the number of point rows written: points in single mode, pairs in dual mode.
pub fn write_points<W: Write>(
    mut w: W,
    first: &PickedSet,
    second: Option<&PickedSet>,
) -> std::io::Result<usize> {
    let rows = match second {
        None => {
            if let Some(src) = &first.source {
                writeln!(w, "{}", src.display())?;
            }
            for p in &first.points {
                writeln!(w, "{:.6},{:.6}", p[0], p[1])?;
            }
            first.points.len()
        }
        Some(second) => {
            if let (Some(a), Some(b)) = (&first.source, &second.source) {
                writeln!(w, "{}", a.display())?;
                writeln!(w, "{}", b.display())?;
            }
            let mut n = 0;
            for (p, q) in first.points.iter().zip(&second.points) {
                writeln!(
                    w,
                    "{:.6},{:.6},{}{:.6},{:.6}",
                    p[0], p[1], PAIR_SEPARATOR, q[0], q[1]
                )?;
                n += 1;
            }
            n
        }
    };
    w.flush()?;
    Ok(rows)
}

/// Save picked points to `out`.
///
/// With `out == None` nothing is written and `0` is returned.
pub fn save_points(
    out: Option<&Path>,
    first: &PickedSet,
    second: Option<&PickedSet>,
) -> Result<usize> {
    let Some(out) = out else {
        return Ok(0);
    };
    let f = File::create(out)?;
    let rows = write_points(BufWriter::new(f), first, second)?;
    log::info!("wrote {} rows to {}", rows, out.display());
    Ok(rows)
}

fn parse_row(line: &str) -> Option<Vec<f64>> {
    let vals = line
        .split(',')
        .map(|f| f.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .ok()?;
    matches!(vals.len(), 2 | 4).then_some(vals)
}

/// Read a file written by [`save_points`] back into its sequences.
///
/// Lines before the first coordinate row are taken as source paths. A file with
/// two path lines and no rows is read as an empty dual file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<PickedFile> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(&line) {
            Some(vals) => {
                if let Some(first) = rows.first() {
                    if first.len() != vals.len() {
                        return Err(PickError::Parse {
                            path: path.to_path_buf(),
                            line: i + 1,
                            message: format!(
                                "expected {} values, found {}",
                                first.len(),
                                vals.len()
                            ),
                        });
                    }
                }
                rows.push(vals);
            }
            None if rows.is_empty() => headers.push(line),
            None => {
                return Err(PickError::Parse {
                    path: path.to_path_buf(),
                    line: i + 1,
                    message: format!("not a coordinate row: {:?}", line),
                })
            }
        }
    }

    // without rows, only the two path lines tell a dual file apart
    let dual = match rows.first() {
        Some(r) => r.len() == 4,
        None => headers.len() >= 2,
    };
    let mut headers = headers.into_iter().map(PathBuf::from);
    if dual {
        let (a, b) = match (headers.next(), headers.next()) {
            (Some(a), Some(b)) => (Some(a), Some(b)),
            _ => (None, None),
        };
        let first = rows.iter().map(|r| [r[0], r[1]]).collect();
        let second = rows.iter().map(|r| [r[2], r[3]]).collect();
        Ok(PickedFile::Dual(
            PickedSet::new(a, first),
            PickedSet::new(b, second),
        ))
    } else {
        let points = rows.iter().map(|r| [r[0], r[1]]).collect();
        Ok(PickedFile::Single(PickedSet::new(headers.next(), points)))
    }
}
