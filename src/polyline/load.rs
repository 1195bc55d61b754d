use std::path::Path;

use anyhow::{bail, ensure, Context};
use nalgebra::Point3;

use crate::misc::FloatingPoint;
use crate::polyline::Polyline3;

/// Whether a loaded curve closes back onto its first point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveTopology {
    Open,
    Closed,
}

/// Parse an OBJ-style curve: `v x y z` vertex lines and `l i j` line-element
/// lines with 1-based indices. Line elements must walk the vertices in
/// order without skips; a final element closing back onto the first index
/// marks the curve closed. Unknown keywords are ignored.
pub fn parse_obj_curve<T: FloatingPoint>(source: &str) -> anyhow::Result<(Polyline3<T>, CurveTopology)> {
    let mut polyline = Polyline3::new();
    let mut topology = CurveTopology::Open;
    let mut start: Option<usize> = None;
    let mut last = 0usize;

    for (number, line) in source.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let point = parse_point(tokens.by_ref())
                    .with_context(|| format!("malformed vertex on line {}", number + 1))?;
                polyline.push(point);
            }
            Some("l") => {
                let from: usize = parse_token(tokens.next(), number)?;
                let to: usize = parse_token(tokens.next(), number)?;
                ensure!(
                    topology == CurveTopology::Open,
                    "line element after the curve closed, on line {}",
                    number + 1
                );
                let start = *start.get_or_insert_with(|| {
                    last = from;
                    from
                });
                ensure!(
                    from == last,
                    "curve skips an index, (last, next) indices: {}, {}",
                    last,
                    from
                );
                if to == from + 1 {
                    last = to;
                } else if to == start {
                    topology = CurveTopology::Closed;
                } else {
                    bail!(
                        "curve is not ordered, (last, next) indices: {}, {}",
                        from,
                        to
                    );
                }
            }
            _ => {}
        }
    }
    ensure!(
        last <= polyline.len(),
        "curve references vertex {} but only {} are defined",
        last,
        polyline.len()
    );
    Ok((polyline, topology))
}

/// Parse a vertex-list curve: one vertex per non-empty line, coordinates
/// separated by commas and/or spaces, consecutive vertices connected. A
/// trailing vertex coincident with the first closes the curve.
pub fn parse_vertex_list<T: FloatingPoint>(
    source: &str,
) -> anyhow::Result<(Polyline3<T>, CurveTopology)> {
    let mut polyline = Polyline3::new();
    for (number, line) in source.lines().enumerate() {
        let mut tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        if tokens.clone().next().is_none() {
            continue;
        }
        let point = parse_point(tokens.by_ref())
            .with_context(|| format!("malformed vertex on line {}", number + 1))?;
        polyline.push(point);
    }
    let closed = polyline.len() > 2 && polyline.first_point() == polyline.last_point();
    if closed {
        let last = polyline.len() - 1;
        polyline.remove(last);
        Ok((polyline, CurveTopology::Closed))
    } else {
        Ok((polyline, CurveTopology::Open))
    }
}

/// Read an OBJ-style curve from disk.
pub fn load_obj_curve<T: FloatingPoint>(
    path: impl AsRef<Path>,
) -> anyhow::Result<(Polyline3<T>, CurveTopology)> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading curve from {}", path.display()))?;
    parse_obj_curve(&source)
}

/// Read a vertex-list curve from disk.
pub fn load_vertex_list<T: FloatingPoint>(
    path: impl AsRef<Path>,
) -> anyhow::Result<(Polyline3<T>, CurveTopology)> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading curve from {}", path.display()))?;
    parse_vertex_list(&source)
}

fn parse_point<'a, T: FloatingPoint>(
    tokens: impl Iterator<Item = &'a str>,
) -> anyhow::Result<Point3<T>> {
    let mut coords = [T::zero(); 3];
    let mut count = 0;
    for token in tokens.take(3) {
        let value: f64 = token
            .parse()
            .with_context(|| format!("invalid coordinate {:?}", token))?;
        coords[count] = T::from_f64(value)
            .with_context(|| format!("coordinate {} out of range", value))?;
        count += 1;
    }
    ensure!(count == 3, "expected 3 coordinates, got {}", count);
    Ok(Point3::new(coords[0], coords[1], coords[2]))
}

fn parse_token(token: Option<&str>, line_number: usize) -> anyhow::Result<usize> {
    token
        .with_context(|| format!("missing index on line {}", line_number + 1))?
        .parse()
        .with_context(|| format!("invalid index on line {}", line_number + 1))
}
