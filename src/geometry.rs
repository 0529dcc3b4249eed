use std::fmt;

/// Axis aligned bounding box of a town polygon, in whole blocks. The y fields
/// hold the map's z axis, the upstream feed calls that axis y as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Midpoint of the box, rounded down on both axes.
    pub fn centre(self) -> (i32, i32) {
        (
            (self.max_x + self.min_x).div_euclid(2),
            (self.max_y + self.min_y).div_euclid(2),
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}-{}, {}-{})",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Area and bounding box derived from one town's vertex lists. The caller
/// guarantees both slices are the same length and hold at least one vertex.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn survey(xs: &[f64], zs: &[f64]) -> (i32, Bounds) {
    let area = (shoelace_area(xs, zs) / 256.0).floor() as i32;

    let mut min_x = xs[0];
    let mut max_x = xs[0];
    for &x in &xs[1..] {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
    }
    let mut min_z = zs[0];
    let mut max_z = zs[0];
    for &z in &zs[1..] {
        min_z = min_z.min(z);
        max_z = max_z.max(z);
    }
    let bounds = Bounds {
        min_x: min_x as i32,
        min_y: min_z as i32,
        max_x: max_x as i32,
        max_y: max_z as i32,
    };
    (area, bounds)
}

/// Shoelace formula over the vertex ring, the last vertex closes back to the
/// first implicitly.
fn shoelace_area(xs: &[f64], zs: &[f64]) -> f64 {
    let n = xs.len();
    let mut doubled = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        doubled += xs[i] * zs[j] - xs[j] * zs[i];
    }
    doubled.abs() / 2.0
}
