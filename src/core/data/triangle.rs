/// A point in continuous pixel space. Pixel `(x, y)` covers
/// `[x, x + 1) x [y, y + 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// Twice the signed area of (a, b, p). Positive when p lies to the right of
// a -> b in y-down screen space.
fn edge_function(a: Vertex, b: Vertex, p: Vertex) -> f64 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

fn is_top_left_edge(from: Vertex, to: Vertex) -> bool {
    (from.y == to.y && to.x > from.x) || to.y < from.y
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
}

/// The result of splitting a triangle at its edge midpoints.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Subdivision {
    /// Corner triangles in top, left, right order for a triangle built by
    /// [`Triangle::inscribed`].
    pub corners: [Triangle; 3],
    pub centre: Triangle,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { a, b, c }
    }

    /// Apex at top-centre, base along the bottom edge of a `width` x `height` area.
    #[must_use]
    pub fn inscribed(width: f64, height: f64) -> Self {
        Self {
            a: Vertex::new(width / 2.0, 0.0),
            b: Vertex::new(0.0, height),
            c: Vertex::new(width, height),
        }
    }

    #[must_use]
    pub fn subdivide(&self) -> Subdivision {
        let ab = self.a.midpoint(self.b);
        let bc = self.b.midpoint(self.c);
        let ca = self.c.midpoint(self.a);

        Subdivision {
            corners: [
                Self::new(self.a, ab, ca),
                Self::new(self.b, bc, ab),
                Self::new(self.c, ca, bc),
            ],
            centre: Self::new(ab, bc, ca),
        }
    }

    #[must_use]
    pub fn vertices(&self) -> [Vertex; 3] {
        [self.a, self.b, self.c]
    }

    #[must_use]
    pub fn centroid(&self) -> Vertex {
        Vertex {
            x: (self.a.x + self.b.x + self.c.x) / 3.0,
            y: (self.a.y + self.b.y + self.c.y) / 3.0,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        edge_function(self.a, self.b, self.c).abs() / 2.0
    }

    /// Returns `(min_x, min_y, max_x, max_y)`.
    #[must_use]
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let xs = [self.a.x, self.b.x, self.c.x];
        let ys = [self.a.y, self.b.y, self.c.y];

        (
            xs.iter().copied().fold(f64::INFINITY, f64::min),
            ys.iter().copied().fold(f64::INFINITY, f64::min),
            xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ys.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    }

    /// True when every vertex lies inside `[0, width] x [0, height]`.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        let (w, h) = (f64::from(width), f64::from(height));

        self.vertices()
            .iter()
            .all(|v| v.is_finite() && (0.0..=w).contains(&v.x) && (0.0..=h).contains(&v.y))
    }

    /// Coverage test with a top-left fill rule, so triangles sharing an edge
    /// never both claim a sample lying exactly on it.
    #[must_use]
    pub fn covers(&self, p: Vertex) -> bool {
        let (a, b, c) = if edge_function(self.a, self.b, self.c) < 0.0 {
            (self.a, self.c, self.b)
        } else {
            (self.a, self.b, self.c)
        };

        if edge_function(a, b, c) == 0.0 {
            return false;
        }

        [(a, b), (b, c), (c, a)].iter().all(|&(from, to)| {
            let weight = edge_function(from, to, p);
            weight > 0.0 || (weight == 0.0 && is_top_left_edge(from, to))
        })
    }
}
