use crate::core::data::triangle::Triangle;
use std::error::Error;
use std::fmt;

/// Deepest subdivision accepted; depth 12 already yields 531441 filled leaves.
pub const DEPTH_CAP: u32 = 12;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FillState {
    Filled,
    Empty,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FillRegion {
    pub triangle: Triangle,
    pub state: FillState,
    /// Subdivision level that produced the region. The outer triangle is level 0.
    pub level: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SierpinskiError {
    DepthTooLarge { depth: u32, cap: u32 },
}

impl fmt::Display for SierpinskiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthTooLarge { depth, cap } => {
                write!(f, "depth {} exceeds the cap of {}", depth, cap)
            }
        }
    }
}

impl Error for SierpinskiError {}

pub fn check_depth(depth: u32) -> Result<(), SierpinskiError> {
    if depth > DEPTH_CAP {
        return Err(SierpinskiError::DepthTooLarge {
            depth,
            cap: DEPTH_CAP,
        });
    }

    Ok(())
}

/// Filled leaves and removed centres of one subdivision, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SierpinskiRegions {
    regions: Vec<FillRegion>,
}

impl SierpinskiRegions {
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FillRegion> {
        self.regions.iter()
    }

    pub fn filled(&self) -> impl Iterator<Item = &FillRegion> {
        self.with_state(FillState::Filled)
    }

    pub fn empty(&self) -> impl Iterator<Item = &FillRegion> {
        self.with_state(FillState::Empty)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<FillRegion> {
        self.regions
    }

    fn with_state(&self, state: FillState) -> impl Iterator<Item = &FillRegion> {
        self.regions.iter().filter(move |region| region.state == state)
    }
}

fn expected_region_count(depth: u32) -> usize {
    let leaves = 3usize.pow(depth);
    leaves + (leaves - 1) / 2
}

/// Subdivides `outer` down to `depth` levels.
///
/// Uses an explicit work-list rather than recursion. Corners are visited top,
/// left, then right, depth first, so the output order is fixed for a given
/// input.
pub fn generate_sierpinski(
    outer: Triangle,
    depth: u32,
) -> Result<SierpinskiRegions, SierpinskiError> {
    check_depth(depth)?;

    let mut regions = Vec::with_capacity(expected_region_count(depth));
    let mut work_list = vec![(outer, 0u32)];

    while let Some((triangle, level)) = work_list.pop() {
        if level == depth {
            regions.push(FillRegion {
                triangle,
                state: FillState::Filled,
                level,
            });
            continue;
        }

        let subdivision = triangle.subdivide();

        regions.push(FillRegion {
            triangle: subdivision.centre,
            state: FillState::Empty,
            level: level + 1,
        });

        work_list.extend(
            subdivision
                .corners
                .iter()
                .rev()
                .map(|&corner| (corner, level + 1)),
        );
    }

    Ok(SierpinskiRegions { regions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::triangle::Vertex;

    fn outer() -> Triangle {
        Triangle::inscribed(64.0, 64.0)
    }

    #[test]
    fn test_depth_zero_is_single_filled_triangle() {
        let regions = generate_sierpinski(outer(), 0).unwrap();

        assert_eq!(
            regions.into_vec(),
            vec![FillRegion {
                triangle: outer(),
                state: FillState::Filled,
                level: 0
            }]
        );
    }

    #[test]
    fn test_depth_one_fills_corners_and_empties_centre() {
        let regions = generate_sierpinski(outer(), 1).unwrap();
        let subdivision = outer().subdivide();

        let filled: Vec<Triangle> = regions.filled().map(|r| r.triangle).collect();
        let empty: Vec<Triangle> = regions.empty().map(|r| r.triangle).collect();

        assert_eq!(filled, subdivision.corners.to_vec());
        assert_eq!(empty, vec![subdivision.centre]);
        assert!(regions.iter().all(|r| r.level == 1));
    }

    #[test]
    fn test_region_counts_for_every_depth() {
        for depth in 0..=DEPTH_CAP {
            let regions = generate_sierpinski(outer(), depth).unwrap();
            let leaves = 3usize.pow(depth);

            assert_eq!(regions.filled().count(), leaves, "depth {}", depth);
            assert_eq!(regions.empty().count(), (leaves - 1) / 2, "depth {}", depth);
        }
    }

    #[test]
    fn test_filled_leaves_are_all_at_target_depth() {
        let regions = generate_sierpinski(outer(), 4).unwrap();

        assert!(regions.filled().all(|r| r.level == 4));
        assert!(regions.empty().all(|r| (1..=4).contains(&r.level)));
    }

    #[test]
    fn test_filled_area_shrinks_by_three_quarters_per_level() {
        let depth = 5;
        let regions = generate_sierpinski(outer(), depth).unwrap();

        let filled_area: f64 = regions.filled().map(|r| r.triangle.area()).sum();
        let expected = outer().area() * 0.75f64.powi(depth as i32);

        assert!((filled_area - expected).abs() < 1e-9);
    }

    #[test]
    fn test_first_leaf_is_top_corner() {
        let regions = generate_sierpinski(outer(), 2).unwrap();
        let first_leaf = regions.filled().next().unwrap();

        assert_eq!(first_leaf.triangle.a, Vertex::new(32.0, 0.0));
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(
            generate_sierpinski(outer(), 6).unwrap(),
            generate_sierpinski(outer(), 6).unwrap()
        );
    }

    #[test]
    fn test_depth_over_cap_fails() {
        assert_eq!(
            generate_sierpinski(outer(), DEPTH_CAP + 1).unwrap_err(),
            SierpinskiError::DepthTooLarge {
                depth: DEPTH_CAP + 1,
                cap: DEPTH_CAP
            }
        );
    }

    #[test]
    fn test_depth_error_display() {
        assert_eq!(
            format!("{}", SierpinskiError::DepthTooLarge { depth: 13, cap: 12 }),
            "depth 13 exceeds the cap of 12"
        );
    }
}
