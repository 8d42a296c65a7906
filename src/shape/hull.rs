//! Stage 1 of the shape builder: a monotone-chain convex hull.

use crate::model::Coord;

fn cross(o: Coord, a: Coord, b: Coord) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Returns the vertices of `points`'s convex hull as a counter-clockwise
/// ring with no repeated endpoint and no collinear interior points.
///
/// Degenerate inputs are returned as-is: 0 points -> empty, 1 point -> that
/// point, 2 distinct points -> both of them (a degenerate two-vertex
/// polygon), and 3+ collinear points collapse to their two extremes, which
/// falls out of the chain-building loop below without special-casing.
pub fn convex_hull(points: &[Coord]) -> Vec<Coord> {
    let mut sorted: Vec<Coord> = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y)));
    sorted.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    if sorted.len() <= 2 {
        return sorted;
    }

    let mut lower: Vec<Coord> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Coord> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_yields_empty_hull() {
        assert!(convex_hull(&[]).is_empty());
    }

    #[test]
    fn single_point_is_its_own_hull() {
        let p = Coord { x: 1.0, y: 2.0 };
        assert_eq!(convex_hull(&[p]), vec![p]);
    }

    #[test]
    fn two_points_form_a_degenerate_segment() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 1.0, y: 1.0 };
        let hull = convex_hull(&[a, b]);
        assert_eq!(hull.len(), 2);
    }

    #[test]
    fn collinear_points_collapse_to_extremes() {
        let points: Vec<Coord> = (0..5)
            .map(|i| Coord { x: i as f64, y: 0.0 })
            .collect();
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 2);
        assert!(hull.contains(&Coord { x: 0.0, y: 0.0 }));
        assert!(hull.contains(&Coord { x: 4.0, y: 0.0 }));
    }

    #[test]
    fn square_hull_excludes_interior_point() {
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 4.0 },
            Coord { x: 2.0, y: 2.0 },
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Coord { x: 2.0, y: 2.0 }));
    }
}
