use pathviz_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let dr = f64::from(a.row - b.row);
    let dc = f64::from(a.col - b.col);
    (dr * dr + dc * dc).sqrt()
}

/// Distance estimate used by A*, chosen per search.
///
/// Both variants are admissible for 4-directional unit-cost movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    /// Estimated distance from `from` to `to`; never negative.
    #[inline]
    pub fn estimate(self, from: Pos, to: Pos) -> f64 {
        match self {
            Self::Manhattan => f64::from(manhattan(from, to)),
            Self::Euclidean => euclidean(from, to),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Pos::new(1, 1), Pos::new(3, 3)), 4);
        assert_eq!(manhattan(Pos::new(4, 0), Pos::new(0, 3)), 7);
        assert_eq!(Heuristic::Manhattan.estimate(Pos::new(1, 1), Pos::new(3, 3)), 4.0);
    }

    #[test]
    fn euclidean_distance() {
        assert_eq!(euclidean(Pos::new(0, 0), Pos::new(3, 4)), 5.0);
        assert_eq!(Heuristic::Euclidean.estimate(Pos::new(2, 2), Pos::new(2, 2)), 0.0);
    }

    #[test]
    fn euclidean_never_exceeds_manhattan() {
        for r in -6..=6 {
            for c in -6..=6 {
                let a = Pos::new(0, 0);
                let b = Pos::new(r, c);
                let e = Heuristic::Euclidean.estimate(a, b);
                let m = Heuristic::Manhattan.estimate(a, b);
                assert!(e >= 0.0 && e <= m, "{b}: {e} > {m}");
            }
        }
    }
}
