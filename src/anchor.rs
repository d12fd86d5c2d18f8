//! Screen anchors for phase shapes.
//!
//! An [`Anchor`] is one of nine named positions. Each anchor decomposes into a
//! horizontal and a vertical [`Edge`], and each edge is resolved independently
//! into the top-left coordinate of the shape on that axis.
//!
//! The start and end edges keep a margin of half the minimum screen fraction
//! from the screen border, so a shape pinned to a corner never touches it:
//!
//! ```
//! use breather::anchor::{Anchor, Edge};
//!
//! assert_eq!(Anchor::TopRight.horizontal(), Edge::End);
//! assert_eq!(Anchor::TopRight.vertical(), Edge::Start);
//!
//! // 300px axis, 10% minimum usage: the start edge sits at 15px
//! assert_eq!(Edge::Start.resolve(300.0, 30.0, 0.1), 15.0);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a shape sits along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Left or top
    Start,
    /// Centred on the screen centre
    Centre,
    /// Right or bottom
    End,
}

impl Edge {
    /// Resolve this edge to the shape's leading coordinate on one axis.
    ///
    /// `screen` is the screen extent on the axis, `extent` the shape's extent
    /// on the same axis and `min_fraction` the phase's minimum screen usage.
    pub fn resolve(self, screen: f32, extent: f32, min_fraction: f32) -> f32 {
        match self {
            Edge::Start => screen * min_fraction / 2.0,
            Edge::Centre => screen / 2.0 - extent / 2.0,
            Edge::End => screen * (1.0 - min_fraction / 2.0) - extent,
        }
    }
}

/// Named screen position a phase's shape is pinned toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Centered,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// All anchors in row-major order, matching [`Anchor::index`].
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::Top,
        Anchor::TopRight,
        Anchor::Left,
        Anchor::Centered,
        Anchor::Right,
        Anchor::BottomLeft,
        Anchor::Bottom,
        Anchor::BottomRight,
    ];

    /// Row-major index in `0..9`, top-left first.
    pub fn index(self) -> u8 {
        match self {
            Anchor::TopLeft => 0,
            Anchor::Top => 1,
            Anchor::TopRight => 2,
            Anchor::Left => 3,
            Anchor::Centered => 4,
            Anchor::Right => 5,
            Anchor::BottomLeft => 6,
            Anchor::Bottom => 7,
            Anchor::BottomRight => 8,
        }
    }

    /// Inverse of [`Anchor::index`]. Returns `None` for indices above 8.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn from_edges(horizontal: Edge, vertical: Edge) -> Self {
        let column = match horizontal {
            Edge::Start => 0,
            Edge::Centre => 1,
            Edge::End => 2,
        };
        let row = match vertical {
            Edge::Start => 0,
            Edge::Centre => 1,
            Edge::End => 2,
        };
        Self::ALL[row * 3 + column]
    }

    pub fn horizontal(self) -> Edge {
        match self {
            Anchor::TopLeft | Anchor::Left | Anchor::BottomLeft => Edge::Start,
            Anchor::Top | Anchor::Centered | Anchor::Bottom => Edge::Centre,
            Anchor::TopRight | Anchor::Right | Anchor::BottomRight => Edge::End,
        }
    }

    pub fn vertical(self) -> Edge {
        match self {
            Anchor::TopLeft | Anchor::Top | Anchor::TopRight => Edge::Start,
            Anchor::Left | Anchor::Centered | Anchor::Right => Edge::Centre,
            Anchor::BottomLeft | Anchor::Bottom | Anchor::BottomRight => Edge::End,
        }
    }

    pub fn is_centered(self) -> bool {
        self == Anchor::Centered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_index_round_trip_covers_all() {
        for (i, anchor) in Anchor::ALL.iter().enumerate() {
            assert_eq!(anchor.index() as usize, i);
            assert_eq!(Anchor::from_index(i as u8), Some(*anchor));
        }
        assert_eq!(Anchor::from_index(9), None);
    }

    #[test]
    fn test_edges_recompose() {
        for anchor in Anchor::ALL {
            assert_eq!(
                Anchor::from_edges(anchor.horizontal(), anchor.vertical()),
                anchor
            );
        }
    }

    #[test]
    fn test_edge_resolve() {
        // 300px axis, 30px shape, 10% minimum usage
        assert!(approx_eq(Edge::Start.resolve(300.0, 30.0, 0.1), 15.0));
        assert!(approx_eq(Edge::Centre.resolve(300.0, 30.0, 0.1), 135.0));
        assert!(approx_eq(Edge::End.resolve(300.0, 30.0, 0.1), 255.0));
    }

    #[test]
    fn test_start_edge_ignores_extent() {
        let a = Edge::Start.resolve(400.0, 10.0, 0.2);
        let b = Edge::Start.resolve(400.0, 300.0, 0.2);
        assert!(approx_eq(a, 40.0));
        assert!(approx_eq(a, b));
    }

    #[test]
    fn test_default_is_centered() {
        assert!(Anchor::default().is_centered());
        assert!(!Anchor::Top.is_centered());
    }
}
