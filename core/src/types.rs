use num_traits::{CheckedAdd, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Unique caller-supplied identifier for a single node.
pub type NodeID = u32;

/// Directed edge between a source and target node which are identified by their ID.
#[derive(Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Hash, Default)]
pub struct Edge {
    pub source: NodeID,
    pub target: NodeID,
}

impl Edge {
    pub fn new(source: NodeID, target: NodeID) -> Edge {
        Edge { source, target }
    }

    pub fn inverse(&self) -> Edge {
        Edge {
            source: self.target,
            target: self.source,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Edge weights usable by the shortest path solver.
///
/// Weights are expected to be non-negative. Negative values are not detected
/// and give undefined results.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + Zero + fmt::Debug {
    /// Sum of two weights, `None` if it is not representable by the type.
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
float_weight!(f32, f64);

/// Tentative or final distance of a node from the source of a query.
///
/// `Infinite` compares greater than every finite value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance<W> {
    Finite(W),
    Infinite,
}

impl<W: Weight> Distance<W> {
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// The finite value, or `None` if the node was not reached.
    pub fn finite(&self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(*w),
            Distance::Infinite => None,
        }
    }

    /// Extend this distance by the weight of one more edge.
    ///
    /// A sum that overflows the weight type is `Infinite`.
    pub fn add_weight(&self, weight: W) -> Self {
        match self {
            Distance::Finite(w) => w
                .checked_sum(weight)
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl<W: Weight> PartialOrd for Distance<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Some(Ordering::Less),
            (Distance::Infinite, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Infinite, Distance::Infinite) => Some(Ordering::Equal),
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Distance::Finite(w) => write!(f, "{}", w),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}
