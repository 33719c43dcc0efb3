//! Block-structured linear system for one solver step.
//!
//! Every segment owns four unknowns: the downstream tube face, one shell
//! face, and the two wall surface temperatures. Unknowns and balances are
//! interleaved segment by segment, which keeps every coefficient within
//! seven places of the diagonal regardless of the segment count.

mod band;

use nalgebra::DVector;

use band::BandMatrix;

pub(crate) use band::SingularPivot;

const BLOCKS: usize = 4;

/// Half bandwidth of the interleaved layout.
///
/// The widest coupling is a tube-face unknown of segment `i - 1` appearing
/// in a balance of segment `i`, or a shell-face unknown of segment `i + 1`
/// appearing in a counter-flow balance of segment `i`.
const HALF_BANDWIDTH: usize = 2 * BLOCKS - 1;

/// Unknown temperature families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Block {
    TubeFace,
    ShellFace,
    TubeWall,
    ShellWall,
}

impl Block {
    fn offset(self) -> usize {
        match self {
            Self::TubeFace => 0,
            Self::ShellFace => 1,
            Self::TubeWall => 2,
            Self::ShellWall => 3,
        }
    }
}

/// Balance equation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Balance {
    /// Tube fluid energy balance.
    TubeEnergy,
    /// Shell fluid energy balance.
    ShellEnergy,
    /// Tube fluid heat equals conduction through the wall.
    TubeWall,
    /// Shell fluid heat equals conduction through the wall.
    ShellWall,
}

impl Balance {
    fn offset(self) -> usize {
        match self {
            Self::TubeEnergy => 0,
            Self::ShellEnergy => 1,
            Self::TubeWall => 2,
            Self::ShellWall => 3,
        }
    }
}

/// One unknown temperature, in kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unknown {
    pub(crate) block: Block,
    pub(crate) segment: usize,
}

impl Unknown {
    pub(crate) fn new(block: Block, segment: usize) -> Self {
        Self { block, segment }
    }

    fn column(self) -> usize {
        BLOCKS * self.segment + self.block.offset()
    }
}

/// The `4·n` balances of one step and their coefficients.
#[derive(Debug, Clone)]
pub(crate) struct LinearSystem {
    matrix: BandMatrix,
    rhs: DVector<f64>,
}

impl LinearSystem {
    pub(crate) fn new(segments: usize) -> Self {
        let size = BLOCKS * segments;
        Self {
            matrix: BandMatrix::zeros(size, HALF_BANDWIDTH, HALF_BANDWIDTH),
            rhs: DVector::zeros(size),
        }
    }

    fn row(balance: Balance, segment: usize) -> usize {
        BLOCKS * segment + balance.offset()
    }

    /// Adds `value` to the coefficient of `unknown` in a balance.
    pub(crate) fn add(&mut self, balance: Balance, segment: usize, unknown: Unknown, value: f64) {
        self.matrix
            .add(Self::row(balance, segment), unknown.column(), value);
    }

    /// Adds `value` to the right-hand side of a balance.
    pub(crate) fn add_rhs(&mut self, balance: Balance, segment: usize, value: f64) {
        self.rhs[Self::row(balance, segment)] += value;
    }

    /// Solves the system.
    ///
    /// # Errors
    ///
    /// Returns the row of the first vanishing pivot if the system is singular.
    pub(crate) fn solve(self) -> Result<Solution, SingularPivot> {
        self.matrix.solve(self.rhs).map(|values| Solution { values })
    }
}

/// Solved unknowns of one step.
#[derive(Debug, Clone)]
pub(crate) struct Solution {
    values: DVector<f64>,
}

impl Solution {
    pub(crate) fn get(&self, unknown: Unknown) -> f64 {
        self.values[unknown.column()]
    }
}
