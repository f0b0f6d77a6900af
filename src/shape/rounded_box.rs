use crate::math::{Real, Vector};

/// Indicates an invalid rounded-box configuration.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InvalidBoxError {
    /// Every subdivision count must be at least 1.
    #[error("box subdivision counts must all be at least 1 (got {x_size}x{y_size}x{z_size})")]
    InvalidDimensions {
        /// The number of subdivisions along the `x` axis.
        x_size: u32,
        /// The number of subdivisions along the `y` axis.
        y_size: u32,
        /// The number of subdivisions along the `z` axis.
        z_size: u32,
    },
    /// The inset box obtained by shrinking every axis by `2 * roundness` must
    /// remain non-degenerate.
    #[error("roundness {roundness} is too large: 2 * roundness must be smaller than the smallest subdivision count ({min_size})")]
    InvalidRoundness {
        /// The requested roundness.
        roundness: u32,
        /// The smallest of the three subdivision counts.
        min_size: u32,
    },
}

/// An axis-aligned box with `x_size * y_size * z_size` unit subdivisions and
/// rounded edges/corners of radius `roundness` (in subdivision units).
///
/// The box spans `[0, x_size] x [0, y_size] x [0, z_size]` in local space.
/// A `roundness` of 0 describes a sharp-edged box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RoundedBox {
    x_size: u32,
    y_size: u32,
    z_size: u32,
    roundness: u32,
}

impl RoundedBox {
    /// Creates a new rounded box, validating the configuration.
    ///
    /// Errors if any subdivision count is zero, or if `2 * roundness` is not
    /// smaller than the smallest subdivision count.
    pub fn new(
        x_size: u32,
        y_size: u32,
        z_size: u32,
        roundness: u32,
    ) -> Result<Self, InvalidBoxError> {
        if x_size < 1 || y_size < 1 || z_size < 1 {
            return Err(InvalidBoxError::InvalidDimensions {
                x_size,
                y_size,
                z_size,
            });
        }

        let min_size = x_size.min(y_size).min(z_size);
        if roundness * 2 >= min_size {
            return Err(InvalidBoxError::InvalidRoundness {
                roundness,
                min_size,
            });
        }

        Ok(Self::new_unchecked(x_size, y_size, z_size, roundness))
    }

    /// Creates a new flat (sharp-edged) box.
    pub fn flat(x_size: u32, y_size: u32, z_size: u32) -> Result<Self, InvalidBoxError> {
        Self::new(x_size, y_size, z_size, 0)
    }

    /// Creates a new rounded box without checking the roundness envelope.
    ///
    /// The vertex placement rule is total, so a roundness violating
    /// `2 * roundness < min(sizes)` still produces a well-formed, watertight
    /// mesh; the surface merely degenerates (opposite insets fold past each
    /// other). Subdivision counts must still be at least 1.
    pub fn new_unchecked(x_size: u32, y_size: u32, z_size: u32, roundness: u32) -> Self {
        debug_assert!(x_size >= 1 && y_size >= 1 && z_size >= 1);
        Self {
            x_size,
            y_size,
            z_size,
            roundness,
        }
    }

    /// The number of subdivisions along the `x` axis.
    pub fn x_size(&self) -> u32 {
        self.x_size
    }

    /// The number of subdivisions along the `y` axis.
    pub fn y_size(&self) -> u32 {
        self.y_size
    }

    /// The number of subdivisions along the `z` axis.
    pub fn z_size(&self) -> u32 {
        self.z_size
    }

    /// The edge/corner rounding radius, in subdivision units.
    pub fn roundness(&self) -> u32 {
        self.roundness
    }

    /// The extents of the box as a vector.
    pub fn extents(&self) -> Vector {
        Vector::new(
            self.x_size as Real,
            self.y_size as Real,
            self.z_size as Real,
        )
    }

    /// The number of vertices in one horizontal ring, i.e. the loop of
    /// surface lattice points tracing the four side edges at a fixed height.
    pub fn ring(&self) -> u32 {
        2 * (self.x_size + self.z_size)
    }

    /// The number of surface lattice points: all box lattice points minus the
    /// strictly interior ones.
    pub fn num_surface_vertices(&self) -> usize {
        let outer = (self.x_size + 1) * (self.y_size + 1) * (self.z_size + 1);
        let inner = (self.x_size - 1) * (self.y_size - 1) * (self.z_size - 1);
        (outer - inner) as usize
    }

    /// The number of quads on the box surface.
    pub fn num_quads(&self) -> usize {
        let (x, y, z) = (self.x_size, self.y_size, self.z_size);
        (2 * (x * y + y * z + z * x)) as usize
    }

    /// The number of triangles on the box surface (two per quad).
    pub fn num_triangles(&self) -> usize {
        self.num_quads() * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let cube = RoundedBox::flat(2, 2, 2).unwrap();
        assert_eq!(cube.num_surface_vertices(), 26);
        assert_eq!(cube.num_quads(), 24);
        assert_eq!(cube.ring(), 8);

        let unit = RoundedBox::flat(1, 1, 1).unwrap();
        assert_eq!(unit.num_surface_vertices(), 8);
        assert_eq!(unit.num_quads(), 6);
    }

    #[test]
    fn validation() {
        assert_eq!(
            RoundedBox::new(0, 2, 2, 0),
            Err(InvalidBoxError::InvalidDimensions {
                x_size: 0,
                y_size: 2,
                z_size: 2
            })
        );
        assert_eq!(
            RoundedBox::new(3, 2, 3, 1),
            Err(InvalidBoxError::InvalidRoundness {
                roundness: 1,
                min_size: 2
            })
        );
        assert!(RoundedBox::new(3, 3, 3, 1).is_ok());
    }
}
