//! Fixed 3x3 transforms in linear RGB.
//!
//! The deficiency matrices are empirical approximations of dichromatic and
//! anomalous trichromatic perception. The literals must not be altered.

use super::blindness::BlindnessType;

/// Row-major 3x3 matrix.
pub type Matrix3 = [[f64; 3]; 3];

/// CIE XYZ to linear RGB (D65).
pub const TRISTIMULUS_MATRIX: Matrix3 = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Simulation matrix for every non-identity model.
///
/// `Normal` is deliberately absent: its simulation is the identity.
static SIMULATION_MATRICES: [(BlindnessType, Matrix3); 6] = [
    (
        BlindnessType::Protanopia,
        [[0.567, 0.433, 0.0], [0.558, 0.442, 0.0], [0.0, 0.242, 0.758]],
    ),
    (
        BlindnessType::Deuteranopia,
        [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]],
    ),
    (
        BlindnessType::Tritanopia,
        [[0.95, 0.05, 0.0], [0.0, 0.433, 0.567], [0.0, 0.475, 0.525]],
    ),
    (
        BlindnessType::Protanomaly,
        [[0.817, 0.183, 0.0], [0.333, 0.667, 0.0], [0.0, 0.125, 0.875]],
    ),
    (
        BlindnessType::Deuteranomaly,
        [[0.8, 0.2, 0.0], [0.258, 0.742, 0.0], [0.0, 0.142, 0.858]],
    ),
    (
        BlindnessType::Tritanomaly,
        [[0.967, 0.033, 0.0], [0.0, 0.733, 0.267], [0.0, 0.183, 0.817]],
    ),
];

/// Look up the simulation matrix for `kind`.
///
/// Returns `None` only for [`BlindnessType::Normal`].
pub fn simulation_matrix(kind: BlindnessType) -> Option<&'static Matrix3> {
    SIMULATION_MATRICES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, matrix)| matrix)
}

/// Multiply `matrix` by the column vector `(r, g, b)`.
#[inline]
pub fn apply_matrix(matrix: &Matrix3, r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    (
        matrix[0][0] * r + matrix[0][1] * g + matrix[0][2] * b,
        matrix[1][0] * r + matrix[1][1] * g + matrix[1][2] * b,
        matrix[2][0] * r + matrix[2][1] * g + matrix[2][2] * b,
    )
}
