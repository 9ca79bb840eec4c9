//! Matrices.

use crate::{
    swizzle::Aggregate,
    vector::{Vector3, Vector4},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix stored in column-major order.
///
/// The sixteen cells `m0` to `m15` are stored contiguously in that order, so
/// each column occupies four consecutive cells: column 0 is `m0..=m3`,
/// column 3 (the translation column of an affine transform) is `m12..=m15`.
/// The element at row `i` and column `j` is therefore cell `4 * j + i`.
///
/// Matrices act on column vectors, `M * v`, so in a product `A * B` the
/// transform `B` is applied first.
///
/// The default value is the zero matrix, not the identity.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    cells: [f32; 16],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_diagonal(&Vector4::same(1.0))
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_cells([0.0; 16])
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut cells = [0.0; 16];
        cells[0] = diagonal.x();
        cells[5] = diagonal.y();
        cells[10] = diagonal.z();
        cells[15] = diagonal.w();
        Self::from_cells(cells)
    }

    /// Creates a matrix from its cells `m0..=m15` in column-major order.
    #[inline]
    pub const fn from_cells(cells: [f32; 16]) -> Self {
        Self { cells }
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        let [c0, c1, c2, c3] = [
            column_1.to_array(),
            column_2.to_array(),
            column_3.to_array(),
            column_4.to_array(),
        ];
        Self::from_cells([
            c0[0], c0[1], c0[2], c0[3], //
            c1[0], c1[1], c1[2], c1[3], //
            c2[0], c2[1], c2[2], c2[3], //
            c3[0], c3[1], c3[2], c3[3], //
        ])
    }

    /// Returns the cells `m0..=m15` in column-major order.
    #[inline]
    pub const fn to_cells(self) -> [f32; 16] {
        self.cells
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        self.cells[Self::cell_index(i, j)]
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        &mut self.cells[Self::cell_index(i, j)]
    }

    /// Returns column `j` of the matrix.
    ///
    /// # Panics
    /// If `j` is 4 or larger.
    #[inline]
    pub fn column(&self, j: usize) -> Vector4 {
        assert!(j < 4, "column index out of bounds: {j}");
        Vector4::new(
            self.cells[4 * j],
            self.cells[4 * j + 1],
            self.cells[4 * j + 2],
            self.cells[4 * j + 3],
        )
    }

    /// Sets column `j` of the matrix to the given column.
    ///
    /// # Panics
    /// If `j` is 4 or larger.
    #[inline]
    pub fn set_column(&mut self, j: usize, column: Vector4) {
        assert!(j < 4, "column index out of bounds: {j}");
        self.cells[4 * j..4 * j + 4].copy_from_slice(&column.to_array());
    }

    /// Returns row `i` of the matrix.
    ///
    /// # Panics
    /// If `i` is 4 or larger.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        assert!(i < 4, "row index out of bounds: {i}");
        Vector4::new(
            self.cells[i],
            self.cells[4 + i],
            self.cells[8 + i],
            self.cells[12 + i],
        )
    }

    /// Returns the diagonal of this matrix as a vector.
    #[inline]
    pub fn diagonal(&self) -> Vector4 {
        let m = &self.cells;
        Vector4::new(m[0], m[5], m[10], m[15])
    }

    /// Returns the sum of the diagonal elements.
    #[inline]
    pub fn trace(&self) -> f32 {
        let m = &self.cells;
        m[0] + m[5] + m[10] + m[15]
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transposed(&self) -> Self {
        let m = &self.cells;
        Self::from_cells([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15], //
        ])
    }

    /// Computes the determinant by expansion in complementary 2x2 minors.
    #[inline]
    pub fn determinant(&self) -> f32 {
        Self::determinant_from_minors(&self.minors())
    }

    /// Returns the inverse of this matrix. If the matrix is not invertible, the
    /// result will be non-finite.
    ///
    /// Use [`Self::checked_inverted`] to detect singular matrices instead.
    #[inline]
    pub fn inverted(&self) -> Self {
        let minors = self.minors();
        let determinant = Self::determinant_from_minors(&minors);
        self.adjugate_scaled(&minors, determinant.recip())
    }

    /// Returns the inverse of this matrix, or [`None`] if the determinant is
    /// not finite or so close to zero that its reciprocal is not finite.
    #[inline]
    pub fn checked_inverted(&self) -> Option<Self> {
        let minors = self.minors();
        let determinant = Self::determinant_from_minors(&minors);
        let inverse_determinant = determinant.recip();
        if !determinant.is_finite() || !inverse_determinant.is_finite() {
            return None;
        }
        Some(self.adjugate_scaled(&minors, inverse_determinant))
    }

    /// Whether all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cells.iter().all(|m| m.is_finite())
    }

    /// Returns a matrix with the given closure applied to each element.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f32) -> f32) -> Self {
        Self::from_cells(self.cells.map(f))
    }

    /// Computes the matrix product `self * rhs`.
    ///
    /// Every output cell is an independent four-term dot product of a row of
    /// `self` and a column of `rhs`, read straight from the two cell arrays
    /// and written into a fresh array.
    #[inline]
    pub fn multiplied(&self, rhs: &Self) -> Self {
        let a = &self.cells;
        let b = &rhs.cells;
        Self::from_cells([
            a[0] * b[0] + a[4] * b[1] + a[8] * b[2] + a[12] * b[3],
            a[1] * b[0] + a[5] * b[1] + a[9] * b[2] + a[13] * b[3],
            a[2] * b[0] + a[6] * b[1] + a[10] * b[2] + a[14] * b[3],
            a[3] * b[0] + a[7] * b[1] + a[11] * b[2] + a[15] * b[3],
            a[0] * b[4] + a[4] * b[5] + a[8] * b[6] + a[12] * b[7],
            a[1] * b[4] + a[5] * b[5] + a[9] * b[6] + a[13] * b[7],
            a[2] * b[4] + a[6] * b[5] + a[10] * b[6] + a[14] * b[7],
            a[3] * b[4] + a[7] * b[5] + a[11] * b[6] + a[15] * b[7],
            a[0] * b[8] + a[4] * b[9] + a[8] * b[10] + a[12] * b[11],
            a[1] * b[8] + a[5] * b[9] + a[9] * b[10] + a[13] * b[11],
            a[2] * b[8] + a[6] * b[9] + a[10] * b[10] + a[14] * b[11],
            a[3] * b[8] + a[7] * b[9] + a[11] * b[10] + a[15] * b[11],
            a[0] * b[12] + a[4] * b[13] + a[8] * b[14] + a[12] * b[15],
            a[1] * b[12] + a[5] * b[13] + a[9] * b[14] + a[13] * b[15],
            a[2] * b[12] + a[6] * b[13] + a[10] * b[14] + a[14] * b[15],
            a[3] * b[12] + a[7] * b[13] + a[11] * b[14] + a[15] * b[15],
        ])
    }

    /// Computes the product of this matrix with the given column vector.
    #[inline]
    pub fn transform(&self, vector: &Vector4) -> Vector4 {
        let m = &self.cells;
        let [x, y, z, w] = vector.to_array();
        Vector4::new(
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        )
    }

    /// Assuming this matrix represents an affine transform, applies the
    /// transform to the given point.
    #[inline]
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.transform(&point.extended(1.0)).xyz()
    }

    /// Assuming this matrix represents an affine transform, applies the
    /// transform to the given vector. The translation part of the transform is
    /// not applied to vectors.
    #[inline]
    pub fn transform_vector(&self, vector: &Vector3) -> Vector3 {
        self.transform(&vector.extended(0.0)).xyz()
    }

    /// Assuming this matrix represents a projection, projects the given point
    /// by applying the matrix and performing perspective division.
    #[inline]
    pub fn project_point(&self, point: &Vector3) -> Vector3 {
        let projected = self.transform(&point.extended(1.0));
        projected.xyz() / projected.w()
    }

    /// The twelve 2x2 minors taken from the first two and the last two
    /// columns, in the order the determinant and inverse formulas use them.
    /// Naming `aJI` for the element at column `J` and row `I`, the first six
    /// pair rows within columns 0 and 1, the last six within columns 2 and 3.
    #[inline]
    fn minors(&self) -> [f32; 12] {
        let [
            a00, a01, a02, a03, //
            a10, a11, a12, a13, //
            a20, a21, a22, a23, //
            a30, a31, a32, a33, //
        ] = self.cells;

        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    #[inline]
    fn determinant_from_minors(b: &[f32; 12]) -> f32 {
        b[0] * b[11] - b[1] * b[10] + b[2] * b[9] + b[3] * b[8] - b[4] * b[7] + b[5] * b[6]
    }

    /// The adjugate of this matrix multiplied by `scale`.
    #[inline]
    fn adjugate_scaled(&self, b: &[f32; 12], scale: f32) -> Self {
        let [
            a00, a01, a02, a03, //
            a10, a11, a12, a13, //
            a20, a21, a22, a23, //
            a30, a31, a32, a33, //
        ] = self.cells;

        Self::from_cells([
            (a11 * b[11] - a12 * b[10] + a13 * b[9]) * scale,
            (a02 * b[10] - a01 * b[11] - a03 * b[9]) * scale,
            (a31 * b[5] - a32 * b[4] + a33 * b[3]) * scale,
            (a22 * b[4] - a21 * b[5] - a23 * b[3]) * scale,
            (a12 * b[8] - a10 * b[11] - a13 * b[7]) * scale,
            (a00 * b[11] - a02 * b[8] + a03 * b[7]) * scale,
            (a32 * b[2] - a30 * b[5] - a33 * b[1]) * scale,
            (a20 * b[5] - a22 * b[2] + a23 * b[1]) * scale,
            (a10 * b[10] - a11 * b[8] + a13 * b[6]) * scale,
            (a01 * b[8] - a00 * b[10] - a03 * b[6]) * scale,
            (a30 * b[4] - a31 * b[2] + a33 * b[0]) * scale,
            (a21 * b[2] - a20 * b[4] - a23 * b[0]) * scale,
            (a11 * b[7] - a10 * b[9] - a12 * b[6]) * scale,
            (a00 * b[9] - a01 * b[7] + a02 * b[6]) * scale,
            (a31 * b[1] - a30 * b[3] - a32 * b[0]) * scale,
            (a20 * b[3] - a21 * b[1] + a22 * b[0]) * scale,
        ])
    }

    #[inline]
    fn cell_index(i: usize, j: usize) -> usize {
        assert!(i < 4 && j < 4, "index out of bounds: ({i}, {j})");
        4 * j + i
    }
}

macro_rules! impl_named_cells {
    ($($index:literal),+ $(,)?) => {
        ::pastey::paste! {
            impl Matrix4 {
                $(
                    #[doc = concat!("The cell `m", stringify!($index), "`.")]
                    #[inline]
                    pub const fn [<m $index>](&self) -> f32 {
                        self.cells[$index]
                    }

                    #[doc = concat!("A mutable reference to the cell `m", stringify!($index), "`.")]
                    #[inline]
                    pub const fn [<m $index _mut>](&mut self) -> &mut f32 {
                        &mut self.cells[$index]
                    }
                )+
            }
        }
    };
}

impl_named_cells!(0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15);

impl Aggregate<16> for Matrix4 {
    #[inline]
    fn from_array(cells: [f32; 16]) -> Self {
        Self::from_cells(cells)
    }

    #[inline]
    fn as_array(&self) -> &[f32; 16] {
        &self.cells
    }

    #[inline]
    fn as_array_mut(&mut self) -> &mut [f32; 16] {
        &mut self.cells
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(cells: [f32; 16]) -> Self {
        Self::from_cells(cells)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.to_cells()
    }
}

impl From<glam::Mat4> for Matrix4 {
    #[inline]
    fn from(matrix: glam::Mat4) -> Self {
        Self::from_cells(matrix.to_cols_array())
    }
}

impl From<Matrix4> for glam::Mat4 {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        Self::from_cols_array(&matrix.cells)
    }
}

impl_binop!(Add, add, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_cells(std::array::from_fn(|i| a.cells[i] + b.cells[i]))
});

impl_binop!(Sub, sub, Matrix4, Matrix4, Matrix4, |a, b| {
    Matrix4::from_cells(std::array::from_fn(|i| a.cells[i] - b.cells[i]))
});

impl_binop!(Mul, mul, Matrix4, Matrix4, Matrix4, |a, b| {
    a.multiplied(b)
});

impl_binop!(Mul, mul, Matrix4, Vector4, Vector4, |a, b| {
    a.transform(b)
});

impl_binop!(Mul, mul, Matrix4, f32, Matrix4, |a, b| {
    let b = *b;
    a.mapped(|m| m * b)
});

impl_binop!(Mul, mul, f32, Matrix4, Matrix4, |a, b| { b * *a });

impl_binop!(Div, div, Matrix4, f32, Matrix4, |a, b| {
    a * b.recip()
});

impl_binop_assign!(AddAssign, add_assign, Matrix4, Matrix4, |a, b| {
    *a = &*a + b;
});

impl_binop_assign!(SubAssign, sub_assign, Matrix4, Matrix4, |a, b| {
    *a = &*a - b;
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, Matrix4, |a, b| {
    *a = a.multiplied(b);
});

impl_binop_assign!(MulAssign, mul_assign, Matrix4, f32, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(DivAssign, div_assign, Matrix4, f32, |a, b| {
    *a = &*a / b;
});

impl_unary_op!(Neg, neg, Matrix4, Matrix4, |val| { val.mapped(|m| -m) });

impl_approx_eq_for_aggregate!(Matrix4, 16);

impl fmt::Debug for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [[f32; 4]; 4] = std::array::from_fn(|i| self.row(i).to_array());
        f.debug_struct("Matrix4").field("rows", &rows).finish()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    fn general_matrix() -> Matrix4 {
        Matrix4::from_cells([
            2.0, 0.5, -1.0, 0.0, //
            1.0, 3.0, 0.0, 0.0, //
            0.0, -2.0, 4.0, 0.0, //
            5.0, 1.0, -3.0, 1.0, //
        ])
    }

    fn other_general_matrix() -> Matrix4 {
        Matrix4::from_cells([
            1.0, 2.0, 0.0, 1.0, //
            0.0, 1.0, 3.0, 0.0, //
            4.0, 0.0, 1.0, 2.0, //
            0.0, 1.0, 0.0, 1.0, //
        ])
    }

    #[test]
    fn default_matrix_is_zero_matrix() {
        assert_eq!(Matrix4::default(), Matrix4::zeros());
        assert!(Matrix4::default().to_cells().iter().all(|&m| m == 0.0));
    }

    #[test]
    fn creating_identity_gives_ones_on_diagonal_only() {
        let identity = Matrix4::identity();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(identity.element(i, j), expected);
            }
        }
    }

    #[test]
    fn creating_matrix_from_columns_stores_columns_contiguously() {
        let m = Matrix4::from_columns(
            Vector4::new(0.0, 1.0, 2.0, 3.0),
            Vector4::new(4.0, 5.0, 6.0, 7.0),
            Vector4::new(8.0, 9.0, 10.0, 11.0),
            Vector4::new(12.0, 13.0, 14.0, 15.0),
        );
        for (index, cell) in m.to_cells().into_iter().enumerate() {
            assert_eq!(cell, index as f32);
        }
        assert_eq!(m.column(2), Vector4::new(8.0, 9.0, 10.0, 11.0));
        assert_eq!(m.row(0), Vector4::new(0.0, 4.0, 8.0, 12.0));
    }

    #[test]
    fn named_cells_indexing_and_elements_share_storage() {
        let mut m = Matrix4::identity();

        *m.m12_mut() = 7.0;
        assert_eq!(m[12], 7.0);
        assert_eq!(m.element(0, 3), 7.0);

        m[13] = 8.0;
        assert_eq!(m.m13(), 8.0);

        *m.element_mut(2, 3) = 9.0;
        assert_eq!(m.m14(), 9.0);
        assert_eq!(m.as_array()[14], 9.0);
    }

    #[test]
    fn setting_column_works() {
        let mut m = Matrix4::zeros();
        m.set_column(3, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(m.m12(), 1.0);
        assert_eq!(m.m15(), 4.0);
        assert_eq!(m.column(3), Vector4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn accessing_element_outside_matrix_panics() {
        Matrix4::identity().element(4, 0);
    }

    #[test]
    fn multiplying_with_identity_gives_same_matrix() {
        let m = general_matrix();
        assert_abs_diff_eq!(m * Matrix4::identity(), m, epsilon = EPSILON);
        assert_abs_diff_eq!(Matrix4::identity() * m, m, epsilon = EPSILON);
    }

    #[test]
    fn multiplying_matrices_matches_row_times_column() {
        let a = general_matrix();
        let b = other_general_matrix();
        let product = a * b;

        for i in 0..4 {
            for j in 0..4 {
                let expected: f32 = (0..4).map(|k| a.element(i, k) * b.element(k, j)).sum();
                assert_abs_diff_eq!(product.element(i, j), expected, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn multiplying_matrices_matches_glam() {
        let a = general_matrix();
        let b = other_general_matrix();
        let expected = glam::Mat4::from(a) * glam::Mat4::from(b);
        assert_abs_diff_eq!(a * b, Matrix4::from(expected), epsilon = EPSILON);
    }

    #[test]
    fn matrix_multiplication_is_not_commutative() {
        let a = general_matrix();
        let b = other_general_matrix();
        assert!(!approx::abs_diff_eq!(a * b, b * a, epsilon = EPSILON));
    }

    #[test]
    fn multiply_assigning_applies_right_operand_first() {
        let mut m = general_matrix();
        m *= other_general_matrix();
        assert_abs_diff_eq!(
            m,
            general_matrix() * other_general_matrix(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn transposing_swaps_rows_and_columns() {
        let m = general_matrix();
        let t = m.transposed();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(t.element(i, j), m.element(j, i));
            }
        }
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn determinant_of_identity_is_one() {
        assert_eq!(Matrix4::identity().determinant(), 1.0);
    }

    #[test]
    fn determinant_of_diagonal_is_product_of_diagonal() {
        let m = Matrix4::from_diagonal(&Vector4::new(2.0, 3.0, 4.0, 1.0));
        assert_abs_diff_eq!(m.determinant(), 24.0, epsilon = EPSILON);
    }

    #[test]
    fn determinant_matches_glam() {
        let m = other_general_matrix();
        assert_abs_diff_eq!(
            m.determinant(),
            glam::Mat4::from(m).determinant(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn trace_sums_diagonal() {
        assert_eq!(general_matrix().trace(), 2.0 + 3.0 + 4.0 + 1.0);
        assert_eq!(Matrix4::identity().trace(), 4.0);
    }

    #[test]
    fn inverting_identity_gives_identity() {
        assert_abs_diff_eq!(
            Matrix4::identity().inverted(),
            Matrix4::identity(),
            epsilon = EPSILON
        );
    }

    #[test]
    fn multiplying_with_inverse_gives_identity() {
        for m in [general_matrix(), other_general_matrix()] {
            let inverse = m.inverted();
            assert_abs_diff_eq!(m * inverse, Matrix4::identity(), epsilon = EPSILON);
            assert_abs_diff_eq!(inverse * m, Matrix4::identity(), epsilon = EPSILON);
        }
    }

    #[test]
    fn inverting_matches_glam() {
        let m = other_general_matrix();
        assert_abs_diff_eq!(
            m.inverted(),
            Matrix4::from(glam::Mat4::from(m).inverse()),
            epsilon = EPSILON
        );
    }

    #[test]
    fn inverting_singular_matrix_gives_non_finite_result() {
        let mut singular = general_matrix();
        singular.set_column(1, singular.column(0) * 2.0);

        assert_eq!(singular.determinant(), 0.0);
        assert!(!singular.inverted().is_finite());
        assert!(singular.checked_inverted().is_none());
        assert!(Matrix4::zeros().checked_inverted().is_none());
    }

    #[test]
    fn checked_inverting_matrix_with_subnormal_determinant_gives_none() {
        let nearly_singular = Matrix4::from_diagonal(&Vector4::same(1e-10));
        assert_ne!(nearly_singular.determinant(), 0.0);
        assert!(!nearly_singular.inverted().is_finite());
        assert!(nearly_singular.checked_inverted().is_none());
    }

    #[test]
    fn checked_inverting_invertible_matrix_gives_inverse() {
        let m = general_matrix();
        let inverse = m.checked_inverted().unwrap();
        assert_abs_diff_eq!(inverse, m.inverted(), epsilon = EPSILON);
    }

    #[test]
    fn adding_and_subtracting_is_elementwise() {
        let a = general_matrix();
        let b = other_general_matrix();
        let sum = a + b;
        let difference = &a - &b;
        for index in 0..16 {
            assert_eq!(sum[index], a[index] + b[index]);
            assert_eq!(difference[index], a[index] - b[index]);
        }

        let mut c = a;
        c += b;
        c -= b;
        assert_abs_diff_eq!(c, a, epsilon = EPSILON);
    }

    #[test]
    fn scalar_operations_scale_every_element() {
        let m = general_matrix();
        assert_eq!((m * 2.0)[4], 2.0);
        assert_eq!((2.0 * m)[1], 1.0);
        assert_eq!((m / 2.0)[0], 1.0);
        assert_eq!((-m)[12], -5.0);

        let mut scaled = m;
        scaled *= 4.0;
        scaled /= 2.0;
        assert_abs_diff_eq!(scaled, m * 2.0, epsilon = EPSILON);
    }

    #[test]
    fn multiplying_with_vector_uses_columns() {
        let m = general_matrix();
        let v = Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(m * v, m.column(0));

        let w = Vector4::new(1.0, 2.0, 3.0, 1.0);
        let expected = glam::Mat4::from(m) * glam::Vec4::from(w);
        assert_abs_diff_eq!(m * w, Vector4::from(expected), epsilon = EPSILON);
    }

    #[test]
    fn transforming_point_and_vector_treats_translation_differently() {
        let mut m = Matrix4::identity();
        m.set_column(3, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let p = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(m.transform_point(&p), Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.transform_vector(&p), p);
    }

    #[test]
    fn projecting_point_divides_by_w() {
        let m = Matrix4::from_diagonal(&Vector4::new(1.0, 1.0, 1.0, 2.0));
        let projected = m.project_point(&Vector3::new(2.0, 4.0, 6.0));
        assert_abs_diff_eq!(projected, Vector3::new(1.0, 2.0, 3.0), epsilon = EPSILON);
    }

    #[test]
    fn converting_to_glam_keeps_column_major_order() {
        let m = general_matrix();
        let g = glam::Mat4::from(m);
        assert_eq!(g.w_axis, glam::Vec4::new(5.0, 1.0, -3.0, 1.0));
        assert_eq!(g.to_cols_array(), m.to_cells());
        assert_eq!(Matrix4::from(g), m);
    }

    #[test]
    fn matrix_has_plain_float_layout() {
        assert_eq!(size_of::<Matrix4>(), 16 * size_of::<f32>());
        assert_eq!(align_of::<Matrix4>(), align_of::<f32>());

        let matrices = [Matrix4::identity(), general_matrix()];
        let floats: &[f32] = bytemuck::cast_slice(&matrices);
        assert_eq!(floats.len(), 32);
        assert_eq!(floats[15], 1.0);
        assert_eq!(floats[16 + 12], 5.0);
    }

    #[test]
    fn debug_output_lists_rows() {
        let debug = format!("{:?}", Matrix4::identity());
        assert!(debug.starts_with("Matrix4 { rows: [[1.0, 0.0, 0.0, 0.0]"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn matrices_serialize_as_flat_cell_arrays() {
        let json = serde_json::to_string(&Matrix4::identity()).unwrap();
        assert_eq!(
            json,
            "[1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0,0.0,0.0,0.0,0.0,1.0]"
        );
    }
}
