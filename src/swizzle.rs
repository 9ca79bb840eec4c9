//! Indexed, named and permuted access to fixed-size float aggregates.
//!
//! Every aggregate in this crate ([`Vector2`](crate::vector::Vector2),
//! [`Vector3`](crate::vector::Vector3), [`Vector4`](crate::vector::Vector4)
//! and [`Matrix4`](crate::matrix::Matrix4)) stores its components in a single
//! `[f32; N]`. The three ways of looking at that storage all go through the
//! same array:
//!
//! - indexing (`v[2]`) addresses the array directly;
//! - named accessors (`v.z()`, `v.z_mut()`, `m.m12()`) address fixed slots;
//! - swizzles (`v.zyx()`, `v.set_xy(..)`, or the generic
//!   [`Aggregate::permuted`]/[`Aggregate::set_permuted`]) gather components
//!   into a new aggregate or scatter them back into the slots in place.
//!
//! Reading a swizzle always produces a new value. Writing a swizzle always
//! mutates the original storage, one slot at a time from left to right, so
//! when an index repeats the last write to that slot wins.

/// A fixed-size aggregate of `N` `f32` components backed by one `[f32; N]`.
pub trait Aggregate<const N: usize>: Copy {
    /// Creates the aggregate from its components.
    fn from_array(components: [f32; N]) -> Self;

    /// The components of the aggregate.
    fn as_array(&self) -> &[f32; N];

    /// The components of the aggregate, mutably.
    fn as_array_mut(&mut self) -> &mut [f32; N];

    /// Copies out the components of the aggregate.
    #[inline]
    fn to_array(self) -> [f32; N] {
        *self.as_array()
    }

    /// Gathers the components at the given indices, in order, into a new
    /// aggregate of `K` components.
    ///
    /// # Panics
    /// If any index is `N` or larger.
    #[inline]
    fn permuted<const K: usize, A: Aggregate<K>>(&self, indices: [usize; K]) -> A {
        A::from_array(gather(self.as_array(), indices))
    }

    /// Writes the components of `value`, in order, into the slots at the
    /// given indices. If an index occurs more than once, the slot ends up
    /// holding the last component written to it.
    ///
    /// # Panics
    /// If any index is `N` or larger.
    #[inline]
    fn set_permuted<const K: usize, A: Aggregate<K>>(&mut self, indices: [usize; K], value: &A) {
        scatter(self.as_array_mut(), indices, value.as_array());
    }
}

/// Returns a new array whose `i`th element is `components[indices[i]]`.
///
/// # Panics
/// If any index is `N` or larger.
#[inline]
pub fn gather<const N: usize, const K: usize>(
    components: &[f32; N],
    indices: [usize; K],
) -> [f32; K] {
    indices.map(|index| components[index])
}

/// Sets `components[indices[i]]` to `values[i]` for each `i` in increasing
/// order.
///
/// # Panics
/// If any index is `N` or larger.
#[inline]
pub fn scatter<const N: usize, const K: usize>(
    components: &mut [f32; N],
    indices: [usize; K],
    values: &[f32; K],
) {
    for (index, &value) in indices.into_iter().zip(values) {
        components[index] = value;
    }
}

/// Whether every index is smaller than `len`. Usable in constant evaluation,
/// which is how the named swizzle accessors reject invalid index lists at
/// compile time.
pub const fn indices_in_bounds(indices: &[usize], len: usize) -> bool {
    let mut i = 0;
    while i < indices.len() {
        if indices[i] >= len {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2, Vector3, Vector4};

    #[test]
    fn gathering_follows_index_order() {
        let components = [1.0, 2.0, 3.0];
        assert_eq!(gather(&components, [2, 1, 0]), [3.0, 2.0, 1.0]);
        assert_eq!(gather(&components, [1, 1]), [2.0, 2.0]);
    }

    #[test]
    fn gathering_leaves_source_untouched() {
        let components = [1.0, 2.0, 3.0];
        let _ = gather(&components, [0, 0, 0]);
        assert_eq!(components, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn scattering_writes_only_listed_slots() {
        let mut components = [1.0, 2.0, 3.0];
        scatter(&mut components, [0, 1], &[9.0, 8.0]);
        assert_eq!(components, [9.0, 8.0, 3.0]);
    }

    #[test]
    fn scattering_to_repeated_index_keeps_last_write() {
        let mut components = [1.0, 2.0, 3.0];
        scatter(&mut components, [0, 0], &[5.0, 6.0]);
        assert_eq!(components, [6.0, 2.0, 3.0]);
    }

    #[test]
    fn permuting_into_smaller_aggregate_works() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let p: Vector2 = v.permuted([3, 0]);
        assert_eq!(p, Vector2::new(4.0, 1.0));
    }

    #[test]
    fn setting_permuted_components_mutates_in_place() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        v.set_permuted([3, 1, 0], &Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(v, Vector4::new(9.0, 8.0, 3.0, 7.0));
    }

    #[test]
    #[should_panic]
    fn permuting_with_out_of_range_index_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _: Vector2 = v.permuted([0, 3]);
    }

    #[test]
    fn checking_index_bounds_works() {
        assert!(indices_in_bounds(&[0, 1, 2], 3));
        assert!(!indices_in_bounds(&[0, 3], 3));
        assert!(indices_in_bounds(&[], 0));
    }
}
