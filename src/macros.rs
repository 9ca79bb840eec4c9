//! Utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands, forwarding to the borrowed-borrowed body.
macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] for a type that
/// implements [`Aggregate`](crate::swizzle::Aggregate), comparing the
/// components pairwise.
macro_rules! impl_approx_eq_for_aggregate {
    ($t:ty, $n:literal) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                <$t as $crate::swizzle::Aggregate<$n>>::as_array(self)
                    .iter()
                    .zip(<$t as $crate::swizzle::Aggregate<$n>>::as_array(other))
                    .all(|(a, b)| ::approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                <$t as $crate::swizzle::Aggregate<$n>>::as_array(self)
                    .iter()
                    .zip(<$t as $crate::swizzle::Aggregate<$n>>::as_array(other))
                    .all(|(a, b)| ::approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
            }
        }
    };
}

/// Generates named swizzle accessors for an aggregate type.
///
/// Each entry `name => [i, j, ...]` under an output type produces a reading
/// method `name(&self) -> Output` that gathers the listed components, and a
/// writing method `set_name(&mut self, value: Output)` that scatters the
/// components of `value` back into the listed slots from left to right.
///
/// The index lists are checked against the given dimension of the source
/// type at compile time, so an out-of-range index fails the build.
macro_rules! impl_swizzles {
    (
        $t:ident [$dim:literal],
        $(
            $out:ident => {
                $($name:ident => [$($index:literal),+]),+ $(,)?
            }
        ),+ $(,)?
    ) => {
        ::pastey::paste! {
            impl $t {
                $($(
                    #[doc = concat!(
                        "Gathers the `", stringify!($name), "` components into a new [`",
                        stringify!($out), "`]."
                    )]
                    #[inline]
                    pub fn $name(&self) -> $out {
                        const {
                            assert!($crate::swizzle::indices_in_bounds(
                                &[$($index),+],
                                $dim
                            ));
                        }
                        <$t as $crate::swizzle::Aggregate<$dim>>::permuted(self, [$($index),+])
                    }

                    #[doc = concat!(
                        "Writes the components of the given [`", stringify!($out),
                        "`] into the `", stringify!($name), "` slots, in order."
                    )]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: $out) {
                        const {
                            assert!($crate::swizzle::indices_in_bounds(
                                &[$($index),+],
                                $dim
                            ));
                        }
                        <$t as $crate::swizzle::Aggregate<$dim>>::set_permuted(self, [$($index),+], &value);
                    }
                )+)+
            }
        }
    };
}
