//! Macros for writing the `core::ops` boilerplate shared by both integer types.

/// Emit a `core::ops` binary operator (owned and borrowed operands) plus its
/// `*Assign` form as wrappers for an inherent `fn(&self, &Self) -> Self`.
macro_rules! int_op {
    ($int:ty, $op:ident, $func:ident, $op_assign:ident, $func_assign:ident, $inner:ident $(, const $n:ident)?) => {
        impl<$(const $n: usize)?> ::core::ops::$op for $int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: $int) -> $int {
                <$int>::$inner(&self, &rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<&$int> for $int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: &$int) -> $int {
                <$int>::$inner(&self, rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<$int> for &$int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: $int) -> $int {
                <$int>::$inner(self, &rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<&$int> for &$int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: &$int) -> $int {
                <$int>::$inner(self, rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op_assign for $int {
            #[inline]
            fn $func_assign(&mut self, rhs: $int) {
                *self = <$int>::$inner(self, &rhs);
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op_assign<&$int> for $int {
            #[inline]
            fn $func_assign(&mut self, rhs: &$int) {
                *self = <$int>::$inner(self, rhs);
            }
        }
    };
}

/// Emit `<<`/`>>` style operators taking either a `u32` shift count or an
/// integer whose low 32 bits are the shift count.
macro_rules! int_shift {
    ($int:ty, $op:ident, $func:ident, $op_assign:ident, $func_assign:ident, $inner:ident $(, const $n:ident)?) => {
        impl<$(const $n: usize)?> ::core::ops::$op<u32> for $int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: u32) -> $int {
                <$int>::$inner(&self, rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<u32> for &$int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: u32) -> $int {
                <$int>::$inner(self, rhs)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<$int> for $int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: $int) -> $int {
                <$int>::$inner(&self, rhs.shift_amount())
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<&$int> for $int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: &$int) -> $int {
                <$int>::$inner(&self, rhs.shift_amount())
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op<&$int> for &$int {
            type Output = $int;

            #[inline]
            fn $func(self, rhs: &$int) -> $int {
                <$int>::$inner(self, rhs.shift_amount())
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op_assign<u32> for $int {
            #[inline]
            fn $func_assign(&mut self, rhs: u32) {
                *self = <$int>::$inner(self, rhs);
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op_assign<&$int> for $int {
            #[inline]
            fn $func_assign(&mut self, rhs: &$int) {
                *self = <$int>::$inner(self, rhs.shift_amount());
            }
        }
    };
}

/// Emit a unary `core::ops` operator for owned and borrowed operands.
macro_rules! int_unary_op {
    ($int:ty, $op:ident, $func:ident, $inner:ident $(, const $n:ident)?) => {
        impl<$(const $n: usize)?> ::core::ops::$op for $int {
            type Output = $int;

            #[inline]
            fn $func(self) -> $int {
                <$int>::$inner(&self)
            }
        }

        impl<$(const $n: usize)?> ::core::ops::$op for &$int {
            type Output = $int;

            #[inline]
            fn $func(self) -> $int {
                <$int>::$inner(self)
            }
        }
    };
}

/// Emit the full operator set for an integer type.
macro_rules! int_ops {
    ($int:ty $(, const $n:ident)?) => {
        int_op!($int, Add, add, AddAssign, add_assign, sum $(, const $n)?);
        int_op!($int, Sub, sub, SubAssign, sub_assign, difference $(, const $n)?);
        int_op!($int, Mul, mul, MulAssign, mul_assign, product $(, const $n)?);
        int_op!($int, Div, div, DivAssign, div_assign, quotient $(, const $n)?);
        int_op!($int, Rem, rem, RemAssign, rem_assign, remainder $(, const $n)?);
        int_op!($int, BitAnd, bitand, BitAndAssign, bitand_assign, and_bits $(, const $n)?);
        int_op!($int, BitOr, bitor, BitOrAssign, bitor_assign, or_bits $(, const $n)?);
        int_op!($int, BitXor, bitxor, BitXorAssign, bitxor_assign, xor_bits $(, const $n)?);
        int_shift!($int, Shl, shl, ShlAssign, shl_assign, shl_bits $(, const $n)?);
        int_shift!($int, Shr, shr, ShrAssign, shr_assign, shr_bits $(, const $n)?);
        int_unary_op!($int, Neg, neg, negate $(, const $n)?);
        int_unary_op!($int, Not, not, complement $(, const $n)?);
    };
}
