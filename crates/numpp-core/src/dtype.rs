// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Element types a [`crate::Storage`] can hold.

use std::fmt;

/// Runtime tag for the numeric element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    /// Results of elementwise comparisons.
    Bool,
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 | DType::Bool => 1,
            DType::I16 | DType::U16 => 2,
            DType::I32 | DType::U32 | DType::F32 => 4,
            DType::I64 | DType::U64 | DType::F64 => 8,
        }
    }

    /// Returns a human-readable label for this data type.
    pub fn as_str(self) -> &'static str {
        match self {
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::Bool => "bool",
        }
    }

    /// Returns `true` for the floating point types.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can live in a storage cell.
pub trait Scalar: Copy + Default + PartialEq + fmt::Debug + fmt::Display + 'static {
    /// The runtime tag of this type.
    const DTYPE: DType;

    /// Truthiness used by `any`/`all`: `true`, or any nonzero number.
    fn is_truthy(&self) -> bool;
}

/// Numeric scalars that support the arithmetic used by elementwise
/// operators and dot products.
pub trait Element: Scalar + PartialOrd + num_traits::Num {}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const DTYPE: DType = DType::$dtype;

                fn is_truthy(&self) -> bool {
                    *self != <$ty as num_traits::Zero>::zero()
                }
            }

            impl Element for $ty {}
        )*
    };
}

impl_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl Scalar for bool {
    const DTYPE: DType = DType::Bool;

    fn is_truthy(&self) -> bool {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bytes() {
        assert_eq!(DType::I8.size_bytes(), 1);
        assert_eq!(DType::F32.size_bytes(), 4);
        assert_eq!(DType::I64.size_bytes(), 8);
        assert_eq!(DType::Bool.size_bytes(), 1);
    }

    #[test]
    fn test_tags() {
        assert_eq!(<i32 as Scalar>::DTYPE, DType::I32);
        assert_eq!(<f64 as Scalar>::DTYPE, DType::F64);
        assert_eq!(<bool as Scalar>::DTYPE.as_str(), "bool");
        assert!(DType::F32.is_float());
        assert!(!DType::U8.is_float());
    }

    #[test]
    fn test_truthiness() {
        assert!(3i32.is_truthy());
        assert!(!0u8.is_truthy());
        assert!(!0.0f64.is_truthy());
        assert!(true.is_truthy());
        assert!(!false.is_truthy());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&DType::F64).unwrap();
        assert_eq!(json, "\"f64\"");
        let back: DType = serde_json::from_str("\"i16\"").unwrap();
        assert_eq!(back, DType::I16);
    }
}
