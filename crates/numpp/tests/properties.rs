// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Property-based tests for array operators.

use numpp::Array;
use proptest::prelude::*;

fn pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>, usize)> {
    (1usize..5, 1usize..5).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
            Just(cols),
        )
    })
}

fn matrix(values: Vec<i64>, cols: usize) -> Array<i64> {
    let rows = values.len() / cols;
    Array::from_vec(values, [rows, cols]).unwrap()
}

proptest! {
    #[test]
    fn add_then_sub_restores((lhs, rhs, cols) in pair()) {
        let a = matrix(lhs.clone(), cols);
        let b = matrix(rhs, cols);
        let sum = (&a + &b).unwrap();
        prop_assert_eq!((&sum - &b).unwrap().to_vec(), lhs);
    }

    #[test]
    fn scalar_ops_match_elementwise((lhs, _rhs, cols) in pair(), k in 1i64..50) {
        let a = matrix(lhs.clone(), cols);
        let scaled = &a * k;
        let expected: Vec<i64> = lhs.iter().map(|x| x * k).collect();
        prop_assert_eq!(scaled.to_vec(), expected);
    }

    #[test]
    fn comparisons_partition((lhs, rhs, cols) in pair()) {
        let a = matrix(lhs, cols);
        let b = matrix(rhs, cols);
        let lt = a.less(&b).unwrap().to_vec();
        let ge = a.greater_equal(&b).unwrap().to_vec();
        prop_assert!(lt.iter().zip(&ge).all(|(x, y)| x != y));
    }

    #[test]
    fn dot_with_identity_is_noop((lhs, _rhs, cols) in pair()) {
        let a = matrix(lhs.clone(), cols);
        let eye = numpp::identity::<i64>(cols).unwrap();
        prop_assert_eq!(a.dot(&eye).unwrap().to_vec(), lhs);
    }
}
