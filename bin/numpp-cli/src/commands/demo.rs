// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `numpp demo` command: a guided tour of the array API.
//!
//! Each section prints the statement being demonstrated followed by the
//! values it produces.

use numpp::{all, eye, full, identity, nested, range, slice, Array, AxisSpec, NumppConfig, Scalar};

use super::{banner, indented};

const RULE: &str = "  ──────────────────────────────────────────────────────";

pub fn execute(config: &NumppConfig) -> anyhow::Result<()> {
    banner("numpp · Walkthrough");

    creation_and_reshaping(config)?;
    factories(config)?;
    indexing()?;
    views_and_copies()?;
    sections()?;
    arithmetic(config)?;
    dot_products()?;
    comparisons(config)?;
    Ok(())
}

fn section(title: &str) {
    println!("  {title}");
    println!("{RULE}");
}

fn show<T: Scalar>(config: &NumppConfig, array: &Array<T>) {
    println!("{}", indented(&array.display_with(&config.print).to_string()));
}

fn creation_and_reshaping(config: &NumppConfig) -> anyhow::Result<()> {
    section("Array creation and reshaping");

    let mut arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]])?;
    println!("  arr = [[1, 2, 3], [4, 5, 6]]");
    println!("   size: {}  ndims: {}  shape: {}", arr.size(), arr.ndims(), arr.shape());
    show(config, &arr);

    let arr3d = Array::from_nested(nested![[[1, 2, 3], [4, 5, 6]], [[7, 8, 9], [10, 11, 12]]])?;
    println!("  arr3d = [[[1, 2, 3], [4, 5, 6]], [[7, 8, 9], [10, 11, 12]]]");
    println!("   size: {}  ndims: {}  shape: {}", arr3d.size(), arr3d.ndims(), arr3d.shape());

    let reshaped = arr.reshape([6])?;
    println!("  reshaped = arr.reshape([6])");
    println!("   arr: {}  reshaped: {}", arr.shape(), reshaped.shape());

    arr.resize([3, 2])?;
    println!("  arr.resize([3, 2])");
    println!("   arr: {}  reshaped: {}", arr.shape(), reshaped.shape());

    let flat = arr.flatten();
    arr.resize_flat();
    println!("  flat = arr.flatten(); arr.resize_flat()");
    println!("   arr: {}  flat: {}", arr.shape(), flat.shape());
    println!();
    Ok(())
}

fn factories(config: &NumppConfig) -> anyhow::Result<()> {
    section("Factories");

    let f = full([4, 3, 2], 0.5f64);
    println!("  f = full([4, 3, 2], 0.5)");
    println!(
        "   shape: {}  f[0], f[1], ..., f[-1]: {}, {}, ..., {}",
        f.shape(),
        f.get(0)?,
        f.get(1)?,
        f.get(-1)?
    );

    let e = eye(2, -1i32)?;
    println!("  e = eye(2, -1)");
    show(config, &e);

    let i = identity::<i32>(2)?;
    println!("  identity(2) diagonal value: {}", i.get_at(&[0, 0])?);
    println!();
    Ok(())
}

fn indexing() -> anyhow::Result<()> {
    section("Indexing");

    let arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]])?;
    println!("  arr = [[1, 2, 3], [4, 5, 6]]");
    println!(
        "   arr(0, 0), arr(0, 1), arr(0, 2), ..., arr(1, 2): {}, {}, {}, ..., {}",
        arr.get_at(&[0, 0])?,
        arr.get_at(&[0, 1])?,
        arr.get_at(&[0, 2])?,
        arr.get_at(&[1, 2])?
    );
    println!(
        "   arr[0], arr[1], arr[2], ..., arr[5]: {}, {}, {}, ..., {}",
        arr.get(0)?,
        arr.get(1)?,
        arr.get(2)?,
        arr.get(5)?
    );
    println!(
        "   arr(0, -1), arr(-1, 0), arr(-1, -1), arr(1, -2): {}, {}, {}, {}",
        arr.get_at(&[0, -1])?,
        arr.get_at(&[-1, 0])?,
        arr.get_at(&[-1, -1])?,
        arr.get_at(&[1, -2])?
    );
    println!(
        "   arr[-1], arr[-2], arr[-6]: {}, {}, {}",
        arr.get(-1)?,
        arr.get(-2)?,
        arr.get(-6)?
    );
    println!();
    Ok(())
}

fn views_and_copies() -> anyhow::Result<()> {
    section("Views and copies");

    let arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]])?;
    let mut v = arr.view_all();
    v.resize([3, 2])?;
    println!("  v = arr.view_all(); v.resize([3, 2])");
    arr.set_at(&[0, 0], 100)?;
    println!("  arr(0, 0) = 100");
    println!("   arr(0, 0), v(0, 0): {}, {}", arr.get_at(&[0, 0])?, v.get_at(&[0, 0])?);
    v.set_at(&[1, 0], 300)?;
    println!("  v(1, 0) = 300");
    println!("   arr(0, 2), v(1, 0): {}, {}", arr.get_at(&[0, 2])?, v.get_at(&[1, 0])?);

    let c = arr.copy();
    println!("  c = arr.copy()");
    arr.set_at(&[0, 1], 200)?;
    println!("  arr(0, 1) = 200");
    println!("   arr(0, 1), c(0, 1): {}, {}", arr.get_at(&[0, 1])?, c.get_at(&[0, 1])?);
    c.set_at(&[1, 0], 400)?;
    println!("  c(1, 0) = 400");
    println!("   arr(1, 0), c(1, 0): {}, {}", arr.get_at(&[1, 0])?, c.get_at(&[1, 0])?);
    println!();
    Ok(())
}

fn sections() -> anyhow::Result<()> {
    section("Sections, diagonal and transpose");

    let arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]])?;
    println!("  arr = [[1, 2, 3], [4, 5, 6]]");

    let mut v1 = arr.view(&[AxisSpec::Index(0), all()])?;
    v1.resize_flat();
    println!("  v1 = arr.view(0, all()); v1.resize_flat()");
    println!("   v1(0), v1(-1): {}, {}", v1.get(0)?, v1.get(-1)?);

    let mut v2 = arr.view(&[all(), AxisSpec::Index(-1)])?;
    v2.resize_flat();
    println!("  v2 = arr.view(all(), -1); v2.resize_flat()");
    println!("   v2(0), v2(-1): {}, {}", v2.get(0)?, v2.get(-1)?);

    let v3 = arr.view(&[all(), slice([0, -1])])?;
    println!("  v3 = arr.view(all(), slice([0, -1]))");
    println!(
        "   v3(0, 0), v3(0, 1), v3(1, 0), v3(1, 1): {}, {}, {}, {}",
        v3.get_at(&[0, 0])?,
        v3.get_at(&[0, 1])?,
        v3.get_at(&[1, 0])?,
        v3.get_at(&[1, 1])?
    );

    let v4 = arr.view(&[all(), range(0, 2)])?;
    println!("  v4 = arr.view(all(), range(0, 2))");
    println!(
        "   v4(0, 0), v4(0, 2), v4(-1, -1): {}, {}, {}",
        v4.get_at(&[0, 0])?,
        v4.get_at(&[0, 2])?,
        v4.get_at(&[-1, -1])?
    );

    let d = arr.view(&[slice([0, 1]), slice([0, 1])])?.diagonal()?;
    println!("  d = arr.view(slice([0, 1]), slice([0, 1])).diagonal()");
    println!("   d(0), d(1): {}, {}", d.get(0)?, d.get(1)?);

    let t = arr.transpose();
    println!("  t = arr.transpose()");
    println!("   t.shape: {}", t.shape());
    println!();
    Ok(())
}

fn arithmetic(config: &NumppConfig) -> anyhow::Result<()> {
    section("Arithmetic");

    let arr = Array::from_nested(nested![[1, 2, 3], [4, 5, 6]])?;
    let plus = &arr + 10;
    println!("  arr + 10");
    println!(
        "   (0, 0), (-1, -1): {}, {}",
        plus.get_at(&[0, 0])?,
        plus.get_at(&[-1, -1])?
    );
    println!("  arr - 5, arr * 2, arr / 10, arr % 3");
    for result in [&arr - 5, &arr * 2, &arr / 10, &arr % 3] {
        show(config, &result);
    }

    let arr2 = Array::from_nested(nested![[10, 20, 30], [40, 50, 60]])?;
    let sum = (&arr + &arr2)?;
    println!("  arr + [[10, 20, 30], [40, 50, 60]]");
    println!(
        "   (0, 0), (-1, -1): {}, {}",
        sum.get_at(&[0, 0])?,
        sum.get_at(&[-1, -1])?
    );
    println!("  arr - arr2, arr * arr2, arr / arr2, arr % arr2");
    for result in [&arr - &arr2, &arr * &arr2, &arr / &arr2, &arr % &arr2] {
        show(config, &result?);
    }
    println!();
    Ok(())
}

fn dot_products() -> anyhow::Result<()> {
    section("Dot products");

    let vec1 = Array::from_nested(nested![1, 2])?;
    let vec2 = Array::from_nested(nested![3, 4])?;
    let dot11 = vec1.dot(&vec2)?;
    println!("  [1, 2] · [3, 4]");
    println!("   size: {}  value: {}", dot11.size(), dot11.get(0)?);

    let mat = Array::from_nested(nested![[1, 2], [3, 4], [5, 6]])?;
    let dot21 = mat.dot(&vec1)?;
    println!("  mat = [[1, 2], [3, 4], [5, 6]]");
    println!("  mat · [1, 2]");
    println!("   shape: {}  values: {:?}", dot21.shape(), dot21.to_vec());

    let dot12 = vec1.dot(&mat.transpose())?;
    println!("  [1, 2] · mat.transpose()");
    println!("   shape: {}  values: {:?}", dot12.shape(), dot12.to_vec());

    let dot22 = mat.transpose().dot(&mat)?;
    println!("  mat.transpose() · mat");
    println!("   shape: {}  values: {:?}", dot22.shape(), dot22.to_vec());
    println!();
    Ok(())
}

fn comparisons(config: &NumppConfig) -> anyhow::Result<()> {
    section("Comparisons");

    let first = Array::from_nested(nested![1, 2, 3])?;
    let second = Array::from_nested(nested![2, 2, 2])?;
    println!("  first = [1, 2, 3], second = [2, 2, 2]");
    println!("   first == second: {:?}", first.equal(&second)?.to_vec());
    println!("   first >  second: {:?}", first.greater(&second)?.to_vec());
    println!("   first >= second: {:?}", first.greater_equal(&second)?.to_vec());
    println!("   first <  second: {:?}", first.less(&second)?.to_vec());
    println!("   first <= second: {:?}", first.less_equal(&second)?.to_vec());

    let comp = first.equal_scalar(3);
    println!("  comp = first == 3");
    show(config, &comp);
    println!("   comp.any(), comp.all(): {}, {}", comp.any(), comp.all());

    let comp = first.less_equal_scalar(3);
    println!("  comp = first <= 3");
    println!("   comp.any(), comp.all(): {}, {}", comp.any(), comp.all());
    println!();
    Ok(())
}
