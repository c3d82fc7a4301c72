// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::Command;
use image::{GenericImageView, Rgb, RgbImage};
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// A gray gradient with a darker stripe, 6 wide by 5 tall.
fn fixture(dir: &Path) -> PathBuf {
    let path = dir.join("input.png");
    let image = RgbImage::from_fn(6, 5, |x, y| {
        let v = if x == 3 { 20 } else { (x * 30 + y * 11) as u8 };
        Rgb([v, v, v])
    });
    image.save(&path).unwrap();
    path
}

fn pnmseam() -> Command {
    Command::cargo_bin("pnmseam").unwrap()
}

#[test]
fn energy_map_has_the_input_dimensions() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("energy.png");

    pnmseam()
        .arg("energy")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let energy = image::open(&output).unwrap();
    assert_eq!(energy.dimensions(), (6, 5));
    assert!(energy.to_luma8().pixels().any(|p| p[0] == 255));
}

#[test]
fn remove_takes_one_column_by_default() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("narrow.png");

    pnmseam()
        .arg("remove")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (5, 5));
}

#[test]
fn remove_horizontal_takes_one_row() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("short.png");

    pnmseam()
        .args(&["remove", "--horizontal"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(image::open(&output).unwrap().dimensions(), (6, 4));
}

#[test]
fn mark_paints_one_pixel_per_row() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("marked.png");

    pnmseam()
        .arg("mark")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let marked = image::open(&output).unwrap().to_rgb8();
    assert_eq!(marked.dimensions(), (6, 5));
    let red = marked.pixels().filter(|p| **p == Rgb([255, 0, 0])).count();
    assert_eq!(red, 5);
}

#[test]
fn verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path());
    let output = dir.path().join("narrow.png");

    pnmseam()
        .arg("-v")
        .arg("remove")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("found vertical seam"))
        .stderr(predicate::str::contains("removed vertical seam"));
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();

    pnmseam()
        .arg("energy")
        .arg(dir.path().join("nope.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn a_subcommand_is_required() {
    pnmseam().assert().failure();
}
