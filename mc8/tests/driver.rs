use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

fn mc8asm<P: AsRef<OsStr>>(args: &[P], flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mc8asm"))
        .args(args)
        .args(flags)
        .env("MC8_LOG", "info")
        .output()
        .unwrap()
}

fn mc8dis<P: AsRef<OsStr>>(args: &[P], flags: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mc8dis"))
        .args(args)
        .args(flags)
        .output()
        .unwrap()
}

fn write_binary(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join("image.o");
    fs::write(&path, bytes).unwrap();
    path
}

fn write_source(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("source.asm");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_success_writes_binary() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "lbl: \nandi ireg\njump lbl\n");
    let output = dir.path().join("out.o");

    let res = mc8asm(&[&source, &output], &[]);

    assert_eq!(Some(0), res.status.code());
    assert_eq!(vec![0b0000_0000, 0b1111_1111], fs::read(&output).unwrap());
}

#[test]
fn test_failure_discards_output() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "andi r1\naddi r2\nfoo r1\n");
    let output = dir.path().join("out.o");

    let res = mc8asm(&[&source, &output], &[]);

    assert_eq!(Some(1), res.status.code());
    assert!(!output.exists());

    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("Unknown mnemonic on line 3"), "{}", stderr);
}

#[test]
fn test_label_failure_discards_stale_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.o");

    let source = write_source(&dir, "andi r1\n");
    let res = mc8asm(&[&source, &output], &[]);
    assert_eq!(Some(0), res.status.code());
    assert_eq!(vec![0b0000_0001], fs::read(&output).unwrap());

    // Rebuild from a source the label pass rejects
    let source = write_source(&dir, "foo:\nandi r1\nfoo:\n");
    let res = mc8asm(&[&source, &output], &[]);

    assert_eq!(Some(1), res.status.code());
    assert!(!output.exists());

    let stderr = String::from_utf8_lossy(&res.stderr);
    assert!(stderr.contains("Duplicate symbol on line 3"), "{}", stderr);
}

#[test]
fn test_missing_input_is_bad_arguments() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("nope.asm");
    let output = dir.path().join("out.o");

    let res = mc8asm(&[&source, &output], &[]);

    assert_eq!(Some(2), res.status.code());
    assert!(!output.exists());
}

#[test]
fn test_wrong_argument_count() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "andi r1\n");

    let res = mc8asm(&[&source], &[]);
    assert_eq!(Some(2), res.status.code());
}

#[test]
fn test_rom_padding() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "stlo 0b1010\n");
    let output = dir.path().join("rom.o");

    let res = mc8asm(&[&source, &output], &["--rom"]);

    assert_eq!(Some(0), res.status.code());
    let image = fs::read(&output).unwrap();
    assert_eq!(256, image.len());
    assert_eq!(0b0110_1010, image[0]);
    assert!(image[1..].iter().all(|&b| b == 0));
}

#[test]
fn test_rom_too_large() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, &"andi r1\n".repeat(257));
    let output = dir.path().join("rom.o");

    let res = mc8asm(&[&source, &output], &["--rom"]);

    assert_eq!(Some(1), res.status.code());
    assert!(!output.exists());
}

#[test]
fn test_unbounded_lines() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, &format!("andi{}r1\n", " ".repeat(80)));
    let output = dir.path().join("out.o");

    let res = mc8asm(&[&source, &output], &[]);
    assert_eq!(Some(1), res.status.code());

    let res = mc8asm(&[&source, &output], &["--unbounded-lines"]);
    assert_eq!(Some(0), res.status.code());
    assert_eq!(vec![0b0000_0001], fs::read(&output).unwrap());
}

#[test]
fn test_listing_format() {
    let dir = TempDir::new().unwrap();
    let image = write_binary(&dir, &[0x01, 0x6A, 0xFF, 0x00]);

    let res = mc8dis(&[&image], &[]);
    assert_eq!(Some(0), res.status.code());

    let listing = String::from_utf8(res.stdout).unwrap();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(vec![
        "0x0000  0b00000001  andi r1",
        "0x0001  0b01101010  stlo 10",
        "0x0002  0b11111111  jump -1",
        "0x0003  0b00000000  andi ireg",
    ], lines);
}

#[test]
fn test_listing_rom_skips_padding() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "stlo 0b1010\nlbl:\njump lbl\n");
    let output = dir.path().join("rom.o");

    let res = mc8asm(&[&source, &output], &["--rom"]);
    assert_eq!(Some(0), res.status.code());

    let res = mc8dis(&[&output], &["--rom"]);
    assert_eq!(Some(0), res.status.code());
    let listing = String::from_utf8(res.stdout).unwrap();
    assert_eq!("0x0000  0b01101010  stlo 10\n0x0001  0b10000000  jump 0\n", listing);

    // Without the flag every padding byte is listed
    let res = mc8dis(&[&output], &[]);
    let listing = String::from_utf8(res.stdout).unwrap();
    assert_eq!(256, listing.lines().count());
    assert_eq!(Some("0x00FF  0b00000000  andi ireg"), listing.lines().last());
}

#[test]
fn test_listing_missing_input() {
    let dir = TempDir::new().unwrap();
    let res = mc8dis(&[dir.path().join("nope.o")], &[]);

    assert!(!res.status.success());
    assert!(res.stdout.is_empty());
}
