use std::fs;
use std::path::Path;
use std::path::PathBuf;

use image::ImageFormat;
use image::Rgba;
use image::RgbaImage;
use tempfile::TempDir;

use crate::error::Error;
use crate::sheet::SheetParams;
use crate::sheet::Spritesheet;
use crate::types::Equivalence;

fn init_logger() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A 4 sprite wide, 2 sprite tall sheet of 2x2 sprites.
///
/// Row one: an "L" shape, the same "L", a blue block, the "L" turned half way round.
/// Row two: the "L" mirrored left to right, then three blue blocks.
fn sample_sheet() -> RgbaImage {
    let l_shape = [[RED, CLEAR], [RED, RED]];
    let half_turn = [[RED, RED], [CLEAR, RED]];
    let mirrored = [[CLEAR, RED], [RED, RED]];
    let block = [[BLUE, BLUE], [BLUE, BLUE]];

    let layout = [
        [l_shape, l_shape, block, half_turn],
        [mirrored, block, block, block],
    ];

    RgbaImage::from_fn(8, 4, |x, y| {
        let (x, y) = (x as usize, y as usize);
        layout[y / 2][x / 2][y % 2][x % 2]
    })
}

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("sheet.png");
    sample_sheet().save(&path).expect("failed to write sample sheet");
    path
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).expect("temp dir readable").count()
}

#[test]
fn load_and_slice() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let sheet = Spritesheet::from_path(write_sample(&dir), SheetParams::new(2))
        .expect("failed to load sheet");

    assert_eq!(sheet.bounds(), (8, 4));
    assert_eq!(sheet.sprites().len(), 8);
    assert_eq!(sheet.sprites()[2].get(0, 0), Some(&BLUE));
}

#[test]
fn unchanged_sheet_round_trips() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let sheet = Spritesheet::from_path(write_sample(&dir), SheetParams::new(2))
        .expect("failed to load sheet");

    let out = dir.path().join("copy.png");
    sheet.save(out.to_str().expect("utf-8 temp path")).expect("failed to save");

    let reloaded = image::open(&out).expect("failed to reopen").to_rgba8();
    assert_eq!(reloaded, sample_sheet());
}

#[test]
fn exact_filter_packs_sheet() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut sheet = Spritesheet::from_path(write_sample(&dir), SheetParams::new(2))
        .expect("failed to load sheet");
    sheet.filter_unique();

    // l shape, block, half turn, mirrored
    assert_eq!(sheet.sprites().len(), 4);

    let out = dir.path().join("packed.png");
    sheet.save(out.to_str().expect("utf-8 temp path")).expect("failed to save");

    let packed = image::open(&out).expect("failed to reopen").to_rgba8();
    assert_eq!(packed.dimensions(), (8, 2));
    assert_eq!(packed.get_pixel(2, 0), &BLUE);
    assert_eq!(packed.get_pixel(7, 0), &RED);
    assert_eq!(packed.get_pixel(6, 0), &CLEAR);
}

#[test]
fn rotation_and_flip_filters() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let path = write_sample(&dir);

    let params = SheetParams::new(2).with_equivalence(Equivalence::Rotation);
    let mut sheet = Spritesheet::from_path(&path, params).expect("failed to load sheet");
    sheet.filter_unique();
    // every "L" is a rotation of the first one
    assert_eq!(sheet.sprites().len(), 2);

    let params = SheetParams::new(2).with_equivalence(Equivalence::Flip);
    let mut sheet = Spritesheet::from_path(&path, params).expect("failed to load sheet");
    sheet.filter_unique();
    // a half turn is not a single mirror, but the mirrored "L" is
    assert_eq!(sheet.sprites().len(), 3);
}

#[test]
fn jpeg_and_gif_output() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let mut sheet = Spritesheet::from_path(write_sample(&dir), SheetParams::new(2))
        .expect("failed to load sheet");
    sheet.filter_unique();

    for name in ["packed.jpeg", "packed.gif"] {
        let out = dir.path().join(name);
        sheet.save(out.to_str().expect("utf-8 temp path")).expect("failed to save");

        let reloaded = image::open(&out).expect("failed to reopen");
        assert_eq!((reloaded.width(), reloaded.height()), (8, 2), "{name}");
    }
}

#[test]
fn bad_filenames_write_nothing() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let sheet = Spritesheet::from_path(write_sample(&dir), SheetParams::new(2))
        .expect("failed to load sheet");
    let before = entries(dir.path());

    let no_ext = dir.path().join("out");
    assert!(matches!(
        sheet.save(no_ext.to_str().expect("utf-8 temp path")),
        Err(Error::InvalidFilename(_))
    ));
    assert!(matches!(sheet.save("out"), Err(Error::InvalidFilename(_))));

    let bmp = dir.path().join("out.bmp");
    assert!(matches!(
        sheet.save(bmp.to_str().expect("utf-8 temp path")),
        Err(Error::UnrecognizedFormat(_))
    ));

    assert_eq!(entries(dir.path()), before);
    assert!(!Path::new("out").exists());
}

#[test]
fn format_detected_from_contents() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");

    for name in ["sheet", "sheet.dat"] {
        let path = dir.path().join(name);
        sample_sheet()
            .save_with_format(&path, ImageFormat::Png)
            .expect("failed to write sample sheet");

        let sheet = Spritesheet::from_path(&path, SheetParams::new(2))
            .unwrap_or_else(|e| panic!("failed to load {name}: {e}"));
        assert_eq!(sheet.bounds(), (8, 4), "{name}");
        assert_eq!(sheet.sprites().len(), 8, "{name}");
    }
}

#[test]
fn undecodable_input() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("broken.png");
    fs::write(&path, b"definitely not a png").expect("failed to write file");

    assert!(matches!(
        Spritesheet::from_path(&path, SheetParams::new(2)),
        Err(Error::Decode(_))
    ));
}

#[test]
fn missing_input() {
    init_logger();

    let dir = TempDir::new().expect("failed to create temp dir");

    assert!(matches!(
        Spritesheet::from_path(dir.path().join("missing.png"), SheetParams::new(2)),
        Err(Error::Io(_))
    ));
}
