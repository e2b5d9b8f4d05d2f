use std::env;
use std::path::PathBuf;
use std::time::SystemTime;

use log::debug;

use spritepack::sheet::SheetParams;
use spritepack::sheet::Spritesheet;
use spritepack::Equivalence;

const USAGE: &str = "usage: spritepack <spritesheet> <tile-size> <output> [--rotations | --flips]";

fn main() -> Result<(), String> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // first argument is the spritesheet path
    let input = args.get(1).map(PathBuf::from).ok_or(USAGE)?;

    // second argument is the side length of every sprite
    let tile_size = args
        .get(2)
        .ok_or(USAGE)?
        .parse::<usize>()
        .map_err(|e| format!("invalid tile size: {e}"))?;

    // third argument is where the deduplicated sheet is written; its extension picks the format
    let output = args.get(3).ok_or(USAGE)?;

    let equivalence = match args.get(4).map(String::as_str) {
        None => Equivalence::Exact,
        Some("--rotations") => Equivalence::Rotation,
        Some("--flips") => Equivalence::Flip,
        Some(other) => return Err(format!("unknown option {other:?}\n{USAGE}")),
    };

    let params = SheetParams::new(tile_size).with_equivalence(equivalence);
    let mut sheet = Spritesheet::from_path(&input, params).map_err(|e| e.to_string())?;
    let total = sheet.sprites().len();

    let t0 = SystemTime::now();
    sheet.filter_unique();
    let t1 = SystemTime::now();

    debug!(
        "Deduplication took {:?}",
        t1.duration_since(t0).unwrap_or_default()
    );

    sheet.save(output).map_err(|e| e.to_string())?;

    println!(
        "kept {} of {} sprites, written to {}",
        sheet.sprites().len(),
        total,
        output
    );

    Ok(())
}
