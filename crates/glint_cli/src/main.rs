//! Interactive entry point for the Glint ray tracer.
//!
//! Prompts for a worker count, renders the fixed reference scene, prints
//! the elapsed render time, and writes the image as binary PPM.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use glint_renderer::{render, save_ppm, Scene, TileGrid};

const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 800;
const OUTPUT_PATH: &str = "output.ppm";

fn main() -> Result<()> {
    env_logger::init();

    println!("Welcome to the Glint ray tracer!");
    println!("Please select the number of render workers.");
    println!();
    println!(" 1. Render on the main thread");
    println!(" 2. 1 worker");
    println!(" 3. 4 workers");
    println!(" 4. 16 workers");
    println!();
    println!(" 9. Exit");
    println!();
    print!(" ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read selection")?;

    let grid = match input.trim() {
        // A dedicated single worker and the main thread render the same
        // single full-image tile.
        "1" | "2" => TileGrid::Single,
        "3" => TileGrid::Quarters,
        "4" => TileGrid::Sixteenths,
        "9" => return Ok(()),
        other => bail!("unrecognized selection: {other:?}"),
    };

    let scene = Scene::reference();
    log::info!(
        "rendering reference scene with {} worker(s)",
        grid.worker_count()
    );

    let start = Instant::now();
    let image = render(&scene, IMAGE_WIDTH, IMAGE_HEIGHT, grid);
    println!();
    println!(" Generating image...");
    println!(" Execution time: {:.2?}", start.elapsed());

    save_ppm(&image, Path::new(OUTPUT_PATH))
        .with_context(|| format!("failed to save image to {OUTPUT_PATH}"))?;
    println!(" Saved to {OUTPUT_PATH}");

    Ok(())
}
