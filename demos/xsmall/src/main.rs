//! xsmall: smallest example for the block puzzle episode generator.
//!
//! Generates a handful of episodes on the default 11×11 lattice with a 3×3
//! block in the middle, prints every ASCII frame, and writes the episode
//! metadata to `output/xsmall/`.
//!
//! ```text
//! xsmall [config.json] [episodes]
//! RUST_LOG=bp_episode=info,bp_lattice=debug xsmall
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bp_core::PuzzleConfig;
use bp_episode::EpisodeBuilder;
use bp_output::{AsciiRenderer, CsvWriter, JsonLinesWriter, MetadataRenderer};

// ── Constants ─────────────────────────────────────────────────────────────────

const EPISODES:   u64  = 4;
const OUTPUT_DIR: &str = "output/xsmall";

// ── Config ────────────────────────────────────────────────────────────────────

/// Defaults, overridden field by field by the JSON file if one is given.
fn load_config(path: Option<&str>) -> Result<PuzzleConfig> {
    let Some(path) = path else {
        return Ok(PuzzleConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let episodes = match args.get(1) {
        Some(n) => n.parse().with_context(|| format!("episode count {n:?}"))?,
        None => EPISODES,
    };

    println!("=== xsmall — block puzzle episodes ===");
    println!(
        "Lattice: {}x{}  |  Block: {}x{}  |  Complexity: {}  |  Threshold: {}  |  Seed: {}  |  Mode: {}",
        config.width,
        config.height,
        config.block_side,
        config.block_side,
        config.complexity,
        config.distance_threshold.map_or_else(|| "none".to_owned(), |t| t.to_string()),
        config.seed,
        config.mode,
    );
    println!();

    // 1. Build the episode setup.
    let episode = EpisodeBuilder::new(config.clone()).build()?;

    // 2. Set up output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let dir = Path::new(OUTPUT_DIR);
    let mut csv = MetadataRenderer::new(CsvWriter::new(dir)?);
    let mut jsonl = MetadataRenderer::new(JsonLinesWriter::new(dir)?);
    let mut ascii = AsciiRenderer::from_config(&config);

    // 3. Generate.
    let t0 = Instant::now();
    for index in 0..episodes {
        let record = episode.generate(index, &mut (&mut ascii, (&mut csv, &mut jsonl)))?;

        println!("── episode {index} ─────────────────────────────");
        for m in &record.moves {
            println!("  block {} : {} -> {}  ({} moves)", m.label, m.from, m.to, m.path_len);
        }
        println!();
        for frame in ascii.drain() {
            println!("{frame}");
        }
    }
    let elapsed = t0.elapsed();
    tracing::info!(event = "run_complete", episodes, elapsed_ms = elapsed.as_millis() as u64);

    csv.finish();
    jsonl.finish();
    for err in [csv.take_error(), jsonl.take_error()].into_iter().flatten() {
        eprintln!("output error: {err}");
    }

    // 4. Summary.
    println!("Generated {episodes} episodes in {:.3} s", elapsed.as_secs_f64());
    println!("  {OUTPUT_DIR}/episodes.csv   : {} rows", csv.written());
    println!("  {OUTPUT_DIR}/episodes.jsonl : {} lines", jsonl.written());

    Ok(())
}
