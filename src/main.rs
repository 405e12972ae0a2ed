// cable-ribbon: turns a JSON cable mesh into a raw ribbon vertex buffer.
//
//   cable-ribbon cables.json -o cables.bin --tangents central
//   cable-ribbon cables.json --randomize-phase --seed 7 --save-mesh cables.json
//
// The output file is a tightly packed array of CableVertex (36 bytes each), triangle list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use cable_ribbon::{BuildOptions, CableMesh, CableVertexBufferBuilder, TangentMode, randomize_phase_offsets};

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(name = "cable-ribbon")]
#[command(about = "Build cable ribbon vertex buffers from cable meshes")]
#[command(version)]
struct Cli {
    /// Input cable mesh (JSON)
    input: PathBuf,

    /// Output vertex buffer (defaults to the input path with a .cable.bin extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tangent rule for interior vertices
    #[arg(long, value_enum, default_value_t = Tangents::Forward)]
    tangents: Tangents,

    /// Give every cable piece a random phase offset before building
    #[arg(long)]
    randomize_phase: bool,

    /// Seed for --randomize-phase (random when omitted)
    #[arg(long, requires = "randomize_phase")]
    seed: Option<u64>,

    /// Write the mesh with its new phase offsets to this JSON file
    #[arg(long, requires = "randomize_phase")]
    save_mesh: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Tangents {
    Forward,
    Central,
}

impl From<Tangents> for TangentMode {
    fn from(t: Tangents) -> Self {
        match t {
            Tangents::Forward => TangentMode::Forward,
            Tangents::Central => TangentMode::Central,
        }
    }
}

// ============================================================================
// MAIN
// ============================================================================

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let mut mesh: CableMesh = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse cable mesh {}", cli.input.display()))?;
    log::info!(
        "Loaded {}: {} vertices, {} edges",
        cli.input.display(),
        mesh.vertex_count(),
        mesh.edge_count(),
    );

    if cli.randomize_phase {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let pieces = randomize_phase_offsets(&mut mesh, &mut rng)
            .context("Failed to randomize phase offsets")?;
        log::info!("Randomized phase offsets for {pieces} pieces");

        if let Some(path) = &cli.save_mesh {
            let out = serde_json::to_string_pretty(&mesh)?;
            std::fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Saved mesh to {}", path.display());
        }
    }

    let options = BuildOptions { tangent_mode: cli.tangents.into() };
    let buffer = CableVertexBufferBuilder::new(&mesh)
        .and_then(|builder| builder.with_options(options).build())
        .with_context(|| format!("Failed to build {}", cli.input.display()))?;

    let output = cli.output.unwrap_or_else(|| cli.input.with_extension("cable.bin"));
    std::fs::write(&output, buffer.vertex_bytes())
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Wrote {} vertices ({} triangles, {} bytes) to {}",
        buffer.vertex_count(),
        buffer.triangle_count(),
        buffer.vertex_bytes().len(),
        output.display(),
    );
    Ok(())
}
