use anyhow::Context;
use clap::{Parser, ValueEnum};
use glam::Vec3;

use orrery_scene::{evaluate_frame, solar_system, spinning_pyramid};

#[derive(Parser)]
#[command(name = "orrery", about = "Step an Orrery preset scene headlessly", version)]
struct Cli {
    /// Preset scene to run
    #[arg(value_enum, default_value = "solar")]
    scene: Preset,

    /// Number of frames to evaluate
    #[arg(long, default_value_t = 120)]
    frames: u32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// Sun, two planets, and a moon
    Solar,
    /// Single spinning pyramid
    Pyramid,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut scene, camera) = match cli.scene {
        Preset::Solar => solar_system(),
        Preset::Pyramid => spinning_pyramid(),
    }
    .context("failed to build scene")?;

    let view = camera.view_matrix();
    log::info!("stepping {} nodes for {} frames", scene.len(), cli.frames);

    let mut worlds = Vec::new();
    for frame in 0..cli.frames {
        worlds = evaluate_frame(&mut scene, &view).context("frame evaluation failed")?;
        log::debug!("frame {frame} evaluated");
    }

    println!("world positions after {} frames (view space):", cli.frames);
    for (node, world) in scene.nodes.iter().zip(worlds.iter()) {
        let origin = world.transform_point3(Vec3::ZERO);
        println!(
            "  {:<14} ({:>8.3}, {:>8.3}, {:>8.3})  angle {:.3} rad",
            node.name, origin.x, origin.y, origin.z, node.rotation_angle
        );
    }

    Ok(())
}
