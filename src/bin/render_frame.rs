extern crate rust_raymarcher as root;

#[macro_use]
extern crate tracing;

use root::logging::{init_logging, parse_log_level};
use root::parsing::{get_settings, TOMLConfig};
use root::prelude::*;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config: String,
    // defaults to the configured window size
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    // simulated seconds since start, drives the light animation
    #[structopt(long, default_value = "0.0")]
    pub time: f32,
    #[structopt(short, long, default_value = "output/frame.png")]
    pub output: PathBuf,
    // trace only the center pixel and log every step
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn trace_center_pixel(
    renderer: &FrameRenderer,
    scene: &Scene,
    time: f32,
    (width, height): (usize, usize),
) -> anyhow::Result<()> {
    let (x, y) = (width / 2, height / 2);
    let ray = renderer.camera.get_ray(x, y, width, height)?;
    let result = march(scene, ray, &renderer.settings.march);
    info!("center ray {:?}", ray);
    info!("march result {:?}", result);
    if let Some(point) = result.hit_point(ray) {
        if let Some((index, distance)) = scene.closest(point) {
            info!(
                "hit {} (primitive {}) at {:?}, residual distance {}",
                scene.primitives()[index].name(),
                index,
                point,
                distance
            );
        }
        info!(
            "normal {:?}",
            scene.normal(point, renderer.settings.shading.normal_epsilon)
        );
    }
    let mut profile = Profile::default();
    let color = renderer.render_pixel(
        scene,
        scene.light.position_at(time),
        (x, y),
        (width, height),
        &mut profile,
    )?;
    info!("pixel color {:#08x}", color);
    Ok(())
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config: TOMLConfig = get_settings(&opts.config)?;
    let threads = config.render.threads.unwrap_or(1).max(1) as usize;
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;

    let scene = config.build_scene()?;
    let renderer = FrameRenderer::new(
        Camera::from(config.camera),
        RenderSettings::from(config.render.clone()),
    )?;
    let width = opts.width.unwrap_or(config.window.width);
    let height = opts.height.unwrap_or(config.window.height);

    if opts.dry_run {
        return trace_center_pixel(&renderer, &scene, opts.time, (width, height));
    }

    info!(
        "starting render with film resolution {}x{} at t = {}",
        width, height, opts.time
    );
    let mut film = Vec2D::new(width, height, 0u32);
    let now = Instant::now();
    let profile = renderer.render(&scene, opts.time, &mut film)?;
    let elapsed = now.elapsed().as_secs_f32();
    info!("took {}s", elapsed);
    profile.log_summary(elapsed, threads);

    if let Some(parent) = opts.output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("couldn't create {}", parent.to_string_lossy()))?;
    }
    output_film(&film, &opts.output)
}

fn main() {
    let opts = Opt::from_args();
    let level = parse_log_level(&opts.log_level, LevelFilter::INFO);
    if let Err(e) = init_logging(level) {
        eprintln!("{:?}", e);
    }

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        std::process::exit(1);
    }
}
