extern crate rust_raymarcher as root;

#[macro_use]
extern crate tracing;

use root::logging::{init_logging, parse_log_level};
use root::parsing::{get_settings, TOMLConfig};
use root::prelude::*;

use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config: String,
    // load and validate everything, then exit without opening a window
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
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
    info!(
        "scene has {} primitives, rendering with {} threads",
        scene.primitives().len(),
        threads
    );

    if opts.dry_run {
        return Ok(());
    }

    let mut frame_count = 0usize;
    let mut total = Profile::default();
    let start = Instant::now();
    window_loop(&config.window, |time, film| {
        let profile = renderer.render(&scene, time, film)?;
        total = total.combine(profile);
        frame_count += 1;
        Ok(())
    })?;

    let elapsed = start.elapsed().as_secs_f32();
    info!("rendered {} frames in {}s", frame_count, elapsed);
    total.log_summary(elapsed, threads);
    Ok(())
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
