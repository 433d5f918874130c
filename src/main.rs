use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use raycaster::{
    render::{
        canvas::ImageFormat,
        sampler::{Sampler, SamplingPattern},
    },
    scene::presets::ScenePreset,
    shading::tracer::TracerBuilder,
};

/// Simple ray caster
/// Renders built-in scenes with spheres, planes and triangle meshes
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// The scene to render
    #[clap(value_enum, default_value_t)]
    scene: ScenePreset,

    /// How sample points are placed inside each pixel
    #[clap(long, value_enum, default_value_t)]
    sampler: SamplingPattern,

    /// Samples per pixel axis, a pixel gets `samples * samples` rays.
    /// Ignored by the centered sampler
    #[clap(short, long, default_value_t = 2)]
    samples: usize,

    /// Seed of the jittered and random samplers
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Width (in pixels) of the output images.
    /// Overrides the one of every camera in the scene
    #[clap(long)]
    width: Option<usize>,

    /// Height (in pixels) of the output images.
    /// Overrides the one of every camera in the scene
    #[clap(long)]
    height: Option<usize>,

    /// Gamma applied when developing the film
    #[clap(long, default_value_t = 1.0)]
    gamma: f64,

    /// Maximum number of times a ray can bounce off reflective or refractive surfaces
    #[clap(short, long)]
    max_depth: Option<usize>,

    /// The format of the output images
    #[clap(short, long, value_enum, default_value_t)]
    format: ImageFormat,

    /// Directory the images are written to, as `<scene>_<camera>.<format>`
    #[clap(short, long, default_value = ".")]
    output: PathBuf,

    /// Show a progress bar while rendering
    #[clap(short, long)]
    progress: bool,
}

fn progressbar(pixels: usize) -> anyhow::Result<ProgressBar> {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pixels ({eta})",
    )?
    .progress_chars("#>-");
    Ok(ProgressBar::new(pixels as u64).with_style(style))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let sampler = Sampler::new(args.sampler, args.samples, args.seed)
        .context("Failed to create sampler")?;
    let scene = args
        .scene
        .build(&sampler)
        .with_context(|| format!("Failed to build scene `{}`", args.scene))?;

    let mut tracer = TracerBuilder::default();
    if let Some(max_depth) = args.max_depth {
        tracer.max_depth(max_depth);
    }
    let tracer = tracer.build().context("Failed to create tracer")?;

    for (id, camera) in scene.cameras().iter().enumerate() {
        let (width, height) = camera.resolution();
        let camera = camera
            .with_resolution(args.width.unwrap_or(width), args.height.unwrap_or(height))
            .context("Invalid image size")?;

        let (width, height) = camera.resolution();
        let bar = if args.progress {
            Some(progressbar(width * height)?)
        } else {
            None
        };

        let rendering = camera
            .render_scene(&scene, &tracer, bar)
            .with_context(|| format!("Failed to render camera {id}"))?;
        let canvas = rendering.film.develop(args.gamma);

        let output_path = args
            .output
            .join(format!("{}_{id}.{}", args.scene, args.format));
        canvas
            .save_to_file(&output_path, args.format)
            .with_context(|| format!("Failed to save image to {output_path:?}"))?;
        info!("image saved to {output_path:?}");
    }
    Ok(())
}
