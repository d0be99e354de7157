use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use swatchspace::{
    to_svg, ClusterGroup, DisplayList, Hit, SceneConfig, SceneState, DEFAULT_DATASET_PATH,
};

/// Cluster image average colors and inspect them as a 3D scatter plot.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Average-color JSON produced by the compute script
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    input: PathBuf,

    /// JSON file with scene settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of clusters
    #[arg(short = 'k', long)]
    clusters: Option<usize>,

    /// Iteration cap for k-means
    #[arg(long)]
    max_iters: Option<usize>,

    /// Seed for reproducible centroid seeding
    #[arg(long)]
    seed: Option<u64>,

    /// Drag the view by DX,DY pixels before drawing
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    rotate: Option<(f64, f64)>,

    /// Scroll the view by DELTA before drawing
    #[arg(long, allow_hyphen_values = true)]
    zoom: Option<f64>,

    /// Hit-test canvas position X,Y on the drawn frame
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    query: Option<(f64, f64)>,

    /// Write the drawn frame as SVG
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    json: bool,
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let a = a.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let b = b.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((a, b))
}

#[derive(Serialize)]
struct Summary<'a> {
    samples: usize,
    iterations: usize,
    clusters: &'a [ClusterGroup],
    query: Option<QueryResult>,
}

#[derive(Serialize)]
struct QueryResult {
    hit: Hit,
    file: String,
    name: String,
}

fn load_config(args: &Args) -> Result<SceneConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => SceneConfig::default(),
    };

    if let Some(k) = args.clusters {
        config.k = k;
    }
    if let Some(max_iters) = args.max_iters {
        config.max_iterations = max_iters;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    if config.k == 0 {
        bail!("cluster count must be at least 1");
    }

    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start_time = Instant::now();
    let config = load_config(&args)?;

    // Step 1: Load and cluster
    let step1_start = Instant::now();
    let mut scene = SceneState::from_file(&args.input, config).with_context(|| {
        format!(
            "Failed to load {}: run the compute script",
            args.input.display()
        )
    })?;
    let step1_duration = step1_start.elapsed();

    // Step 2: Apply view input and draw one frame
    let step2_start = Instant::now();
    if let Some((dx, dy)) = args.rotate {
        scene.on_drag_delta(dx, dy);
    }
    if let Some(delta) = args.zoom {
        scene.on_zoom_delta(delta);
    }
    scene.render_frame();

    let query = args.query.and_then(|(x, y)| {
        let hit = scene.on_query(x, y)?;
        let sample = scene.sample(hit.index)?;
        Some(QueryResult {
            hit,
            file: sample.id.clone(),
            name: sample.display_name(),
        })
    });

    if let Some(path) = &args.svg {
        let frame = scene.frame().context("No frame was rendered")?;
        let list = DisplayList::build(&scene, frame);
        let canvas = scene.canvas();
        fs::write(path, to_svg(&list, canvas.width, canvas.height))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    let step2_duration = step2_start.elapsed();

    let groups = scene.groups();

    if args.json {
        let summary = Summary {
            samples: scene.samples().len(),
            iterations: scene.iterations(),
            clusters: &groups,
            query,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("=== swatchspace ===\n");
    println!(
        "✓ Loaded {} samples from {} [{:.3}s]",
        scene.samples().len(),
        args.input.display(),
        step1_duration.as_secs_f64()
    );
    println!(
        "✓ K-means with k={} finished in {} iterations\n",
        groups.len(),
        scene.iterations()
    );

    for group in &groups {
        println!(
            "{} ({} members, centroid {})",
            group.title(),
            group.len(),
            group.centroid.color.to_hex()
        );
        for member in &group.members {
            println!("  {:<32} {}", member.label, member.thumbnail_path);
        }
        println!();
    }

    let view = scene.view();
    println!(
        "View: rotation_x={:.3} rotation_y={:.3} zoom={:.1}",
        view.rotation_x, view.rotation_y, view.zoom
    );

    if let Some((x, y)) = args.query {
        match &query {
            Some(q) => println!(
                "Query ({}, {}): {} [{}] at ({:.1}, {:.1})",
                x, y, q.name, q.file, q.hit.screen.x, q.hit.screen.y
            ),
            None => println!("Query ({}, {}): nothing within reach", x, y),
        }
    }

    if let Some(path) = &args.svg {
        println!("Saved → {}", path.display());
    }

    println!(
        "\nFrame: {:.3}s, total: {:.3}s",
        step2_duration.as_secs_f64(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
