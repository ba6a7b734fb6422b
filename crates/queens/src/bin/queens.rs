use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use clap::Parser;
use log::{error, info, LevelFilter};
use queens::core::RgbImageView;
use queens::detect::{load_rgb, rgb_view, save_gray};
use queens::io::{QueensConfig, SolveReport};
use queens::{PipelineError, PuzzleSolver};

#[derive(Parser, Debug)]
#[command(name = "queens")]
#[command(about = "Solve a Queens puzzle from a screenshot cropped to its border")]
struct Cli {
    /// Puzzle screenshot. Overrides `image_path` from the config.
    image: Option<PathBuf>,
    /// JSON config with paths and stage parameters.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the JSON report.
    #[arg(long)]
    report: Option<PathBuf>,
    /// Where to write the binarized line mask.
    #[arg(long)]
    binary_debug: Option<PathBuf>,
    /// Max squared RGB distance between neighbors of one region.
    #[arg(long)]
    similarity_threshold: Option<u32>,
    /// Abort the search after this many placements.
    #[arg(long)]
    max_nodes: Option<u64>,
    /// Log filter: a level (`debug`) or per-crate directives
    /// (`warn,queens_board=debug`).
    #[arg(long, default_value = "info", value_parser = parse_log_filter)]
    log_level: String,
}

/// Validate a comma-separated list of `level`, `target` or `target=level`
/// directives.
fn parse_log_filter(spec: &str) -> Result<String, String> {
    for directive in spec.split(',').map(str::trim) {
        let level = match directive.split_once('=') {
            Some((target, level)) => {
                if target.is_empty() {
                    return Err(format!("missing target in `{directive}`"));
                }
                level
            }
            None if LevelFilter::from_str(directive).is_ok() => directive,
            // bare target: everything from that crate
            None if !directive.is_empty() => continue,
            None => return Err("empty log directive".to_string()),
        };
        LevelFilter::from_str(level).map_err(|_| format!("unknown log level `{level}`"))?;
    }
    Ok(spec.to_string())
}

fn elapsed_ms(t0: Instant) -> u64 {
    t0.elapsed().as_millis() as u64
}

fn load_config(cli: &Cli) -> Result<QueensConfig, Box<dyn std::error::Error>> {
    let mut cfg = match &cli.config {
        Some(path) => QueensConfig::load_json(path)?,
        None => QueensConfig::default(),
    };
    if let Some(image) = &cli.image {
        cfg.image_path = image.display().to_string();
    }
    if let Some(report) = &cli.report {
        cfg.output_path = Some(report.display().to_string());
    }
    if let Some(debug) = &cli.binary_debug {
        cfg.binary_debug_path = Some(debug.display().to_string());
    }
    if let Some(t) = cli.similarity_threshold {
        cfg.params.grouping.similarity_threshold = t;
    }
    if cli.max_nodes.is_some() {
        cfg.params.solver.max_nodes = cli.max_nodes;
    }
    if cfg.image_path.is_empty() {
        return Err("no input image (pass IMAGE or set image_path in --config)".into());
    }
    Ok(cfg)
}

fn run_stages(
    solver: &PuzzleSolver,
    view: &RgbImageView<'_>,
    report: &mut SolveReport,
) -> Result<(), PipelineError> {
    let t0 = Instant::now();
    let lines = solver.detect_lines(view)?;
    report.timings_ms.detect_lines = elapsed_ms(t0);
    report.set_lines(&lines);

    let t0 = Instant::now();
    let colors = solver.sample_colors(view, &lines)?;
    report.timings_ms.sample_colors = elapsed_ms(t0);

    let t0 = Instant::now();
    let mut board = solver.build_board(&colors);
    report.timings_ms.group_regions = elapsed_ms(t0);
    report.set_board(&board);

    let t0 = Instant::now();
    let solution = solver.solve_board(&mut board);
    report.timings_ms.solve = elapsed_ms(t0);
    let solution = solution?;
    report.set_solution(&solution);
    print!("{solution}");
    Ok(())
}

/// Run every stage, filling `report` as it goes.
fn run(cfg: &QueensConfig, report: &mut SolveReport) -> Result<(), Box<dyn std::error::Error>> {
    let total = Instant::now();

    let t0 = Instant::now();
    let img = load_rgb(&cfg.image_path)?;
    report.timings_ms.load_image = elapsed_ms(t0);
    info!(
        "loaded {} ({}x{})",
        cfg.image_path,
        img.width(),
        img.height()
    );
    let view = rgb_view(&img);
    let solver = PuzzleSolver::new(cfg.params.clone());

    if let Some(path) = cfg.binary_debug_path() {
        save_gray(&path, &solver.detector().binary_image(&view))?;
        info!("wrote binary image to {}", path.display());
    }

    let outcome = run_stages(&solver, &view, report);
    report.timings_ms.total = elapsed_ms(total);

    if let Err(err) = outcome {
        report.set_error(&err);
        return Err(err.into());
    }
    Ok(())
}

/// Install the log backend. With the `tracing` feature, `log` records are
/// bridged into a fmt subscriber using the same filter directives.
fn init_logging(filter: &str) {
    #[cfg(feature = "tracing")]
    {
        use tracing_subscriber::fmt::format::FmtSpan;
        use tracing_subscriber::EnvFilter;

        let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        let _ = tracing_log::LogTracer::init();
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = env_logger::Builder::new()
            .parse_filters(filter)
            .format_target(true)
            .try_init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let cfg = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut report = SolveReport::new(&cfg, cli.config.as_deref());
    let outcome = run(&cfg, &mut report);

    let out = cfg.output_path();
    match report.write_json(&out) {
        Ok(()) => info!("wrote report to {}", out.display()),
        Err(err) => error!("failed to write report to {}: {err}", out.display()),
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &report.error_kind {
                Some(kind) => eprintln!("error [{kind}]: {err}"),
                None => eprintln!("error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
