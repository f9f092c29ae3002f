// epic - pick points on one or two images and save them as text

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use epic::{Backend, PickConfig, PickedSet, PointLimit};

/// Pick pixel coordinates on one or two images.
///
/// Click to add a point, Enter to finish, Escape to start over.
/// Without an image argument, file dialogs ask for the images and output file.
#[derive(Parser, Debug)]
#[command(name = "epic")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image to pick on
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Second image, shown below the first
    #[arg(value_name = "IMAGE2", requires = "image")]
    image2: Option<PathBuf>,

    /// Points to pick per image (-1 for unlimited)
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    n: i64,

    /// Window width in display units
    #[arg(short, long, default_value_t = 15.0)]
    width: f32,

    /// Show axis ticks
    #[arg(long)]
    ticks: bool,

    /// Connect successive points with a line
    #[arg(long)]
    line: bool,

    /// Output file. Points are printed to stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Rendering backend
    #[arg(long, value_enum, default_value_t = BackendArg::Wgpu)]
    backend: BackendArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendArg {
    Wgpu,
    Glow,
    /// Let eframe decide
    Auto,
}

impl BackendArg {
    fn backend(self) -> Option<Backend> {
        match self {
            BackendArg::Wgpu => Some(Backend::Wgpu),
            BackendArg::Glow => Some(Backend::Glow),
            BackendArg::Auto => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = PickConfig::default()
        .with_limit(PointLimit::from(args.n))
        .with_width(args.width)
        .with_ticks(args.ticks)
        .with_line(args.line)
        .with_backend(args.backend.backend());

    let Some(image) = args.image else {
        let summary = epic::launch(&config).context("interactive launcher failed")?;
        info!(
            "{} round(s), {} row(s) written",
            summary.rounds, summary.rows_written
        );
        return Ok(());
    };

    let (first, second) = match args.image2 {
        None => {
            let points = epic::pick_single(image.clone(), &config)
                .with_context(|| format!("picking on {}", image.display()))?;
            (PickedSet::new(Some(image), points), None)
        }
        Some(image2) => {
            let (p1, p2) = epic::pick_multi(image.clone(), image2.clone(), &config)
                .with_context(|| format!("picking on {} and {}", image.display(), image2.display()))?;
            (
                PickedSet::new(Some(image), p1),
                Some(PickedSet::new(Some(image2), p2)),
            )
        }
    };

    match args.out {
        Some(out) => {
            epic::save_points(Some(out.as_path()), &first, second.as_ref())
                .with_context(|| format!("writing {}", out.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            epic::write_points(stdout.lock(), &first, second.as_ref())?;
        }
    }
    Ok(())
}
