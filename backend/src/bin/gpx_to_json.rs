use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

use clap::Parser;
use trail_api::gpx_import::read_track_points;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Extract GPX track points into a JSON list of {lat, lon}"
)]
struct Args {
    /// GPX file to read
    #[arg(long)]
    input: PathBuf,

    /// Where to write the JSON array (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    tracing::info!("reading track points from {:?}", args.input);

    let points = read_track_points(BufReader::new(File::open(&args.input)?))?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    serde_json::to_writer_pretty(&mut writer, &points)?;
    writeln!(writer)?;
    writer.flush()?;

    tracing::info!("converted {} track points", points.len());
    for (i, point) in points.iter().take(5).enumerate() {
        tracing::info!("  {}. lat={} lon={}", i + 1, point.lat, point.lon);
    }
    if let Some(path) = &args.output {
        tracing::info!("coordinates written to {:?}", path);
    }

    Ok(())
}
