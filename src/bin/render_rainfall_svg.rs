use std::fs;
use std::path::PathBuf;

use pluvio_chart::api::{
    AxisLabels, ChartEngine, ChartEngineConfig, GeometryKind, forecast_series_from_json,
    monthly_series_from_json, strategy_for_kind, yearly_series_from_json,
};
use pluvio_chart::core::Viewport;
use pluvio_chart::render::SvgRenderer;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 400;

#[derive(Debug)]
struct CliArgs {
    kind: GeometryKind,
    input_path: PathBuf,
    output_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    width: u32,
    height: u32,
}

fn main() {
    let _ = pluvio_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input_path)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input_path.display()))?;

    let series = match args.kind {
        GeometryKind::Line => monthly_series_from_json(&raw),
        GeometryKind::Bar => yearly_series_from_json(&raw),
        GeometryKind::LineWithBand => forecast_series_from_json(&raw),
    }
    .map_err(|err| err.to_string())?;
    let labels = match args.kind {
        GeometryKind::Line => AxisLabels::new("Mês", "Precipitação (mm)"),
        GeometryKind::Bar => AxisLabels::new("Ano", "Precipitação (mm)"),
        GeometryKind::LineWithBand => AxisLabels::new("Mês", "Previsão (mm)"),
    };

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::new(Viewport::new(args.width, args.height)),
    };

    let mut engine =
        ChartEngine::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    engine
        .render(series, strategy_for_kind(args.kind), labels)
        .map_err(|err| err.to_string())?;
    let document = engine.into_renderer().into_document();

    match &args.output_path {
        Some(path) => {
            fs::write(path, &document)
                .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{document}"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut kind: Option<GeometryKind> = None;
    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match arg.as_str() {
            "--kind" => {
                kind = Some(match value_for("--kind")?.as_str() {
                    "monthly" => GeometryKind::Line,
                    "yearly" => GeometryKind::Bar,
                    "forecast" => GeometryKind::LineWithBand,
                    other => return Err(format!("unknown chart kind `{other}`")),
                });
            }
            "--input" => input_path = Some(PathBuf::from(value_for("--input")?)),
            "--output" => output_path = Some(PathBuf::from(value_for("--output")?)),
            "--config" => config_path = Some(PathBuf::from(value_for("--config")?)),
            "--width" => width = parse_dimension(&value_for("--width")?)?,
            "--height" => height = parse_dimension(&value_for("--height")?)?,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --features svg-backend --bin render_rainfall_svg -- --kind <monthly|yearly|forecast> --input <payload.json> [--output <chart.svg>] [--config <config.json>] [--width <px>] [--height <px>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(CliArgs {
        kind: kind.ok_or_else(|| "missing --kind".to_owned())?,
        input_path: input_path.ok_or_else(|| "missing --input".to_owned())?,
        output_path,
        config_path,
        width,
        height,
    })
}

fn parse_dimension(raw: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|err| format!("invalid dimension `{raw}`: {err}"))
}
