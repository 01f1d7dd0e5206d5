use std::fs;
use std::path::PathBuf;

use offer_chart::api::{BarChart, BarChartConfig};
use offer_chart::core::{Viewport, default_weekly_offers};
use offer_chart::platform::Document;
use offer_chart::render::{Color, SvgRenderer};

const DEFAULT_WIDTH: u32 = 700;
const DEFAULT_HEIGHT: u32 = 400;
const CONTAINER_SELECTOR: &str = ".weekly-chart";

#[derive(Debug)]
struct CliArgs {
    width: u32,
    height: u32,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    bar_color: Option<Color>,
    snapshot: bool,
}

fn main() {
    let _ = offer_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let mut config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            BarChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => BarChartConfig::default(),
    };
    if let Some(color) = args.bar_color {
        config = config.with_bar_color(color);
    }

    let viewport = Viewport::new(args.width, args.height);
    let data = default_weekly_offers();
    let mut chart = BarChart::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;

    let output = if args.snapshot {
        chart
            .snapshot(viewport, &data)
            .and_then(|snapshot| snapshot.to_json_contract_v1_pretty())
            .map_err(|err| err.to_string())?
    } else {
        let mut document = Document::new().with_container(CONTAINER_SELECTOR, viewport);
        chart
            .render(&mut document, CONTAINER_SELECTOR, &data)
            .map_err(|err| err.to_string())?;
        chart
            .into_renderer()
            .into_document()
            .ok_or_else(|| "renderer produced no svg document".to_owned())?
    };

    match &args.output_path {
        Some(path) => fs::write(path, output)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?,
        None => print!("{output}"),
    }
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut bar_color: Option<Color> = None;
    let mut snapshot = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = parse_dimension("--width", &value)?;
            }
            "--height" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --height".to_owned())?;
                height = parse_dimension("--height", &value)?;
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--bar-color" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --bar-color".to_owned())?;
                bar_color = Some(Color::from_hex(&value).map_err(|err| err.to_string())?);
            }
            "--snapshot" => snapshot = true,
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        width,
        height,
        config_path,
        output_path,
        bar_color,
        snapshot,
    })
}

fn parse_dimension(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse::<u32>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn usage_message() -> String {
    format!(
        "Usage: render_offer_chart [options]\n\n\
         Options:\n\
         \x20 --width <px>       Container width (default: {DEFAULT_WIDTH})\n\
         \x20 --height <px>      Container height (default: {DEFAULT_HEIGHT})\n\
         \x20 --config <path>    Chart config JSON\n\
         \x20 --output <path>    Write to file instead of stdout\n\
         \x20 --bar-color <hex>  Bar fill as #rrggbb\n\
         \x20 --snapshot         Emit the geometry snapshot JSON instead of SVG\n\
         \x20 -h, --help         Show this message"
    )
}
