use std::fs;
use std::path::PathBuf;

use dashboard_charts::api::{RendererConfig, resolve_chart_option};
use dashboard_charts::core::{ChartRequest, Viewport};

const USAGE: &str = "usage: resolve_chart_option --input <request.json> [--output <option.json>] [--config <renderer.json>] [--viewport-width <px>]";

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    viewport_width: u32,
}

fn main() {
    let _ = dashboard_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let request = ChartRequest::from_json_str(&raw).map_err(|err| err.to_string())?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            RendererConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => RendererConfig::default(),
    };

    let option = resolve_chart_option(&request, &config, args.viewport_width);
    let json = option.to_json_pretty().map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, format!("{json}\n"))
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut viewport_width = Viewport::default().width;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--viewport-width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --viewport-width".to_owned())?;
                viewport_width = value
                    .parse()
                    .map_err(|err| format!("invalid --viewport-width `{value}`: {err}"))?;
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let input = input.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        input,
        output,
        config,
        viewport_width,
    })
}
