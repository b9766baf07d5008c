use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;
use unistroke::{DegeneratePolicy, Metric, Point, Recognition, Recognizer, RecognizerConfig};

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Unistroke gesture recognizer CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    #[default]
    GoldenSection,
    Protractor,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::GoldenSection => Metric::GoldenSection,
            MetricConfig::Protractor => Metric::Protractor,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum DegenerateConfig {
    #[default]
    Reject,
    Stretch,
}

impl From<DegenerateConfig> for DegeneratePolicy {
    fn from(value: DegenerateConfig) -> Self {
        match value {
            DegenerateConfig::Reject => DegeneratePolicy::Reject,
            DegenerateConfig::Stretch => DegeneratePolicy::Stretch,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RecognizerConfigJson {
    num_points: usize,
    square_size: f64,
    angle_range_deg: f64,
    angle_precision_deg: f64,
    degenerate: DegenerateConfig,
    parallel: bool,
}

impl Default for RecognizerConfigJson {
    fn default() -> Self {
        let cfg = RecognizerConfig::default();
        Self {
            num_points: cfg.num_points,
            square_size: cfg.square_size,
            angle_range_deg: cfg.angle_range_deg,
            angle_precision_deg: cfg.angle_precision_deg,
            degenerate: DegenerateConfig::Reject,
            parallel: cfg.parallel,
        }
    }
}

impl From<RecognizerConfigJson> for RecognizerConfig {
    fn from(value: RecognizerConfigJson) -> Self {
        Self {
            num_points: value.num_points,
            square_size: value.square_size,
            angle_range_deg: value.angle_range_deg,
            angle_precision_deg: value.angle_precision_deg,
            degenerate: value.degenerate.into(),
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TemplateJson {
    name: String,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct StrokeJson {
    #[serde(default)]
    id: Option<String>,
    points: Vec<[f64; 2]>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    metric: MetricConfig,
    output_path: Option<String>,
    recognizer: RecognizerConfigJson,
    templates: Vec<TemplateJson>,
    strokes: Vec<StrokeJson>,
}

#[derive(Debug, Serialize)]
struct ResultRecord {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ResultRecord {
    fn matched(id: String, value: Recognition) -> Self {
        Self {
            id,
            name: Some(value.name),
            score: Some(value.score),
            elapsed_ms: Some(value.elapsed_ms),
            error: None,
        }
    }

    fn failed(id: String, error: String) -> Self {
        Self {
            id,
            name: None,
            score: None,
            elapsed_ms: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    metric: &'static str,
    templates: usize,
    results: Vec<ResultRecord>,
}

fn to_points(raw: &[[f64; 2]]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

/// Library spans at info, CLI events at debug; `RUST_LOG` adds to both.
fn trace_filter() -> Result<EnvFilter, ParseError> {
    Ok(EnvFilter::from_default_env()
        .add_directive("unistroke=info".parse()?)
        .add_directive("unistroke_cli=debug".parse()?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(trace_filter()?)
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.strokes.is_empty() {
        return Err("strokes must contain at least one entry".into());
    }

    let mut recognizer = Recognizer::with_config(config.recognizer.into())?;
    for template in &config.templates {
        let points = to_points(&template.points);
        let variants = recognizer.add_template(template.name.clone(), &points)?;
        tracing::debug!(name = %template.name, variants, "added template");
    }

    let metric: Metric = config.metric.into();
    let results = config
        .strokes
        .iter()
        .enumerate()
        .map(|(idx, stroke)| {
            let id = stroke.id.clone().unwrap_or_else(|| idx.to_string());
            match recognizer.recognize(&to_points(&stroke.points), metric) {
                Ok(value) => ResultRecord::matched(id, value),
                Err(err) => ResultRecord::failed(id, err.to_string()),
            }
        })
        .collect();

    let output = Output {
        metric: metric.as_str(),
        templates: recognizer.len(),
        results,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{trace_filter, Config, EXAMPLE_JSON, SCHEMA_JSON};
    use unistroke::{RecognizerConfig, MAX_NUM_POINTS};

    #[test]
    fn trace_filter_enables_cli_debug_events() {
        let filter = trace_filter().unwrap().to_string();
        assert!(filter.contains("unistroke_cli=debug"), "{filter}");
        assert!(filter.contains("unistroke=info"), "{filter}");
    }

    #[test]
    fn parallel_flag_reaches_recognizer_config() {
        let config: Config =
            serde_json::from_str(r#"{ "recognizer": { "parallel": true } }"#).unwrap();
        let cfg: RecognizerConfig = config.recognizer.into();
        assert!(cfg.parallel);
        assert_eq!(cfg.num_points, RecognizerConfig::default().num_points);
    }

    #[test]
    fn example_config_parses() {
        let config: Config = serde_json::from_str(EXAMPLE_JSON).unwrap();
        assert!(!config.strokes.is_empty());
        let cfg: RecognizerConfig = config.recognizer.into();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn schema_caps_num_points() {
        let schema: serde_json::Value = serde_json::from_str(SCHEMA_JSON).unwrap();
        let max = &schema["properties"]["recognizer"]["properties"]["num_points"]["maximum"];
        assert_eq!(max.as_u64(), Some(MAX_NUM_POINTS as u64));
    }
}
