use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use shadematch_core::service::encode_response;
use shadematch_core::{
    JsonFileCatalog, MatchRequest, MatchService, MatcherConfig, PenaltyMode, PerceptualColor,
    Rgb8, analyze_color, classify_color, classify_shade_name,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Match skin tones against a foundation shade catalog",
    long_about = None
)]
struct Args {
    /// Matcher configuration (TOML). Built-in defaults when omitted.
    #[arg(long, global = true, value_name = "FILE", env = "SHADEMATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Rank undertone mismatches further away instead of closer.
    #[arg(long, global = true)]
    corrected_penalty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a catalog against a sample and print the JSON response.
    Match {
        /// Catalog file: JSON array of shades.
        #[arg(long, value_name = "FILE")]
        catalog: PathBuf,
        /// JSON request body file, or `-` for stdin.
        #[arg(long, value_name = "FILE", conflicts_with = "hex")]
        request: Option<String>,
        /// Sample color, instead of a request body.
        #[arg(long, required_unless_present = "request")]
        hex: Option<String>,
        /// Ambient light color temperature in Kelvin.
        #[arg(long)]
        cct: Option<f64>,
        /// Ambient light color rendering index (0-100).
        #[arg(long)]
        cri: Option<f64>,
        /// Number of top matches.
        #[arg(short, long)]
        n: Option<usize>,
    },
    /// Break a color down into a pigment recipe.
    Mix {
        /// Color to analyze.
        hex: String,
    },
    /// Classify an undertone from a color or a shade name.
    Undertone {
        #[arg(long, conflicts_with = "label", required_unless_present = "label")]
        hex: Option<String>,
        #[arg(long)]
        label: Option<String>,
    },
    /// Print a color's OKLab coordinates.
    Convert {
        hex: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("SHADEMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    match run(args, std::io::stdin().lock(), &mut std::io::stdout().lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command produced a successful result
fn run(args: Args, input: impl Read, out: &mut impl Write) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => MatcherConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => MatcherConfig::default(),
    };
    if args.corrected_penalty {
        config.undertone_penalty = PenaltyMode::Corrected;
    }
    tracing::debug!(?config, "resolved configuration");

    match args.command {
        Command::Match {
            catalog,
            request,
            hex,
            cct,
            cri,
            n,
        } => {
            let service = MatchService::new(config, JsonFileCatalog::new(catalog));
            // Bodies that fail to decode are answered with an error envelope
            let response = match request {
                Some(source) => service.handle_body(&read_request(&source, input)?),
                None => service.handle(&MatchRequest {
                    user_hex: hex.unwrap_or_default(),
                    lighting_cct_k: cct,
                    lighting_cri: cri,
                    n_results: n,
                }),
            };
            writeln!(out, "{}", encode_response(&response))?;
            Ok(response.ok)
        }
        Command::Mix { hex } => {
            let color = Rgb8::parse(&hex)?;
            let mix = analyze_color(color);
            let payload = json!({
                "hex": color,
                "mix": mix,
                "recreated_hex": mix.recreated_hex(),
                "match_percent": mix.match_percent_to(color),
            });
            writeln!(out, "{}", serde_json::to_string(&payload)?)?;
            Ok(true)
        }
        Command::Undertone { hex, label } => {
            let payload = match (hex, label) {
                (Some(hex), _) => {
                    let color = PerceptualColor::from_rgb8(Rgb8::parse(&hex)?);
                    json!({ "hex": hex, "tone": classify_color(&color) })
                }
                (None, Some(label)) => {
                    json!({ "label": label, "undertone": classify_shade_name(&label) })
                }
                (None, None) => anyhow::bail!("pass --hex or --label"),
            };
            writeln!(out, "{}", serde_json::to_string(&payload)?)?;
            Ok(true)
        }
        Command::Convert { hex } => {
            let color = PerceptualColor::from_rgb8(Rgb8::parse(&hex)?);
            writeln!(out, "{}", serde_json::to_string(&color)?)?;
            Ok(true)
        }
    }
}

/// Raw request body from a file, or from `input` when the source is `-`
fn read_request(source: &str, mut input: impl Read) -> Result<String> {
    if source == "-" {
        let mut body = String::new();
        input
            .read_to_string(&mut body)
            .context("failed to read request from stdin")?;
        Ok(body)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read request from {source}"))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::Value;

    use super::*;

    const CATALOG: &str = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../shadematch-tests/data/foundations.json"
    );

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    /// Runs the command line with `stdin` as input, returning the exit status and stdout
    fn exec(argv: &[&str], stdin: &str) -> (bool, Value) {
        let mut out = Vec::new();
        let ok = run(parse(argv), stdin.as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1, "{text}");
        (ok, serde_json::from_str(&text).unwrap())
    }

    fn temp_request(name: &str, body: &str) -> String {
        let path = std::env::temp_dir()
            .join(format!("shadematch-cli-{}-{name}.json", std::process::id()));
        std::fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_hex_and_request_are_exclusive() {
        let hex = ["shadematch", "match", "--catalog", CATALOG, "--hex", "#D9A572"];
        let both = [&hex[..], &["--request", "-"][..]].concat();
        assert!(Args::try_parse_from(both).is_err());
        assert!(Args::try_parse_from(["shadematch", "match", "--catalog", CATALOG]).is_err());
        assert!(Args::try_parse_from(hex).is_ok());
    }

    #[test]
    fn test_undertone_takes_one_source() {
        let argv = ["shadematch", "undertone", "--hex", "#D9A572", "--label", "NC35"];
        assert!(Args::try_parse_from(argv).is_err());
        assert!(Args::try_parse_from(["shadematch", "undertone"]).is_err());
    }

    #[test]
    fn test_match_flags_success() {
        let argv = [
            "shadematch", "match", "--catalog", CATALOG, "--hex", "#D9A572", "--cct", "6500",
            "--cri", "100", "-n", "3",
        ];
        let (ok, json) = exec(&argv, "");
        assert!(ok);
        assert_eq!(json["ok"], true);
        assert_eq!(json["top_matches"].as_array().unwrap().len(), 3);
        assert_eq!(json["top_matches"][0]["shade_name"], "NC35");
    }

    #[test]
    fn test_match_flags_caller_error_exits_failure() {
        let argv = ["shadematch", "match", "--catalog", CATALOG, "--hex", "#D9A572"];
        let (ok, json) = exec(&[&argv[..], &["--cri", "140"][..]].concat(), "");
        assert!(!ok);
        assert_eq!(json["ok"], false);
        assert!(json["error"].as_str().unwrap().contains("lighting"));
    }

    #[test]
    fn test_request_from_stdin() {
        let argv = ["shadematch", "match", "--catalog", CATALOG, "--request", "-"];
        let (ok, json) = exec(&argv, r##"{"user_hex": "#F3D3B4", "n_results": 2}"##);
        assert!(ok);
        assert_eq!(json["top_matches"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_undecodable_request_file_is_envelope() {
        let path = temp_request("missing-hex", r#"{"lighting_cri": 80}"#);
        let argv = ["shadematch", "match", "--catalog", CATALOG, "--request", path.as_str()];
        let (ok, json) = exec(&argv, "");
        std::fs::remove_file(&path).unwrap();

        assert!(!ok);
        assert_eq!(json["ok"], false);
        assert!(json.get("top_matches").is_none());
        assert!(json["error"].as_str().unwrap().contains("user_hex"));
    }

    #[test]
    fn test_non_json_stdin_is_envelope() {
        let argv = ["shadematch", "match", "--catalog", CATALOG, "--request", "-"];
        let (ok, json) = exec(&argv, "not json");
        assert!(!ok);
        assert_eq!(json["ok"], false);
        assert!(json["error"].as_str().unwrap().contains("JSON"));
    }

    #[test]
    fn test_unreadable_request_file_is_error() {
        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("no-such-request.json");
        let missing = missing.to_string_lossy();
        let argv = ["shadematch", "match", "--catalog", CATALOG, "--request", &*missing];
        let mut out = Vec::new();
        let err = run(parse(&argv), "".as_bytes(), &mut out).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read request"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_mix_payload() {
        let (ok, json) = exec(&["shadematch", "mix", "#f1c27d"], "");
        assert!(ok);
        assert_eq!(json["hex"], "#F1C27D");
        assert!(json["mix"]["burntUmber"].is_f64());
        assert!(json["mix"]["white"].as_f64().unwrap() <= 0.4);
        assert_eq!(json["recreated_hex"].as_str().unwrap().len(), 7);
        let percent = json["match_percent"].as_f64().unwrap();
        assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn test_undertone_payloads() {
        let (ok, json) = exec(&["shadematch", "undertone", "--hex", "#D9A572"], "");
        assert!(ok);
        assert_eq!(json["tone"], "warm");

        let (_, json) = exec(&["shadematch", "undertone", "--label", "NW20"], "");
        assert_eq!(json["label"], "NW20");
        assert_eq!(json["undertone"], "cool");
    }

    #[test]
    fn test_convert_payload() {
        let (ok, json) = exec(&["shadematch", "convert", "#FFFFFF"], "");
        assert!(ok);
        assert!((json["L"].as_f64().unwrap() - 1.0).abs() < 1e-6);
        assert!(json["a"].as_f64().unwrap().abs() < 1e-6);
        assert!(json["b"].as_f64().unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_malformed_hex_is_error() {
        let mut out = Vec::new();
        assert!(run(parse(&["shadematch", "convert", "#GGG"]), "".as_bytes(), &mut out).is_err());
    }
}
