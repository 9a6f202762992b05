use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{Map, Value, json};
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod mcp;
mod scene;
mod tools;

use config::SceneConfig;
use scene::client::SceneClient;
use scene::grid::{GridParams, expand_grid};

#[derive(Parser)]
#[command(name = "mcp-scene")]
#[command(
    version,
    about = "MCP bridge that drives a scene-control HTTP server"
)]
struct Cli {
    #[command(flatten)]
    config: SceneConfig,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActorTypeArg {
    Cube,
    Sphere,
    Cylinder,
    Plane,
    Light,
    Camera,
}

impl ActorTypeArg {
    fn as_str(self) -> &'static str {
        match self {
            ActorTypeArg::Cube => "Cube",
            ActorTypeArg::Sphere => "Sphere",
            ActorTypeArg::Cylinder => "Cylinder",
            ActorTypeArg::Plane => "Plane",
            ActorTypeArg::Light => "Light",
            ActorTypeArg::Camera => "Camera",
        }
    }
}

#[derive(Args, Clone)]
struct ExpandGridArgs {
    /// Actor type for every cell
    #[arg(long = "type", value_enum)]
    actor_type: ActorTypeArg,
    /// Base name; cells are named BASE_ROW_COL
    #[arg(long)]
    base_name: String,
    /// Number of rows
    #[arg(long)]
    rows: i64,
    /// Number of columns
    #[arg(long)]
    columns: i64,
    /// Distance between neighbouring cells
    #[arg(long)]
    spacing: f64,
    /// Start x coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,
    /// Start y coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,
    /// Start z coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    z: f64,
    /// Uniform scale applied to every cell
    #[arg(long)]
    uniform_scale: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP stdio server
    Serve {
        /// Serve MCP over stdio (NDJSON)
        #[arg(long)]
        stdio: bool,
    },
    /// Probe the scene server
    Health,
    /// Print the current scene
    GetScene {
        /// Output JSON structuredContent
        #[arg(long)]
        json: bool,
    },
    /// Print the batch request a grid expands to, without sending it
    ExpandGrid(ExpandGridArgs),
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    cli.config.validate()?;

    match cli.command {
        Commands::Serve { stdio } => {
            if stdio {
                run_stdio_server(&cli.config)
            } else {
                anyhow::bail!("only --stdio transport is supported")
            }
        }
        Commands::Health => run_health(&cli.config),
        Commands::GetScene { json } => {
            let client = SceneClient::from_config(&cli.config);
            let result = tools::call(&client, mcp::contracts::TOOL_GET_SCENE, &json!({}));
            print_tool_result(result, json)
        }
        Commands::ExpandGrid(args) => run_expand_grid(args),
    }
}

fn init_logging() {
    // stdout carries JSON-RPC, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn run_health(config: &SceneConfig) -> Result<()> {
    let client = SceneClient::from_config(config);
    match client.health() {
        Ok(()) => {
            println!("scene server at {} is healthy", client.endpoint());
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn run_expand_grid(args: ExpandGridArgs) -> Result<()> {
    let mut map = Map::new();
    map.insert("type".to_string(), json!(args.actor_type.as_str()));
    map.insert("base_name".to_string(), json!(args.base_name));
    map.insert("rows".to_string(), json!(args.rows));
    map.insert("columns".to_string(), json!(args.columns));
    map.insert("spacing".to_string(), json!(args.spacing));
    map.insert(
        "start_location".to_string(),
        json!({"x": args.x, "y": args.y, "z": args.z}),
    );
    if let Some(uniform) = args.uniform_scale {
        map.insert("scale".to_string(), json!({"uniform": uniform}));
    }

    let params: GridParams =
        serde_json::from_value(Value::Object(map)).context("invalid grid arguments")?;
    let actors = expand_grid(&params)?;
    let output = serde_json::to_string_pretty(&json!({ "actors": actors }))?;
    println!("{output}");
    Ok(())
}

fn print_tool_result(result: Value, json_output: bool) -> Result<()> {
    let is_error = result
        .get("isError")
        .and_then(|value| value.as_bool())
        .unwrap_or(false);

    if is_error {
        let message = result
            .get("structuredContent")
            .and_then(|value| value.get("error"))
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .unwrap_or("tool error");
        eprintln!("{message}");
        process::exit(1);
    }

    if json_output {
        let structured = result
            .get("structuredContent")
            .cloned()
            .unwrap_or_else(|| json!({}));
        let output = serde_json::to_string_pretty(&structured)?;
        println!("{output}");
        return Ok(());
    }

    let text = result
        .get("content")
        .and_then(|value| value.as_array())
        .and_then(|arr| arr.first())
        .and_then(|value| value.get("text"))
        .and_then(|value| value.as_str())
        .unwrap_or("");
    println!("{text}");
    Ok(())
}

fn run_stdio_server(config: &SceneConfig) -> Result<()> {
    let client = SceneClient::from_config(config);
    info!(endpoint = client.endpoint(), "serving MCP over stdio");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let reader = stdin.lock().lines();
    let mut writer = io::BufWriter::new(stdout.lock());

    for line in reader {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let request: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "skipping unparsable line");
                continue;
            }
        };

        let method = request.get("method").and_then(|value| value.as_str());
        let id = request.get("id").cloned();
        let response = match (method, id) {
            (Some("initialize"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "protocolVersion": "2025-11-25",
                    "capabilities": {
                        "tools": {}
                    },
                    "serverInfo": {
                        "name": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION")
                    }
                }
            })),
            (Some("ping"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {}
            })),
            (Some("tools/list"), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": {
                    "tools": mcp::tool_definitions()
                }
            })),
            (Some("tools/call"), Some(id)) => {
                let result = handle_tool_call(&client, &request);
                Some(json!({
                    "jsonrpc": "2.0",
                    "id": id,
                    "result": result
                }))
            }
            (Some(method), Some(id)) => Some(json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": {
                    "code": -32601,
                    "message": format!("method not found: {method}")
                }
            })),
            (method, None) => {
                debug!(method, "notification ignored");
                None
            }
            _ => None,
        };

        if let Some(response) = response {
            let serialized =
                serde_json::to_string(&response).context("failed to serialize response")?;
            writeln!(writer, "{serialized}").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}

fn handle_tool_call(client: &SceneClient, request: &serde_json::Value) -> serde_json::Value {
    let params = request.get("params");
    let Some(params) = params.and_then(|value| value.as_object()) else {
        return tools::error_result(mcp::errors::INVALID_INPUT, "params must be an object", None);
    };

    let name = params.get("name").and_then(|value| value.as_str());
    let Some(name) = name else {
        return tools::error_result(
            mcp::errors::INVALID_INPUT,
            "params.name must be a string",
            None,
        );
    };

    let args = params
        .get("arguments")
        .cloned()
        .unwrap_or_else(|| json!({}));

    tools::call(client, name, &args)
}
