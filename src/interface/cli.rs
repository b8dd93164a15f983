use crate::domain::traits::EdgeSource;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::scc_kosaraju::KosarajuSccDetector;
use crate::infrastructure::serde_json_adapter::read_graph_file;
use crate::infrastructure::text_input::read_text_source;
use crate::usecase::condense::condense_graph;
use crate::usecase::event::AppEvent;
use crate::usecase::validate::validate_graph;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::Condense {
            input,
            format,
            emit_events,
        } => {
            let source = load_source(input.as_deref(), format).await?;

            let (tx, rx) = mpsc::channel::<AppEvent>(1024);
            let printer = if emit_events {
                Some(spawn_ndjson_printer(rx))
            } else {
                drop(rx);
                None
            };

            let scc = KosarajuSccDetector;
            // `tx` is dropped when this returns; drain the printer before
            // propagating any error.
            let result = condense_graph(&*source, &scc, Some(tx)).await;

            if let Some(handle) = printer {
                handle.await.ok();
            }

            let (supergraph, _stats) = result?;

            let summary = format!(
                "Number of vertices in the supergraph: {}\nNumber of edges in the supergraph: {}",
                supergraph.vertex_count(),
                supergraph.edge_count()
            );
            if emit_events {
                eprintln!("{summary}");
            } else {
                println!("{summary}");
            }

            Ok(())
        }

        Cli::Validate { input, format } => {
            let source = load_source(input.as_deref(), format).await?;
            let (vertices, edges) = validate_graph(&*source).with_context(|| {
                format!("validating graph: {}", input.as_deref().unwrap_or("<stdin>"))
            })?;

            eprintln!("ok: graph validated (vertices={vertices} edges={edges})");
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Text,
    Json,
}

#[derive(Debug)]
enum Cli {
    Condense {
        input: Option<String>,
        format: InputFormat,
        emit_events: bool,
    },
    Validate {
        input: Option<String>,
        format: InputFormat,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> supergraph condense [--in/--input <path>] [--format text|json] [--emit-events]
        // <bin> supergraph validate [--in/--input <path>] [--format text|json]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "supergraph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "condense" => Self::parse_command(args, true),
            "validate" => Self::parse_command(args, false),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_command(args: &[String], condense: bool) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut format = InputFormat::Text;
        let mut emit_events = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = Some(
                        args.get(i)
                            .cloned()
                            .ok_or_else(|| anyhow!(format!("missing value for --in\n\n{}", usage())))?,
                    );
                }
                "--format" => {
                    i += 1;
                    format = match args.get(i).map(String::as_str) {
                        Some("text") => InputFormat::Text,
                        Some("json") => InputFormat::Json,
                        Some(other) => {
                            return Err(anyhow!(format!(
                                "unknown format: {other}\n\n{}",
                                usage()
                            )))
                        }
                        None => {
                            return Err(anyhow!(format!(
                                "missing value for --format\n\n{}",
                                usage()
                            )))
                        }
                    };
                }
                "--emit-events" if condense => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        if condense {
            Ok(Cli::Condense {
                input,
                format,
                emit_events,
            })
        } else {
            Ok(Cli::Validate { input, format })
        }
    }
}

async fn load_source(input: Option<&str>, format: InputFormat) -> Result<Box<dyn EdgeSource>> {
    let label = input.unwrap_or("<stdin>");
    let source: Box<dyn EdgeSource> = match format {
        InputFormat::Text => Box::new(
            read_text_source(input)
                .await
                .with_context(|| format!("reading text graph: {label}"))?,
        ),
        InputFormat::Json => Box::new(
            read_graph_file(input)
                .await
                .with_context(|| format!("reading JSON graph: {label}"))?,
        ),
    };
    Ok(source)
}

fn usage() -> &'static str {
    "Usage:\n  supergraph condense [--in/--input <path>] [--format text|json] [--emit-events]\n  supergraph validate [--in/--input <path>] [--format text|json]\n\nInput:\n  Reads stdin when --in is omitted.\n  text: <vertices> <edges> then <u> <v> per edge, 1-based labels.\n  json: {\"vertices\": n, \"edges\": [[u, v], ...]}, 0-based ids.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the summary goes to stderr."
}
