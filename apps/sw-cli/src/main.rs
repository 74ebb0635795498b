use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sw_console::{ConsoleResult, load_request, submit_graph};
use sw_forms::{ChannelKind, FieldGroup, resolve, shows_signup_link};
use sw_graph::{GraphConfig, GraphField, GraphKind, item_columns, render};
use sw_store::{GraphStore, InMemoryMetricRegistry};

#[derive(Parser)]
#[command(name = "sw-cli")]
#[command(about = "Skywatch console forms - inspect and validate graph definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rendered field layout for a graph type
    Layout {
        /// Graph type (Normal, Stacked, Pie, Exploded)
        graph_type: GraphKind,
        /// Render the graph-prototype variant of the form
        #[arg(long)]
        prototype: bool,
    },
    /// Show field-group visibility for a notification channel type
    Channels {
        /// Channel type (Email, Script, SMS, Jabber, "Ez Texting")
        channel: ChannelKind,
    },
    /// Validate a submit request and commit it to a scratch store
    Submit {
        /// Path to the request YAML file
        request_path: PathBuf,
        /// File with known metric names, one per line (defaults to the
        /// request's own item metrics)
        #[arg(long)]
        metrics: Option<PathBuf>,
    },
}

fn main() -> ConsoleResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            graph_type,
            prototype,
        } => cmd_layout(graph_type, prototype),
        Commands::Channels { channel } => cmd_channels(channel),
        Commands::Submit {
            request_path,
            metrics,
        } => cmd_submit(&request_path, metrics.as_deref()),
    }
}

fn cmd_layout(graph_type: GraphKind, prototype: bool) -> ConsoleResult<()> {
    let config = GraphConfig::with_kind(graph_type);
    let states = render(&config, prototype);

    println!("Layout for {graph_type} ({}):", if prototype { "graph prototype" } else { "graph" });
    for field in GraphField::ALL {
        let state = states[&field];
        let summary = if !state.exists {
            "absent"
        } else if !state.visible {
            "hidden"
        } else if state.mandatory {
            "visible, mandatory"
        } else {
            "visible"
        };
        println!("  {field:?}: {summary}");
    }
    println!("Item columns: {:?}", item_columns(graph_type));
    Ok(())
}

fn cmd_channels(channel: ChannelKind) -> ConsoleResult<()> {
    let plan = resolve(channel);

    println!("Field groups for {channel}:");
    for group in FieldGroup::ALL {
        let state = if plan.shows(group) { "shown" } else { "hidden" };
        println!("  {group:?}: {state}");
    }
    println!(
        "Signup link: {}",
        if shows_signup_link(channel) { "shown" } else { "hidden" }
    );
    Ok(())
}

fn cmd_submit(request_path: &std::path::Path, metrics: Option<&std::path::Path>) -> ConsoleResult<()> {
    let request = load_request(request_path)?;

    let registry = match metrics {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                sw_console::ConsoleError::RequestFileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
            InMemoryMetricRegistry::with_metrics(
                content.lines().map(str::trim).filter(|line| !line.is_empty()),
            )
        }
        None => {
            InMemoryMetricRegistry::with_metrics(request.items.iter().map(|item| item.metric.as_str()))
        }
    };

    let mut store = GraphStore::new();
    match submit_graph(&request, &mut store, &registry) {
        Ok(id) => {
            println!(
                "{} added (id {id})",
                if request.prototype { "Graph prototype" } else { "Graph" }
            );
        }
        Err(rejection) => {
            println!("{}", rejection.header);
            for detail in &rejection.details {
                println!("  {detail}");
            }
        }
    }
    Ok(())
}
