use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dnscheck_domain::CliOverrides;

mod bootstrap;
mod client;
mod commands;
mod di;
mod server;
mod ui;

use client::{ApiClient, DEFAULT_SERVER_URL};
use commands::query::QueryOptions;
use ui::{UiState, ViewMode};

#[derive(Parser)]
#[command(name = "dnscheck")]
#[command(version)]
#[command(about = "dnscheck - compare DNS answers across several servers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP backend
    Serve(ServeArgs),

    /// Compare how the configured servers resolve some domains
    Query(QueryArgs),

    /// Show which domains a query would check, without sending it
    Preview {
        /// Domains, URLs or host:port values; commas also separate
        #[arg(required = true)]
        domains: Vec<String>,
    },

    /// Browse stored query history
    History {
        #[command(flatten)]
        backend: BackendArgs,

        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Show or replace the stored DNS server list
    Config {
        #[command(flatten)]
        backend: BackendArgs,

        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args)]
struct ServeArgs {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Args)]
struct BackendArgs {
    /// Backend base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_SERVER_URL)]
    server: String,
}

#[derive(Args)]
struct QueryArgs {
    #[command(flatten)]
    backend: BackendArgs,

    /// DNS server to ask, `address[:port] [# label]`; repeatable. Defaults to
    /// the stored list.
    #[arg(long = "dns", value_name = "SERVER")]
    dns_servers: Vec<String>,

    #[arg(long, value_enum, default_value_t = ViewMode::Horizontal)]
    view: ViewMode,

    /// Do not print the normalized domain list first
    #[arg(long)]
    no_preview: bool,

    /// Print the raw result set as JSON
    #[arg(long)]
    json: bool,

    #[arg(required = true)]
    domains: Vec<String>,
}

#[derive(Subcommand)]
enum HistoryCommand {
    /// List stored records, newest first
    List,
    /// Show one record; the most recent run unless --node is given
    Show {
        id: String,
        #[arg(long)]
        node: Option<String>,
        #[arg(long, value_enum, default_value_t = ViewMode::Horizontal)]
        view: ViewMode,
    },
    /// Delete a record by its id or any of its run ids
    Delete { id: String },
    /// Delete every record
    Clear,
}

#[derive(Subcommand)]
enum ConfigCommand {
    Show,
    /// Replace the server list
    Save {
        #[arg(required = true)]
        servers: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // `serve` sets up its own logging once the config is loaded.
    if !matches!(cli.command, Command::Serve(_)) {
        bootstrap::init_client_logging();
    }

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve(args) => {
            let overrides = CliOverrides {
                web_port: args.web_port,
                bind_address: args.bind,
                database_path: args.database,
                log_level: args.log_level,
            };
            commands::serve::run(args.config, overrides).await
        }
        Command::Preview { domains } => commands::preview::run(&domains),
        Command::Query(args) => {
            let client = ApiClient::new(args.backend.server);
            let state = UiState::new(args.view, !args.no_preview);
            let options = QueryOptions {
                inputs: args.domains,
                dns_servers: args.dns_servers,
                json: args.json,
            };
            commands::query::run(&client, options, state).await
        }
        Command::History { backend, command } => {
            let client = ApiClient::new(backend.server);
            match command {
                HistoryCommand::List => commands::history::list(&client).await,
                HistoryCommand::Show { id, node, view } => {
                    let state = UiState::new(view, false);
                    commands::history::show(&client, &id, node.as_deref(), state).await
                }
                HistoryCommand::Delete { id } => commands::history::delete(&client, &id).await,
                HistoryCommand::Clear => commands::history::clear(&client).await,
            }
        }
        Command::Config { backend, command } => {
            let client = ApiClient::new(backend.server);
            match command {
                ConfigCommand::Show => commands::config::show(&client).await,
                ConfigCommand::Save { servers } => {
                    commands::config::save(&client, &servers).await
                }
            }
        }
    }
}
