use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "circd",
    about = "circ — a tamper-evident book circulation ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the circ HTTP server
    Serve(ServeArgs),
    /// Append sample checkouts and print the verified chain
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, e.g. 127.0.0.1:8080
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of sample checkouts to append
    #[arg(long, default_value_t = 3)]
    pub count: usize,
}
