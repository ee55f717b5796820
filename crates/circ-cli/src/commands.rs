use circ_chain::Chain;
use circ_server::{CircServer, ServerConfig};
use circ_types::CheckoutRecord;

use crate::cli::{Cli, Command, DemoArgs, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Demo(args) => demo(args),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    let server = CircServer::new(config)?;
    tokio::runtime::Runtime::new()?.block_on(server.serve())?;
    Ok(())
}

fn demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut chain = Chain::new()?;
    for i in 0..args.count {
        chain.append(CheckoutRecord::new(
            format!("book-{i}"),
            format!("reader-{i}"),
            "2022-01-03",
        ))?;
    }
    chain.verify()?;
    tracing::info!(blocks = chain.len(), "demo chain verified");
    println!("{}", serde_json::to_string_pretty(chain.blocks())?);
    Ok(())
}
