use clap::Parser;
use output_floor::api::{ApiError, Cli, Command, run_evaluate, run_http_server};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => fail(e.into()),
    };
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Command::Evaluate(args) => run_evaluate(&args).map(|out| println!("{out}")),
        Command::Serve(args) => run_http_server(args.socket_addr()).await,
    };

    if let Err(e) = outcome {
        fail(e);
    }
}

fn fail(e: ApiError) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
