use anyhow::Result;
use clap::Parser;
use desgaste::{cli::Cli, filter::MachineFilter, pipeline};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.debug);

    let filter = match &args.filter {
        Some(expr) => MachineFilter::from_expr(expr)?,
        None => MachineFilter::all(),
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| pipeline::default_output_path(&args.input, args.format));

    let config = pipeline::PipelineConfig {
        input: args.input,
        output,
        format: args.format,
        summary: args.summary,
        filter,
        strict_order: args.strict_order,
    };

    pipeline::run(&config)
}
