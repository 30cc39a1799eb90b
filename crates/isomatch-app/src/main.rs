use clap::Parser;
use isomatch_app::cli::Args;
use isomatch_app::harness::{cartesian_inputs, run};
use isomatch_core::config::load_config;
use isomatch_grammar::Matcher;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let matcher = Matcher::from_config(&config.matcher);
    let format = args.report_format(config.report.format);
    let inputs = if args.inputs.is_empty() {
        tracing::info!("No arguments given, matching configured samples");
        cartesian_inputs(&config.samples)
    } else {
        args.inputs
    };

    for line in run(&matcher, &inputs, format)? {
        println!("{line}");
    }

    Ok(())
}
