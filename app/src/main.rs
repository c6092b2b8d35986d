use std::{io, path::PathBuf};

use charts::{dump_plot_data, ensure_plot_dir, render_scaling, render_summary};
use clap::{Parser, Subcommand};
use common::parse::{parse_scaling, parse_summary};
use eyre::{Context, Result};
use tracing::{debug, error};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bench-charts", about = "Render benchmark timing reports as charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Extra tracing filter directives
    #[arg(short, long)]
    log: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render running time vs. thread count line charts from stdin
    Scaling {
        /// Input carries separate avg/max/min blocks per function
        #[arg(long, default_value_t = false)]
        split_stats: bool,
        /// File stem for the rendered charts
        #[arg(short, long, default_value = "scaling")]
        stem: String,
        /// Directory the charts are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Also dump the parsed report as JSON next to the charts
        #[arg(long, default_value_t = false)]
        dump_data: bool,
    },
    /// Render per-function running time bar charts from stdin
    Summary {
        /// Input carries a single timing value per function
        #[arg(long, default_value_t = false)]
        single_stat: bool,
        /// Directory the charts are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
        /// Also dump the parsed report as JSON next to the charts
        #[arg(long, default_value_t = false)]
        dump_data: bool,
    },
}

fn main() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();

    let mut env_filter = EnvFilter::new(format!(
        "bench_charts={log_level},charts={log_level},common={log_level}"
    ));
    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();

    if let Err(err) = run(args.command) {
        error!("{err:#?}");
        return Err(err);
    }
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    let stdin = io::stdin().lock();
    let written = match command {
        Commands::Scaling {
            split_stats,
            stem,
            out_dir,
            dump_data,
        } => {
            let report =
                parse_scaling(stdin, split_stats).context("read scaling report from stdin")?;
            debug!(charts = report.charts.len(), "rendering scaling report");
            ensure_plot_dir(&out_dir)?;
            if dump_data {
                dump_plot_data(&out_dir, &stem, &report)?;
            }
            render_scaling(&report, &out_dir, &stem)?
        }
        Commands::Summary {
            single_stat,
            out_dir,
            dump_data,
        } => {
            let report =
                parse_summary(stdin, single_stat).context("read summary report from stdin")?;
            debug!(charts = report.charts.len(), "rendering summary report");
            ensure_plot_dir(&out_dir)?;
            if dump_data {
                dump_plot_data(&out_dir, report.stem(), &report)?;
            }
            render_summary(&report, &out_dir)?
        }
    };

    for path in written {
        println!("Generated: {}", path.display());
    }
    Ok(())
}
