use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::plane::rand::{draw_coords, ReplayToken, ScatterCfg};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scatter generation and summary runner")]
struct Cmd {
    /// Optional run label; propagated to report outputs and logs
    #[arg(long)]
    label: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a reproducible scatter and write its summary report
    Scatter {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1.0)]
        width: f64,
        #[arg(long, default_value_t = 1.0)]
        height: f64,
        #[arg(long)]
        out: String,
    },
    /// Summarize coordinates read from a JSON file of [x, y] pairs
    Summary {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Scatter {
            count,
            seed,
            width,
            height,
            out,
        } => scatter(count, seed, width, height, out, cmd.label),
        Action::Summary { input, out } => summary(input, out, cmd.label),
        Action::Report => print_report(cmd.label),
    }
}

fn scatter(
    count: usize,
    seed: u64,
    width: f64,
    height: f64,
    out: String,
    label: Option<String>,
) -> Result<()> {
    tracing::info!(count, seed, width, height, out, label = ?label, "scatter");
    let cfg = ScatterCfg {
        count,
        width,
        height,
    };
    let tok = ReplayToken { seed, index: 0 };
    let coords = draw_coords(cfg, tok);
    let s = report::summarize(&coords);
    let params = serde_json::json!({
        "count": count,
        "seed": seed,
        "width": width,
        "height": height
    });
    let path = report::write_report(Path::new(&out), label.as_deref(), params, &s)?;
    tracing::info!(report = %path.display(), "scatter_done");
    Ok(())
}

fn summary(input: String, out: String, label: Option<String>) -> Result<()> {
    tracing::info!(input, out, label = ?label, "summary");
    let coords = report::read_coords(Path::new(&input))?;
    let s = report::summarize(&coords);
    let params = serde_json::json!({ "input": input });
    report::write_report(Path::new(&out), label.as_deref(), params, &s)?;
    Ok(())
}

fn print_report(label: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "version": planar::VERSION,
        "label": label,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
