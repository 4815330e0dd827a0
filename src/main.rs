use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use deprecheck::audit::engine::resolve_all;
use deprecheck::audit::npm::NpmRegistry;
use deprecheck::audit::report::{Report, build_report};
use deprecheck::config::AuditConfig;
use deprecheck::manifest;

#[derive(Parser)]
#[command(name = "deprecheck")]
#[command(version, about = "Audits locked npm dependencies for deprecated versions")]
struct Cli {
    /// Project directory containing package.json and package-lock.json
    #[arg(default_value = ".")]
    project_dir: PathBuf,

    /// Maximum number of concurrent registry requests
    #[arg(long)]
    concurrency: Option<usize>,

    /// Registry base URL
    #[arg(long)]
    registry: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AuditConfig::load(&cli.project_dir)?;
    if let Some(limit) = cli.concurrency {
        config.concurrency_limit = limit;
    }
    if let Some(url) = cli.registry {
        config.registry_url = url;
    }

    let packages = manifest::load_project(&cli.project_dir)?;
    info!("Auditing {} locked dependencies", packages.len());

    let registry = NpmRegistry::new(&config.registry_url, &config.pool);
    let results = resolve_all(&registry, packages, config.concurrency_limit).await;
    let report = build_report(results);

    print_report(&report);

    Ok(())
}

fn print_report(report: &Report) {
    println!("Deprecated:");
    println!("-----------");
    if report.deprecated.is_empty() {
        println!("No Deprecations");
    } else {
        for package in &report.deprecated {
            println!("{}: {}", package.name, package.message);
        }
    }

    println!();
    println!("Error Fetching:");
    println!("---------------");
    if report.errored.is_empty() {
        println!("No Errors");
    } else {
        for name in &report.errored {
            println!("{}", name);
        }
    }
}
