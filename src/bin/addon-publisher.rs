//! Addon Publisher CLI
//!
//! CI-pipeline step that uploads a packaged browser extension to
//! addons.mozilla.org

use addon_publisher::{AddonPublisher, ApiCredentials, PublishInputs};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Upload a packaged browser extension to addons.mozilla.org
#[derive(Parser)]
#[command(name = "addon-publisher")]
#[command(version = "0.1.0")]
#[command(about = "Upload a packaged browser extension to addons.mozilla.org", long_about = None)]
struct Cli {
    /// Path to the package file to upload
    #[arg(long, value_name = "PATH", env = "AMO_XPI")]
    xpi: PathBuf,

    /// Path to the JSON manifest file
    #[arg(long, value_name = "PATH", env = "AMO_MANIFEST")]
    manifest: PathBuf,

    /// API key (issuer identity for the signed token)
    #[arg(long, value_name = "KEY", env = "AMO_API_KEY")]
    api_key: String,

    /// API secret (HMAC signing secret)
    #[arg(
        long,
        value_name = "SECRET",
        env = "AMO_API_SECRET",
        hide_env_values = true
    )]
    api_secret: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = run().await;

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("\n❌ Error");
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    println!("\n📦 addon-publisher\n");

    let inputs = PublishInputs {
        xpi: cli.xpi,
        manifest: cli.manifest,
        credentials: ApiCredentials::new(cli.api_key, cli.api_secret),
    };

    let mut publisher = AddonPublisher::new();
    let report = publisher.publish(&inputs).await;

    if report.success {
        match &report.version {
            Some(version) => println!("✅ Published version {}", version),
            None => println!("✅ Upload accepted"),
        }
        Ok(0)
    } else {
        eprintln!("❌ Publishing failed");
        for error in &report.errors {
            eprintln!("  - {}", error);
        }
        Ok(1)
    }
}
