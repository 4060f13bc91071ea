// SPDX-FileCopyrightText: 2026 Sitesmith Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sitesmith - a web service that turns company ideas into generated
//! websites.
//!
//! This is the binary entry point for the sitesmith server.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::{Parser, Subcommand};

mod serve;

/// Sitesmith - generated websites for fictitious companies.
#[derive(Parser, Debug)]
#[command(name = "sitesmith", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the sitesmith HTTP server.
    Serve,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match sitesmith_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            sitesmith_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(e) = serve::run_serve(config).await {
                eprintln!("sitesmith serve failed: {e}");
                std::process::exit(1);
            }
        }
        None => {
            println!("sitesmith: use --help for available commands");
        }
    }
}
