// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! casgate CLI
//!
//! Sends one request through the interception pipeline and prints the outcome.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use casgate::{ApiClient, ApiVersionNormalizer, ClientConfig, Error};
use url::Url;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("casgate=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "request" => {
            if args.len() < 4 {
                eprintln!("Usage: casgate request <base-url> <path> [json-body]");
                return ExitCode::from(1);
            }
            match send_request(&args[2], &args[3], args.get(4).map(String::as_str)).await {
                Ok(code) => code,
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    ExitCode::from(1)
                }
            }
        }
        "normalize" => {
            if args.len() < 3 {
                eprintln!("Usage: casgate normalize <url>");
                return ExitCode::from(1);
            }
            println!("{}", ApiVersionNormalizer::default().normalize_url(&args[2]));
            ExitCode::SUCCESS
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("casgate {}", casgate::VERSION);
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"casgate - envelope-aware API client

USAGE:
    casgate <COMMAND> [OPTIONS]

COMMANDS:
    request <base-url> <path> [json-body]   Send a request (POST) and print the envelope
    normalize <url>                         Print the URL with the apiVersion parameter
    help                                    Show this help message
    version                                 Show version information

EXAMPLES:
    casgate request https://shop.example.com /api/shop/list '{{"pageNum":1}}'
    casgate normalize "/api/foo?x=1"

Set RUST_LOG=casgate=debug to see the pipeline at work.
"#
    );
}

async fn send_request(base: &str, path: &str, body: Option<&str>) -> anyhow::Result<ExitCode> {
    let base_url = Url::parse(base).with_context(|| format!("invalid base URL '{}'", base))?;
    let client = ApiClient::new(ClientConfig::new().base_url(base_url))?;

    let mut request = client.new_request(path);
    if let Some(body) = body {
        let json: serde_json::Value =
            serde_json::from_str(body).context("request body is not valid JSON")?;
        request = request.json(&json)?;
    }

    match client.request(request).await {
        Ok(response) => {
            let envelope: casgate::Envelope = response.envelope()?;
            println!("Status: {}", response.status);
            println!("Time: {}ms", response.response_time_ms);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::SessionExpired { status, .. }) => {
            eprintln!("Session expired (status {}), log in again", status);
            if let Some(location) = client.take_saved_location() {
                eprintln!("Return to: {}", location);
            }
            Ok(ExitCode::from(2))
        }
        Err(e) => match e.envelope() {
            Some(envelope) => {
                eprintln!("Rejected: {}", e);
                eprintln!("{}", serde_json::to_string_pretty(envelope)?);
                Ok(ExitCode::from(1))
            }
            None => Err(e.into()),
        },
    }
}
