// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! tlsremote CLI
//!
//! Small driver for the library. The service is configured through
//! `TLSREMOTE_ENDPOINT` and `TLSREMOTE_KEY`.

use std::env;
use std::process::ExitCode;

use anyhow::Context;
use tlsremote::{ClientConfig, RemoteClient, Request};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tlsremote=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "ping" => ping().await,
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: tlsremote fetch <url>");
                return ExitCode::from(1);
            }
            fetch_url(&args[2]).await
        }
        "cookies" => {
            if args.len() < 4 {
                eprintln!("Usage: tlsremote cookies <url> <domain>");
                return ExitCode::from(1);
            }
            show_cookies(&args[2], &args[3]).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        "--version" | "-v" | "version" => {
            println!("tlsremote {}", tlsremote::VERSION);
            return ExitCode::SUCCESS;
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            return ExitCode::from(1);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"tlsremote - Remote control for a TLS-fingerprinting proxy

USAGE:
    tlsremote <COMMAND> [OPTIONS]

COMMANDS:
    ping                    Check that the service is reachable
    fetch <url>             Fetch a URL through a fresh session
    cookies <url> <domain>  Fetch a URL, then list the session's cookies for a domain
    help                    Show this help message
    version                 Show version information

ENVIRONMENT:
    TLSREMOTE_ENDPOINT      Service address, e.g. 127.0.0.1:8080
    TLSREMOTE_KEY           Authorization key
    TLSREMOTE_TIMEOUT       Control-channel timeout in seconds (default 30)
    TLSREMOTE_PROXY         Proxy for reaching the service

EXAMPLES:
    tlsremote ping
    tlsremote fetch https://tls.peet.ws/api/all
    tlsremote cookies https://example.com example.com
"#
    );
}

async fn connect() -> anyhow::Result<RemoteClient> {
    let config = ClientConfig::from_env().context("Invalid configuration")?;
    RemoteClient::connect(config)
        .await
        .context("Failed to reach service")
}

async fn ping() -> anyhow::Result<()> {
    let client = connect().await?;
    println!("{} is up", client.config().endpoint);
    Ok(())
}

async fn fetch_url(url: &str) -> anyhow::Result<()> {
    println!("Fetching: {}", url);

    let client = connect().await?;
    let mut session = client
        .new_session()
        .await
        .context("Failed to create session")?;

    let result = session.execute(&Request::get(url)).await;
    session.close().await?;
    let response = result.context("Request failed")?;

    println!("Status: {}", response.status_code);
    println!("URL: {}", response.url);
    for (name, value) in response.headers.iter() {
        println!("  {}: {}", name, value);
    }
    println!("Body: {} bytes", response.content.len());
    if !response.server_push.is_empty() {
        println!("Server push: {} responses", response.server_push.len());
    }

    Ok(())
}

async fn show_cookies(url: &str, domain: &str) -> anyhow::Result<()> {
    let client = connect().await?;
    let mut session = client
        .new_session()
        .await
        .context("Failed to create session")?;

    let result = async {
        session.execute(&Request::get(url)).await?;
        session.get_cookies(domain).await
    }
    .await;
    session.close().await?;
    let cookies = result.context("Failed to read cookies")?;

    println!("{} cookies for {}", cookies.len(), domain);
    for cookie in cookies {
        println!(
            "  {}={} (path={}, secure={}, httponly={})",
            cookie.name, cookie.value, cookie.path, cookie.secure, cookie.http_only
        );
    }

    Ok(())
}
