use std::fs;

use anyhow::{bail, Context, Result};
use clap::Parser;
use labnet_model::{generate_edit_config, parse_config};
use yanglab::client::format_rpc_errors;
use yanglab::demo::demo_config;
use yanglab::reply::{is_rpc_reply, parse_reply};
use yanglab::report::render_config;
use yanglab::request;

mod cli;

use cli::{Cli, Command, ParseArgs, RenderArgs, RequestArgs, RequestMode};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Request(args) => run_request(args),
        Command::Parse(args) => run_parse(args),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let config = demo_config(args.preprov);
    let document = generate_edit_config(&config).context("failed to generate config document")?;

    let body = if args.config_only {
        document
    } else {
        request::edit_config(&document)
    };

    match args.output {
        Some(path) => fs::write(&path, body)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{body}"),
    }

    Ok(())
}

fn run_request(args: RequestArgs) -> Result<()> {
    let body = match args.mode {
        RequestMode::Get => request::get(),
        RequestMode::GetConfig => request::get_config(),
        RequestMode::GetData => request::get_data(),
    };
    println!("{body}");
    Ok(())
}

fn run_parse(args: ParseArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let data = if is_rpc_reply(&raw) {
        let reply = parse_reply(&raw)
            .with_context(|| format!("failed to decode rpc-reply in {}", args.file.display()))?;
        if !reply.errors.is_empty() {
            bail!(
                "device returned rpc errors:\n{}",
                format_rpc_errors(&reply.errors)
            );
        }
        if let Some(message_id) = &reply.message_id {
            eprintln!("message-id: {message_id}");
        }
        if reply.ok && reply.data.trim().is_empty() {
            println!("ok");
            return Ok(());
        }
        reply.data
    } else {
        raw
    };

    let config = parse_config(&data)
        .with_context(|| format!("failed to parse config from {}", args.file.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render_config(&config));
    }

    Ok(())
}
