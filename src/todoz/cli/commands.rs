//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into typed commands via clap
//! 2. **Context Setup**: resolve the data dir, load config, open the store
//! 3. **API Dispatch**: call the matching `TodoApi` method
//! 4. **Output Formatting**: turn `CmdResult` into terminal output
//!
//! Handlers return whether the command finished without error messages; the
//! binary maps that to the exit code.

use super::print::{print_count, print_messages, print_todos};
use super::setup::{init_tracing, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use todoz::api::{configure, CmdMessage, CmdResult, ConfigAction, TodoApi};
use todoz::config::TodozConfig;
use todoz::error::{Result, TodozError};
use todoz::model::{FilterMode, TodoId};
use todoz::persist::TodoPersistence;
use todoz::storage::fs::FileStorage;
use todoz::todos::TodoStore;
use std::path::{Path, PathBuf};

struct AppContext {
    api: TodoApi<FileStorage>,
}

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    match cli.command {
        // Config does not need the store; opening it could seed samples.
        Some(Commands::Config { key, value }) => handle_config(&data_dir, key, value),
        command => {
            let mut ctx = init_context(&data_dir)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<bool> {
    match command {
        Some(Commands::Add { text }) => handle_add(ctx, text),
        Some(Commands::List { filter }) => handle_list(ctx, filter),
        Some(Commands::Toggle { id }) => handle_toggle(ctx, &id),
        Some(Commands::Delete { id }) => handle_delete(ctx, &id),
        Some(Commands::Clear) => handle_clear(ctx),
        Some(Commands::Config { .. }) => Ok(true),
        None => handle_list(ctx, None),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    ProjectDirs::from("com", "todoz", "todoz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodozError::Config("Could not determine a data directory".to_string()))
}

fn init_context(data_dir: &Path) -> Result<AppContext> {
    let config = TodozConfig::load(data_dir)?;
    let storage = FileStorage::new(data_dir);
    let persistence = TodoPersistence::with_key(storage, &config.storage_key)?;

    let store = if config.seed_samples {
        TodoStore::open_seeded(persistence)?
    } else {
        TodoStore::open(persistence)?
    };
    let api = TodoApi::new(store).with_filter(config.default_filter);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, text: Vec<String>) -> Result<bool> {
    let result = ctx.api.add_todo(&text.join(" "))?;
    Ok(finish_mutation(&result))
}

fn handle_list(ctx: &mut AppContext, filter: Option<String>) -> Result<bool> {
    let render = match filter {
        Some(raw) => {
            let mode: FilterMode = raw.parse().map_err(TodozError::Config)?;
            ctx.api.set_filter(mode).render
        }
        None => ctx.api.render(),
    };
    print_todos(&render.view, render.filter);
    print_count(&render);
    Ok(true)
}

fn handle_toggle(ctx: &mut AppContext, id: &str) -> Result<bool> {
    let Some(id) = parse_id(id) else {
        return Ok(true);
    };
    let result = ctx.api.toggle_todo(id)?;
    Ok(finish_mutation(&result))
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<bool> {
    let Some(id) = parse_id(id) else {
        return Ok(true);
    };
    let result = ctx.api.delete_todo(id)?;
    Ok(finish_mutation(&result))
}

fn handle_clear(ctx: &mut AppContext) -> Result<bool> {
    let result = ctx.api.clear_completed()?;
    Ok(finish_mutation(&result))
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = configure(data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in TodozConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(!result.has_errors())
}

/// An id that does not parse cannot name a task: same outcome as an unknown id.
fn parse_id(raw: &str) -> Option<TodoId> {
    match raw.parse::<TodoId>() {
        Ok(id) => Some(id),
        Err(_) => {
            print_messages(&[CmdMessage::warning(format!(
                "Invalid task id '{}': ids are numbers as shown by `todoz list`",
                raw
            ))]);
            None
        }
    }
}

fn finish_mutation(result: &CmdResult) -> bool {
    print_messages(&result.messages);
    print_count(&result.render);
    !result.has_errors()
}
