// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands, StoreCommands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            recipe,
            source,
            out,
            store,
            profile,
            settings,
            options,
        } => commands::cmd_generate(recipe, source, out, store, profile, &settings, &options),

        Commands::Build {
            recipe,
            source,
            out,
            jobs,
            meson,
        } => commands::cmd_build(recipe, source, out, jobs, meson),

        Commands::Package {
            recipe,
            source,
            out,
            destdir,
            meson,
        } => commands::cmd_package(recipe, source, out, destdir, meson),

        Commands::Cook {
            recipe,
            source,
            out,
            store,
            profile,
            settings,
            options,
            destdir,
            jobs,
            meson,
        } => commands::cmd_cook(
            recipe, source, out, store, profile, &settings, &options, destdir, jobs, meson,
        ),

        Commands::Check { recipe } => commands::cmd_check(&recipe),

        Commands::Inspect { recipe, json } => commands::cmd_inspect(&recipe, json),

        Commands::Store(store_command) => match store_command {
            StoreCommands::Add {
                pin,
                prefix,
                description,
                libs,
                force,
                store,
            } => commands::cmd_store_add(&pin, &prefix, description, libs, force, store),
            StoreCommands::List { store } => commands::cmd_store_list(store),
            StoreCommands::Path { pin, store } => commands::cmd_store_path(&pin, store),
            StoreCommands::Remove { pin, store } => commands::cmd_store_remove(&pin, store),
        },

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
