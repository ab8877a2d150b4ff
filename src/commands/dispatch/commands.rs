//! Command implementations for all casebook commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use casebook_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::{
        CheckArgs, DiagnoseArgs, DomainArgs, DomainCommands, HistoryArgs, InitArgs, RetainArgs,
    };
    use crate::commands::dispatch::macros::trace_command;
    use crate::commands::{
        check, diagnose, domain, evaluate, history, init, reference, retain,
    };
    use casebook_core::config::DomainConfig;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init(args) => execute_init(ctx, args),
            Commands::Domain(subcmd) => execute_domain(ctx, &subcmd.command),
            Commands::Symptoms(args) => execute_symptoms(ctx, args),
            Commands::Resolutions(args) => execute_resolutions(ctx, args),
            Commands::Diagnose(args) => execute_diagnose(ctx, args),
            Commands::Retain(args) => execute_retain(ctx, args),
            Commands::Evaluate(args) => execute_evaluate(ctx, args),
            Commands::Check(args) => execute_check(ctx, args),
            Commands::History(args) => execute_history(ctx, args),
        }
    }

    fn execute_init(ctx: &CommandContext, args: &InitArgs) -> Result<()> {
        init::execute(ctx.cli, ctx.root, args.visible)
    }

    fn execute_domain(ctx: &CommandContext, cmd: &DomainCommands) -> Result<()> {
        let mut store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        match cmd {
            DomainCommands::Add {
                name,
                prefix,
                display_name,
                fallback_suffix,
            } => {
                let mut config = DomainConfig::new(prefix.as_str());
                config.display_name = display_name.clone();
                if let Some(suffix) = fallback_suffix {
                    config.fallback_suffix = suffix.clone();
                }
                domain::execute_add(ctx.cli, &mut store, name, config)
            }
            DomainCommands::List => domain::execute_list(ctx.cli, &store),
        }
    }

    fn execute_symptoms(ctx: &CommandContext, args: &DomainArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        reference::execute_symptoms(ctx.cli, &store, &args.domain)
    }

    fn execute_resolutions(ctx: &CommandContext, args: &DomainArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        reference::execute_resolutions(ctx.cli, &store, &args.domain)
    }

    fn execute_diagnose(ctx: &CommandContext, args: &DiagnoseArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        diagnose::execute(ctx.cli, &store, args)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_retain(ctx: &CommandContext, args: &RetainArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        retain::execute(ctx.cli, &store, args)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_evaluate(ctx: &CommandContext, args: &DomainArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        evaluate::execute(ctx.cli, &store, &args.domain)
    }

    fn execute_check(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        check::execute(ctx.cli, &store, &args.domain, args.strict)
    }

    fn execute_history(ctx: &CommandContext, args: &HistoryArgs) -> Result<()> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        history::execute(ctx.cli, &store, args.domain.as_deref(), args.limit)
    }
}
