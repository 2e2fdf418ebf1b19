use super::print::{print_config, print_messages, print_student, print_subjects, print_view};
use super::setup::{Cli, Commands, ModeArg};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uniroll::api::{CmdResult, ConfigAction};
use uniroll::error::Result;
use uniroll::init::{initialize, RosterContext};
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Register {
            email,
            password,
            name,
        }) => handle_register(&mut ctx, &email, &password, &name),
        Some(Commands::Login { email, password }) => handle_login(&mut ctx, &email, &password),
        Some(Commands::Enrol { id }) => handle_enrol(&mut ctx, &id),
        Some(Commands::Drop { id, subject }) => handle_drop(&mut ctx, &id, &subject),
        Some(Commands::Subjects { id }) => handle_subjects(&ctx, &id),
        Some(Commands::Password { id, new_password }) => {
            handle_password(&mut ctx, &id, &new_password)
        }
        Some(Commands::Students { mode }) => handle_students(&ctx, mode),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, &id),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::CheckEmail { email }) => handle_check_email(&ctx, &email),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_students(&ctx, ModeArg::List),
    }
}

/// Logs go to stderr so stdout stays clean for listings. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "uniroll=debug" } else { "uniroll=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<RosterContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    initialize(&cwd, cli.data_dir.as_deref(), cli.global)
}

fn handle_register(ctx: &mut RosterContext, email: &str, password: &str, name: &str) -> Result<()> {
    let result = ctx.api.register(email, password, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut RosterContext, email: &str, password: &str) -> Result<()> {
    let result = ctx.api.login(email, password)?;
    print_messages(&result.messages);
    for student in &result.students {
        print_student(student);
        print_subjects(student.subjects());
    }
    Ok(())
}

fn handle_enrol(ctx: &mut RosterContext, id: &str) -> Result<()> {
    let result = ctx.api.enrol(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_drop(ctx: &mut RosterContext, id: &str, subject: &str) -> Result<()> {
    let result = ctx.api.drop_subject(id, subject)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_subjects(ctx: &RosterContext, id: &str) -> Result<()> {
    let result = ctx.api.subjects(id)?;
    print_messages(&result.messages);
    print_subjects(&result.subjects);
    Ok(())
}

fn handle_password(ctx: &mut RosterContext, id: &str, new_password: &str) -> Result<()> {
    let result = ctx.api.change_password(id, new_password)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_students(ctx: &RosterContext, mode: ModeArg) -> Result<()> {
    let result = ctx.api.students(mode.into())?;
    print_result_view(&result);
    print_messages(&result.messages);
    Ok(())
}

fn print_result_view(result: &CmdResult) {
    if let Some(view) = &result.view {
        print_view(view);
    }
}

fn handle_remove(ctx: &mut RosterContext, id: &str) -> Result<()> {
    let result = ctx.api.remove_student(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut RosterContext, yes: bool) -> Result<()> {
    if !yes {
        println!("Refusing to clear {} students without --yes.", ctx.api.database().len());
        return Ok(());
    }
    let result = ctx.api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check_email(ctx: &RosterContext, email: &str) -> Result<()> {
    if ctx.api.email_available(email) {
        println!("{} is available", email);
    } else {
        println!("{} is already registered", email);
    }
    Ok(())
}

fn handle_config(ctx: &RosterContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
