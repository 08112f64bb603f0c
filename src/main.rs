use std::{process, sync::Arc};

use postdesk::{
    application::{error::AppError, posts::PostListController},
    config,
    infra::{
        error::InfraError,
        memory::InMemoryPostStore,
        seed, telemetry,
        shell::{Console, Router, Shell, TerminalDialogs, render_list},
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(error.exit_code());
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| InfraError::configuration(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Shell(Box::<config::ShellArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;
    let store = Arc::new(init_store(&settings).await?);

    match command {
        config::Command::Shell(_) => run_shell(settings, store).await,
        config::Command::List(args) => run_list(settings, store, args).await,
    }
}

async fn init_store(settings: &config::Settings) -> Result<InMemoryPostStore, AppError> {
    let Some(path) = settings.seed.file.as_deref() else {
        return Ok(InMemoryPostStore::new());
    };

    let posts = seed::load_posts(path, &settings.catalog).await?;
    let store = InMemoryPostStore::with_posts(posts)
        .map_err(|err| InfraError::seed(format!("{}: {err}", path.display())))?;
    info!(
        target = "postdesk::startup",
        posts = store.len(),
        "store seeded"
    );
    Ok(store)
}

async fn run_shell(
    settings: config::Settings,
    store: Arc<InMemoryPostStore>,
) -> Result<(), AppError> {
    let console = Arc::new(Console::stdio());
    let mut shell = Shell::new(
        console,
        store,
        settings.catalog,
        settings.images.max_bytes.get(),
    );
    shell.run().await?;
    Ok(())
}

async fn run_list(
    settings: config::Settings,
    store: Arc<InMemoryPostStore>,
    args: config::ListArgs,
) -> Result<(), AppError> {
    let console = Arc::new(Console::stdio());
    let mut list = PostListController::new(
        store,
        Arc::new(TerminalDialogs::new(console.clone())),
        Arc::new(Router::new()),
        settings.catalog,
    );

    if let Some(search) = args.search {
        list.set_search_text(search);
    }
    for name in &args.categories {
        list.set_category(name, true)
            .map_err(|_| AppError::validation(format!("unknown category `{name}`")))?;
    }

    console
        .write_line(&render_list(&list.visible_posts(), list.filter()))
        .await
        .map_err(InfraError::from)?;
    Ok(())
}
