//! algia CLI
//!
//! Headless driver for the timeline client. Renders the timeline page to a
//! file or stdout and submits post, reply, like and repost actions.

mod terminal;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use algia_web_ui::domain::ports::FeedContainer;
use algia_web_ui::feed::{render_page, RenderOptions};
use algia_web_ui::{
    ActionDispatcher, ActionUi, ComposeUi, Config, HttpTimelineClient, PostTarget, SyncPolicy,
    TimelineRenderer,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use terminal::{ArgInput, PageBuffer, TerminalControl, TerminalModal, TerminalStatus};

#[derive(Parser)]
#[command(author, version, about = "Render the timeline and send actions to the algia API")]
struct Args {
    /// Base URL of the API (overrides ALGIA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Do not re-render the timeline after a successful action
    #[arg(long, global = true)]
    no_refresh: bool,

    /// Write the rendered page here: the timeline, or the refreshed timeline after an action
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Do not print status messages
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the timeline and render it as HTML
    Timeline {
        /// Emit only the feed fragment instead of a full page
        #[arg(long)]
        fragment: bool,
    },
    /// Publish a new post
    Post { content: String },
    /// Reply to a post
    Reply {
        #[arg(long)]
        to_id: String,
        #[arg(long)]
        to_pubkey: String,
        /// Display name of the author being replied to
        #[arg(long)]
        to_name: Option<String>,
        content: String,
    },
    /// Like a post
    Like {
        #[arg(long)]
        id: String,
        #[arg(long)]
        pubkey: String,
    },
    /// Repost a post
    Repost {
        #[arg(long)]
        id: String,
        #[arg(long)]
        pubkey: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so rendered HTML can be piped from stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,algia_web_ui=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url).context("Invalid --api-url")?;
    }
    // Statuses are printed, not displayed, so there is nothing to auto-hide.
    config.status_reset_delay = Duration::ZERO;
    config.modal_close_delay = Duration::ZERO;
    tracing::info!("Using API at {}", config.api_url);

    let api = Arc::new(
        HttpTimelineClient::from_config(&config).context("Failed to build HTTP client")?,
    );
    let page = Arc::new(PageBuffer::new());
    let container: Arc<dyn FeedContainer> = page.clone();
    let renderer = Arc::new(TimelineRenderer::with_options(
        api.clone(),
        container,
        RenderOptions {
            placeholder_icon_url: config.placeholder_icon_url.clone(),
        },
    ));
    let policy = if args.no_refresh {
        SyncPolicy::Manual
    } else {
        SyncPolicy::RefreshAfterMutation
    };
    let dispatcher = ActionDispatcher::new(api, renderer.clone(), &config).with_policy(policy);

    let status = TerminalStatus::new(args.quiet);

    let outcome = match args.command {
        Command::Timeline { fragment } => {
            renderer.render_timeline().await;
            let feed = page.take().unwrap_or_default();
            let html = if fragment { feed } else { render_page(&feed) };
            return emit(args.out.as_ref(), &html);
        }
        Command::Post { content } => {
            let input = ArgInput::new(&content);
            let control = TerminalControl::new("post-submit");
            let ui = ComposeUi {
                input: &input,
                control: &control,
                status: &status,
                modal: &TerminalModal,
            };
            dispatcher.submit_post(&ui).await
        }
        Command::Reply {
            to_id,
            to_pubkey,
            to_name,
            content,
        } => {
            let target = PostTarget::new(&to_id, &to_pubkey, to_name.as_deref());
            eprintln!("Replying to @{}", target.display_name);
            let input = ArgInput::new(&content);
            let control = TerminalControl::new("reply-submit");
            let ui = ComposeUi {
                input: &input,
                control: &control,
                status: &status,
                modal: &TerminalModal,
            };
            dispatcher.submit_reply(&target, &ui).await
        }
        Command::Like { id, pubkey } => {
            let control = TerminalControl::new("like");
            let ui = ActionUi {
                control: &control,
                status: &status,
            };
            dispatcher
                .submit_like(&PostTarget::new(&id, &pubkey, None), &ui)
                .await
        }
        Command::Repost { id, pubkey } => {
            let control = TerminalControl::new("repost");
            let ui = ActionUi {
                control: &control,
                status: &status,
            };
            dispatcher
                .submit_repost(&PostTarget::new(&id, &pubkey, None), &ui)
                .await
        }
    };

    let receipt = outcome.context("Action failed")?;
    println!("{}", receipt.event_id);

    if let (Some(path), Some(feed)) = (args.out.as_ref(), page.take()) {
        emit(Some(path), &render_page(&feed))?;
    }

    Ok(())
}

/// Write `html` to `out`, or stdout when no path is given
fn emit(out: Option<&PathBuf>, html: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote timeline to {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}
