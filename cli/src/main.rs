mod new;
mod render;
mod theme;
mod toast;

use clap::{Parser, Subcommand};
use dialoguer::console::style;
use dialoguer::Select;
use eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;

use base::setting::{generate_default, get_settings, load, print, Settings, SETTINGS};
use base::CLI_NAME;
use common::aggregate::StatusFilter;
use common::router::{menu, DEFAULT_PAGE};
use common::{Client, Dashboard};
use entity::{ReleaseStatus, User};

use crate::theme::DialoguerTheme;
use crate::toast::ConsoleNotifier;

/// Terminal dashboard for your music distribution account
#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the dashboard interactively (default)
    Dashboard,
    /// Print a single page and exit
    Show {
        #[arg(name = "PAGE", default_value_t = String::from(DEFAULT_PAGE))]
        page: String,
    },
    /// List your releases
    Releases {
        /// Only list releases with this status (draft, pending or published)
        #[arg(short, long, value_name = "STATUS")]
        status: Option<StatusFilter>,
    },
    /// Create a new release
    New,
    /// Publish a release waiting for moderation
    Approve {
        #[arg(name = "ID")]
        id: i64,
    },
    /// Send a release back to drafts
    Reject {
        #[arg(name = "ID")]
        id: i64,
    },
    /// Print the default configuration in TOML
    DefaultConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Open(&'static str, &'static str),
    NewRelease,
    Filter,
    Approve,
    Reject,
    Refresh,
    Quit,
}

impl Action {
    fn label(&self) -> String {
        match self {
            Action::Open(_, label) => label.to_string(),
            Action::NewRelease => "+ New release".to_string(),
            Action::Filter => "Filter by status".to_string(),
            Action::Approve => "Approve a release".to_string(),
            Action::Reject => "Reject a release".to_string(),
            Action::Refresh => "Refresh".to_string(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// The sidebar entries followed by the actions available on the current page.
fn actions(dash: &Dashboard) -> Vec<Action> {
    let mut actions = menu(dash.user().role)
        .into_iter()
        .map(|item| Action::Open(item.id, item.label))
        .collect::<Vec<_>>();
    actions.push(Action::NewRelease);
    match dash.router().current() {
        "releases" => actions.push(Action::Filter),
        "admin" => actions.extend([Action::Approve, Action::Reject]),
        _ => {}
    }
    actions.extend([Action::Refresh, Action::Quit]);
    actions
}

fn pick_filter(theme: &DialoguerTheme, current: StatusFilter) -> Result<StatusFilter> {
    let filters = [
        (StatusFilter::All, "All"),
        (StatusFilter::Only(ReleaseStatus::Published), "Published"),
        (StatusFilter::Only(ReleaseStatus::Pending), "In moderation"),
        (StatusFilter::Only(ReleaseStatus::Draft), "Drafts"),
    ];
    let default = filters
        .iter()
        .position(|(f, _)| *f == current)
        .unwrap_or_default();
    let picked = Select::with_theme(theme)
        .with_prompt("Show")
        .items(&filters.iter().map(|(_, l)| *l).collect::<Vec<_>>())
        .default(default)
        .interact()?;
    Ok(filters[picked].0)
}

/// Lets the user pick one of the releases waiting for moderation.
fn pick_pending(theme: &DialoguerTheme, dash: &Dashboard) -> Result<Option<i64>> {
    let queue = dash
        .releases()
        .iter()
        .filter(|r| r.status == ReleaseStatus::Pending)
        .collect::<Vec<_>>();
    if queue.is_empty() {
        eprintln!("{}", style("Nothing is waiting for moderation").dim());
        return Ok(None);
    }
    let picked = Select::with_theme(theme)
        .with_prompt("Release")
        .items(
            &queue
                .iter()
                .map(|r| format!("{} ({})", r.title, r.artist_name))
                .collect::<Vec<_>>(),
        )
        .default(0)
        .interact_opt()?;
    Ok(picked.map(|i| queue[i].id))
}

async fn interactive(dash: &mut Dashboard) -> Result<()> {
    let theme = DialoguerTheme::default();
    let mut filter = StatusFilter::All;
    loop {
        println!("{}", render::sidebar(dash.user(), dash.router().current()));
        println!("{}", render::page(dash, filter));

        let actions = actions(dash);
        let default = actions
            .iter()
            .position(|a| matches!(a, Action::Open(id, _) if *id == dash.router().current()))
            .unwrap_or_default();
        let picked = Select::with_theme(&theme)
            .with_prompt("Go to")
            .items(&actions.iter().map(Action::label).collect::<Vec<_>>())
            .default(default)
            .interact_opt()?;
        let action = match picked {
            Some(i) => actions[i],
            None => return Ok(()),
        };
        tracing::debug! {?action, "Picked action"};

        match action {
            Action::Open(id, _) => dash.navigate(id),
            Action::NewRelease => {
                new::create(dash).await?;
            }
            Action::Filter => filter = pick_filter(&theme, filter)?,
            Action::Approve | Action::Reject => {
                let status = if action == Action::Approve {
                    ReleaseStatus::Published
                } else {
                    ReleaseStatus::Draft
                };
                if let Some(id) = pick_pending(&theme, dash)? {
                    // failures are already reported by the notifier
                    let _ = dash.moderate(id, status).await;
                }
            }
            Action::Refresh => dash.refresh_all().await,
            Action::Quit => return Ok(()),
        }
    }
}

async fn open(config: Option<PathBuf>) -> Result<Dashboard> {
    SETTINGS.get_or_try_init(async { load(config) }).await?;
    let settings = get_settings()?;
    let client = Arc::new(Client::new(&settings.api)?);
    tracing::info! {releases = %settings.api.releases_url, analytics = %settings.api.analytics_url, "Using endpoints"};
    Ok(Dashboard::with_client(
        User::from(&settings.user),
        settings.api.user_id,
        client,
        Arc::new(ConsoleNotifier::default()),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    theme::init_logger();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Dashboard) {
        Command::DefaultConfig => {
            let default = generate_default(Settings::default());
            println!("{}", print(&default)?);
            Ok(())
        }
        Command::Dashboard => {
            let mut dash = open(cli.config).await?;
            dash.mount().await;
            interactive(&mut dash).await
        }
        Command::Show { page } => {
            let mut dash = open(cli.config).await?;
            dash.mount().await;
            dash.navigate(page);
            println!("{}", render::page(&dash, StatusFilter::All));
            Ok(())
        }
        Command::Releases { status } => {
            let mut dash = open(cli.config).await?;
            dash.mount().await;
            dash.navigate("releases");
            println!("{}", render::page(&dash, status.unwrap_or_default()));
            Ok(())
        }
        Command::New => {
            let mut dash = open(cli.config).await?;
            if let Some(created) = new::create(&mut dash).await? {
                println!("Created release #{}", created.id);
            }
            Ok(())
        }
        Command::Approve { id } => {
            let mut dash = open(cli.config).await?;
            dash.moderate(id, ReleaseStatus::Published).await?;
            Ok(())
        }
        Command::Reject { id } => {
            let mut dash = open(cli.config).await?;
            dash.moderate(id, ReleaseStatus::Draft).await?;
            Ok(())
        }
    }
}
