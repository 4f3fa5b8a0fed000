use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::load_settings, ActivityController, EditorEvent, EditorSnapshot, HttpActivityApi,
    SubmitError,
};
use shared::{
    domain::{ActivityId, Category, Tier},
    protocol::Activity,
    scoring::{impact_score, ImpactLabel},
};
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Record extracurricular activities and their impact scores")]
struct Cli {
    /// Activity server base url; overrides activity.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every stored activity.
    List,
    /// Create a new activity.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Category,
        #[arg(long)]
        tier: Tier,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        hours: i32,
        #[arg(long)]
        leader: bool,
    },
    /// Edit an existing activity; omitted fields keep their stored value.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        tier: Option<Tier>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        hours: Option<i32>,
        #[arg(long)]
        leader: Option<bool>,
    },
    /// Delete an activity.
    Delete { id: i64 },
    /// Preview a score without contacting the server.
    Score {
        #[arg(long)]
        tier: Option<Tier>,
        #[arg(long, default_value_t = 0)]
        hours: i32,
        #[arg(long)]
        leader: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    if let Command::Score {
        tier,
        hours,
        leader,
    } = cli.command
    {
        let score = impact_score(tier, leader, hours);
        println!("{score} ({})", ImpactLabel::from_score(score));
        return Ok(ExitCode::SUCCESS);
    }

    let mut settings = load_settings();
    if let Some(server_url) = cli.server_url {
        settings.server_url = server_url;
    }
    let api = HttpActivityApi::new(&settings).context("failed to build activity client")?;
    tracing::debug!(base_url = %api.base_url(), "using activity server");

    let controller = ActivityController::new(Arc::new(api));
    let mut events = controller.subscribe_events();

    let succeeded = run(&controller, cli.command).await;
    print_notices(&mut events);

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Runs one command. Request failures are reported through the notice
/// stream, so they are not printed here.
async fn run(controller: &ActivityController, command: Command) -> bool {
    if controller.load().await.is_err() {
        return false;
    }

    match command {
        Command::List => {
            print_activities(&controller.snapshot().await);
            true
        }
        Command::Add {
            name,
            category,
            tier,
            description,
            hours,
            leader,
        } => {
            controller
                .update_form(|form| {
                    form.set_name(&name);
                    form.set_category(Some(category));
                    form.set_tier(Some(tier));
                    form.set_description(&description);
                    form.set_hours_per_week(hours);
                    form.set_leadership(leader);
                })
                .await;
            submit(controller).await
        }
        Command::Edit {
            id,
            name,
            category,
            tier,
            description,
            hours,
            leader,
        } => {
            if controller.begin_edit(ActivityId(id)).await.is_none() {
                eprintln!("no activity with id {id}");
                return false;
            }
            controller
                .update_form(|form| {
                    if let Some(name) = &name {
                        form.set_name(name);
                    }
                    if category.is_some() {
                        form.set_category(category);
                    }
                    if tier.is_some() {
                        form.set_tier(tier);
                    }
                    if let Some(description) = &description {
                        form.set_description(description);
                    }
                    if let Some(hours) = hours {
                        form.set_hours_per_week(hours);
                    }
                    if let Some(leader) = leader {
                        form.set_leadership(leader);
                    }
                })
                .await;
            submit(controller).await
        }
        Command::Delete { id } => match controller.delete(ActivityId(id)).await {
            Ok(snapshot) => {
                println!("deleted {id}; {} activities remain", snapshot.activities.len());
                true
            }
            Err(_) => false,
        },
        Command::Score { .. } => unreachable!("handled before connecting"),
    }
}

async fn submit(controller: &ActivityController) -> bool {
    match controller.submit().await {
        Ok(activity) => {
            println!(
                "saved #{} {}: impact {} ({})",
                activity.id,
                activity.name(),
                activity.impact_score(),
                activity.impact_label()
            );
            true
        }
        Err(SubmitError::Invalid(errors)) => {
            for error in errors {
                eprintln!("invalid: {error}");
            }
            false
        }
        Err(SubmitError::InFlight) => {
            eprintln!("a save is already in progress");
            false
        }
        Err(SubmitError::Request(_)) => false,
    }
}

fn print_activities(snapshot: &EditorSnapshot) {
    if snapshot.activities.is_empty() {
        println!("No activities added yet.");
        return;
    }
    for activity in &snapshot.activities {
        let draft = &activity.draft;
        println!(
            "#{:<4} {:<50} {:<17} {:<13} {:>2} hrs/wk  impact {} ({}){}{}",
            activity.id,
            draft.name,
            draft.category,
            draft.tier,
            draft.hours_per_week,
            draft.impact_score,
            activity.impact_label(),
            if draft.is_leadership { "  leader" } else { "" },
            stale_score_note(activity).unwrap_or_default()
        );
        println!("       {}", draft.description);
    }
}

/// Flags a stored score that no longer matches the record's own fields, as
/// left behind by older clients or by edits made outside this tool.
fn stale_score_note(activity: &Activity) -> Option<String> {
    let recomputed = activity.draft.recomputed_score();
    (recomputed != activity.impact_score())
        .then(|| format!("  [stale, recomputes to {recomputed}]"))
}

fn print_notices(events: &mut broadcast::Receiver<EditorEvent>) {
    for message in drain_notices(events) {
        eprintln!("error: {message}");
    }
}

/// Collects every queued notice message. A lagged receiver skips the
/// overwritten events and keeps reading what is still buffered.
fn drain_notices(events: &mut broadcast::Receiver<EditorEvent>) -> Vec<String> {
    let mut messages = Vec::new();
    loop {
        match events.try_recv() {
            Ok(EditorEvent::Notice(notice)) => messages.push(notice.message().to_owned()),
            Ok(EditorEvent::StateChanged(_)) => {}
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event stream lagged; some notices were lost");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::{drain_notices, stale_score_note};
    use client_core::{EditorEvent, EditorSnapshot, Notice, Operation, RequestError};
    use reqwest::StatusCode;
    use shared::{
        domain::ActivityId,
        protocol::{Activity, ActivityDraft},
    };
    use tokio::sync::broadcast;

    fn rejected(operation: Operation) -> EditorEvent {
        EditorEvent::Notice(Notice::from_request_error(&RequestError::Status {
            operation,
            status: StatusCode::BAD_GATEWAY,
        }))
    }

    fn stored(tier: &str, impact_score: i32) -> Activity {
        Activity {
            id: ActivityId(3),
            draft: ActivityDraft {
                name: "Orchestra".into(),
                category: "Arts".into(),
                tier: tier.into(),
                description: "First violin".into(),
                hours_per_week: 6,
                is_leadership: false,
                impact_score,
            },
        }
    }

    #[test]
    fn notices_after_a_lag_are_still_collected() {
        let (tx, mut rx) = broadcast::channel(2);
        tx.send(rejected(Operation::List)).expect("send");
        for _ in 0..3 {
            tx.send(EditorEvent::StateChanged(EditorSnapshot::default()))
                .expect("send");
        }
        tx.send(rejected(Operation::Delete)).expect("send");

        let messages = drain_notices(&mut rx);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Could not delete"), "{}", messages[0]);
        assert!(drain_notices(&mut rx).is_empty());
    }

    #[test]
    fn drain_stops_once_the_sender_is_gone() {
        let (tx, mut rx) = broadcast::channel(4);
        tx.send(rejected(Operation::Create)).expect("send");
        drop(tx);
        assert_eq!(drain_notices(&mut rx).len(), 1);
    }

    #[test]
    fn flags_only_scores_that_disagree_with_the_fields() {
        // State tier scores 3 with no bonuses.
        assert_eq!(stale_score_note(&stored("State", 3)), None);
        assert_eq!(
            stale_score_note(&stored("State", 0)).as_deref(),
            Some("  [stale, recomputes to 3]")
        );
    }
}
