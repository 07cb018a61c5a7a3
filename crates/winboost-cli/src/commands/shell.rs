//! Interactive session: one line per command, parsed with clap.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use winboost_core::settings::SettingsPatch;
use winboost_core::{
    validation, Action, BoostLevel, Config, MonthCursor, NewReward, RewardType, TaskDraft, TaskFilter,
    QUICK_TEMPLATES,
};

use crate::screens::{self, Tab};
use crate::session::Session;

#[derive(Parser)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<command> [args]"
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Show the home screen
    Home,
    /// Show the task list
    Wins,
    /// Show the calendar
    Calendar,
    /// Show the rewards shop
    Rewards,
    /// Show the profile
    Profile,
    /// Add a task
    Add {
        /// Task name
        name: String,
        /// Boost level: easy, medium or hard (see `boosts`)
        #[arg(long, default_value = "medium")]
        boost: BoostLevel,
        /// Points awarded on completion, or `suggested` for the boost level's value
        #[arg(long)]
        points: Option<String>,
        /// Estimated minutes (sampled from the boost level when omitted)
        #[arg(long)]
        minutes: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Due day (YYYY-MM-DD); defaults to now
        #[arg(long)]
        day: Option<NaiveDate>,
    },
    /// List boost levels with their time bands and suggested points
    Boosts,
    /// List quick task templates
    Templates,
    /// Add a task from a quick template
    Template {
        /// Template number from `templates`
        number: usize,
        #[arg(long, default_value = "medium")]
        boost: BoostLevel,
    },
    /// Complete a task and collect its points
    Complete { id: String },
    /// Delete a task
    Delete { id: String },
    /// Spend points on a reward
    Redeem { id: String },
    /// Add a reward to the shop
    RewardAdd {
        name: String,
        #[arg(long)]
        cost: u32,
        /// timed, experience or instant
        #[arg(long = "type", default_value = "experience")]
        reward_type: RewardType,
        #[arg(long, default_value = "🎁")]
        icon: String,
    },
    /// Report the current energy level (1-10)
    Energy {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Toggle a setting (moodTracking, minimalCelebrations, reducedMotion)
    Set {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Enable or dismiss the mood integration banner
    Banner { action: BannerAction },
    /// Filter the task list: all, pending or completed
    Filter { filter: TaskFilter },
    /// Move the calendar: prev, next or YYYY-MM
    Month { target: String },
    /// Select a day of the displayed month
    Select { day: u32 },
    /// Print the full state as JSON
    State,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BannerAction {
    Enable,
    Dismiss,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run(config: Config, color: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(config).with_color(color);
    session.store.subscribe(|state| {
        tracing::debug!(
            points = state.user.points,
            wins = state.user.total_wins,
            tasks = state.tasks.len(),
            "state changed"
        );
    });

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("{}", screens::render(&session)?);

    for line in stdin.lock().lines() {
        let line = line?;
        let words = match tokenize(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                print!("{e}");
                continue;
            }
        };
        match execute(&mut session, parsed.command) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("{e}"),
        }
        stdout.flush()?;
    }
    Ok(())
}

fn show(session: &mut Session, tab: Tab) -> Result<(), std::fmt::Error> {
    session.tab = tab;
    println!("{}", screens::render(session)?);
    Ok(())
}

fn execute(session: &mut Session, command: ShellCommand) -> Result<Flow, Box<dyn std::error::Error>> {
    match command {
        ShellCommand::Home => show(session, Tab::Home)?,
        ShellCommand::Wins => show(session, Tab::Wins)?,
        ShellCommand::Calendar => show(session, Tab::Calendar)?,
        ShellCommand::Rewards => show(session, Tab::Rewards)?,
        ShellCommand::Profile => show(session, Tab::Profile)?,
        ShellCommand::Add {
            name,
            boost,
            points,
            minutes,
            description,
            day,
        } => {
            let draft = TaskDraft {
                name,
                description: description.unwrap_or_default(),
                boost_level: boost,
                point_value: match points.as_deref() {
                    Some("suggested") => boost.suggested_points().to_string(),
                    Some(raw) => raw.to_string(),
                    None => session.config.defaults.point_value.to_string(),
                },
                time_estimate: minutes.unwrap_or_default(),
                target_day: day,
            };
            add_task(session, &draft)?;
        }
        ShellCommand::Boosts => {
            for level in BoostLevel::ALL {
                println!(
                    "{:<7} {:<20} {:>2} pts suggested",
                    level.as_str(),
                    level.label(),
                    level.suggested_points()
                );
            }
        }
        ShellCommand::Templates => {
            for (i, template) in QUICK_TEMPLATES.iter().enumerate() {
                println!("{:>2}. {} ({})", i + 1, template.name, template.icon);
            }
        }
        ShellCommand::Template { number, boost } => {
            let template = number
                .checked_sub(1)
                .and_then(|i| QUICK_TEMPLATES.get(i))
                .ok_or_else(|| format!("No template #{number} (1-{})", QUICK_TEMPLATES.len()))?;
            let draft = TaskDraft {
                boost_level: boost,
                ..TaskDraft::from_template(template)
            };
            add_task(session, &draft)?;
        }
        ShellCommand::Complete { id } => complete(session, id),
        ShellCommand::Delete { id } => {
            if session.store.dispatch(Action::DeleteTask(id.clone())) {
                println!("Deleted task #{id}");
            } else {
                println!("No task #{id}");
            }
        }
        ShellCommand::Redeem { id } => redeem(session, id),
        ShellCommand::RewardAdd {
            name,
            cost,
            reward_type,
            icon,
        } => {
            let reward = NewReward {
                name: name.trim().to_string(),
                point_cost: cost,
                reward_type,
                icon,
            };
            validation::new_reward(&reward)?;
            let label = reward.name.clone();
            session.store.dispatch(Action::AddReward(reward));
            println!("Added reward \"{label}\"");
        }
        ShellCommand::Energy { level } => {
            let level = validation::energy_level(level)?;
            session.store.dispatch(Action::UpdateEnergy(level));
            println!("Energy set to {level}/10");
        }
        ShellCommand::Set { key, value } => {
            let patch = SettingsPatch::single(&key, value)?;
            session.store.dispatch(Action::UpdateSettings(patch));
            println!("{key} = {value}");
        }
        ShellCommand::Banner { action } => {
            // Both buttons hide the banner.
            session.store.dispatch(Action::DismissMoodBanner);
            match action {
                BannerAction::Enable => println!("Mood integration enabled"),
                BannerAction::Dismiss => println!("Banner dismissed"),
            }
        }
        ShellCommand::Filter { filter } => {
            session.filter = filter;
            show(session, Tab::Wins)?;
        }
        ShellCommand::Month { target } => {
            let cursor = session.calendar.cursor;
            session.calendar.cursor = match target.as_str() {
                "prev" | "previous" => cursor.previous(),
                "next" => cursor.next(),
                other => parse_month(other).ok_or_else(|| format!("Expected prev, next or YYYY-MM, got '{other}'"))?,
            };
            show(session, Tab::Calendar)?;
        }
        ShellCommand::Select { day } => {
            let days = session.calendar.cursor.days_in_month();
            if !(1..=days).contains(&day) {
                return Err(format!("Day must be between 1 and {days}").into());
            }
            session.calendar.selected_day = day;
            show(session, Tab::Calendar)?;
        }
        ShellCommand::State => println!("{}", serde_json::to_string_pretty(session.store.state())?),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn add_task(session: &mut Session, draft: &TaskDraft) -> Result<(), Box<dyn std::error::Error>> {
    let now = session.store.now();
    let payload = draft.build(&mut session.sampler, session.config.defaults.point_value, now)?;
    let summary = format!(
        "Added \"{}\" ({}, {} pts, ~{}min, energy {})",
        payload.name,
        payload.boost_level.label(),
        payload.point_value,
        payload.time_estimate,
        payload.energy_required
    );
    session.store.dispatch(Action::AddTask(payload));
    session.tab = Tab::Home;
    println!("{summary}");
    Ok(())
}

fn complete(session: &mut Session, id: String) {
    let Some(task) = session.store.state().task(&id).cloned() else {
        println!("No task #{id}");
        return;
    };
    if !session.store.dispatch(Action::CompleteTask(id)) {
        println!("\"{}\" is already completed", task.name);
        return;
    }
    let state = session.store.state();
    if state.settings.minimal_celebrations {
        println!("Done: {} (+{})", task.name, task.point_value);
    } else {
        println!(
            "🎉 Win! \"{}\" complete. +{} points (total {})",
            task.name, task.point_value, state.user.points
        );
    }
}

fn redeem(session: &mut Session, id: String) {
    let points = session.store.state().user.points;
    let Some(reward) = session.store.state().reward(&id).cloned() else {
        println!("No reward #{id}");
        return;
    };
    if let Some(message) = reward.shortfall_message(points) {
        println!("Not enough points. {message}");
        return;
    }
    session.store.dispatch(Action::RedeemReward(id));
    println!("Enjoy! You've redeemed \"{}\". Enjoy your reward! 🎉", reward.name);
}

fn parse_month(raw: &str) -> Option<MonthCursor> {
    let (year, month) = raw.split_once('-')?;
    MonthCursor::new(year.parse().ok()?, month.parse().ok()?)
}

/// Split on whitespace, keeping single- or double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if quote.is_some() {
        return Err("unterminated quote".into());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
