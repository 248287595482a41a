//! Command-line front end over `noteboard_core`.
//!
//! # Responsibility
//! - Seed a demo workspace and render calendar, day and board views.
//! - Exercise the command surface (scheduling, drag-and-drop moves) from a
//!   terminal, as text or JSON.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Days, Month};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use noteboard_core::{
    core_version, default_log_level, derive_page_preview, init_logging, Command, DayIndex, DayKey, ItemKind,
    MonthCursor, PendingDrag, RangeMode, ScheduleDraft, ScheduledItem, Store, WEEKDAY_LABELS,
};

#[derive(Parser)]
#[command(
    name = "noteboard",
    about = "Calendar and kanban views over a demo workspace",
    version
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "NOTEBOARD_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "NOTEBOARD_LOG_DIR")]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid with the number of items on each day
    Calendar {
        /// Year to display (default: current)
        #[arg(long)]
        year: Option<i32>,
        /// Month 1-12 to display (default: current)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: Option<u8>,
    },

    /// List the items scheduled on one day (YYYY-MM-DD)
    Day { day: DayKey },

    /// Show the kanban board of the selected workspace
    Board,

    /// Schedule a page or task, then print the days it occupies
    Schedule {
        #[arg(long, value_enum, default_value_t = KindArg::Page)]
        kind: KindArg,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: DayKey,
        /// Last day, inclusive (defaults to start)
        #[arg(long)]
        end: Option<DayKey>,
    },

    /// Drag the demo task onto the column with the given title
    Move {
        #[arg(long)]
        column: String,
    },

    /// Print the core version
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Page,
    Task,
}

impl From<KindArg> for ItemKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Page => ItemKind::Page,
            KindArg::Task => ItemKind::Task,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(log_level(cli.log_level.as_deref()), log_dir)
            .map_err(|err| anyhow!(err))?;
    }

    let mut store = demo_store(DayKey::today());
    info!("event=cli_start module=cli status=ok");

    match cli.command {
        Commands::Calendar { year, month } => {
            let cursor = resolve_cursor(year, month)?;
            print_calendar(&store, cursor, cli.json)
        }
        Commands::Day { day } => print_day(&store.day_index(), day, cli.json),
        Commands::Board => print_board(&store, cli.json),
        Commands::Schedule {
            kind,
            title,
            description,
            start,
            end,
        } => {
            let mut draft = ScheduleDraft::new(start);
            draft.kind = kind.into();
            draft.title = title;
            draft.description = description;
            if let Some(end) = end {
                draft.set_range_mode(RangeMode::Range);
                draft.set_end(end);
            }
            let command = draft
                .submit(store.state().selected_workspace_id())
                .context("title or description is required")?;
            store.dispatch(command);
            print_schedule_result(&store, kind.into(), cli.json)
        }
        Commands::Move { column } => {
            let target = store
                .state()
                .columns()
                .iter()
                .find(|candidate| candidate.title.eq_ignore_ascii_case(column.trim()))
                .map(|candidate| candidate.id)
                .with_context(|| format!("no column titled `{column}`"))?;
            let task_id = store
                .state()
                .tasks()
                .first()
                .map(|task| task.id)
                .context("demo board has no task")?;

            let mut drag = PendingDrag::default();
            drag.start(task_id);
            drag.hover(target);
            store.dispatch_all(drag.drop_on(target));
            print_board(&store, cli.json)
        }
        Commands::Version => {
            println!("noteboard_core version={}", core_version());
            Ok(())
        }
    }
}

/// Requested level, else the build-mode default.
fn log_level(requested: Option<&str>) -> &str {
    requested.unwrap_or_else(|| default_log_level())
}

/// Seeded store plus two scheduled items around `today`.
fn demo_store(today: DayKey) -> Store {
    let mut store = Store::seeded();
    let plus = |days: u64| {
        today
            .date()
            .checked_add_days(Days::new(days))
            .map(DayKey::new)
            .unwrap_or(today)
    };

    store.dispatch_all([
        Command::CreatePageWithSchedule {
            title: "Sprint planning".to_string(),
            content: "Goals for the next two weeks".to_string(),
            workspace_id: None,
            start: today,
            end: Some(plus(2)),
        },
        Command::CreateTaskWithSchedule {
            title: "Ship release".to_string(),
            description: String::new(),
            workspace_id: None,
            start: plus(1),
            end: None,
        },
    ]);
    store
}

fn resolve_cursor(year: Option<i32>, month: Option<u8>) -> Result<MonthCursor> {
    let current = MonthCursor::current();
    let month = match month {
        Some(number) => Month::try_from(number).map_err(|_| anyhow!("invalid month {number}"))?,
        None => current.month,
    };
    Ok(MonthCursor::new(year.unwrap_or(current.year), month))
}

fn print_calendar(store: &Store, cursor: MonthCursor, json: bool) -> Result<()> {
    let index = store.day_index();
    let grid = cursor.grid();
    if grid.is_empty() {
        bail!("year {} is out of range", cursor.year);
    }

    if json {
        let cells: Vec<_> = grid
            .iter()
            .map(|cell| {
                serde_json::json!({
                    "day": cell,
                    "count": index.items_on(cell.key).len(),
                })
            })
            .collect();
        let out = serde_json::json!({ "month": cursor.label(), "days": cells });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", cursor.label());
    println!(
        "{}",
        WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{label:>6}"))
            .collect::<String>()
    );
    for week in grid.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| {
                if !cell.is_current_month {
                    return format!("{:>6}", ".");
                }
                let count = index.items_on(cell.key).len();
                let text = if count == 0 {
                    cell.date.day().to_string()
                } else {
                    format!("{}+{}", cell.date.day(), count)
                };
                format!("{text:>6}")
            })
            .collect();
        println!("{row}");
    }
    Ok(())
}

fn print_day(index: &DayIndex<'_>, day: DayKey, json: bool) -> Result<()> {
    let items = index.items_on(day);
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    println!("{day}");
    if items.is_empty() {
        println!("  (nothing scheduled)");
    }
    for item in items {
        println!("  {}", describe(item));
        if let ScheduledItem::Page(page) = item {
            for line in derive_page_preview(&page.content).card_text().lines() {
                println!("      {line}");
            }
        }
    }
    Ok(())
}

fn print_board(store: &Store, json: bool) -> Result<()> {
    let board = store.board();
    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    for group in board.groups() {
        println!("{} ({})", group.column.title, group.tasks.len());
        for task in &group.tasks {
            println!("  - {}", task.title);
        }
    }
    Ok(())
}

fn print_schedule_result(store: &Store, kind: ItemKind, json: bool) -> Result<()> {
    let state = store.state();
    let schedule = match kind {
        ItemKind::Page => state.pages().first().map(|page| page.schedule),
        ItemKind::Task => state.tasks().last().map(|task| task.schedule),
    }
    .context("scheduled item was not created")?;

    let days: Vec<DayKey> = schedule.days().collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }
    if days.is_empty() {
        println!("end is before start; the item occupies no calendar day");
    }
    for day in days {
        println!("{day}");
    }
    Ok(())
}

fn describe(item: &ScheduledItem<'_>) -> String {
    let kind = match item.kind() {
        ItemKind::Page => "page",
        ItemKind::Task => "task",
    };
    match item.schedule().bounds() {
        Some((start, end)) if start != end => {
            format!("[{kind}] {} ({start} .. {end})", item.title())
        }
        _ => format!("[{kind}] {}", item.title()),
    }
}
