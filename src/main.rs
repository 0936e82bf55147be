use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use itinerary::{
    bin_events, date_axis, filter_events, summarize, update_event, CalendarView, EventFilter,
    EventGenerator, ItineraryState, MemoryStore, SeasonalForecast, UpdateEventCommand,
    UpdateOptions,
};
use parkplan::render::{render_summary, render_view};
use parkplan::{AppError, Config};
use trip::Vacation;

/// parkplan - theme-park vacation itinerary planning
#[derive(Parser)]
#[command(name = "parkplan")]
#[command(about = "Plan and inspect a theme-park vacation itinerary", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Path to the vacation JSON file (overrides config)
    #[arg(long, global = true)]
    vacation: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a calendar view of the vacation
    Show {
        /// View mode: month, week, schedule, or timeline
        #[arg(long)]
        view: Option<String>,

        /// Reference date (YYYY-MM-DD); defaults to the vacation start
        #[arg(long)]
        date: Option<String>,

        /// Free-text filter over titles, notes, locations, and tags
        #[arg(long)]
        query: Option<String>,
    },
    /// Print the analytics summary
    Summary,
    /// Add a new event and persist it back to the vacation file
    Add {
        #[arg(long)]
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Event type (park, dining, travel, ...)
        #[arg(long, default_value = "note")]
        event_type: String,

        /// Start time (HH:MM)
        #[arg(long)]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long)]
        end: Option<String>,

        /// Skip the advisory conflict check
        #[arg(long)]
        skip_conflict_check: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.clone())?;
    parkplan::observability::init_observability(&config.observability.log_level)?;

    let vacation_file = cli
        .vacation
        .clone()
        .unwrap_or_else(|| config.data.vacation_file.clone());

    match cli.command {
        Commands::Show { view, date, query } => {
            let view_name = view.unwrap_or_else(|| config.calendar.default_view.clone());
            show(&vacation_file, &view_name, date, query).await?;
        }
        Commands::Summary => summary(&vacation_file).await?,
        Commands::Add {
            title,
            date,
            event_type,
            start,
            end,
            skip_conflict_check,
        } => {
            add(
                &vacation_file,
                title,
                date,
                event_type,
                start,
                end,
                skip_conflict_check,
            )
            .await?;
        }
    }
    Ok(())
}

async fn load_state(
    path: &str,
    store: &MemoryStore,
    generator: &EventGenerator<'_>,
) -> Result<ItineraryState, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let vacation: Vacation = serde_json::from_str(&raw)?;
    let vacation_id = vacation.id.clone();
    store.insert_vacation(vacation).await;
    Ok(ItineraryState::load(store, generator, &vacation_id).await?)
}

async fn show(
    path: &str,
    view_name: &str,
    date: Option<String>,
    query: Option<String>,
) -> Result<(), AppError> {
    let weather = SeasonalForecast;
    let generator = EventGenerator::new(&weather);
    let store = MemoryStore::new();
    let state = load_state(path, &store, &generator).await?;

    let view: CalendarView = view_name
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("unknown view '{}'", view_name)))?;
    let reference = match date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidInput(format!("invalid date '{}'", raw)))?,
        None => state
            .vacation
            .as_ref()
            .map(|vacation| vacation.start_date)
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
    };

    let filter = EventFilter {
        query,
        ..Default::default()
    };
    let visible = filter_events(&state.events, &filter);
    let axis = date_axis(view, reference, state.vacation.as_ref());
    let buckets = bin_events(&axis, &visible);
    print!("{}", render_view(view, &axis, &buckets));
    Ok(())
}

async fn summary(path: &str) -> Result<(), AppError> {
    let weather = SeasonalForecast;
    let generator = EventGenerator::new(&weather);
    let store = MemoryStore::new();
    let state = load_state(path, &store, &generator).await?;

    let today = chrono::Local::now().date_naive();
    let summary = summarize(&state.events, today);
    print!("{}", render_summary(&summary));
    Ok(())
}

async fn add(
    path: &str,
    title: String,
    date: String,
    event_type: String,
    start: Option<String>,
    end: Option<String>,
    skip_conflict_check: bool,
) -> Result<(), AppError> {
    let weather = SeasonalForecast;
    let generator = EventGenerator::new(&weather);
    let store = MemoryStore::new();
    let mut state = load_state(path, &store, &generator).await?;

    let Some(vacation_id) = state.vacation.as_ref().map(|vacation| vacation.id.clone()) else {
        return Err(AppError::InvalidInput(
            "vacation file has no vacation record".to_string(),
        ));
    };

    let cmd = UpdateEventCommand {
        vacation_id: vacation_id.clone(),
        event_id: uuid::Uuid::new_v4().to_string(),
        title,
        date,
        start_time: start,
        end_time: end,
        event_type,
        priority: None,
        status: None,
        notes: None,
        location: None,
        tags: Vec::new(),
        participants: Vec::new(),
        park_id: None,
        attraction_id: None,
        budget_estimated: None,
        budget_actual: None,
        budget_currency: None,
        budget_category: None,
        reservation_name: None,
        reservation_time: None,
        reservation_party_size: None,
        reservation_confirmation: None,
        reservation_cost: None,
    };
    let options = UpdateOptions {
        skip_conflict_check,
        ..Default::default()
    };

    let outcome = update_event(&mut state, &store, &generator, &cmd, options).await?;
    for warning in &outcome.warnings {
        println!("warning: {}", warning.message);
    }
    println!("added '{}' ({})", outcome.event.title, outcome.event.id);

    // Write the store's copy back to the vacation file.
    use itinerary::VacationStore as _;
    let vacation = store
        .get_vacation(&vacation_id)
        .await
        .map_err(itinerary::ItineraryError::from)?;
    std::fs::write(path, serde_json::to_string_pretty(&vacation)?)?;
    Ok(())
}
