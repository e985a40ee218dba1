use std::env;
use std::fs;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tyovuoro::error::{other_error, schedule_error, Error};
use tyovuoro::{Config, ScheduleCollection, ScheduleEditor};

/// Initialize logging with environment-based configuration
fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

fn main() -> miette::Result<()> {
    init_logging()?;

    let path = env::args()
        .nth(1)
        .ok_or_else(|| other_error("Usage: shift_check <schedule.json>"))?;

    // Load configuration
    let config = Config::load()?;

    // The file carries the backend wire shape: a bare array of schedule groups
    let content = fs::read_to_string(&path).map_err(Error::from)?;
    let collection: ScheduleCollection = serde_json::from_str(&content).map_err(Error::from)?;
    info!("Loaded {} schedule group(s) from {}", collection.len(), path);

    let mut weekly_minutes: u32 = 0;
    for (index, group) in collection.groups.iter().enumerate() {
        let days: Vec<&str> = group.days_of_week.iter().map(|day| day.as_str()).collect();
        if days.is_empty() {
            warn!("Group {} has no days selected", index);
        }
        for shift in &group.shifts {
            info!("Group {} [{}]: {}", index, days.join(", "), shift.format());
            weekly_minutes += shift.duration_minutes().unwrap_or(0) * days.len() as u32;
        }
    }
    info!(
        "Scheduled {}h {:02}min per week",
        weekly_minutes / 60,
        weekly_minutes % 60
    );

    // The editor applies the same checks the editing surface would,
    // including the day-less group short-circuit
    let editor = ScheduleEditor::with_config(collection, &config);
    if editor.can_save() {
        info!("Schedule is valid");
        return Ok(());
    }

    for validation_error in editor.errors() {
        error!("{}", validation_error);
    }
    Err(schedule_error(&format!("{} validation error(s) found", editor.errors().len())).into())
}
