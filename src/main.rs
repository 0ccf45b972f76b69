use anyhow::Context;
use log::info;
use std::sync::Arc;
use vaccination_person::utils::logging::log_operation_complete;
use vaccination_person::{AgeInterval, ModelCollection, PersonCollection, PersonConfig};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PersonConfig::from_env().context("Failed to read configuration")?;
    info!("Deriving ages against {}", config.resolve_year());

    let mut persons = PersonCollection::with_config(config);
    persons.register("Ann", "Lee", "ABC123", 1990)?;
    persons.register("John", "Doe", "999-99-9999", 2000)?;
    persons.register("Maria", "Rossi", "MRS456", 1950)?;
    log_operation_complete("registered", persons.count());

    let senior = Arc::new(AgeInterval::open_ended(70));
    persons
        .assign_interval("MRS456", Some(Arc::clone(&senior)))
        .context("Failed to assign age interval")?;
    persons.mark_allocated("MRS456")?;

    for line in persons.render_lines() {
        info!("{line}");
    }
    info!(
        "{} allocated, {} waiting",
        persons.allocated().len(),
        persons.unallocated().len()
    );

    if let Some(person) = persons.get("MRS456") {
        info!("{} as JSON: {}", person.full_name(), person.to_json()?);
    }

    Ok(())
}
