use crate::context::load_session;
use crate::output::OutputWriter;
use crate::output_types::LocationsOutput;
use anyhow::Result;
use sentiers_core::config::LayeredConfig;

pub async fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let session = load_session(config, output).await?;
    let locations: Vec<String> = session.locations().iter().cloned().collect();

    if output.is_json() {
        output.result(LocationsOutput {
            count: locations.len(),
            locations,
        })?;
        return Ok(());
    }

    output.section(format!("Locations ({})", locations.len()));
    if locations.is_empty() {
        output.empty("No location available.");
    }
    for location in &locations {
        output.text(format!("  {}", location));
    }

    Ok(())
}
