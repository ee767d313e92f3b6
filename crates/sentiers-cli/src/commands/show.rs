use crate::cli::ShowArgs;
use crate::context::load_session;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::ShowOutput;
use crate::views::{print_details, type_badge};
use anyhow::Result;
use sentiers_core::config::LayeredConfig;

pub async fn execute(args: ShowArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut session = load_session(config, output).await?;
    let record = session.select(&args.code).map_err(errors::from_sentiers)?;

    if output.is_json() {
        output.result(ShowOutput {
            trail: record.clone(),
            difficulty_level: record.difficulty_level(),
            badge: type_badge(&record.trail_type),
        })?;
    } else {
        print_details(output, record);
    }

    Ok(())
}
