use crate::cli::ExportArgs;
use crate::context::load_session;
use crate::errors;
use crate::html::render_page;
use crate::output::OutputWriter;
use crate::output_types::ExportOutput;
use anyhow::{Context, Result};
use sentiers_core::config::LayeredConfig;
use sentiers_core::preferences::PreferenceStore;
use std::fs;

pub async fn execute(args: ExportArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let criteria = args.filters.to_criteria().map_err(|e| errors::invalid_filter(&e))?;
    let theme = PreferenceStore::new(&config.preferences.value)
        .load()
        .map_err(errors::from_sentiers)?;

    let mut session = load_session(config, output).await?;
    session.apply(criteria);

    if let Some(ref code) = args.select {
        session.select(code).map_err(errors::from_sentiers)?;
    }

    let page = render_page(&session, theme);
    fs::write(&args.output, page)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    tracing::info!(path = %args.output.display(), trails = session.result_count(), "Exported page");

    if output.is_json() {
        output.result(ExportOutput {
            path: args.output.clone(),
            count: session.result_count(),
            theme,
            selected: session.selected().map(|r| r.code.clone()),
        })?;
    } else {
        output.success(format!(
            "Wrote {} trails to {}",
            session.result_count(),
            args.output.display()
        ));
    }

    Ok(())
}
