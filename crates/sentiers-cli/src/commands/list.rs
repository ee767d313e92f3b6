use crate::cli::ListArgs;
use crate::context::load_session;
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::ListOutput;
use crate::views::{print_details, print_results};
use anyhow::Result;
use sentiers_core::config::LayeredConfig;
use sentiers_filter::{Facet, FilterReport};

pub async fn execute(
    args: ListArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
    explain: bool,
) -> Result<()> {
    let criteria = args.filters.to_criteria().map_err(|e| errors::invalid_filter(&e))?;

    let mut session = load_session(config, output).await?;
    session.apply(criteria);

    if let Some(ref code) = args.select {
        session.select(code).map_err(errors::from_sentiers)?;
    }

    let view = config.view.value;

    if output.is_json() {
        let catalog = session.catalog();
        output.result(ListOutput {
            source: catalog.source.clone(),
            loaded_at: catalog.loaded_at,
            count: session.result_count(),
            state: session.state(),
            view,
            criteria: session.criteria().clone(),
            selected: session.selected().map(|r| r.code.clone()),
            trails: session.results().into_iter().cloned().collect(),
            explanation: explain.then(|| session.report().clone()),
        })?;
        return Ok(());
    }

    print_results(output, &session, view);

    if let Some(record) = session.selected() {
        print_details(output, record);
    }

    if explain {
        print_explanation(output, session.report());
    }

    Ok(())
}

/// Human rendering of a filter report
pub fn print_explanation(output: &OutputWriter, report: &FilterReport) {
    output.section("Filter Explanation");
    output.kv("Trails evaluated", report.records_evaluated);
    output.kv("Trails matched", report.records_matched);

    if report.active_facets.is_empty() {
        output.kv("Active filters", "None");
        return;
    }

    for facet in Facet::ALL {
        if report.active_facets.contains(&facet) {
            output.kv(
                format!("Rejected by {}", facet),
                report.rejections.get(facet),
            );
        }
    }
}
