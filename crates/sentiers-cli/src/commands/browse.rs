use crate::context::load_session;
use crate::errors;
use crate::interactive::{prompt_action, prompt_criteria, prompt_trail, BrowseAction};
use crate::output::OutputWriter;
use crate::views::{print_details, print_results};
use anyhow::{bail, Result};
use sentiers_core::config::LayeredConfig;
use sentiers_core::preferences::PreferenceStore;
use sentiers_core::ViewMode;

use super::list::print_explanation;

/// Interactive loop over a single session; the dataset is fetched once
pub async fn execute(config: &LayeredConfig, output: &OutputWriter, explain: bool) -> Result<()> {
    if output.is_json() {
        bail!(errors::CliError::new("browse is interactive and has no JSON output")
            .with_suggestion("Use 'sentiers list --json' instead"));
    }

    let mut session = load_session(config, output).await?;
    let store = PreferenceStore::new(&config.preferences.value);
    let mut view = config.view.value;

    loop {
        print_results(output, &session, view);
        if let Some(record) = session.selected() {
            print_details(output, record);
        }
        if explain {
            print_explanation(output, session.report());
        }

        match prompt_action()? {
            BrowseAction::EditFilters => {
                let criteria = prompt_criteria(&session)?;
                session.apply(criteria);
            }
            BrowseAction::ResetFilters => {
                session.reset();
            }
            BrowseAction::SelectTrail => {
                if let Some(code) = prompt_trail(&session)? {
                    session.select(&code).map_err(errors::from_sentiers)?;
                } else {
                    output.empty("Nothing to select.");
                }
            }
            BrowseAction::CloseDetails => session.clear_selection(),
            BrowseAction::SwitchView => {
                view = match view {
                    ViewMode::Table => ViewMode::Cards,
                    ViewMode::Cards => ViewMode::Table,
                };
            }
            BrowseAction::ToggleTheme => match store.toggle() {
                Ok(theme) => output.success(format!("Theme set to {}", theme)),
                Err(error) => output.warning(format!("Could not save theme: {}", error)),
            },
            BrowseAction::Quit => break,
        }
    }

    Ok(())
}
