use crate::cli::{ThemeAction, ThemeArgs};
use crate::errors;
use crate::output::OutputWriter;
use crate::output_types::ThemeOutput;
use anyhow::Result;
use sentiers_core::config::LayeredConfig;
use sentiers_core::preferences::PreferenceStore;
use sentiers_core::Theme;

pub fn execute(args: ThemeArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = PreferenceStore::new(&config.preferences.value);

    let (theme, changed) = match args.action {
        ThemeAction::Show => (store.load().map_err(errors::from_sentiers)?, false),
        ThemeAction::Dark => (store_theme(&store, Theme::Dark)?, true),
        ThemeAction::Light => (store_theme(&store, Theme::Light)?, true),
        ThemeAction::Toggle => (store.toggle().map_err(errors::from_sentiers)?, true),
    };

    if output.is_json() {
        output.result(ThemeOutput {
            theme,
            path: store.path().to_path_buf(),
            changed,
        })?;
    } else if changed {
        output.success(format!("Theme set to {}", theme));
    } else {
        output.info(format!("Theme: {}", theme));
    }

    Ok(())
}

fn store_theme(store: &PreferenceStore, theme: Theme) -> Result<Theme> {
    store.save(theme).map_err(errors::from_sentiers)?;
    Ok(theme)
}
