//! Download directory configuration.

use crate::config::{Settings, SettingsStore, expand_home};

/// Change the configured download directory.
///
/// With a path argument the change is applied directly; without one the
/// current value is shown and a new one prompted for. Empty input leaves
/// the setting unchanged, and anything that is not an existing directory
/// is rejected.
pub fn cmd_set_dir(path: Option<&str>, store: &SettingsStore) -> anyhow::Result<()> {
    let input = match path {
        Some(p) => p.to_string(),
        None => {
            let settings = store.load();
            println!(
                "Current download directory: {}",
                settings.download_directory.display()
            );
            super::prompt("Enter the new download directory (use '~' for home directory): ")?
        }
    };

    if input.is_empty() {
        println!("No changes made.");
        return Ok(());
    }

    let dir = expand_home(&input);
    if !dir.is_dir() {
        println!("Invalid directory: {}. Please try again.", dir.display());
        return Ok(());
    }

    store.save(&Settings {
        download_directory: dir.clone(),
    })?;
    println!("Download directory updated to: {}", dir.display());
    Ok(())
}
