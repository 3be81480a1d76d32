use anyhow::Result;
use editor_jumper::{App, Config, Platform};

use super::prompt::{pick, TerminalHost};

fn app(config: Config) -> App {
    App::system(config, Box::new(TerminalHost::new(Platform::current())))
}

/// Print every IDE with the command it resolves to on this machine.
pub fn cmd_list() -> Result<()> {
    let app = app(super::load_config()?);
    let config = app.config();
    for ide in &config.ides {
        let marker = if ide.id == config.selected_ide { "*" } else { " " };
        let mut flags = Vec::new();
        if ide.is_custom {
            flags.push("custom");
        }
        if ide.hidden {
            flags.push("hidden");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" ({})", flags.join(", "))
        };
        let command = match app.resolve(&ide.id) {
            Ok(resolved) => resolved.executable_path,
            Err(e) => format!("<{e}>"),
        };
        println!("{marker} {:<16} {command}{flags}", ide.label());
    }
    Ok(())
}

/// Select `id`, or ask for one of the visible IDEs.
pub fn cmd_select(id: Option<String>) -> Result<()> {
    let mut config = super::load_config()?;
    let id = match id {
        Some(id) => id,
        None => {
            let visible: Vec<&str> = config.visible_ides().map(|ide| ide.id.as_str()).collect();
            let current = visible.iter().position(|&id| id == config.selected_ide);
            match pick("Select the IDE to open files in:", &visible, current)? {
                Some(id) => id.to_string(),
                None => return Ok(()),
            }
        }
    };
    config.select_ide(&id)?;
    config.save()?;
    eprintln!("Selected {id}");
    Ok(())
}

/// Print the command `id` (or the selected IDE) resolves to.
pub fn cmd_resolve(id: Option<String>) -> Result<()> {
    let app = app(super::load_config()?);
    let id = id.unwrap_or_else(|| app.config().selected_ide.clone());
    let resolved = app.resolve(&id)?;
    println!("{}", resolved.executable_path);
    tracing::debug!(
        kind = ?resolved.kind,
        absolute = resolved.is_absolute_path,
        platform = %app.platform(),
        "resolved"
    );
    Ok(())
}
