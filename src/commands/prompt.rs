use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use editor_jumper::{Config, Host, Platform, PromptChoice};

/// Terminal stand-in for the editor UI: messages go to stderr, answers come
/// from stdin.
pub struct TerminalHost {
    platform: Platform,
}

impl TerminalHost {
    pub const fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Host for TerminalHost {
    fn show_error(&self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn show_info(&self, message: &str) {
        eprintln!("{message}");
    }

    fn prompt_configure(&self, message: &str) -> PromptChoice {
        eprint!("{message} [y/N]: ");
        match read_answer() {
            Ok(answer) if matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") => {
                PromptChoice::Configure
            }
            Ok(_) => PromptChoice::Cancel,
            Err(e) => {
                tracing::warn!(error = %e, "could not read answer");
                PromptChoice::Cancel
            }
        }
    }

    fn open_configuration(&self, highlight_ide: &str) -> Result<()> {
        let mut config = Config::load()?;
        let label = config
            .find(highlight_ide)
            .map_or(highlight_ide, |ide| ide.label())
            .to_string();

        eprintln!("\nConfigure {label} on {}", self.platform);
        eprint!("Enter path (e.g. {}): ", example_path(self.platform));
        let path = read_answer()?;
        if path.is_empty() {
            eprintln!("No path entered, nothing changed.");
            return Ok(());
        }

        config.set_path(highlight_ide, self.platform, Some(path))?;
        config.save()?;
        eprintln!("Saved path for {label} to {}", Config::path()?.display());
        Ok(())
    }
}

/// Ask the user to pick one of `items` by number. `None` means skip.
pub fn pick<'a>(title: &str, items: &[&'a str], current: Option<usize>) -> Result<Option<&'a str>> {
    eprintln!("\n{title}");
    for (i, item) in items.iter().enumerate() {
        let marker = if Some(i) == current { "*" } else { " " };
        eprintln!(" {marker}{}. {item}", i + 1);
    }
    eprintln!("  0. Cancel");
    let default = current.map_or(0, |i| i + 1);
    eprint!("Choice [{default}]: ");

    let answer = read_answer()?;
    let choice: usize = if answer.is_empty() {
        default
    } else {
        answer.parse().unwrap_or(usize::MAX)
    };

    if choice == 0 {
        return Ok(None);
    }
    if let Some(&item) = items.get(choice - 1) {
        return Ok(Some(item));
    }
    eprintln!("Invalid choice, nothing changed.");
    Ok(None)
}

fn read_answer() -> Result<String> {
    std::io::stderr().flush().ok();
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

const fn example_path(platform: Platform) -> &'static str {
    match platform {
        Platform::MacOs => "/Applications/IntelliJ IDEA.app",
        Platform::Windows => r"C:\Program Files\JetBrains\IntelliJ IDEA\bin\idea64.exe",
        Platform::Linux => "/opt/idea/bin/idea.sh",
    }
}
