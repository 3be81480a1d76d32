use anyhow::{bail, Result};

use super::Config;
use crate::error::LaunchError;
use crate::ide::{IdeDescriptor, XCODE_ID};
use crate::platform::Platform;

impl Config {
    /// Look up an IDE by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&IdeDescriptor> {
        self.ides.iter().find(|ide| ide.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut IdeDescriptor> {
        match self.ides.iter_mut().find(|ide| ide.id == id) {
            Some(ide) => Ok(ide),
            None => bail!(LaunchError::UnknownIde(id.to_string())),
        }
    }

    /// The IDE that `open` launches.
    ///
    /// # Errors
    ///
    /// [`LaunchError::UnknownIde`] when the selection names no entry.
    pub fn selected(&self) -> Result<&IdeDescriptor, LaunchError> {
        self.find(&self.selected_ide)
            .ok_or_else(|| LaunchError::UnknownIde(self.selected_ide.clone()))
    }

    /// Entries offered for selection.
    pub fn visible_ides(&self) -> impl Iterator<Item = &IdeDescriptor> {
        self.ides.iter().filter(|ide| !ide.hidden)
    }

    /// Repair a selection that points at no entry. Returns true if changed.
    pub fn ensure_selection(&mut self) -> bool {
        if self.find(&self.selected_ide).is_some() {
            return false;
        }
        let first = self
            .visible_ides()
            .next()
            .or_else(|| self.ides.first())
            .map(|ide| ide.id.clone());
        let Some(first) = first else {
            return false;
        };
        tracing::info!(from = %self.selected_ide, to = %first, "selected IDE no longer exists");
        self.selected_ide = first;
        true
    }

    /// Add an Xcode entry on macOS if there is none. Returns true if changed.
    pub fn ensure_xcode(&mut self, platform: Platform) -> bool {
        if platform != Platform::MacOs || self.find(XCODE_ID).is_some() {
            return false;
        }
        self.ides.push(IdeDescriptor::builtin(XCODE_ID));
        true
    }

    /// Make `id` the selected IDE.
    ///
    /// # Errors
    ///
    /// Fails when `id` names no entry.
    pub fn select_ide(&mut self, id: &str) -> Result<()> {
        if self.find(id).is_none() {
            bail!(LaunchError::UnknownIde(id.to_string()));
        }
        self.selected_ide = id.to_string();
        Ok(())
    }

    /// Append a new IDE. Ids are unique.
    ///
    /// # Errors
    ///
    /// Fails for an empty id, a duplicate id, or a custom entry without a
    /// path for `platform`.
    pub fn add_ide(&mut self, ide: IdeDescriptor, platform: Platform) -> Result<()> {
        if ide.id.trim().is_empty() {
            bail!("Please provide an IDE name");
        }
        if ide.is_custom && ide.override_for(platform).is_none() {
            bail!("Please provide a command path for {}", ide.id);
        }
        if self.find(&ide.id).is_some() {
            bail!("IDE {} already exists", ide.id);
        }
        self.ides.push(ide);
        Ok(())
    }

    /// Set or clear one platform's path for `id`.
    ///
    /// # Errors
    ///
    /// Fails when `id` names no entry or a custom entry would lose its path.
    pub fn set_path(&mut self, id: &str, platform: Platform, path: Option<String>) -> Result<()> {
        let ide = self.find_mut(id)?;
        if ide.is_custom && path.as_deref().is_none_or(|p| p.trim().is_empty()) {
            bail!("Custom IDE {id} needs a command path");
        }
        ide.paths.set(platform, path);
        Ok(())
    }

    /// Hide or show `id`. Hiding the selected IDE moves the selection to the
    /// first visible entry.
    ///
    /// # Errors
    ///
    /// Fails when `id` names no entry.
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<()> {
        self.find_mut(id)?.hidden = hidden;
        if hidden && self.selected_ide == id {
            let first = self.visible_ides().next().map(|ide| ide.id.clone());
            if let Some(first) = first {
                self.selected_ide = first;
            }
        }
        Ok(())
    }

    /// Remove a custom IDE. The selected IDE cannot be removed.
    ///
    /// # Errors
    ///
    /// Fails for an unknown, built-in or currently selected IDE.
    pub fn remove_ide(&mut self, id: &str) -> Result<()> {
        let Some(ide) = self.find(id) else {
            bail!(LaunchError::UnknownIde(id.to_string()));
        };
        if !ide.is_custom {
            bail!("{id} is a built-in IDE; hide it instead");
        }
        if self.selected_ide == id {
            bail!("Cannot remove currently selected IDE. Please select another IDE first");
        }
        self.ides.retain(|ide| ide.id != id);
        Ok(())
    }
}
