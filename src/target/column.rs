use serde::{Deserialize, Serialize};

/// Width of a tab under [`ColumnConvention::TabExpanded`] unless configured.
pub const DEFAULT_TAB_WIDTH: u32 = 4;

/// How an editor cursor offset becomes the column passed to the IDE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnConvention {
    /// One column per character, tabs included.
    #[default]
    CharOffset,
    /// Tabs count as a fixed number of columns.
    TabExpanded,
}

impl ColumnConvention {
    /// 1-based column for a 0-based character offset into `line_text`.
    ///
    /// Offsets past the end of the line are clamped to one column beyond the
    /// last character.
    #[must_use]
    pub fn column(self, line_text: &str, char_offset: usize, tab_width: u32) -> u32 {
        let prefix = line_text.chars().take(char_offset);
        let width: u32 = match self {
            Self::CharOffset => u32::try_from(prefix.count()).unwrap_or(u32::MAX),
            Self::TabExpanded => prefix
                .map(|c| if c == '\t' { tab_width.max(1) } else { 1 })
                .fold(0u32, u32::saturating_add),
        };
        width.saturating_add(1)
    }

    /// Key used in the config file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CharOffset => "char-offset",
            Self::TabExpanded => "tab-expanded",
        }
    }

    /// Parse a config key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "char-offset" => Some(Self::CharOffset),
            "tab-expanded" => Some(Self::TabExpanded),
            _ => None,
        }
    }
}
