//! Domain types shared by every front end

use serde::{Deserialize, Serialize};

/// A top-level navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub path: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// One titled chapter of the documentation page.
///
/// `id` doubles as the in-page anchor, so it must be unique within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// In-page anchor for this section, e.g. `#stage-a1`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Emphasis for a decision row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Warning,
}

/// Primary/secondary pair in a dense list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// A step card: what to do, why, the command, what to expect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    /// Display label such as `A2.4`.
    pub label: String,
    pub title: String,
    #[serde(default)]
    pub what: Option<String>,
    #[serde(default)]
    pub why: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub expect: Option<String>,
    /// Author's personal note, shown after the expected output.
    #[serde(default)]
    pub note: Option<String>,
}

/// Renderable content inside a section, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Pills {
        labels: Vec<String>,
    },
    Items {
        items: Vec<ListItem>,
    },
    Step(Step),
    Choice {
        title: String,
        choice: String,
        #[serde(default)]
        tone: Tone,
        note: String,
    },
    Code {
        #[serde(default)]
        caption: Option<String>,
        text: String,
    },
    Summary {
        text: String,
    },
}
