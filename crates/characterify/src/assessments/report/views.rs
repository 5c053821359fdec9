use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub items: Vec<String>,
}

impl ReportSection {
    pub(crate) fn new<I, S>(title: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.to_string(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

/// Narrative report for one result. `summary_md` is limited to bold and italic spans,
/// `- ` bullets, and blank-line paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub subtitle: String,
    pub summary_md: String,
    pub sections: Vec<ReportSection>,
}

impl ReportContent {
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.title == title)
    }

    /// Full report as one markdown document for terminals and exports.
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n", self.title);
        if !self.subtitle.is_empty() {
            out.push_str(&format!("*{}*\n", self.subtitle));
        }
        out.push('\n');
        out.push_str(&self.summary_md);
        out.push('\n');

        for section in &self.sections {
            out.push_str(&format!("\n## {}\n", section.title));
            for item in &section.items {
                out.push_str(&format!("- {item}\n"));
            }
        }

        out
    }
}
