//! Writes rendered reports into the reports directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct ReportRenderer {
    reports_dir: PathBuf,
}

impl ReportRenderer {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Write `# {title}` followed by `content` to `<reports_dir>/<filename>.md`.
    pub fn render_markdown(&self, title: &str, content: &str, filename: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.reports_dir)?;
        let path = self.reports_dir.join(format!("{}.md", filename));
        fs::write(&path, format!("# {}\n\n{}", title, content))?;
        info!(path = %path.display(), "Markdown report rendered");
        Ok(path)
    }
}
