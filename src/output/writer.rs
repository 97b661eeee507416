use std::fs;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::model::config::GeneratorConfig;
use crate::model::content::DailyContent;
use crate::model::topic::Topic;

pub const MCQ_FILE: &str = "01-mcq.md";
pub const LEARN_FILE: &str = "02-learn.md";
pub const PROBLEM_DIR: &str = "03-problem";

const PROBLEM_MANIFEST: &str = "[package]
name = \"problem\"
version = \"0.1.0\"
edition = \"2021\"

[dependencies]
";

/// Lays out a run's content as `<root>/<topic id>/<date>/`.
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn day_dir(&self, topic_id: &str, date: NaiveDate) -> PathBuf {
        self.root.join(topic_id).join(date.format("%Y-%m-%d").to_string())
    }

    /// Writes every file and returns the dated directory. Files from an
    /// earlier run on the same day are overwritten.
    pub fn write(
        &self,
        config: &GeneratorConfig,
        topic: &Topic,
        date: NaiveDate,
        content: &DailyContent,
    ) -> Result<PathBuf> {
        let day_dir = self.day_dir(&config.active_topic, date);
        let date = date.format("%Y-%m-%d").to_string();

        create_dir(&day_dir)?;

        let mcq = format!(
            "# MCQs: {}\n**Topic:** {}\n**Difficulty:** {}\n**Date:** {}\n\n---\n\n{}",
            topic.name, config.active_topic, config.difficulty, date, content.mcq
        );
        write_file(&day_dir.join(MCQ_FILE), &mcq)?;

        let learn = format!(
            "# Learning: {}\n\n**Topic:** {}\n**Subtopic:** {}\n**Difficulty:** {}\n\n---\n\n{}",
            topic.name,
            config.active_topic,
            topic.subtopic,
            config.difficulty,
            content.learning_guide
        );
        write_file(&day_dir.join(LEARN_FILE), &learn)?;

        let problem_dir = day_dir.join(PROBLEM_DIR);
        let src_dir = problem_dir.join("src");
        create_dir(&src_dir)?;

        write_file(
            &problem_dir.join("README.md"),
            &problem_readme(config, topic, content, &problem_dir),
        )?;
        write_file(&problem_dir.join("Cargo.toml"), PROBLEM_MANIFEST)?;
        write_file(&src_dir.join("lib.rs"), &content.problem.starter_code)?;
        write_file(&src_dir.join("tests.rs"), &content.problem.test_code)?;

        Ok(day_dir)
    }
}

fn problem_readme(
    config: &GeneratorConfig,
    topic: &Topic,
    content: &DailyContent,
    problem_dir: &Path,
) -> String {
    let mut readme = String::new();

    readme.push_str(&format!("# Problem: {}\n\n", topic.name));
    readme.push_str(&format!("**Difficulty:** {}\n", config.difficulty));
    readme.push_str("**Time:** 15-30 minutes\n\n");
    readme.push_str("---\n\n");
    readme.push_str(&content.problem.description);
    readme.push_str("\n\n## Files\n");
    readme.push_str("- `src/lib.rs` - Implement your solution here\n");
    readme.push_str("- `src/tests.rs` - Run with `cargo test`\n\n");
    readme.push_str("## Running Tests\n");
    readme.push_str("```bash\n");
    readme.push_str(&format!("cd {}\n", display_path(problem_dir)));
    readme.push_str("cargo test\n");
    readme.push_str("```\n");

    readme
}

/// Path as a reader should type it from the working directory.
fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
        .unwrap_or(path);

    relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect::<PathBuf>()
        .display()
        .to_string()
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("failed to create {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "writing");
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}
