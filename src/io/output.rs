use std::io::Write;

use clap::ValueEnum;
use colored::*;

use crate::core::ResultRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_result(&mut self, record: &ResultRecord) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_result(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_result(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        self.write_header(record)?;
        self.write_summary(record)?;
        self.write_topic_table(record)?;
        self.write_recommendation(record)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "# Proficiency Evaluation Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Student {} / Exam {}",
            record.student_id, record.exam_id
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Predicted Band | {} |", record.predicted_band)?;
        writeln!(self.writer, "| Band Group | {} |", record.band_group)?;
        writeln!(
            self.writer,
            "| Confidence (Weak) | {:.4} |",
            record.confidence_weak
        )?;
        writeln!(
            self.writer,
            "| Confidence (Developing) | {:.4} |",
            record.confidence_developing
        )?;
        writeln!(
            self.writer,
            "| Confidence (Strong) | {:.4} |",
            record.confidence_strong
        )?;
        writeln!(
            self.writer,
            "| Topics Needing Improvement | {} |",
            record.improvement_count
        )?;
        writeln!(self.writer, "| Strong Topics | {} |", record.strong_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_topic_table(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        if record.topic_score_table.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Topic Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Topic | Score | Percent | Status |")?;
        writeln!(self.writer, "|-------|-------|---------|--------|")?;
        for row in &record.topic_score_table {
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.2}% | {} |",
                row.topic,
                row.score_raw,
                row.score_percent,
                row.status.label()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendation(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendation")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", record.recommendation_text)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_result(&mut self, record: &ResultRecord) -> anyhow::Result<()> {
        print_header(record);
        print_summary(record);
        print_topic_table(record);
        print_recommendation(record);
        Ok(())
    }
}

fn print_header(record: &ResultRecord) {
    println!("{}", "Proficiency Evaluation Report".bold().blue());
    println!("{}", "=============================".blue());
    println!("Student {} / Exam {}", record.student_id, record.exam_id);
    println!();
}

fn print_summary(record: &ResultRecord) {
    println!(
        "Predicted band: {} ({})",
        record.predicted_band.bold(),
        colorize_group(&record.band_group)
    );
    println!(
        "Confidence: weak {:.2} / developing {:.2} / strong {:.2}",
        record.confidence_weak, record.confidence_developing, record.confidence_strong
    );
    println!();
}

fn print_topic_table(record: &ResultRecord) {
    if record.topic_score_table.is_empty() {
        println!("{}", "No topic scores provided.".yellow());
        println!();
        return;
    }

    println!("Topic scores (ascending):");
    for row in &record.topic_score_table {
        println!(
            "  {:>7.2}%  {}  {}",
            row.score_percent,
            colorize_group(row.status.label()),
            row.topic
        );
    }
    println!();

    println!(
        "Needs improvement ({}): {}",
        record.improvement_count,
        join_or_dash(&record.improvement_topics)
    );
    println!(
        "Strong ({}): {}",
        record.strong_count,
        join_or_dash(&record.strong_topics)
    );
    println!();
}

fn print_recommendation(record: &ResultRecord) {
    println!("{}", "Recommendation:".bold());
    println!("  {}", record.recommendation_text);
}

fn colorize_group(label: &str) -> ColoredString {
    match label {
        "Weak" => label.red(),
        "Developing" => label.yellow(),
        "Strong" => label.green(),
        _ => label.normal(),
    }
}

fn join_or_dash(topics: &[String]) -> String {
    if topics.is_empty() {
        "-".to_string()
    } else {
        topics.join(", ")
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TopicTier;
    use crate::core::TopicRow;

    fn record() -> ResultRecord {
        ResultRecord {
            student_id: 7,
            exam_id: 11,
            predicted_band: "Intermediate".to_string(),
            band_group: "Developing".to_string(),
            confidence_weak: 0.2,
            confidence_developing: 0.5,
            confidence_strong: 0.3,
            improvement_topics: vec!["Algebra".to_string()],
            improvement_count: 1,
            strong_topics: vec!["Geometry".to_string()],
            strong_count: 1,
            recommendation_text: "Keep practicing.".to_string(),
            topic_score_table: vec![
                TopicRow {
                    topic: "Algebra".to_string(),
                    score_raw: 0.55,
                    score_percent: 55.0,
                    status: TopicTier::Developing,
                },
                TopicRow {
                    topic: "Geometry".to_string(),
                    score_raw: 0.8,
                    score_percent: 80.0,
                    status: TopicTier::Strong,
                },
            ],
        }
    }

    #[test]
    fn test_json_writer_round_trips() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_result(&record()).unwrap();
        let parsed: ResultRecord = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_markdown_writer_includes_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_result(&record())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# Proficiency Evaluation Report"));
        assert!(text.contains("| Predicted Band | Intermediate |"));
        assert!(text.contains("| Algebra | 0.55 | 55.00% | Developing |"));
        assert!(text.contains("## Recommendation"));
    }

    #[test]
    fn test_markdown_writer_skips_empty_topic_table() {
        let mut empty = record();
        empty.topic_score_table.clear();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer).write_result(&empty).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("## Topic Scores"));
    }
}
