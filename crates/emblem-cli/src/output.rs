//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use colored::*;
use emblem_catalog::CompletenessStats;
use emblem_domain::{
    CompletenessLevel, MergedHistory, RankedSymbol, SessionOrigin, VerificationSession,
    VerificationStatus,
};
use tabled::{builder::Builder, settings::Style};

/// Output formatter.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a ranked symbol listing.
    pub fn format_ranked(&self, ranked: &[RankedSymbol]) -> String {
        match self.format {
            OutputFormat::Json => self.format_ranked_json(ranked),
            OutputFormat::Table => self.format_ranked_table(ranked),
        }
    }

    /// Format completeness statistics.
    pub fn format_stats(&self, stats: &CompletenessStats) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "total": stats.total,
                "average_score": stats.average_score,
                "average_completion": stats.average_completion,
                "complete": stats.count(CompletenessLevel::Complete),
                "well_documented": stats.count(CompletenessLevel::WellDocumented),
                "partially_documented": stats.count(CompletenessLevel::PartiallyDocumented),
                "to_complete": stats.count(CompletenessLevel::ToComplete),
            })
            .to_string(),
            OutputFormat::Table => stats.summary(),
        }
    }

    /// Format a merged verification history.
    pub fn format_history(&self, merged: &MergedHistory) -> String {
        match self.format {
            OutputFormat::Json => self.format_history_json(merged),
            OutputFormat::Table => self.format_history_table(merged),
        }
    }

    fn format_ranked_table(&self, ranked: &[RankedSymbol]) -> String {
        if ranked.is_empty() {
            return "No symbols.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Culture", "Level", "Score", "Completion", "Priority"]);

        for (index, entry) in ranked.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                entry.symbol.name.clone(),
                entry.symbol.culture.clone(),
                entry.completeness.level.to_string(),
                entry.completeness.score.to_string(),
                format!("{}%", entry.completeness.completion_pct),
                format!("{:.1}", entry.priority),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.to_string()
    }

    fn format_ranked_json(&self, ranked: &[RankedSymbol]) -> String {
        let entries: Vec<serde_json::Value> = ranked
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "id": entry.symbol.id.to_string(),
                    "name": entry.symbol.name,
                    "culture": entry.symbol.culture,
                    "level": entry.completeness.level.as_str(),
                    "score": entry.completeness.score,
                    "completion_pct": entry.completeness.completion_pct,
                    "missing": entry.completeness.missing.iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>(),
                    "trend_score": entry.visibility.trend_score,
                    "priority": entry.priority,
                })
            })
            .collect();

        serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    fn format_history_table(&self, merged: &MergedHistory) -> String {
        if merged.sessions.is_empty() {
            return "No verification history.".to_string();
        }

        let mut lines = Vec::new();

        if let Some(current) = &merged.current {
            lines.push(format!(
                "Current consensus: {} ({}% confidence)",
                self.paint_status(current.overall_status),
                current.average_confidence
            ));
            lines.push(String::new());
        }

        for (index, session) in merged.sessions.iter().enumerate() {
            lines.push(self.session_header(index, session));
            for record in &session.records {
                let summary = if record.summary.is_empty() {
                    record.details.as_str()
                } else {
                    record.summary.as_str()
                };
                lines.push(format!(
                    "    {} [{}] {}% {}",
                    record.provider,
                    self.paint_status(record.status),
                    record.confidence,
                    summary
                ));
            }
        }

        lines.join("\n")
    }

    fn session_header(&self, index: usize, session: &VerificationSession) -> String {
        let origin = match session.origin {
            SessionOrigin::Live => " (live)",
            SessionOrigin::Persisted => "",
        };
        format!(
            "Session {}: {} ({}% confidence, {} providers){}",
            index + 1,
            self.paint_status(session.overall_status),
            session.average_confidence,
            session.records.len(),
            origin
        )
    }

    fn format_history_json(&self, merged: &MergedHistory) -> String {
        let session_json = |session: &VerificationSession| {
            serde_json::json!({
                "status": session.overall_status.as_str(),
                "average_confidence": session.average_confidence,
                "timestamp_ms": session.timestamp_ms,
                "origin": match session.origin {
                    SessionOrigin::Live => "live",
                    SessionOrigin::Persisted => "persisted",
                },
                "records": session.records.iter().map(|r| serde_json::json!({
                    "provider": r.provider,
                    "status": r.status.as_str(),
                    "confidence": r.confidence,
                    "summary": r.summary,
                    "details": r.details,
                    "sources": r.sources,
                    "timestamp_ms": r.timestamp_ms,
                })).collect::<Vec<_>>(),
            })
        };

        let value = serde_json::json!({
            "current": merged.current.as_ref().map(session_json),
            "sessions": merged.sessions.iter().map(session_json).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn paint_status(&self, status: VerificationStatus) -> String {
        if !self.color_enabled {
            return status.to_string();
        }

        match status {
            VerificationStatus::Verified => status.to_string().green().to_string(),
            VerificationStatus::Disputed => status.to_string().yellow().to_string(),
            VerificationStatus::Unverified => status.to_string().red().to_string(),
            VerificationStatus::Error => status.to_string().red().dimmed().to_string(),
        }
    }
}
