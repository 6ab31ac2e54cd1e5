use crate::app::register_exporter::{ExportError, RegisterExporter};
use crate::domain::riskregister::heat_map::HeatMap;
use crate::domain::riskregister::risk_register::RiskRegister;
use crate::domain::riskregister::stats::RiskStats;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fmt::{Display, Formatter};

impl From<&RiskRegister> for MarkdownReport {
    fn from(value: &RiskRegister) -> Self {
        let stats = value.stats();
        Self {
            summary: summary_from(&stats, value.coverage_score()),
            status_breakdown: status_breakdown_from(&stats),
            top_risks: top_risks_from(&stats),
            heat_map: heat_map_grid_from(&value.heat_map()),
            register: register_rows_from(value),
        }
    }
}

impl Display for MarkdownReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let summary_section = self.summary_section();
        let status_section = self.status_section();
        let top_risks_section = self.top_risks_section();
        let heat_map_section = self.heat_map_section();
        let register_section = self.register_section();

        write!(
            f,
            "## Risk Register Report\n{}\n{}\n{}\n{}\n{}",
            summary_section, status_section, top_risks_section, heat_map_section, register_section
        )
    }
}

impl MarkdownReport {
    pub fn summary_section(&self) -> String {
        let summary = &self.summary;

        let headers = vec![
            Heading::new("TOTAL RISKS".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("CRITICAL".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("HIGH".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("MEDIUM".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("LOW".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("COVERAGE".to_string(), Some(HeadingAlignment::Center)),
        ];

        let data = vec![vec![
            summary.total.to_string(),
            summary.critical.to_string(),
            summary.high.to_string(),
            summary.medium.to_string(),
            summary.low.to_string(),
            format!("{:.1} / 10", summary.coverage),
        ]];

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        format!("### Summary\n\n{}", table.as_markdown().unwrap_or_default())
    }

    pub fn status_section(&self) -> String {
        if self.status_breakdown.is_empty() {
            return "".to_string();
        }
        let headers = vec![
            Heading::new("STATUS".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("RISKS".to_string(), Some(HeadingAlignment::Center)),
        ];

        let data = self
            .status_breakdown
            .iter()
            .map(|s| vec![s.status.clone(), s.count.to_string()])
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        format!(
            "\n### Status Breakdown\n\n{}",
            table.as_markdown().unwrap_or_default()
        )
    }

    pub fn top_risks_section(&self) -> String {
        if self.top_risks.is_empty() {
            return "".to_string();
        }
        let headers = vec![
            Heading::new("ID".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("NAME".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("SCORE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("SEVERITY".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("STATUS".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("OWNER".to_string(), Some(HeadingAlignment::Left)),
        ];

        let data = self
            .top_risks
            .iter()
            .map(|t| {
                vec![
                    t.id.clone(),
                    t.name.clone(),
                    t.score.to_string(),
                    t.severity.clone(),
                    t.status.clone(),
                    t.owner.clone(),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        format!(
            "\n### Top Risks\n\n{}",
            table.as_markdown().unwrap_or_default()
        )
    }

    pub fn heat_map_section(&self) -> String {
        let mut headers = vec![Heading::new(
            "LIKELIHOOD \\ IMPACT".to_string(),
            Some(HeadingAlignment::Left),
        )];
        for impact in 1..=5 {
            headers.push(Heading::new(
                impact.to_string(),
                Some(HeadingAlignment::Center),
            ));
        }

        let data = self
            .heat_map
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![format!("L{}", row.likelihood)];
                cells.extend(row.counts.iter().map(|count| {
                    if *count > 0 {
                        count.to_string()
                    } else {
                        "-".to_string()
                    }
                }));
                cells
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        format!(
            "\n### Heat Map\n\n{}",
            table.as_markdown().unwrap_or_default()
        )
    }

    pub fn register_section(&self) -> String {
        if self.register.is_empty() {
            return "".to_string();
        }
        let headers = vec![
            Heading::new("ID".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("NAME".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("L".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("I".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("SCORE".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("SEVERITY".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("STATUS".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("OWNER".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("CONTROLS".to_string(), Some(HeadingAlignment::Left)),
        ];

        let data = self
            .register
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    r.likelihood.to_string(),
                    r.impact.to_string(),
                    r.score.to_string(),
                    r.severity.clone(),
                    r.status.clone(),
                    r.owner.clone(),
                    r.controls.clone(),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        format!(
            "\n### Register\n\n{}",
            table.as_markdown().unwrap_or_default()
        )
    }
}

fn summary_from(stats: &RiskStats, coverage: f64) -> MarkdownSummary {
    MarkdownSummary {
        total: stats.total,
        critical: stats.critical,
        high: stats.high,
        medium: stats.medium,
        low: stats.low,
        coverage,
    }
}

fn status_breakdown_from(stats: &RiskStats) -> Vec<StatusCount> {
    stats
        .by_status
        .iter()
        .map(|(status, count)| StatusCount {
            status: status.clone(),
            count: *count,
        })
        .collect()
}

fn top_risks_from(stats: &RiskStats) -> Vec<TopRiskRow> {
    stats
        .top_risks
        .iter()
        .map(|t| TopRiskRow {
            id: t.id.to_string(),
            name: t.name.clone(),
            score: t.score,
            severity: t.severity.to_string(),
            status: t.status.clone(),
            owner: t.owner.clone(),
        })
        .collect()
}

fn heat_map_grid_from(heat_map: &HeatMap) -> MarkdownHeatMapGrid {
    let rows = (1..=5u32)
        .rev()
        .map(|likelihood| MarkdownHeatMapRow {
            likelihood,
            counts: (1..=5u32)
                .map(|impact| {
                    heat_map
                        .cell(likelihood, impact)
                        .map(|c| c.count())
                        .unwrap_or_default()
                })
                .collect(),
        })
        .collect();

    MarkdownHeatMapGrid { rows }
}

fn register_rows_from(register: &RiskRegister) -> Vec<RegisterRow> {
    register
        .risks()
        .iter()
        .map(|r| RegisterRow {
            id: r.id().to_string(),
            name: r.name().to_string(),
            likelihood: r.likelihood(),
            impact: r.impact(),
            score: r.score(),
            severity: r.severity().to_string(),
            status: r.status().to_string(),
            owner: r.owner_or_unassigned().to_string(),
            controls: if r.controls().is_empty() {
                "None".to_string()
            } else {
                r.controls().join(", ")
            },
        })
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct MarkdownReport {
    pub summary: MarkdownSummary,
    pub status_breakdown: Vec<StatusCount>,
    pub top_risks: Vec<TopRiskRow>,
    pub heat_map: MarkdownHeatMapGrid,
    pub register: Vec<RegisterRow>,
}

#[derive(Clone, Debug, Default)]
pub struct MarkdownSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub coverage: f64,
}

#[derive(Clone, Debug, Default)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TopRiskRow {
    pub id: String,
    pub name: String,
    pub score: u32,
    pub severity: String,
    pub status: String,
    pub owner: String,
}

#[derive(Clone, Debug, Default)]
pub struct MarkdownHeatMapGrid {
    pub rows: Vec<MarkdownHeatMapRow>,
}

#[derive(Clone, Debug, Default)]
pub struct MarkdownHeatMapRow {
    pub likelihood: u32,
    pub counts: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct RegisterRow {
    pub id: String,
    pub name: String,
    pub likelihood: u32,
    pub impact: u32,
    pub score: u32,
    pub severity: String,
    pub status: String,
    pub owner: String,
    pub controls: String,
}

/// Markdown rendition of the register, exposed through the exporter seam.
pub struct MarkdownRegisterExporter;

impl RegisterExporter for MarkdownRegisterExporter {
    fn export(&self, register: &RiskRegister) -> Result<String, ExportError> {
        Ok(MarkdownReport::from(register).to_string())
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
