use crate::domain::riskregister::risk::Risk;
use crate::domain::riskregister::scoring::risk_score;
use crate::domain::riskregister::severity::Severity;
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::Arc;

/// Inclusive range of valid likelihood and impact coordinates.
pub const AXIS_MIN: u32 = 1;
pub const AXIS_MAX: u32 = 5;

/// 5x5 likelihood/impact matrix. All 25 cells exist even when empty; risks
/// whose coordinates fall outside `[1,5]` are kept in a separate
/// `out_of_range` bucket instead of being silently discarded.
#[derive(Debug, Clone)]
pub struct HeatMap {
    cells: HashMap<(u32, u32), HeatMapCell>,
    out_of_range: Vec<Arc<Risk>>,
}

#[derive(Debug, Clone)]
pub struct HeatMapCell {
    likelihood: u32,
    impact: u32,
    risks: Vec<Arc<Risk>>,
}

impl HeatMapCell {
    fn new(likelihood: u32, impact: u32) -> Self {
        Self {
            likelihood,
            impact,
            risks: Vec::new(),
        }
    }

    pub fn likelihood(&self) -> u32 {
        self.likelihood
    }

    pub fn impact(&self) -> u32 {
        self.impact
    }

    pub fn count(&self) -> usize {
        self.risks.len()
    }

    pub fn risks(&self) -> &[Arc<Risk>] {
        &self.risks
    }

    /// Score of the cell position itself, independent of its occupants.
    pub fn score(&self) -> u32 {
        risk_score(self.likelihood, self.impact)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_score(self.score())
    }
}

impl HeatMap {
    /// Builds the fully populated matrix from a risk list. Deterministic:
    /// the same input always yields the same matrix, and risks keep their
    /// input order within each cell.
    pub fn from_risks(risks: &[Arc<Risk>]) -> HeatMap {
        let mut cells: HashMap<(u32, u32), HeatMapCell> = (AXIS_MIN..=AXIS_MAX)
            .cartesian_product(AXIS_MIN..=AXIS_MAX)
            .map(|(likelihood, impact)| ((likelihood, impact), HeatMapCell::new(likelihood, impact)))
            .collect();

        let mut out_of_range = Vec::new();
        for risk in risks {
            match cells.get_mut(&(risk.likelihood(), risk.impact())) {
                Some(cell) => cell.risks.push(risk.clone()),
                None => out_of_range.push(risk.clone()),
            }
        }

        HeatMap {
            cells,
            out_of_range,
        }
    }

    pub fn cell(&self, likelihood: u32, impact: u32) -> Option<&HeatMapCell> {
        self.cells.get(&(likelihood, impact))
    }

    /// Cells in display order: likelihood descending (5 -> 1) outer, impact
    /// ascending (1 -> 5) inner.
    pub fn cells_in_display_order(&self) -> impl Iterator<Item = &HeatMapCell> {
        (AXIS_MIN..=AXIS_MAX)
            .rev()
            .cartesian_product(AXIS_MIN..=AXIS_MAX)
            .filter_map(|key| self.cells.get(&key))
    }

    /// Number of risks plotted on the grid.
    pub fn plotted_count(&self) -> usize {
        self.cells.values().map(HeatMapCell::count).sum()
    }

    /// Risks excluded from the grid because likelihood or impact fell
    /// outside `[1,5]`.
    pub fn out_of_range(&self) -> &[Arc<Risk>] {
        &self.out_of_range
    }
}
