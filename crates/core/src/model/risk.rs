use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RiskError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} must be within 0.0..=1.0")]
    OutOfRange { field: &'static str },

    #[error("unknown risk category {0:?}")]
    UnknownCategory(String),

    #[error("unknown risk {0:?}")]
    UnknownRisk(String),

    #[error("unknown risk status {0:?}")]
    UnknownStatus(String),
}

/// The fixed category list offered by the register form.
pub const RISK_CATEGORIES: [&str; 6] = [
    "Technical",
    "Schedule",
    "Budget",
    "Resource",
    "Scope",
    "Quality",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    #[default]
    Open,
    Mitigated,
    Accepted,
}

impl RiskStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::Mitigated => "Mitigated",
            RiskStatus::Accepted => "Accepted",
        }
    }

    #[must_use]
    pub fn all() -> [RiskStatus; 3] {
        [RiskStatus::Open, RiskStatus::Mitigated, RiskStatus::Accepted]
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskStatus {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(RiskStatus::Open),
            "Mitigated" => Ok(RiskStatus::Mitigated),
            "Accepted" => Ok(RiskStatus::Accepted),
            other => Err(RiskError::UnknownStatus(other.to_string())),
        }
    }
}

/// Probability × impact banding used by both the matrix and the register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// High above 0.6, Medium above 0.3, Low otherwise.
    #[must_use]
    pub fn from_scores(probability: f64, impact: f64) -> Self {
        let score = probability * impact;
        if score > 0.6 {
            RiskLevel::High
        } else if score > 0.3 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Maps a 5×5 matrix cell to (probability, impact): columns run left→right
/// as rising probability, rows top→bottom as falling impact.
#[must_use]
pub fn matrix_cell(row: u8, col: u8) -> (f64, f64) {
    let probability = f64::from(col.min(4) + 1) / 5.0;
    let impact = f64::from(5 - row.min(4)) / 5.0;
    (probability, impact)
}

/// One tracked project risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    id: String,
    name: String,
    description: String,
    probability: f64,
    impact: f64,
    category: String,
    mitigation: String,
    status: RiskStatus,
}

impl RiskEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns `RiskError` for blank name/description/mitigation, scores
    /// outside 0..=1, or an unlisted category.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        probability: f64,
        impact: f64,
        category: impl Into<String>,
        mitigation: impl Into<String>,
        status: RiskStatus,
    ) -> Result<Self, RiskError> {
        let name = required(name, "risk name")?;
        let description = required(description, "risk description")?;
        let mitigation = required(mitigation, "mitigation strategy")?;
        check_unit(probability, "probability")?;
        check_unit(impact, "impact")?;
        let category = category.into();
        if !RISK_CATEGORIES.contains(&category.as_str()) {
            return Err(RiskError::UnknownCategory(category));
        }
        Ok(Self {
            id: id.into(),
            name,
            description,
            probability,
            impact,
            category,
            mitigation,
            status,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    #[must_use]
    pub fn impact(&self) -> f64 {
        self.impact
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn mitigation(&self) -> &str {
        &self.mitigation
    }

    #[must_use]
    pub fn status(&self) -> RiskStatus {
        self.status
    }

    #[must_use]
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_scores(self.probability, self.impact)
    }
}

fn required(value: impl Into<String>, field: &'static str) -> Result<String, RiskError> {
    let value = value.into().trim().to_owned();
    if value.is_empty() {
        Err(RiskError::EmptyField { field })
    } else {
        Ok(value)
    }
}

fn check_unit(value: f64, field: &'static str) -> Result<(), RiskError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RiskError::OutOfRange { field })
    }
}

/// The risk register table: ordered entries with sequential ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRegister {
    risks: Vec<RiskEntry>,
}

impl RiskRegister {
    #[must_use]
    pub fn empty() -> Self {
        Self { risks: Vec::new() }
    }

    /// The two example risks the activity starts with.
    ///
    /// # Panics
    ///
    /// Panics only if the hard-coded seed entries are invalid.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            risks: vec![
                RiskEntry::new(
                    "1",
                    "Technical Debt",
                    "Accumulation of technical debt due to rushed development",
                    0.7,
                    0.8,
                    "Technical",
                    "Regular code reviews and refactoring sessions",
                    RiskStatus::Open,
                )
                .expect("valid seed risk"),
                RiskEntry::new(
                    "2",
                    "Resource Unavailability",
                    "Key team members becoming unavailable",
                    0.4,
                    0.9,
                    "Resource",
                    "Cross-training and documentation",
                    RiskStatus::Open,
                )
                .expect("valid seed risk"),
            ],
        }
    }

    #[must_use]
    pub fn risks(&self) -> &[RiskEntry] {
        &self.risks
    }

    #[must_use]
    pub fn risk(&self, id: &str) -> Option<&RiskEntry> {
        self.risks.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn next_id(&self) -> String {
        (self.risks.len() + 1).to_string()
    }

    pub fn add(&mut self, risk: RiskEntry) {
        self.risks.push(risk);
    }

    /// Replaces an entry in place, matched by id.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::UnknownRisk` for a missing id.
    pub fn update(&mut self, risk: RiskEntry) -> Result<(), RiskError> {
        let slot = self
            .risks
            .iter_mut()
            .find(|r| r.id == risk.id)
            .ok_or_else(|| RiskError::UnknownRisk(risk.id.clone()))?;
        *slot = risk;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `RiskError::UnknownRisk` for a missing id.
    pub fn set_status(&mut self, id: &str, status: RiskStatus) -> Result<(), RiskError> {
        let risk = self
            .risks
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RiskError::UnknownRisk(id.to_owned()))?;
        risk.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds() {
        assert_eq!(RiskLevel::from_scores(0.9, 0.9), RiskLevel::High);
        assert_eq!(RiskLevel::from_scores(0.7, 0.8), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_scores(0.8, 0.5), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_scores(0.5, 0.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_scores(0.1, 0.1), RiskLevel::Low);
    }

    #[test]
    fn matrix_cell_maps_rows_and_columns() {
        // top-right cell: highest probability, highest impact
        assert_eq!(matrix_cell(0, 4), (1.0, 1.0));
        // bottom-left cell: lowest probability, lowest impact
        assert_eq!(matrix_cell(4, 0), (0.2, 0.2));
        assert_eq!(matrix_cell(2, 2), (0.6, 0.6));
    }

    #[test]
    fn register_seeds_two_open_risks() {
        let register = RiskRegister::seeded();
        assert_eq!(register.risks().len(), 2);
        assert!(register
            .risks()
            .iter()
            .all(|r| r.status() == RiskStatus::Open));
        assert_eq!(register.next_id(), "3");
    }

    #[test]
    fn set_status_and_update() {
        let mut register = RiskRegister::seeded();
        register.set_status("1", RiskStatus::Mitigated).unwrap();
        assert_eq!(register.risk("1").unwrap().status(), RiskStatus::Mitigated);

        let edited = RiskEntry::new(
            "2",
            "Staffing Gap",
            "Key team members becoming unavailable",
            0.5,
            0.9,
            "Resource",
            "Cross-training and documentation",
            RiskStatus::Accepted,
        )
        .unwrap();
        register.update(edited).unwrap();
        assert_eq!(register.risk("2").unwrap().name(), "Staffing Gap");

        assert_eq!(
            register.set_status("9", RiskStatus::Open),
            Err(RiskError::UnknownRisk("9".into()))
        );
    }

    #[test]
    fn entry_validation() {
        let blank = RiskEntry::new("1", " ", "d", 0.5, 0.5, "Technical", "m", RiskStatus::Open);
        assert_eq!(blank.unwrap_err(), RiskError::EmptyField { field: "risk name" });

        let range = RiskEntry::new("1", "n", "d", 1.5, 0.5, "Technical", "m", RiskStatus::Open);
        assert_eq!(range.unwrap_err(), RiskError::OutOfRange { field: "probability" });

        let category = RiskEntry::new("1", "n", "d", 0.5, 0.5, "Weather", "m", RiskStatus::Open);
        assert_eq!(category.unwrap_err(), RiskError::UnknownCategory("Weather".into()));
    }

    #[test]
    fn status_round_trips() {
        for status in RiskStatus::all() {
            let parsed: RiskStatus = status.label().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
