use chrono::NaiveDate;

use academy_core::model::{PlanTask, RiskEntry, RiskStatus};

/// Fixed pixels per day keeps bar geometry deterministic without measuring
/// the rendered timeline.
pub const DAY_PX: i64 = 40;

/// Left offset and width in pixels for one task bar within the visible
/// range.
#[must_use]
pub fn bar_geometry(task: &PlanTask, range_start: NaiveDate) -> (i64, i64) {
    let offset = (task.start() - range_start).num_days().max(0) * DAY_PX;
    let width = (task.duration_days() + 1).max(1) * DAY_PX;
    (offset, width)
}

/// Day tick labels ("Apr 1", "Apr 2", ...) across the visible range.
#[must_use]
pub fn day_labels(range: (NaiveDate, NaiveDate)) -> Vec<String> {
    let (start, end) = range;
    let days = (end - start).num_days().max(0);
    (0..=days)
        .map(|offset| {
            let date = start + chrono::Duration::days(offset);
            date.format("%b %-d").to_string()
        })
        .collect()
}

/// String-typed form state for the task dialog, validated into a
/// `PlanTask` on save.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub progress: String,
    pub dependencies: Vec<String>,
    pub color: String,
    pub is_new: bool,
}

impl TaskDraft {
    #[must_use]
    pub fn blank(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            start: "2024-04-01".to_owned(),
            end: "2024-04-08".to_owned(),
            progress: "0".to_owned(),
            dependencies: Vec::new(),
            color: "#f97316".to_owned(),
            is_new: true,
        }
    }

    #[must_use]
    pub fn from_task(task: &PlanTask) -> Self {
        Self {
            id: task.id().to_owned(),
            name: task.name().to_owned(),
            description: task.description().to_owned(),
            start: task.start().format("%Y-%m-%d").to_string(),
            end: task.end().format("%Y-%m-%d").to_string(),
            progress: task.progress().to_string(),
            dependencies: task.dependencies().to_vec(),
            color: task.color().to_owned(),
            is_new: false,
        }
    }

    /// Parses and validates the draft.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message on invalid input.
    pub fn to_task(&self) -> Result<PlanTask, String> {
        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;
        let progress: u16 = self
            .progress
            .trim()
            .parse()
            .map_err(|_| "Progress must be a number between 0 and 100.".to_owned())?;
        PlanTask::new(
            self.id.clone(),
            self.name.clone(),
            self.description.clone(),
            start,
            end,
            progress,
            self.dependencies.clone(),
            self.color.clone(),
        )
        .map_err(|e| e.to_string())
    }

    pub fn toggle_dependency(&mut self, id: &str) {
        if let Some(index) = self.dependencies.iter().position(|d| d == id) {
            self.dependencies.remove(index);
        } else {
            self.dependencies.push(id.to_owned());
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| "Dates must use the YYYY-MM-DD format.".to_owned())
}

/// String-typed form state for the risk forms, validated into a
/// `RiskEntry` on save.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskDraft {
    pub id: String,
    pub name: String,
    pub description: String,
    pub probability: f64,
    pub impact: f64,
    pub category: String,
    pub mitigation: String,
    pub status: RiskStatus,
}

impl RiskDraft {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            probability: 0.5,
            impact: 0.5,
            category: academy_core::model::RISK_CATEGORIES[0].to_owned(),
            mitigation: String::new(),
            status: RiskStatus::Open,
        }
    }

    #[must_use]
    pub fn from_entry(entry: &RiskEntry) -> Self {
        Self {
            id: entry.id().to_owned(),
            name: entry.name().to_owned(),
            description: entry.description().to_owned(),
            probability: entry.probability(),
            impact: entry.impact(),
            category: entry.category().to_owned(),
            mitigation: entry.mitigation().to_owned(),
            status: entry.status(),
        }
    }

    /// Validates the draft under the given id.
    ///
    /// # Errors
    ///
    /// Returns a display-ready message on invalid input.
    pub fn to_entry(&self, id: &str) -> Result<RiskEntry, String> {
        RiskEntry::new(
            id,
            self.name.clone(),
            self.description.clone(),
            self.probability,
            self.impact,
            self.category.clone(),
            self.mitigation.clone(),
            self.status,
        )
        .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::GanttPlan;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn bar_geometry_scales_by_day() {
        let plan = GanttPlan::seeded();
        let (range_start, _) = plan.visible_range();
        let (offset, width) = bar_geometry(plan.task("1").unwrap(), range_start);
        // task starts two days into the padded range, spans seven days
        assert_eq!(offset, 2 * DAY_PX);
        assert_eq!(width, 7 * DAY_PX);
    }

    #[test]
    fn day_labels_cover_the_range_inclusive() {
        let labels = day_labels((date(1), date(3)));
        assert_eq!(labels, vec!["Apr 1", "Apr 2", "Apr 3"]);
    }

    #[test]
    fn task_draft_round_trips() {
        let plan = GanttPlan::seeded();
        let draft = TaskDraft::from_task(plan.task("2").unwrap());
        let task = draft.to_task().unwrap();
        assert_eq!(&task, plan.task("2").unwrap());
    }

    #[test]
    fn task_draft_rejects_bad_input() {
        let mut draft = TaskDraft::blank("3".into());
        draft.name = "QA".into();
        draft.start = "04/01/2024".into();
        assert!(draft.to_task().unwrap_err().contains("YYYY-MM-DD"));

        draft.start = "2024-04-01".into();
        draft.progress = "lots".into();
        assert!(draft.to_task().unwrap_err().contains("Progress"));
    }

    #[test]
    fn toggle_dependency_adds_and_removes() {
        let mut draft = TaskDraft::blank("3".into());
        draft.toggle_dependency("1");
        assert_eq!(draft.dependencies, vec!["1".to_owned()]);
        draft.toggle_dependency("1");
        assert!(draft.dependencies.is_empty());
    }

    #[test]
    fn risk_draft_validates_through_the_domain() {
        let mut draft = RiskDraft::blank();
        assert!(draft.to_entry("3").is_err());

        draft.name = "Scope Creep".into();
        draft.description = "Requirements keep growing".into();
        draft.mitigation = "Change control board".into();
        let entry = draft.to_entry("3").unwrap();
        assert_eq!(entry.id(), "3");
        assert_eq!(entry.category(), "Technical");
    }
}
