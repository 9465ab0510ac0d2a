use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("task name cannot be empty")]
    EmptyName,

    #[error("end date is before start date")]
    InvalidDates,

    #[error("progress {0} is out of the 0..=100 range")]
    ProgressOutOfRange(u16),

    #[error("unknown task {0:?}")]
    UnknownTask(String),

    #[error("task {task:?} depends on unknown task {dependency:?}")]
    UnknownDependency { task: String, dependency: String },

    #[error("a task cannot depend on itself")]
    SelfDependency,
}

/// One bar on the Gantt chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTask {
    id: String,
    name: String,
    description: String,
    start: NaiveDate,
    end: NaiveDate,
    progress: u8,
    dependencies: Vec<String>,
    color: String,
}

impl PlanTask {
    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` for a blank name, inverted dates, or progress
    /// above 100.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        progress: u16,
        dependencies: Vec<String>,
        color: impl Into<String>,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlanError::EmptyName);
        }
        if end < start {
            return Err(PlanError::InvalidDates);
        }
        if progress > 100 {
            return Err(PlanError::ProgressOutOfRange(progress));
        }
        #[allow(clippy::cast_possible_truncation)]
        Ok(Self {
            id: id.into(),
            name: name.trim().to_owned(),
            description: description.into(),
            start,
            end,
            progress: progress as u8,
            dependencies,
            color: color.into(),
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
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// The editable project plan behind the Gantt builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttPlan {
    tasks: Vec<PlanTask>,
}

const RANGE_PADDING_DAYS: i64 = 2;

impl GanttPlan {
    #[must_use]
    pub fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    /// The two-task starter plan shown when the builder opens.
    ///
    /// # Panics
    ///
    /// Panics only if the hard-coded seed dates are invalid.
    #[must_use]
    pub fn seeded() -> Self {
        let d = |day| NaiveDate::from_ymd_opt(2024, 4, day).expect("valid seed date");
        Self {
            tasks: vec![
                PlanTask::new(
                    "1",
                    "Project Planning",
                    "Define project scope, objectives, and timeline",
                    d(1),
                    d(7),
                    0,
                    Vec::new(),
                    "#f97316",
                )
                .expect("valid seed task"),
                PlanTask::new(
                    "2",
                    "Requirements Gathering",
                    "Collect and document project requirements",
                    d(8),
                    d(14),
                    0,
                    vec!["1".to_string()],
                    "#22c55e",
                )
                .expect("valid seed task"),
            ],
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[PlanTask] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&PlanTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn next_id(&self) -> String {
        (self.tasks.len() + 1).to_string()
    }

    /// Inserts or replaces a task by id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` when a dependency is unknown or self-referential.
    pub fn upsert(&mut self, task: PlanTask) -> Result<(), PlanError> {
        for dependency in task.dependencies() {
            if dependency == task.id() {
                return Err(PlanError::SelfDependency);
            }
            if !self.tasks.iter().any(|t| &t.id == dependency) {
                return Err(PlanError::UnknownDependency {
                    task: task.id().to_owned(),
                    dependency: dependency.clone(),
                });
            }
        }
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
        Ok(())
    }

    /// Moves a task to a new start date, preserving its duration, then
    /// re-anchors every task that depends on it to begin at its new end.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::UnknownTask` for a missing id.
    pub fn shift_task(&mut self, id: &str, new_start: NaiveDate) -> Result<(), PlanError> {
        let moved_end = {
            let task = self
                .tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| PlanError::UnknownTask(id.to_owned()))?;
            let duration = task.duration_days();
            task.start = new_start;
            task.end = new_start + Duration::days(duration);
            task.end
        };

        for task in &mut self.tasks {
            if task.dependencies.iter().any(|d| d == id) {
                let duration = task.duration_days();
                task.start = moved_end;
                task.end = moved_end + Duration::days(duration);
            }
        }
        Ok(())
    }

    /// Visible chart range: the task envelope padded by two days each side.
    #[must_use]
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        let fallback = || {
            let start = NaiveDate::from_ymd_opt(2024, 4, 1).expect("valid date");
            let end = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
            (start, end)
        };
        let Some(min) = self.tasks.iter().map(PlanTask::start).min() else {
            return fallback();
        };
        let Some(max) = self.tasks.iter().map(PlanTask::end).max() else {
            return fallback();
        };
        (
            min - Duration::days(RANGE_PADDING_DAYS),
            max + Duration::days(RANGE_PADDING_DAYS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn shift_preserves_duration_and_cascades() {
        let mut plan = GanttPlan::seeded();
        plan.shift_task("1", date(5)).unwrap();

        let planning = plan.task("1").unwrap();
        assert_eq!(planning.start(), date(5));
        assert_eq!(planning.end(), date(11));
        assert_eq!(planning.duration_days(), 6);

        // Requirements depends on planning: it re-anchors to the new end.
        let requirements = plan.task("2").unwrap();
        assert_eq!(requirements.start(), date(11));
        assert_eq!(requirements.end(), date(17));
    }

    #[test]
    fn visible_range_pads_the_envelope() {
        let plan = GanttPlan::seeded();
        let (start, end) = plan.visible_range();
        assert_eq!(start, date(1) - Duration::days(2));
        assert_eq!(end, date(14) + Duration::days(2));
    }

    #[test]
    fn empty_plan_falls_back_to_default_window() {
        let (start, end) = GanttPlan::empty().visible_range();
        assert_eq!(start, date(1));
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn upsert_validates_dependencies() {
        let mut plan = GanttPlan::seeded();
        let bad = PlanTask::new(
            "3",
            "QA",
            "",
            date(15),
            date(20),
            0,
            vec!["9".to_string()],
            "#000000",
        )
        .unwrap();
        assert_eq!(
            plan.upsert(bad),
            Err(PlanError::UnknownDependency {
                task: "3".into(),
                dependency: "9".into()
            })
        );

        let selfish = PlanTask::new(
            "3",
            "QA",
            "",
            date(15),
            date(20),
            0,
            vec!["3".to_string()],
            "#000000",
        )
        .unwrap();
        assert_eq!(plan.upsert(selfish), Err(PlanError::SelfDependency));
    }

    #[test]
    fn task_constructor_validates() {
        assert_eq!(
            PlanTask::new("1", " ", "", date(1), date(2), 0, Vec::new(), "#fff").unwrap_err(),
            PlanError::EmptyName
        );
        assert_eq!(
            PlanTask::new("1", "x", "", date(2), date(1), 0, Vec::new(), "#fff").unwrap_err(),
            PlanError::InvalidDates
        );
        assert_eq!(
            PlanTask::new("1", "x", "", date(1), date(2), 150, Vec::new(), "#fff").unwrap_err(),
            PlanError::ProgressOutOfRange(150)
        );
    }

    #[test]
    fn upsert_replaces_existing_task() {
        let mut plan = GanttPlan::seeded();
        let edited = PlanTask::new(
            "1",
            "Kickoff",
            "renamed",
            date(1),
            date(3),
            50,
            Vec::new(),
            "#f97316",
        )
        .unwrap();
        plan.upsert(edited).unwrap();
        assert_eq!(plan.tasks().len(), 2);
        assert_eq!(plan.task("1").unwrap().name(), "Kickoff");
    }
}
