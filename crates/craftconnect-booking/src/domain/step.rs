//! Wizard steps and the step-2 form values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current stage of the booking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    SelectingService,
    SchedulingLocation,
    Confirming,
}

impl WizardStep {
    /// The 1-based step number shown in the progress bar.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SelectingService => 1,
            WizardStep::SchedulingLocation => 2,
            WizardStep::Confirming => 3,
        }
    }

    /// The step `continue` leads to, if any.
    #[must_use]
    pub fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::SelectingService => Some(WizardStep::SchedulingLocation),
            WizardStep::SchedulingLocation => Some(WizardStep::Confirming),
            WizardStep::Confirming => None,
        }
    }
}

/// Preferred time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    #[default]
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (8AM - 12PM)",
            TimeSlot::Afternoon => "Afternoon (12PM - 5PM)",
            TimeSlot::Evening => "Evening (5PM - 8PM)",
        }
    }
}

/// Step-2 form values. None of them are validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub date: Option<NaiveDate>,
    pub slot: TimeSlot,
    pub address: String,
}
