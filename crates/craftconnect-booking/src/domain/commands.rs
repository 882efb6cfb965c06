//! Commands for the Booking Wizard.

use craftconnect_core::command::Command;
use uuid::Uuid;

use super::step::Schedule;

/// Command issued when a service option is tapped on step 1.
#[derive(Debug, Clone)]
pub struct SelectService {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The service name, as offered by the selected provider.
    pub service: String,
}

impl Command for SelectService {
    fn command_type(&self) -> &'static str {
        "booking.select_service"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying the step-1 project description.
#[derive(Debug, Clone)]
pub struct DescribeProject {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Free-text project requirements.
    pub description: String,
}

impl Command for DescribeProject {
    fn command_type(&self) -> &'static str {
        "booking.describe_project"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command carrying the step-2 date, time slot and address.
#[derive(Debug, Clone)]
pub struct SetSchedule {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The form values.
    pub schedule: Schedule,
}

impl Command for SetSchedule {
    fn command_type(&self) -> &'static str {
        "booking.set_schedule"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued by the wizard "Continue" button.
#[derive(Debug, Clone)]
pub struct Continue {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for Continue {
    fn command_type(&self) -> &'static str {
        "booking.continue"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command issued by the "Confirm & Pay" button.
#[derive(Debug, Clone)]
pub struct ConfirmAndPay {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for ConfirmAndPay {
    fn command_type(&self) -> &'static str {
        "booking.confirm_and_pay"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
