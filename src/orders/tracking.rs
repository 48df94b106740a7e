//! Order Tracking

use std::fmt;

use crate::orders::OrderStatus;

/// A step on the order tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingStep {
    /// Status the step represents.
    pub status: OrderStatus,

    /// Display label.
    pub label: &'static str,
}

/// Steps an order moves through, in order. Cancellation is not a step.
pub const TRACKING_STEPS: [TrackingStep; 6] = [
    TrackingStep {
        status: OrderStatus::Pending,
        label: "Pending",
    },
    TrackingStep {
        status: OrderStatus::Verified,
        label: "Verified",
    },
    TrackingStep {
        status: OrderStatus::Confirmed,
        label: "Confirmed",
    },
    TrackingStep {
        status: OrderStatus::Preparing,
        label: "Preparing",
    },
    TrackingStep {
        status: OrderStatus::OutForDelivery,
        label: "Out for Delivery",
    },
    TrackingStep {
        status: OrderStatus::Delivered,
        label: "Delivered",
    },
];

/// How a tracking step is drawn for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// The order has passed this step.
    Completed,

    /// The order is at this step.
    Current,

    /// The order has not reached this step.
    Pending,
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StepState::Completed => "completed",
            StepState::Current => "current",
            StepState::Pending => "pending",
        })
    }
}

impl OrderStatus {
    /// Position on the tracker; `None` for cancelled orders.
    #[must_use]
    pub fn step_index(self) -> Option<usize> {
        TRACKING_STEPS.iter().position(|step| step.status == self)
    }

    /// State of a tracking step for an order in this status.
    ///
    /// A cancelled order reports every step as pending.
    #[must_use]
    pub fn step_state(self, step: OrderStatus) -> StepState {
        if step == self {
            return StepState::Current;
        }

        match (self.step_index(), step.step_index()) {
            (Some(current), Some(step)) if current >= step => StepState::Completed,
            _ => StepState::Pending,
        }
    }

    /// Every tracking step with its state for an order in this status.
    pub fn tracking(self) -> impl Iterator<Item = (TrackingStep, StepState)> {
        TRACKING_STEPS
            .into_iter()
            .map(move |step| (step, self.step_state(step.status)))
    }
}
