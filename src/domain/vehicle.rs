//! Vehicle lifecycle for the pickup, yard, transport and delivery flow.

use serde::{Deserialize, Serialize};

/// Stage of a tracked vehicle.
///
/// Transitions follow the back-office screens; the order is linear and
/// nothing enforces a guard beyond [`VehicleStatus::next`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    AwaitingPickup,
    InYard,
    InTransit,
    Delivered,
}

impl VehicleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::AwaitingPickup => "Aguardando coleta",
            VehicleStatus::InYard => "No pátio",
            VehicleStatus::InTransit => "Em transporte",
            VehicleStatus::Delivered => "Entregue",
        }
    }

    /// Next stage in the lifecycle, or `None` once delivered.
    pub fn next(&self) -> Option<VehicleStatus> {
        match self {
            VehicleStatus::AwaitingPickup => Some(VehicleStatus::InYard),
            VehicleStatus::InYard => Some(VehicleStatus::InTransit),
            VehicleStatus::InTransit => Some(VehicleStatus::Delivered),
            VehicleStatus::Delivered => None,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, VehicleStatus::Delivered)
    }
}

/// A vehicle under transport management.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub model: String,
    /// Declared value, used to prefill the quote form's asset value.
    pub declared_value: f64,
    #[serde(default)]
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, model: impl Into<String>, declared_value: f64) -> Self {
        Self {
            plate: plate.into(),
            model: model.into(),
            declared_value,
            status: VehicleStatus::default(),
        }
    }

    /// Move to the next lifecycle stage. Returns `false` once delivered.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}
