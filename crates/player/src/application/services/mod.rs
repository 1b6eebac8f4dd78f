//! Application services
//!
//! Use cases of the character sheet. Services depend on port traits, not
//! on the HTTP adapter, and every status field has exactly one service that
//! writes it.

pub mod armor_aggregator;
pub mod cosmetics_service;
pub mod equipment;
pub mod skills_service;
pub mod status_error;
pub mod vitals_aggregator;

pub use armor_aggregator::{ArmorAggregator, ArmorSync};
pub use cosmetics_service::{CosmeticsError, CosmeticsService};
pub use equipment::{
    DeleteReport, EquipReport, EquipmentError, EquipmentManager, EquipmentPorts, EquipmentState,
};
pub use skills_service::{SkillsError, SkillsService};
pub use status_error::StatusError;
pub use vitals_aggregator::{AttributeUpdate, VitalWrite, VitalsAggregator};
