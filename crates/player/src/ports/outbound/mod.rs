//! Outbound ports - Interfaces for the sheet backend
//!
//! Application services talk to the backend only through these traits so
//! they can be exercised against mocks. The reqwest adapter and the typed
//! REST wrapper in `crate::infrastructure` implement them.

pub mod api_error;
pub mod raw_api_port;
pub mod sheet_ports;

pub use api_error::ApiError;
pub use raw_api_port::RawApiPort;
pub use sheet_ports::{
    AttributesPort, CharacterPort, CosmeticPort, InventoryPort, SkillsPort, StatusPort,
};

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
#[cfg(test)]
pub use sheet_ports::{
    MockAttributesPort, MockCharacterPort, MockCosmeticPort, MockInventoryPort, MockSkillsPort,
    MockStatusPort,
};
