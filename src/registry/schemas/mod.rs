//! Schema definitions for Synthea export tables
//!
//! One module per CSV file of a Synthea export, each defining the typed
//! record for that table together with its token enums.

pub mod allergies;
pub mod careplans;
pub mod claims;
pub mod claims_transactions;
pub mod conditions;
pub mod devices;
pub mod encounters;
pub mod imaging_studies;
pub mod immunizations;
pub mod medications;
pub mod observations;
pub mod organizations;
pub mod patients;
pub mod payer_transitions;
pub mod payers;
pub mod procedures;
pub mod providers;
pub mod supplies;

// Re-export record types for easier access
pub use allergies::{Allergy, AllergyCategory, AllergyType, Severity};
pub use careplans::CarePlan;
pub use claims::{Claim, ClaimStatus};
pub use claims_transactions::{ClaimTransaction, PaymentMethod, TransactionType, TransferType};
pub use conditions::Condition;
pub use devices::Device;
pub use encounters::{Encounter, EncounterClass};
pub use imaging_studies::{ImagingStudy, Modality};
pub use immunizations::Immunization;
pub use medications::Medication;
pub use observations::{Observation, ObservationType, ObservationValue};
pub use organizations::Organization;
pub use patients::{Gender, MaritalStatus, Patient};
pub use payer_transitions::{PayerTransition, PolicyOwnership};
pub use payers::Payer;
pub use procedures::Procedure;
pub use providers::Provider;
pub use supplies::Supply;
