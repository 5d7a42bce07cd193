//! People domain module.
//!
//! This crate contains the records the API accepts and returns, together with
//! their field constraints, implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod contact;
pub mod directory;
pub mod image;
pub mod location;
pub mod login;
pub mod person;

pub use contact::{ContactMessage, ContactReceipt};
pub use directory::{PersonDirectory, PersonId, UNKNOWN_PERSON_MESSAGE};
pub use image::{ImageSummary, size_in_kb};
pub use location::{Country, Location};
pub use login::{LOGIN_MESSAGE, LoginForm, LoginResult};
pub use person::{HairColor, Person, PersonProfile, RelocatedPerson};
