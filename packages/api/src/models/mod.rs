mod donor;
mod payload;

pub use donor::{DonorKind, DonorRecord};
pub use payload::{LoginPayload, LoginResponse, RegisterResponse, RegistrationPayload};
