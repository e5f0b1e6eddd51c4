pub mod constants;
pub mod elements;
pub mod env_state;
pub mod ephemeris;
pub mod muhurat;
pub mod occasions;
pub mod panchanga;
pub mod panchanga_errors;
pub mod record;
pub mod solar;
pub mod time;
mod verify;
