//! # Panchanga environment state
//!
//! This module defines [`PanchangaEnv`], the small environment object holding
//! the engine's only I/O resource: a persistent **HTTP client** used by the
//! verification orchestrator to fetch a secondary rendering of the Panchang.
//!
//! The client is a [`ureq::Agent`] with a global timeout configured at
//! construction, so every outbound request is bounded — the verifier never
//! waits indefinitely. The object is cheaply cloneable and carries no other
//! state; the computation modules are pure and never touch it.

use std::time::Duration;

use ureq::Agent;

use crate::panchanga_errors::PanchangaError;

/// Holds the HTTP client shared by all verification fetches.
#[derive(Debug, Clone)]
pub struct PanchangaEnv {
    pub http_client: Agent,
}

impl PanchangaEnv {
    /// Create a new environment with a bounded HTTP client.
    ///
    /// Arguments
    /// ---------------
    /// * `timeout`: global timeout applied to every request made through the
    ///   client (connect + transfer)
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        let agent: Agent = config.into();

        PanchangaEnv { http_client: agent }
    }

    /// Perform a GET request and return the response body as text.
    ///
    /// Any transport or timeout failure surfaces as a
    /// [`PanchangaError::UreqHttpError`]; the caller (the verifier) absorbs
    /// it rather than propagating.
    pub(crate) fn get_from_url(&self, url: &str) -> Result<String, PanchangaError> {
        let mut response = self.http_client.get(url).call()?;
        let body = response.body_mut().read_to_string()?;
        Ok(body)
    }
}
