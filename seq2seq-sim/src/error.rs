//! Error types for the simulation engine and the translation gateway

use crate::engine::Phase;

/// Classified failures from the translation gateway boundary
///
/// A gateway call completes exactly once, with either the translated text
/// or one of these kinds. The engine never retries; every failure pushes
/// the state machine back to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No credential was supplied to the provider
    MissingCredential,
    /// Network/connectivity failure before a response was obtained
    Transport(String),
    /// Remote service returned a non-success response; message verbatim
    Service(String),
    /// Success response whose payload is missing the expected shape
    MalformedResponse,
    /// Service answered with an empty or blank translation
    EmptyResult,
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::MissingCredential => write!(f, "No API credential configured"),
            GatewayError::Transport(msg) => write!(f, "Network error: {}", msg),
            GatewayError::Service(msg) => write!(f, "Translation service error: {}", msg),
            GatewayError::MalformedResponse => {
                write!(f, "Translation service returned an unexpected payload")
            }
            GatewayError::EmptyResult => write!(f, "Received an empty translation"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by the simulation control surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Blank or whitespace-only input text
    EmptyInput,
    /// Credential absent or still the placeholder value
    MissingCredential,
    /// Start requested while a run is active or finished but not reset
    NotIdle(Phase),
    /// The gateway call failed; the machine is back in `Idle`
    Gateway(GatewayError),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::EmptyInput => write!(f, "Please enter a sentence to translate"),
            SimError::MissingCredential => {
                write!(f, "API credential is missing; configure a key before translating")
            }
            SimError::NotIdle(phase) => {
                write!(f, "A translation can only start from Idle (current phase: {})", phase)
            }
            SimError::Gateway(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SimError {}

impl From<GatewayError> for SimError {
    fn from(err: GatewayError) -> Self {
        SimError::Gateway(err)
    }
}

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_messages() {
        assert_eq!(
            GatewayError::Service("quota exceeded".to_string()).to_string(),
            "Translation service error: quota exceeded"
        );
        assert_eq!(
            GatewayError::EmptyResult.to_string(),
            "Received an empty translation"
        );
    }

    #[test]
    fn test_sim_error_from_gateway() {
        let err: SimError = GatewayError::MalformedResponse.into();
        assert_eq!(err, SimError::Gateway(GatewayError::MalformedResponse));
    }

    #[test]
    fn test_not_idle_names_phase() {
        let msg = SimError::NotIdle(Phase::Decoding).to_string();
        assert!(msg.contains("Decoding"));
    }
}
