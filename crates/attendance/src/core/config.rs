// Process-wide configuration, fixed at boot.
//
// Purpose
// - Carry the number of sign-in events and the participant capacity cap.
//
// Responsibilities
// - Both values must be positive. A bad value is terminal for the whole
//   session: nothing else is constructed and no store call is made.

use thiserror::Error;

pub const TOTAL_SIGN_INS_VAR: &str = "ATTENDANCE_TOTAL_SIGN_INS";
pub const MAX_PARTICIPANTS_VAR: &str = "ATTENDANCE_MAX_PARTICIPANTS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got \"{value}\"")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub total_sign_ins: usize,
    pub max_participants: usize,
}

impl AppConfig {
    pub const DEFAULT_TOTAL_SIGN_INS: usize = 6;
    pub const DEFAULT_MAX_PARTICIPANTS: usize = 50;

    pub fn new(total_sign_ins: usize, max_participants: usize) -> Result<Self, ConfigError> {
        if total_sign_ins == 0 {
            return Err(ConfigError::Invalid {
                name: TOTAL_SIGN_INS_VAR,
                value: total_sign_ins.to_string(),
            });
        }
        if max_participants == 0 {
            return Err(ConfigError::Invalid {
                name: MAX_PARTICIPANTS_VAR,
                value: max_participants.to_string(),
            });
        }
        Ok(Self {
            total_sign_ins,
            max_participants,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let total_sign_ins = read_positive(
            TOTAL_SIGN_INS_VAR,
            Self::DEFAULT_TOTAL_SIGN_INS,
            &lookup,
        )?;
        let max_participants = read_positive(
            MAX_PARTICIPANTS_VAR,
            Self::DEFAULT_MAX_PARTICIPANTS,
            &lookup,
        )?;
        Self::new(total_sign_ins, max_participants)
    }
}

fn read_positive(
    name: &'static str,
    default: usize,
    lookup: &impl Fn(&'static str) -> Option<String>,
) -> Result<usize, ConfigError> {
    match lookup(name) {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| ConfigError::Invalid {
            name,
            value: raw,
        }),
        None => Ok(default),
    }
}
