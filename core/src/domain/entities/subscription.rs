//! Subscription tiers a user can be on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier, serialized lower-case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Subscription {
    #[default]
    Starter,
    Pro,
    Business,
}

impl Subscription {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subscription::Starter => "starter",
            Subscription::Pro => "pro",
            Subscription::Business => "business",
        }
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subscription {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starter" => Ok(Subscription::Starter),
            "pro" => Ok(Subscription::Pro),
            "business" => Ok(Subscription::Business),
            other => Err(format!("unknown subscription: {}", other)),
        }
    }
}
