use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// What a goal measures. Decides the default unit and how values are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum GoalType {
    #[serde(rename = "1rep")]
    OneRepMax,
    #[serde(rename = "max_reps")]
    MaxReps,
    #[serde(rename = "time")]
    Time,
    #[serde(rename = "distance")]
    Distance,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown goal type: '{0}'")]
pub struct ParseGoalTypeError(pub String);

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneRepMax => "1rep",
            Self::MaxReps => "max_reps",
            Self::Time => "time",
            Self::Distance => "distance",
        }
    }

    /// Unit used when the goal is created without one
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::OneRepMax => "lbs",
            Self::MaxReps => "reps",
            Self::Time => "seconds",
            Self::Distance => "miles",
        }
    }

    /// Time goals are entered as minutes + seconds and stored as total seconds
    pub fn is_timed(&self) -> bool {
        matches!(self, Self::Time)
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = ParseGoalTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1rep" => Ok(Self::OneRepMax),
            "max_reps" => Ok(Self::MaxReps),
            "time" => Ok(Self::Time),
            "distance" => Ok(Self::Distance),
            other => Err(ParseGoalTypeError(other.to_string())),
        }
    }
}

impl TryFrom<String> for GoalType {
    type Error = ParseGoalTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
