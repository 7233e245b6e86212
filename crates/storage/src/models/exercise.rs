use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An exercise inside a workout, with its ordered sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Exercise {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    /// Free-text category label ("Chest", "Cardio", "Core", ...)
    pub category: String,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl Exercise {
    pub fn kind(&self) -> ExerciseCategory {
        ExerciseCategory::classify(&self.category)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SetType {
    Warmup,
    #[default]
    Working,
}

/// One performed set. Numeric fields keep the text the user typed; they are
/// only turned into numbers through [`WorkoutSet::metrics`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSet {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "type", default)]
    pub set_type: SetType,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub minutes: Option<String>,
    #[serde(default, deserialize_with = "text_or_number", skip_serializing_if = "Option::is_none")]
    pub seconds: Option<String>,
}

/// How an exercise's sets are aggregated. Anything that is not "core" or
/// "cardio" counts as strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseCategory {
    Strength,
    Core,
    Cardio,
}

impl ExerciseCategory {
    pub fn classify(category: &str) -> Self {
        match category.to_lowercase().as_str() {
            "core" => Self::Core,
            "cardio" => Self::Cardio,
            _ => Self::Strength,
        }
    }
}

/// Numeric view of a set, shaped by the category of its exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetMetrics {
    Strength { reps: Decimal, weight: Decimal },
    Core { reps: Decimal, duration_secs: Decimal },
    Cardio { distance: Decimal, duration_secs: Decimal },
}

impl WorkoutSet {
    pub fn metrics(&self, category: ExerciseCategory) -> SetMetrics {
        match category {
            ExerciseCategory::Strength => SetMetrics::Strength {
                reps: parse_measure(self.reps.as_deref()),
                weight: parse_measure(self.weight.as_deref()),
            },
            ExerciseCategory::Core => SetMetrics::Core {
                reps: parse_measure(self.reps.as_deref()),
                duration_secs: self.duration_secs(),
            },
            ExerciseCategory::Cardio => SetMetrics::Cardio {
                distance: parse_measure(self.distance.as_deref()),
                duration_secs: self.duration_secs(),
            },
        }
    }

    pub fn duration_secs(&self) -> Decimal {
        minutes_seconds_to_secs(self.minutes.as_deref(), self.seconds.as_deref())
    }
}

/// Parses a user-entered number. Blank, missing or unparseable text is 0.
pub fn parse_measure(raw: Option<&str>) -> Decimal {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| Decimal::from_str(s).ok())
        .unwrap_or(Decimal::ZERO)
}

/// `minutes * 60 + seconds`, each side coerced with [`parse_measure`].
/// Saturates instead of overflowing.
pub fn minutes_seconds_to_secs(minutes: Option<&str>, seconds: Option<&str>) -> Decimal {
    parse_measure(minutes)
        .saturating_mul(Decimal::from(60))
        .saturating_add(parse_measure(seconds))
}

// Clients send set fields either as typed text or as JSON numbers.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(reps: &str, weight: &str) -> WorkoutSet {
        WorkoutSet {
            reps: Some(reps.to_string()),
            weight: Some(weight.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(ExerciseCategory::classify("Cardio"), ExerciseCategory::Cardio);
        assert_eq!(ExerciseCategory::classify("CORE"), ExerciseCategory::Core);
        assert_eq!(ExerciseCategory::classify("Chest"), ExerciseCategory::Strength);
        assert_eq!(ExerciseCategory::classify(""), ExerciseCategory::Strength);
    }

    #[test]
    fn test_parse_measure_tolerates_bad_input() {
        assert_eq!(parse_measure(Some("12.5")), Decimal::new(125, 1));
        assert_eq!(parse_measure(Some(" 8 ")), Decimal::from(8));
        assert_eq!(parse_measure(Some("")), Decimal::ZERO);
        assert_eq!(parse_measure(Some("abc")), Decimal::ZERO);
        assert_eq!(parse_measure(None), Decimal::ZERO);
    }

    #[test]
    fn test_minutes_seconds_saturate() {
        assert_eq!(minutes_seconds_to_secs(Some("2"), Some("5")), Decimal::from(125));

        let max = Decimal::MAX.to_string();
        assert_eq!(minutes_seconds_to_secs(Some(&max), Some("59")), Decimal::MAX);
    }

    #[test]
    fn test_metrics_follow_category() {
        let strength = set("5", "100").metrics(ExerciseCategory::Strength);
        assert_eq!(
            strength,
            SetMetrics::Strength {
                reps: Decimal::from(5),
                weight: Decimal::from(100)
            }
        );

        let cardio = WorkoutSet {
            distance: Some("2".to_string()),
            minutes: Some("10".to_string()),
            seconds: Some("30".to_string()),
            ..Default::default()
        }
        .metrics(ExerciseCategory::Cardio);
        assert_eq!(
            cardio,
            SetMetrics::Cardio {
                distance: Decimal::from(2),
                duration_secs: Decimal::from(630)
            }
        );
    }

    #[test]
    fn test_set_accepts_numbers_and_text() {
        let json = r#"{"type": "warmup", "reps": 5, "weight": "102.5"}"#;
        let parsed: WorkoutSet = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.set_type, SetType::Warmup);
        assert_eq!(parsed.reps.as_deref(), Some("5"));
        assert_eq!(parsed.weight.as_deref(), Some("102.5"));
        assert_eq!(parsed.distance, None);
    }

    #[test]
    fn test_missing_ids_are_assigned() {
        let json = r#"{"name": "Plank", "category": "Core", "sets": [{}]}"#;
        let parsed: Exercise = serde_json::from_str(json).unwrap();

        assert!(!parsed.id.is_nil());
        assert_eq!(parsed.sets.len(), 1);
        assert_eq!(parsed.sets[0].set_type, SetType::Working);
        assert_eq!(parsed.kind(), ExerciseCategory::Core);
    }
}
