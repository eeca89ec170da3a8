//! Raw activity records supplied by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schedule::Scheduling;
use crate::types::{Category, ItemId};

/// One scheduled activity as stored by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: ItemId,
    pub name: String,
    /// Explicit ordering within a time slot. Lower sorts first.
    #[serde(default)]
    pub display_order: i32,
    pub scheduling: Scheduling,
    pub kind: ActivityKind,
}

impl ActivityRecord {
    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }
}

/// Category-specific fields, tagged by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ActivityKind {
    Meal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        meal_type: Option<MealType>,
        #[serde(default)]
        calories: u32,
        #[serde(default)]
        protein_g: u32,
        #[serde(default)]
        carbs_g: u32,
        #[serde(default)]
        fat_g: u32,
    },
    Supplement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dosage: Option<String>,
    },
    Workout {
        #[serde(default)]
        estimated_minutes: u32,
    },
    Lifestyle,
}

impl ActivityKind {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Meal { .. } => Category::Meal,
            Self::Supplement { .. } => Category::Supplement,
            Self::Workout { .. } => Category::Workout,
            Self::Lifestyle => Category::Lifestyle,
        }
    }

    /// Meal type, the only category subtype that splits grouping slots.
    #[must_use]
    pub const fn meal_type(&self) -> Option<MealType> {
        match self {
            Self::Meal { meal_type, .. } => *meal_type,
            _ => None,
        }
    }
}

/// Which meal of the day a meal record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }

    /// Heading for a grouped meal block, e.g. "Breakfast".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_record_deserializes() {
        let json = r#"{
            "id": "m1",
            "name": "Oats",
            "display_order": 2,
            "scheduling": {"mode": "fixed", "time_start": "08:00"},
            "kind": {"category": "meal", "meal_type": "breakfast", "calories": 350, "protein_g": 12}
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category(), Category::Meal);
        assert_eq!(record.display_order, 2);
        assert_eq!(record.kind.meal_type(), Some(MealType::Breakfast));
        assert!(matches!(
            record.kind,
            ActivityKind::Meal {
                calories: 350,
                protein_g: 12,
                carbs_g: 0,
                fat_g: 0,
                ..
            }
        ));
    }

    #[test]
    fn lifestyle_record_defaults_display_order() {
        let json = r#"{
            "id": "l1",
            "name": "Walk",
            "scheduling": {"mode": "period", "time_period": "evening"},
            "kind": {"category": "lifestyle"}
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_order, 0);
        assert_eq!(record.category(), Category::Lifestyle);
        assert_eq!(record.kind.meal_type(), None);
    }

    #[test]
    fn record_rejects_unknown_category() {
        let json = r#"{
            "id": "x",
            "name": "Nap",
            "scheduling": {"mode": "all_day"},
            "kind": {"category": "sleep"}
        }"#;
        assert!(serde_json::from_str::<ActivityRecord>(json).is_err());
    }

    #[test]
    fn record_rejects_empty_id() {
        let json = r#"{
            "id": "",
            "name": "Creatine",
            "scheduling": {"mode": "all_day"},
            "kind": {"category": "supplement"}
        }"#;
        assert!(serde_json::from_str::<ActivityRecord>(json).is_err());
    }
}
