//! Layout command: resolve, group and pack day files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dl_core::{DayLayout, DayPlan, layout_days, minutes_to_time};

use crate::{Config, OutputFormat};

/// Reads one day file.
pub fn read_plan(path: &Path) -> Result<DayPlan> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read day file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse day file: {}", path.display()))
}

/// Runs the layout command.
pub fn run(files: &[PathBuf], config: &Config, json: bool) -> Result<()> {
    let plans = files
        .iter()
        .map(|path| read_plan(path))
        .collect::<Result<Vec<_>>>()?;

    let layouts = layout_days(&plans, &config.layout);
    tracing::debug!(days = layouts.len(), "laid out day files");

    let mut stdout = io::stdout().lock();
    match config.output_format(json) {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut stdout, &layouts)
                .context("failed to serialize layout")?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => {
            for (index, (layout, path)) in layouts.iter().zip(files).enumerate() {
                if index > 0 {
                    writeln!(stdout)?;
                }
                let label = layout
                    .date
                    .map_or_else(|| path.display().to_string(), |date| date.to_string());
                stdout.write_all(format_layout(layout, &label).as_bytes())?;
            }
        }
    }

    Ok(())
}

/// Formats one day as a lane listing.
pub fn format_layout(layout: &DayLayout, label: &str) -> String {
    let mut output = format!(
        "{label}  items: {}  lanes: {}  peak: {}\n",
        layout.items.len(),
        layout.lane_count,
        layout.max_concurrent
    );

    if layout.items.is_empty() {
        output.push_str("  (nothing scheduled)\n");
        return output;
    }

    for packed in &layout.items {
        let item = &packed.item;
        let mut line = format!(
            "  {}  {}-{}  {:<10}  {}",
            packed.lane,
            minutes_to_time(item.start_minutes),
            minutes_to_time(item.end_minutes),
            item.category.as_str(),
            item.title
        );

        if let Some(group) = &item.group {
            line.push_str(&format!(" ({})", group.item_names.join(", ")));
            if group.totals.calories > 0 {
                line.push_str(&format!(" [{} kcal]", group.totals.calories));
            }
            if group.totals.workout_minutes > 0 {
                line.push_str(&format!(" [{} min]", group.totals.workout_minutes));
            }
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use dl_core::{LayoutConfig, layout_plan};
    use insta::assert_snapshot;

    const SAMPLE_DAY: &str = r#"{
        "date": "2025-01-15",
        "records": [
            {
                "id": "oats",
                "name": "Oats",
                "display_order": 1,
                "scheduling": {"mode": "fixed", "time_start": "08:00"},
                "kind": {"category": "meal", "meal_type": "breakfast", "calories": 300}
            },
            {
                "id": "eggs",
                "name": "Eggs",
                "display_order": 2,
                "scheduling": {"mode": "fixed", "time_start": "08:00"},
                "kind": {"category": "meal", "meal_type": "breakfast", "calories": 150}
            },
            {
                "id": "fish-oil",
                "name": "Fish oil",
                "scheduling": {"mode": "relative", "anchor": "breakfast", "offset_minutes": 15},
                "kind": {"category": "supplement", "dosage": "1g"}
            },
            {
                "id": "walk",
                "name": "Walk",
                "scheduling": {"mode": "period", "time_period": "morning"},
                "kind": {"category": "lifestyle"}
            },
            {
                "id": "squat",
                "name": "Squat",
                "scheduling": {"mode": "fixed", "time_start": "17:00"},
                "kind": {"category": "workout", "estimated_minutes": 20}
            }
        ]
    }"#;

    fn sample_layout() -> DayLayout {
        let plan: DayPlan = serde_json::from_str(SAMPLE_DAY).unwrap();
        layout_plan(&plan, &LayoutConfig::default())
    }

    #[test]
    fn test_format_layout_lists_lanes() {
        let output = format_layout(&sample_layout(), "2025-01-15");
        assert_snapshot!(output.trim_end(), @r"
        2025-01-15  items: 4  lanes: 3  peak: 3
          0  05:00-12:00  lifestyle   Lifestyle (Walk)
          1  08:00-08:30  meal        Breakfast (Oats, Eggs) [450 kcal]
          2  08:15-08:45  supplement  Supplements (Fish oil)
          0  17:00-17:45  workout     Workout (Squat) [20 min]
        ");
    }

    #[test]
    fn test_format_layout_empty_day() {
        let layout = layout_plan(&DayPlan::default(), &LayoutConfig::default());
        let output = format_layout(&layout, "today.json");
        assert_snapshot!(output.trim_end(), @r"
        today.json  items: 0  lanes: 1  peak: 0
          (nothing scheduled)
        ");
    }

    #[test]
    fn test_read_plan_reports_path_on_bad_json() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_plan(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.json"));
    }

    #[test]
    fn test_read_plan_missing_file() {
        let err = read_plan(Path::new("/nonexistent/day.json")).unwrap_err();
        assert!(format!("{err}").starts_with("failed to read day file"));
    }
}
