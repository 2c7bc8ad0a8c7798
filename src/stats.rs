use std::collections::HashMap;

use crate::join::JoinedRow;

/// Per-type carbon statistics, in first-seen group order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub landcover_type: &'static str,
    pub mean: f64,
    pub std_dev: Option<f64>,
}

/// Groups joined rows by land-cover type and computes the mean (and, when
/// requested, the population standard deviation) of the present carbon
/// values in each group. Absent carbon values are excluded from the
/// statistics, not treated as zero; groups are emitted in the order their
/// type was first encountered while scanning the land-cover grid.
pub fn aggregate(rows: &[JoinedRow], with_std_dev: bool) -> Vec<AggregateRow> {
    let mut groups: Vec<GroupStats> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.landcover_type).or_insert_with(|| {
            groups.push(GroupStats::new(row.landcover_type));
            groups.len() - 1
        });
        if let Some(carbon) = row.carbon {
            groups[slot].add_carbon(carbon);
        }
    }

    groups
        .iter()
        .map(|group| AggregateRow {
            landcover_type: group.landcover_type,
            mean: group.mean(),
            std_dev: with_std_dev.then(|| group.population_std_dev()),
        })
        .collect()
}

/// Header list for the rendered report.
pub fn report_headers(with_std_dev: bool) -> Vec<String> {
    let mut headers = vec!["Landcover Type".to_string(), "Mean carbon".to_string()];
    if with_std_dev {
        headers.push("SD carbon".to_string());
    }
    headers
}

/// Formats aggregate rows as table cells.
pub fn render_rows(rows: &[AggregateRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            let mut cells = vec![row.landcover_type.to_string(), format_carbon(row.mean)];
            if let Some(std_dev) = row.std_dev {
                cells.push(format_carbon(std_dev));
            }
            cells
        })
        .collect()
}

struct GroupStats {
    landcover_type: &'static str,
    count: usize,
    sum: f64,
    sum_squares: f64,
}

impl GroupStats {
    fn new(landcover_type: &'static str) -> Self {
        Self {
            landcover_type,
            count: 0,
            sum: 0.0,
            sum_squares: 0.0,
        }
    }

    fn add_carbon(&mut self, carbon: u32) {
        let value = f64::from(carbon);
        self.count += 1;
        self.sum += value;
        self.sum_squares += value * value;
    }

    // A group with no present values reports 0, never NaN.
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    // Population standard deviation: the sum of squared deviations is
    // divided by N, not N - 1.
    fn population_std_dev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self.sum_squares / self.count as f64 - mean * mean;
        variance.max(0.0).sqrt()
    }
}

// Whole numbers render without a decimal point; everything else keeps the
// shortest representation that round-trips, so 130.0 and 130.00000001 stay
// distinguishable and a population stddev never collapses into its sample
// counterpart.
fn format_carbon(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(landcover_type: &'static str, carbon: Option<u32>) -> JoinedRow {
        JoinedRow {
            landcover_type,
            carbon,
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let rows = vec![
            row("savannas", Some(10)),
            row("water", Some(0)),
            row("savannas", Some(20)),
            row("croplands", Some(5)),
        ];
        let report = aggregate(&rows, false);
        let order = report
            .iter()
            .map(|r| r.landcover_type)
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["savannas", "water", "croplands"]);
    }

    #[test]
    fn absent_carbon_is_excluded_from_the_mean() {
        let rows = vec![
            row("grasslands", Some(100)),
            row("grasslands", None),
            row("grasslands", Some(200)),
        ];
        let report = aggregate(&rows, false);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].mean, 150.0);
    }

    #[test]
    fn group_with_no_present_values_defaults_to_zero() {
        let rows = vec![row("snow and ice", None), row("snow and ice", None)];
        let report = aggregate(&rows, true);
        assert_eq!(report[0].mean, 0.0);
        assert_eq!(report[0].std_dev, Some(0.0));
    }

    #[test]
    fn std_dev_is_population_not_sample() {
        let rows = vec![
            row("woody savannas", Some(196)),
            row("woody savannas", Some(54)),
            row("woody savannas", Some(140)),
        ];
        let report = aggregate(&rows, true);
        assert_eq!(report[0].mean, 130.0);

        let values = [196.0_f64, 54.0, 140.0];
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let squared = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
        let population = (squared / values.len() as f64).sqrt();
        let sample = (squared / (values.len() as f64 - 1.0)).sqrt();

        let std_dev = report[0].std_dev.expect("stddev requested");
        assert!((std_dev - population).abs() < 1e-9);
        assert!((std_dev - sample).abs() > 1.0, "population and sample must differ");
        assert!(format_carbon(std_dev).starts_with("58.40"));
    }

    #[test]
    fn std_dev_column_only_appears_when_requested() {
        let rows = vec![row("water", Some(0))];
        assert!(aggregate(&rows, false)[0].std_dev.is_none());
        assert_eq!(report_headers(false).len(), 2);
        assert_eq!(report_headers(true).last().map(String::as_str), Some("SD carbon"));
    }

    #[test]
    fn whole_numbers_render_without_decimals() {
        assert_eq!(format_carbon(130.0), "130");
        assert_eq!(format_carbon(0.0), "0");
        assert_ne!(format_carbon(130.000_000_01), "130");
    }
}
