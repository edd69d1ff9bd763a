use crate::models::lighthouse::category::{Categories, Category, CategoryScores};
use std::collections::HashMap;

// Rescale one run's raw [0,1] category scores to the 0-100 scale. A
// category Lighthouse did not score stays absent.
pub fn scale_scores(categories: &Categories) -> CategoryScores {
    let scale =
        |category: &Option<Category>| category.as_ref().and_then(|c| c.score).map(|s| s * 100.0);

    CategoryScores {
        performance: scale(&categories.performance),
        accessibility: scale(&categories.accessibility),
        best_practices: scale(&categories.best_practices),
        seo: scale(&categories.seo),
    }
}

// Fold one run's scores into the per-category series.
pub fn accumulate_scores(series: &mut HashMap<&'static str, Vec<f64>>, scores: &CategoryScores) {
    for (key, value) in scores.fields() {
        if let Some(score) = value {
            series.entry(key).or_insert(Vec::new()).push(score);
        }
    }
}

/// Mean per category over the runs in which the category was present. A
/// run without the category contributes nothing; it is not counted as zero.
pub fn compute_averages(series: &HashMap<&'static str, Vec<f64>>) -> CategoryScores {
    let mean = |key: &str| {
        series
            .get(key)
            .filter(|values| !values.is_empty())
            .map(|values| values.iter().sum::<f64>() / values.len() as f64)
    };

    CategoryScores {
        performance: mean("performance"),
        accessibility: mean("accessibility"),
        best_practices: mean("best_practices"),
        seo: mean("seo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_three_scores_is_exact() {
        let mut series = HashMap::new();
        series.insert("performance", vec![80.0, 100.0, 60.0]);
        let averaged = compute_averages(&series);
        assert_eq!(averaged.performance, Some(80.0));
    }

    #[test]
    fn absent_category_stays_absent() {
        let mut series = HashMap::new();
        series.insert("seo", vec![90.0]);
        let averaged = compute_averages(&series);
        assert_eq!(averaged.seo, Some(90.0));
        assert_eq!(averaged.accessibility, None);
    }

    #[test]
    fn runs_missing_a_category_do_not_drag_the_mean() {
        let mut series: HashMap<&'static str, Vec<f64>> = HashMap::new();
        // three runs, accessibility only present in two of them
        accumulate_scores(
            &mut series,
            &CategoryScores {
                performance: Some(50.0),
                accessibility: Some(80.0),
                ..Default::default()
            },
        );
        accumulate_scores(
            &mut series,
            &CategoryScores {
                performance: Some(70.0),
                ..Default::default()
            },
        );
        accumulate_scores(
            &mut series,
            &CategoryScores {
                performance: Some(60.0),
                accessibility: Some(90.0),
                ..Default::default()
            },
        );
        let averaged = compute_averages(&series);
        assert_eq!(averaged.performance, Some(60.0));
        assert_eq!(averaged.accessibility, Some(85.0));
    }

    #[test]
    fn raw_scores_are_rescaled_to_hundred() {
        let categories = Categories {
            performance: Some(Category {
                score: Some(0.93),
                auditRefs: Vec::new(),
            }),
            accessibility: Some(Category {
                score: None,
                auditRefs: Vec::new(),
            }),
            best_practices: None,
            seo: None,
        };
        let scores = scale_scores(&categories);
        assert_eq!(scores.performance, Some(93.0));
        assert_eq!(scores.accessibility, None);
        assert_eq!(scores.best_practices, None);
    }
}
