use super::text::{render_breakdown, render_intro, render_loading};
use super::*;
use crate::model::counts::CategoryCounts;
use std::path::Path;

#[test]
fn test_category_stats_order_and_rounding() {
    let stats = category_stats(&CategoryCounts::from_counts(1, 1, 1));
    let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["masculine", "neutral", "feminine"]);
    assert!(stats.iter().all(|s| s.percentage == 33.3));
}

#[test]
fn test_breakdown_lines() {
    let text = render_breakdown(&CategoryCounts::from_counts(3, 1, 1));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "",
            "Here is the breakdown of robots by perceived gender:",
            "  Masculine: 3 robots (60.0%)",
            "  Neutral: 1 robots (20.0%)",
            "  Feminine: 1 robots (20.0%)",
        ]
    );
}

#[test]
fn test_breakdown_empty_dataset() {
    let text = render_breakdown(&CategoryCounts::default());
    assert!(text.contains("  Neutral: 0 robots (0.0%)"));
}

#[test]
fn test_intro_and_loading() {
    let intro = render_intro();
    assert!(intro.contains("Dataset: ROBO-GAP (Perugia et al., 2022)"));
    assert!(intro.contains("Source: https://robo-gap.unisi.it/"));
    assert_eq!(
        render_loading(Path::new("ROBO-GAP_dataset.csv")),
        "\nLoading data from 'ROBO-GAP_dataset.csv'...\n"
    );
}
