use std::cmp::Ordering;

use crate::chart::ChartMetadata;
use crate::config::{ScoringConfig, SkillPairing, SkillTable};
use crate::score::PlayMode;

/// Weighted skill contribution of one team.
///
/// `skills[0..5]` are matched with the table's multipliers according to its
/// pairing rule; `skills[5]` always gets the table's lead multiplier.
pub fn skill_contribution(skills: &[f64; 6], table: &SkillTable) -> f64 {
    let slots = &skills[..5];

    let paired: f64 = match table.pairing {
        SkillPairing::Sorted => {
            // Stable descending sort keeps slot order among equal skill scores
            let mut order = [0usize, 1, 2, 3, 4];
            order.sort_by(|&a, &b| {
                slots[b]
                    .partial_cmp(&slots[a])
                    .unwrap_or(Ordering::Equal)
            });

            let mut multipliers = table.multipliers;
            multipliers.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

            order
                .iter()
                .zip(multipliers)
                .map(|(&slot, multiplier)| slots[slot] * multiplier)
                .sum()
        }
        SkillPairing::Positional => slots
            .iter()
            .zip(table.multipliers)
            .map(|(skill, multiplier)| skill * multiplier)
            .sum(),
    };

    paired + skills[5] * table.lead()
}

/// Score percentage (1.0 = 100%) for one chart in one mode
pub fn score_percentage(chart: &ChartMetadata, mode: PlayMode, config: &ScoringConfig) -> f64 {
    let table = config.skill_table(mode);
    match mode {
        PlayMode::Solo => chart.base_score + skill_contribution(&chart.skill_score_solo, table),
        PlayMode::Auto => {
            chart.base_score_auto() + skill_contribution(chart.skill_score_auto(), table)
        }
        PlayMode::Multi => {
            chart.base_score
                + skill_contribution(&chart.skill_score_multi, table)
                + chart.fever_score * config.fever_weight
                + config.multi_combo_bonus
        }
    }
}

/// Raw score for one chart in one mode.
///
/// `power * percentage * 4`, truncated toward zero. Negative results clamp to 0.
pub fn compute_raw_score(chart: &ChartMetadata, mode: PlayMode, config: &ScoringConfig) -> u32 {
    let percentage = score_percentage(chart, mode, config);
    // `as` truncates toward zero and saturates (NaN and negatives become 0)
    (config.power * percentage * 4.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Difficulty, parse_chart_metadata};
    use crate::config::defaults;

    fn chart(skills: [f64; 6], base_score: f64, fever_score: f64) -> ChartMetadata {
        ChartMetadata {
            music_id: 2,
            difficulty: Difficulty::Master,
            music_time: Some(140.5),
            event_rate: Some(120),
            base_score,
            base_score_auto: None,
            skill_score_solo: skills,
            skill_score_auto: None,
            skill_score_multi: skills,
            fever_score,
            extra: Default::default(),
            source: None,
        }
    }

    fn uneven_chart() -> ChartMetadata {
        chart([0.05, 0.30, 0.10, 0.20, 0.15, 0.08], 1.1, 0.12)
    }

    #[test]
    fn test_raw_scores_match_reference_values() {
        let config = ScoringConfig::default();
        let chart = uneven_chart();

        assert_eq!(compute_raw_score(&chart, PlayMode::Solo, &config), 2_056_000);
        assert_eq!(compute_raw_score(&chart, PlayMode::Auto, &config), 1_656_000);
        assert_eq!(compute_raw_score(&chart, PlayMode::Multi, &config), 2_938_749);
    }

    #[test]
    fn test_sorted_pairing_gives_lead_to_strongest_slot() {
        let table = SkillTable::new(defaults::SOLO_SKILLS, SkillPairing::Sorted);
        let skills = [0.05, 0.30, 0.10, 0.20, 0.15, 0.08];

        // 0.30 takes the 1.2 lead multiplier even though it sits in slot 1
        let expected = 0.30 * 1.2 + 0.20 + 0.15 + 0.10 + 0.05 + 0.08 * 1.2;
        assert!((skill_contribution(&skills, &table) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_positional_pairing_regression() {
        let config = ScoringConfig::builder()
            .with_pairing(PlayMode::Auto, SkillPairing::Positional)
            .build();
        let chart = uneven_chart();

        // Slot 0 (0.05) keeps the lead multiplier under positional pairing
        assert_eq!(compute_raw_score(&chart, PlayMode::Auto, &config), 1_605_999);
        assert_eq!(
            compute_raw_score(&chart, PlayMode::Auto, &ScoringConfig::default()),
            1_656_000
        );
    }

    #[test]
    fn test_pairing_irrelevant_for_uniform_table() {
        let skills = [0.05, 0.30, 0.10, 0.20, 0.15, 0.08];
        let sorted = SkillTable::new(defaults::MULTI_SKILLS, SkillPairing::Sorted);
        let positional = SkillTable::new(defaults::MULTI_SKILLS, SkillPairing::Positional);
        assert!(
            (skill_contribution(&skills, &sorted) - skill_contribution(&skills, &positional))
                .abs()
                < 1e-12
        );
    }

    #[test]
    fn test_auto_uses_own_base_and_skills() {
        let json = r#"[{
            "music_id": 1,
            "difficulty": "easy",
            "base_score": 0.3,
            "base_score_auto": 0.3,
            "skill_score_solo": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "skill_score_auto": [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            "skill_score_multi": [0.02, 0.02, 0.02, 0.02, 0.02, 0.01],
            "fever_score": 0.05
        }]"#;
        let charts = parse_chart_metadata(json).unwrap();
        let config = ScoringConfig::default();
        assert_eq!(compute_raw_score(&charts[0], PlayMode::Auto, &config), 300_000);
        assert_eq!(compute_raw_score(&charts[0], PlayMode::Solo, &config), 416_000);
    }

    #[test]
    fn test_negative_percentage_clamps_to_zero() {
        let chart = chart([0.0; 6], -2.0, 0.0);
        let config = ScoringConfig::default();
        assert_eq!(compute_raw_score(&chart, PlayMode::Solo, &config), 0);
        assert_eq!(compute_raw_score(&chart, PlayMode::Multi, &config), 0);
    }

    #[test]
    fn test_power_scales_score() {
        let chart = uneven_chart();
        let doubled = ScoringConfig::builder().with_power(500_000.0).build();
        let base = compute_raw_score(&chart, PlayMode::Solo, &ScoringConfig::default());
        assert_eq!(compute_raw_score(&chart, PlayMode::Solo, &doubled), base * 2);
    }
}
