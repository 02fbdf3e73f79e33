mod recommendation;
mod report;
pub mod views;

pub use recommendation::{MatchStrength, Recommendation, MAYBE_THRESHOLD, YES_THRESHOLD};
pub use report::AssessmentReport;
pub use views::{AssessmentResults, CoreScoreEntry, DimensionEntry, JobMatch, LearningPhase};

use super::domain::WiscarDimension;
use super::scoring::{CombinedScores, FinalScores};

pub fn render(scores: &CombinedScores) -> AssessmentResults {
    render_final(&scores.final_scores())
}

pub fn render_final(scores: &FinalScores) -> AssessmentResults {
    let average_score =
        (scores.psychometric_fit + scores.technical_readiness + scores.overall_confidence) / 3.0;
    let tier = Recommendation::from_average(average_score);

    AssessmentResults {
        tier,
        tier_label: tier.label(),
        message: tier.message(),
        average_score,
        confidence_percent: round_percent(scores.overall_confidence),
        core_scores: core_scores(scores),
        dimension_breakdown: dimension_breakdown(scores),
        job_matches: job_matches(scores),
        learning_path: learning_path(),
    }
}

fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn core_scores(scores: &FinalScores) -> Vec<CoreScoreEntry> {
    [
        (
            "Psychological Fit",
            "Personality traits and motivation alignment",
            scores.psychometric_fit,
        ),
        (
            "Technical Readiness",
            "Current knowledge and aptitude level",
            scores.technical_readiness,
        ),
        (
            "Overall Confidence",
            "Combined readiness and career fit",
            scores.overall_confidence,
        ),
    ]
    .into_iter()
    .map(|(label, description, score)| CoreScoreEntry {
        label,
        description,
        score,
        rounded: round_percent(score),
    })
    .collect()
}

fn dimension_score(scores: &FinalScores, dimension: WiscarDimension) -> f64 {
    match dimension {
        WiscarDimension::Will => scores.w_score,
        WiscarDimension::Interest => scores.i_score,
        WiscarDimension::Skill => scores.s_score,
        WiscarDimension::Cognitive => scores.c_score,
        WiscarDimension::AbilityToLearn => scores.a_score,
        WiscarDimension::RealWorld => scores.r_score,
    }
}

fn dimension_breakdown(scores: &FinalScores) -> Vec<DimensionEntry> {
    WiscarDimension::ordered()
        .into_iter()
        .map(|dimension| {
            let score = dimension_score(scores, dimension);
            DimensionEntry {
                dimension,
                letter: dimension.letter(),
                name: dimension.name(),
                description: dimension.description(),
                score,
                rounded: round_percent(score),
            }
        })
        .collect()
}

fn job_matches(scores: &FinalScores) -> Vec<JobMatch> {
    let technical = scores.technical_readiness;
    [
        (
            "Market Research Analyst",
            "Data collection and interpretation for business insights",
            technical,
        ),
        (
            "Consumer Insights Specialist",
            "Focus on consumer behavior trends and patterns",
            scores.psychometric_fit,
        ),
        (
            "Data Analyst (Marketing)",
            "Analyze marketing data and campaign effectiveness",
            (technical + scores.c_score) / 2.0,
        ),
        (
            "Business Intelligence Analyst",
            "Integrate market research into business strategy",
            (technical + scores.r_score) / 2.0,
        ),
    ]
    .into_iter()
    .map(|(title, description, match_percent)| JobMatch {
        title,
        description,
        match_percent,
        rounded: round_percent(match_percent),
        strength: MatchStrength::from_percent(match_percent),
    })
    .collect()
}

fn learning_path() -> Vec<LearningPhase> {
    vec![
        LearningPhase {
            step: 1,
            title: "Foundation",
            topics: vec![
                "Intro to Market Research",
                "Basic Statistics",
                "Excel/Spreadsheets",
            ],
        },
        LearningPhase {
            step: 2,
            title: "Intermediate",
            topics: vec![
                "Survey Design",
                "Data Analysis Tools",
                "Consumer Psychology",
            ],
        },
        LearningPhase {
            step: 3,
            title: "Job-Ready",
            topics: vec!["Real Projects", "Internships", "Certification"],
        },
    ]
}
