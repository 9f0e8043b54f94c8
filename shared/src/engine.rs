//! Brew scoring engine
//!
//! Scores a recipe against method-specific reference ranges for ratio,
//! temperature and time. Every dimension uses the same two-tier rule: full
//! marks inside the ideal interval, otherwise full marks minus a penalty
//! proportional to the distance from a target point, floored at zero.

use crate::flavor::predict_flavor;
use crate::models::{
    pourover_target_temp, BrewMethod, BrewQuality, Recipe, ScoreResult, RATIO_SCORE_MAX,
    TEMP_SCORE_MAX, TIME_SCORE_MAX,
};
use crate::validation::{is_in_range, validate_dose};

/// Points taken off the total when an immersion brew is not ground coarse
pub const GRIND_PENALTY: i32 = 5;

/// Partial result produced by a single method evaluator
#[derive(Debug, Clone, Default, PartialEq)]
struct Evaluation {
    ideal_ratio: &'static str,
    ideal_temp: &'static str,
    ideal_time: &'static str,
    ratio_score: i32,
    temp_score: i32,
    time_score: i32,
    /// Applied to the total only, never to a sub-score
    adjustment: i32,
    feedback: Vec<String>,
}

impl Evaluation {
    fn note(&mut self, message: impl Into<String>) {
        self.feedback.push(message.into());
    }
}

/// Score a recipe
///
/// Never fails: a non-positive dose yields a feedback-only result, every
/// other input is scored however extreme it is.
pub fn evaluate(recipe: &Recipe) -> ScoreResult {
    if let Err(message) = validate_dose(recipe.coffee_dose) {
        return ScoreResult {
            feedback: vec![message.to_string()],
            ..Default::default()
        };
    }

    let ratio = recipe.water_yield / recipe.coffee_dose;

    let evaluation = match recipe.brew_method() {
        BrewMethod::Espresso => evaluate_espresso(recipe, ratio),
        BrewMethod::Pourover => evaluate_pourover(recipe, ratio),
        BrewMethod::Aeropress => evaluate_aeropress(recipe, ratio),
        BrewMethod::FrenchPress => evaluate_french_press(recipe, ratio),
        BrewMethod::ColdBrew => evaluate_cold_brew(recipe, ratio),
    };

    let total_score = evaluation.ratio_score
        + evaluation.temp_score
        + evaluation.time_score
        + evaluation.adjustment;

    let quality = BrewQuality::classify(total_score);
    let mut feedback = Vec::with_capacity(evaluation.feedback.len() + 1);
    feedback.push(quality.message().to_string());
    feedback.extend(evaluation.feedback);

    ScoreResult {
        total_score,
        ratio_score: evaluation.ratio_score,
        temp_score: evaluation.temp_score,
        time_score: evaluation.time_score,
        feedback,
        ideal_ratio: evaluation.ideal_ratio.to_string(),
        ideal_temp: evaluation.ideal_temp.to_string(),
        ideal_time: evaluation.ideal_time.to_string(),
        calculated_ratio: ratio,
        flavor: predict_flavor(recipe, ratio),
    }
}

/// `cap - trunc(|raw - target| * multiplier)`, floored at zero
pub fn partial_credit(cap: i32, raw: f64, target: f64, multiplier: f64) -> i32 {
    // `as` saturates, so huge distances just bottom out at zero
    let penalty = ((raw - target).abs() * multiplier) as i32;
    cap.saturating_sub(penalty).max(0)
}

fn brew_time_in_range(recipe: &Recipe, min: i64, max: i64) -> bool {
    (min..=max).contains(&recipe.brew_time)
}

// ============================================================================
// Method Evaluators
// ============================================================================

fn evaluate_espresso(recipe: &Recipe, ratio: f64) -> Evaluation {
    let mut eval = Evaluation {
        ideal_ratio: "1:2 - 1:2.5",
        ideal_temp: "90 - 93 °C",
        ideal_time: "25 - 35 detik",
        ..Default::default()
    };

    if is_in_range(ratio, 1.8, 2.8) {
        eval.ratio_score = RATIO_SCORE_MAX;
        if ratio < 2.0 {
            eval.note("Rasio Ristretto (1:<2), akan menghasilkan bodi tebal dan rasa intens.");
        } else if ratio > 2.5 {
            eval.note(
                "Rasio Lungo (1:>2.5), akan menghasilkan ekstraksi lebih tinggi, berisiko over-ekstraksi.",
            );
        }
    } else {
        eval.ratio_score = partial_credit(RATIO_SCORE_MAX, ratio, 2.2, 15.0);
        eval.note(format!(
            "Rasio {:.1} kurang ideal untuk Espresso. Usahakan mendekati 1:2 hingga 1:2.5.",
            ratio
        ));
    }

    if is_in_range(recipe.temperature, 90.0, 93.0) {
        eval.temp_score = TEMP_SCORE_MAX;
    } else {
        eval.temp_score = partial_credit(TEMP_SCORE_MAX, recipe.temperature, 91.5, 5.0);
        if recipe.temperature < 90.0 {
            eval.note("Suhu terlalu rendah, berisiko under-ekstraksi (asam/sour).");
        } else {
            eval.note("Suhu terlalu tinggi, berisiko over-ekstraksi (pahit/harsh).");
        }
    }

    if brew_time_in_range(recipe, 25, 35) {
        eval.time_score = TIME_SCORE_MAX;
    } else {
        eval.time_score = partial_credit(TIME_SCORE_MAX, recipe.brew_time as f64, 30.0, 2.0);
        if recipe.brew_time < 25 {
            eval.note(
                "Waktu ekstraksi terlalu cepat. Coba haluskan ukuran gilingan (grind size).",
            );
        } else {
            eval.note("Waktu ekstraksi terlalu lama. Coba kasarkan ukuran gilingan (grind size).");
        }
    }

    eval
}

fn evaluate_pourover(recipe: &Recipe, ratio: f64) -> Evaluation {
    let mut eval = Evaluation {
        ideal_ratio: "1:15 - 1:17",
        ideal_temp: "90 - 96 °C",
        ideal_time: "150 - 210 detik (2.5 - 3.5 menit)",
        ..Default::default()
    };

    if is_in_range(ratio, 15.0, 17.0) {
        eval.ratio_score = RATIO_SCORE_MAX;
    } else {
        eval.ratio_score = partial_credit(RATIO_SCORE_MAX, ratio, 16.0, 4.0);
        if ratio < 15.0 {
            eval.note(format!(
                "Rasio {ratio:.1} (1:{ratio:.1}) cenderung menghasilkan kopi yang terlalu kuat/pekat."
            ));
        } else {
            eval.note(format!(
                "Rasio {ratio:.1} (1:{ratio:.1}) cenderung menghasilkan kopi yang watery/encer."
            ));
        }
    }

    let target_temp = pourover_target_temp(&recipe.roast_level);
    if (recipe.temperature - target_temp).abs() <= 2.0 {
        eval.temp_score = TEMP_SCORE_MAX;
    } else {
        eval.temp_score = partial_credit(TEMP_SCORE_MAX, recipe.temperature, target_temp, 3.0);
        if recipe.temperature < target_temp {
            eval.note(format!(
                "Suhu terlalu rendah untuk roasting {}. Coba naikkan ke ~{:.0}°C.",
                recipe.roast_level, target_temp
            ));
        } else {
            eval.note(format!(
                "Suhu terlalu tinggi untuk roasting {}. Coba turunkan ke ~{:.0}°C untuk menghindari kepahitan berlebih.",
                recipe.roast_level, target_temp
            ));
        }
    }

    if brew_time_in_range(recipe, 150, 210) {
        eval.time_score = TIME_SCORE_MAX;
    } else {
        eval.time_score = partial_credit(TIME_SCORE_MAX, recipe.brew_time as f64, 180.0, 0.5);
        if recipe.brew_time < 150 {
            eval.note("Waktu seduh terlalu cepat. Periksa ukuran gilingan (mungkin terlalu kasar) atau tuangan air (terlalu cepat).");
        } else {
            eval.note("Waktu seduh terlalu lama. Periksa ukuran gilingan (mungkin terlalu halus) yang menyebabkan genangan (stalling).");
        }
    }

    eval
}

fn evaluate_aeropress(recipe: &Recipe, ratio: f64) -> Evaluation {
    let mut eval = Evaluation {
        ideal_ratio: "1:10 - 1:14",
        ideal_temp: "80 - 90 °C",
        ideal_time: "90 - 150 detik",
        ..Default::default()
    };

    if is_in_range(ratio, 10.0, 14.0) {
        eval.ratio_score = RATIO_SCORE_MAX;
    } else {
        eval.ratio_score = partial_credit(RATIO_SCORE_MAX, ratio, 12.0, 5.0);
        eval.note(format!(
            "Rasio {:.1} kurang lazim untuk Aeropress. Idealnya 1:10 hingga 1:14 (tergantung bypass).",
            ratio
        ));
    }

    if is_in_range(recipe.temperature, 80.0, 90.0) {
        eval.temp_score = TEMP_SCORE_MAX;
    } else {
        eval.temp_score = partial_credit(TEMP_SCORE_MAX, recipe.temperature, 85.0, 2.0);
        if recipe.temperature > 90.0 {
            eval.note("Aeropress seringkali optimal di suhu yang lebih rendah (80-90°C) untuk menonjolkan sweetness.");
        }
    }

    if brew_time_in_range(recipe, 90, 150) {
        eval.time_score = TIME_SCORE_MAX;
    } else {
        eval.time_score = partial_credit(TIME_SCORE_MAX, recipe.brew_time as f64, 120.0, 1.0);
        eval.note("Waktu steep/plunge di luar kisaran tipikal (90-150s). Perhatikan keseimbangan ekstraksi.");
    }

    eval
}

fn evaluate_french_press(recipe: &Recipe, ratio: f64) -> Evaluation {
    let mut eval = Evaluation {
        ideal_ratio: "1:14 - 1:16",
        ideal_temp: "92 - 96 °C",
        ideal_time: "240 - 300 detik (4-5 menit)",
        ..Default::default()
    };

    if is_in_range(ratio, 14.0, 16.0) {
        eval.ratio_score = RATIO_SCORE_MAX;
    } else {
        eval.ratio_score = partial_credit(RATIO_SCORE_MAX, ratio, 15.0, 5.0);
        eval.note(format!(
            "Rasio {:.1}. French Press biasanya optimal di 1:15 untuk keseimbangan bodi dan kejernihan.",
            ratio
        ));
    }

    if is_in_range(recipe.temperature, 92.0, 96.0) {
        eval.temp_score = TEMP_SCORE_MAX;
    } else {
        eval.temp_score = partial_credit(TEMP_SCORE_MAX, recipe.temperature, 94.0, 2.0);
        if recipe.temperature < 92.0 {
            eval.note("Suhu terlalu rendah. French Press butuh panas untuk ekstraksi perendaman (immersion) yang optimal.");
        }
    }

    if brew_time_in_range(recipe, 240, 300) {
        eval.time_score = TIME_SCORE_MAX;
    } else {
        eval.time_score = partial_credit(TIME_SCORE_MAX, recipe.brew_time as f64, 270.0, 0.2);
        if recipe.brew_time < 240 {
            eval.note("Waktu seduh terlalu singkat untuk metode immersion. Kopi mungkin terasa kurang 'sweet' (underdev).");
        } else {
            eval.note("Waktu seduh sangat lama. Berisiko mengekstraksi rasa pahit yang tidak diinginkan.");
        }
    }

    if !recipe.is_coarse_grind() {
        eval.adjustment -= GRIND_PENALTY;
        eval.note("Peringatan: French Press sebaiknya menggunakan gilingan Coarse (Kasar) untuk menghindari endapan berlebih.");
    }

    eval
}

fn evaluate_cold_brew(recipe: &Recipe, ratio: f64) -> Evaluation {
    let mut eval = Evaluation {
        ideal_ratio: "1:8 - 1:12",
        ideal_temp: "4 - 25 °C",
        ideal_time: "12 - 24 jam (43200 - 86400 detik)",
        ..Default::default()
    };

    // Cold brew is usually a concentrate
    if is_in_range(ratio, 8.0, 12.0) {
        eval.ratio_score = RATIO_SCORE_MAX;
    } else {
        eval.ratio_score = partial_credit(RATIO_SCORE_MAX, ratio, 10.0, 3.0);
        eval.note("Rasio Cold Brew biasanya lebih pekat (1:8 - 1:12) karena ekstraksi dingin lebih lambat.");
    }

    // Only the upper bound matters
    if recipe.temperature <= 25.0 {
        eval.temp_score = TEMP_SCORE_MAX;
    } else {
        eval.temp_score = partial_credit(TEMP_SCORE_MAX, recipe.temperature, 25.0, 2.0);
        eval.note("Suhu terlalu tinggi untuk Cold Brew. Idealnya menggunakan air suhu ruang atau air dingin.");
    }

    // 12h to 24h
    if brew_time_in_range(recipe, 43_200, 86_400) {
        eval.time_score = TIME_SCORE_MAX;
    } else {
        eval.time_score =
            partial_credit(TIME_SCORE_MAX, recipe.brew_time as f64, 64_800.0, 0.0001);
        if recipe.brew_time < 43_200 {
            eval.note("Waktu ekstraksi Cold Brew biasanya minimal 12 jam.");
        }
    }

    if !recipe.is_coarse_grind() {
        eval.adjustment -= GRIND_PENALTY;
        eval.note(
            "Cold Brew sangat disarankan menggunakan gilingan Coarse agar hasil lebih bersih.",
        );
    }

    eval
}
