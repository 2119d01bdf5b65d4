//! Color tokens for rendering grades and scores.
//!
//! Values are Tailwind CSS class names, consumed as-is by the front end.

use horeca_map_score_models::{Grade, GradeColors};

/// Badge colors for a grade.
#[must_use]
pub const fn grade_colors(grade: Grade) -> GradeColors {
    match grade {
        Grade::APlus => GradeColors {
            background: "bg-emerald-100",
            text: "text-emerald-800",
            border: "border-emerald-300",
        },
        Grade::A => GradeColors {
            background: "bg-green-100",
            text: "text-green-800",
            border: "border-green-300",
        },
        Grade::BPlus => GradeColors {
            background: "bg-lime-100",
            text: "text-lime-800",
            border: "border-lime-300",
        },
        Grade::B => GradeColors {
            background: "bg-yellow-100",
            text: "text-yellow-800",
            border: "border-yellow-300",
        },
        Grade::CPlus => GradeColors {
            background: "bg-amber-100",
            text: "text-amber-800",
            border: "border-amber-300",
        },
        Grade::C => GradeColors {
            background: "bg-orange-100",
            text: "text-orange-800",
            border: "border-orange-300",
        },
        Grade::D => GradeColors {
            background: "bg-red-100",
            text: "text-red-800",
            border: "border-red-300",
        },
        Grade::F => GradeColors {
            background: "bg-red-200",
            text: "text-red-900",
            border: "border-red-400",
        },
    }
}

/// Single background token for a raw 0-100 score.
#[must_use]
pub const fn score_background(score: u8) -> &'static str {
    match score {
        85.. => "bg-emerald-500",
        70..=84 => "bg-green-500",
        55..=69 => "bg-yellow-500",
        40..=54 => "bg-orange-500",
        _ => "bg-red-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_background_bands() {
        assert_eq!(score_background(100), "bg-emerald-500");
        assert_eq!(score_background(85), "bg-emerald-500");
        assert_eq!(score_background(84), "bg-green-500");
        assert_eq!(score_background(70), "bg-green-500");
        assert_eq!(score_background(55), "bg-yellow-500");
        assert_eq!(score_background(40), "bg-orange-500");
        assert_eq!(score_background(39), "bg-red-500");
        assert_eq!(score_background(0), "bg-red-500");
    }

    #[test]
    fn every_grade_has_consistent_tokens() {
        for grade in Grade::all() {
            let colors = grade_colors(*grade);
            assert!(colors.background.starts_with("bg-"));
            assert!(colors.text.starts_with("text-"));
            assert!(colors.border.starts_with("border-"));
        }
        assert_ne!(grade_colors(Grade::APlus), grade_colors(Grade::F));
    }
}
