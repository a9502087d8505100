// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Free-body diagram (DCL) grading
//!
//! Expected forces are matched against the learner's arrows by name, or by
//! application point and direction when the learner labelled them
//! differently. Supports must match by type and position.

use nalgebra::Point2;

use crate::feedback::{FeedbackBuilder, FeedbackItem, FeedbackKind, FeedbackTarget};
use crate::model::{
    DclValidation, DiagramSchema, ExpectedForce, PlacedForce, PlacedSupport, Question, UserAnswer,
    ValidationDetail, ValidationResult,
};
use crate::utils::{angles_similar, distance, to_score};

/// Maximum distance between expected and placed application points
pub const POSITION_TOLERANCE: f64 = 20.0;

/// Maximum direction difference in degrees
pub const ANGLE_TOLERANCE_DEG: f64 = 15.0;

pub fn validate_dcl(question: &Question, answer: &UserAnswer) -> ValidationResult {
    match question.schema.as_ref().filter(|s| !s.is_empty()) {
        Some(schema) => grade_diagram(schema, &answer.placed_forces, &answer.placed_supports),
        None => ValidationResult::failure(
            FeedbackTarget::ForceDiagram,
            "no diagram defined for this question",
        ),
    }
}

/// Grade placed forces and supports against a non-empty schema
pub fn grade_diagram(
    schema: &DiagramSchema,
    placed_forces: &[PlacedForce],
    placed_supports: &[PlacedSupport],
) -> ValidationResult {
    let mut missing_forces = Vec::new();
    let mut wrong_directions = Vec::new();

    for expected in &schema.correct_forces {
        if let Some(placed) = placed_forces.iter().find(|p| same_name(&p.name, &expected.name)) {
            if !angles_similar(placed.angle, expected.angle, ANGLE_TOLERANCE_DEG) {
                wrong_directions.push(expected.name.clone());
            }
        } else if !placed_forces.iter().any(|p| geometric_match(p, expected)) {
            missing_forces.push(expected.name.clone());
        }
    }

    let extra_forces: Vec<String> = placed_forces
        .iter()
        .filter(|p| {
            !schema
                .correct_forces
                .iter()
                .any(|e| same_name(&p.name, &e.name) || geometric_match(p, e))
        })
        .map(|p| p.name.clone())
        .collect();

    let supports_correct = schema.correct_supports.iter().all(|expected| {
        let expected_pos = Point2::from(expected.position);
        placed_supports.iter().any(|placed| {
            same_name(&placed.support_type, &expected.support_type)
                && distance(&Point2::from(placed.position), &expected_pos) <= POSITION_TOLERANCE
        })
    });

    let force_count = schema.correct_forces.len();
    let support_count = schema.correct_supports.len();
    let total = force_count + support_count;
    let correct_forces = force_count.saturating_sub(missing_forces.len() + wrong_directions.len());
    let correct = correct_forces + if supports_correct { support_count } else { 0 };
    let score = to_score(100.0 * correct as f64 / total.max(1) as f64);
    let is_correct = score == 100;

    tracing::debug!(
        missing = missing_forces.len(),
        extra = extra_forces.len(),
        wrong_direction = wrong_directions.len(),
        supports_correct,
        score,
        "graded free-body diagram"
    );

    let target = FeedbackTarget::ForceDiagram;
    let mut fb = FeedbackBuilder::new();

    if !missing_forces.is_empty() {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Error,
                target,
                format!("Missing forces: {}", missing_forces.join(", ")),
            )
            .with_suggestion("Isolate the body and draw every load and support reaction"),
        );
    }
    if !extra_forces.is_empty() {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Warning,
                target,
                format!("Forces that do not act on this body: {}", extra_forces.join(", ")),
            )
            .with_suggestion("Only include forces exerted on the isolated body"),
        );
    }
    if !wrong_directions.is_empty() {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Error,
                target,
                format!("Wrong direction for: {}", wrong_directions.join(", ")),
            )
            .with_suggestion("Check the line of action of each force"),
        );
    }
    if !supports_correct {
        fb.push(
            FeedbackItem::new(
                FeedbackKind::Error,
                FeedbackTarget::Supports,
                "Supports are missing, misplaced or of the wrong type",
            )
            .with_suggestion("Match each support symbol to the constraint it represents"),
        );
    }
    if is_correct {
        fb.success(target, "Free-body diagram is complete and correct");
    }

    ValidationResult::new(is_correct, score, fb.build()).with_detail(
        ValidationDetail::DclValidation(DclValidation {
            forces_present: missing_forces.is_empty(),
            forces_correct: missing_forces.is_empty()
                && wrong_directions.is_empty()
                && extra_forces.is_empty(),
            supports_correct,
            directions_correct: wrong_directions.is_empty(),
            missing_forces,
            extra_forces,
            wrong_directions,
        }),
    )
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn geometric_match(placed: &PlacedForce, expected: &ExpectedForce) -> bool {
    distance(
        &Point2::from(placed.application_point),
        &Point2::from(expected.position),
    ) <= POSITION_TOLERANCE
        && angles_similar(placed.angle, expected.angle, ANGLE_TOLERANCE_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpectedSupport, Point, QuestionType};

    fn beam() -> Question {
        Question {
            schema: Some(DiagramSchema {
                correct_forces: vec![
                    ExpectedForce {
                        name: "W".into(),
                        angle: 270.0,
                        position: Point::new(100.0, 0.0),
                    },
                    ExpectedForce {
                        name: "Ay".into(),
                        angle: 90.0,
                        position: Point::new(0.0, 0.0),
                    },
                    ExpectedForce {
                        name: "By".into(),
                        angle: 90.0,
                        position: Point::new(200.0, 0.0),
                    },
                ],
                correct_supports: vec![ExpectedSupport {
                    support_type: "pin".into(),
                    position: Point::new(0.0, 0.0),
                }],
            }),
            ..Question::new(QuestionType::Dcl)
        }
    }

    fn force(name: &str, angle: f64, x: f64, y: f64) -> PlacedForce {
        PlacedForce {
            name: name.into(),
            angle,
            application_point: Point::new(x, y),
        }
    }

    fn pin() -> PlacedSupport {
        PlacedSupport {
            support_type: "Pin".into(),
            position: Point::new(5.0, 3.0),
        }
    }

    fn answer(forces: Vec<PlacedForce>, supports: Vec<PlacedSupport>) -> UserAnswer {
        UserAnswer {
            placed_forces: forces,
            placed_supports: supports,
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_diagram() {
        let a = answer(
            vec![
                force("W", 270.0, 100.0, 0.0),
                force("Ay", 90.0, 0.0, 0.0),
                force("By", 95.0, 198.0, 4.0),
            ],
            vec![pin()],
        );
        let result = validate_dcl(&beam(), &a);
        assert!(result.is_correct);
        assert_eq!(result.score, 100);
        assert!(result.dcl().unwrap().forces_correct);
        assert_eq!(result.feedback.last().unwrap().kind, FeedbackKind::Success);
    }

    #[test]
    fn test_geometric_match_with_other_label() {
        let a = answer(
            vec![
                force("weight", -85.0, 110.0, 5.0),
                force("Ay", 90.0, 0.0, 0.0),
                force("By", 90.0, 200.0, 0.0),
            ],
            vec![pin()],
        );
        let result = validate_dcl(&beam(), &a);
        assert_eq!(result.score, 100);
        assert!(result.dcl().unwrap().extra_forces.is_empty());
    }

    #[test]
    fn test_missing_force() {
        let a = answer(
            vec![force("W", 270.0, 100.0, 0.0), force("Ay", 90.0, 0.0, 0.0)],
            vec![pin()],
        );
        let result = validate_dcl(&beam(), &a);
        // 2 of 3 forces + 1 support
        assert_eq!(result.score, 75);
        assert!(!result.is_correct);
        assert_eq!(result.dcl().unwrap().missing_forces, vec!["By".to_string()]);
    }

    #[test]
    fn test_wrong_direction() {
        let a = answer(
            vec![
                force("W", 90.0, 100.0, 0.0),
                force("Ay", 90.0, 0.0, 0.0),
                force("By", 90.0, 200.0, 0.0),
            ],
            vec![pin()],
        );
        let result = validate_dcl(&beam(), &a);
        let detail = result.dcl().unwrap();
        assert_eq!(detail.wrong_directions, vec!["W".to_string()]);
        assert!(!detail.directions_correct);
        assert!(detail.forces_present);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_extra_force_does_not_lower_score() {
        let a = answer(
            vec![
                force("W", 270.0, 100.0, 0.0),
                force("Ay", 90.0, 0.0, 0.0),
                force("By", 90.0, 200.0, 0.0),
                force("Friction", 180.0, 300.0, 50.0),
            ],
            vec![pin()],
        );
        let result = validate_dcl(&beam(), &a);
        let detail = result.dcl().unwrap();
        assert_eq!(detail.extra_forces, vec!["Friction".to_string()]);
        assert!(!detail.forces_correct);
        assert_eq!(result.score, 100);
        assert!(result
            .feedback
            .iter()
            .any(|f| f.kind == FeedbackKind::Warning));
    }

    #[test]
    fn test_support_wrong_type_or_far() {
        let forces = vec![
            force("W", 270.0, 100.0, 0.0),
            force("Ay", 90.0, 0.0, 0.0),
            force("By", 90.0, 200.0, 0.0),
        ];
        let roller = PlacedSupport {
            support_type: "roller".into(),
            position: Point::new(0.0, 0.0),
        };
        let far_pin = PlacedSupport {
            support_type: "pin".into(),
            position: Point::new(30.0, 0.0),
        };

        for supports in [vec![roller], vec![far_pin], vec![]] {
            let result = validate_dcl(&beam(), &answer(forces.clone(), supports));
            assert!(!result.dcl().unwrap().supports_correct);
            assert_eq!(result.score, 75);
            assert!(result
                .feedback
                .iter()
                .any(|f| f.target == FeedbackTarget::Supports));
        }
    }

    #[test]
    fn test_no_schema() {
        let q = Question::new(QuestionType::Dcl);
        let result = validate_dcl(&q, &UserAnswer::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback.len(), 1);
        assert_eq!(result.feedback[0].kind, FeedbackKind::Error);
        assert_eq!(result.feedback[0].message, "no diagram defined for this question");
    }

    #[test]
    fn test_empty_answer_scores_zero_forces() {
        let result = validate_dcl(&beam(), &UserAnswer::default());
        assert_eq!(result.score, 0);
        assert_eq!(result.dcl().unwrap().missing_forces.len(), 3);
    }
}
