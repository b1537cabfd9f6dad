#![cfg(feature = "serde")]

use u_intprog::bnb::{BnbConfig, SolveOutcome};
use u_intprog::model::{ProblemModel, Sense};
use u_intprog::solve;

const DOCUMENT: &str = r#"{
    "variables": ["x", "y"],
    "objective": {"x": 10.0, "y": 11.0},
    "constraints": [
        {"coefficients": {"x": 2.0, "y": 1.0}, "sense": "<=", "rhs": 6.0},
        {"coefficients": {"y": 1.0}, "sense": "≤", "rhs": 3.0}
    ]
}"#;

#[test]
fn test_model_from_json() {
    let model: ProblemModel = serde_json::from_str(DOCUMENT).unwrap();
    assert_eq!(model.variables(), ["x", "y"]);
    assert_eq!(model.constraints()[1].sense, Sense::Le);

    let outcome = solve(&model);
    let sol = outcome.solution().unwrap();
    assert_eq!((sol.value("x"), sol.value("y")), (1, 3));
}

#[test]
fn test_model_json_roundtrip() {
    let model: ProblemModel = serde_json::from_str(DOCUMENT).unwrap();
    let json = serde_json::to_string(&model).unwrap();
    assert!(json.contains(r#""sense":"<=""#));
    let back: ProblemModel = serde_json::from_str(&json).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_invalid_documents_are_rejected() {
    let undeclared = r#"{"variables": ["x"], "objective": {"z": 1.0}}"#;
    assert!(serde_json::from_str::<ProblemModel>(undeclared).is_err());

    let bad_sense = r#"{
        "variables": ["x"],
        "constraints": [{"coefficients": {"x": 1.0}, "sense": "==", "rhs": 1.0}]
    }"#;
    let err = serde_json::from_str::<ProblemModel>(bad_sense).unwrap_err();
    assert!(err.to_string().contains("invalid constraint sense"));
}

#[test]
fn test_outcome_and_config_serialize() {
    let model: ProblemModel = serde_json::from_str(DOCUMENT).unwrap();
    let outcome = solve(&model);
    let json = serde_json::to_string(&outcome).unwrap();
    let back: SolveOutcome = serde_json::from_str(&json).unwrap();
    let (sol, back) = (outcome.solution().unwrap(), back.solution().unwrap());
    assert_eq!(back.values, sol.values);
    assert_eq!(back.nodes_processed, sol.nodes_processed);
    assert!((back.objective - sol.objective).abs() < 1e-9);

    let config = BnbConfig::default().with_node_limit(50);
    let json = serde_json::to_string(&config).unwrap();
    let back: BnbConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.node_limit, Some(50));
}
