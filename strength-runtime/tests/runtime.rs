use serde_json::json;
use strength_runtime::*;

fn settings(algorithm_id: &str, difficulty: Vec<i32>) -> BenchmarkSettings {
    BenchmarkSettings {
        challenge_id: "c001".to_string(),
        algorithm_id: algorithm_id.to_string(),
        difficulty,
    }
}

#[test]
fn test_calc_seed() {
    let s = settings("prefix_dp", vec![100, 5]);
    assert_eq!(
        s.calc_seed("rand_hash", 0).unwrap(),
        s.calc_seed("rand_hash", 0).unwrap()
    );
    assert_ne!(
        s.calc_seed("rand_hash", 0).unwrap(),
        s.calc_seed("rand_hash", 1).unwrap()
    );
    assert_ne!(
        s.calc_seed("rand_hash", 0).unwrap(),
        s.calc_seed("other_hash", 0).unwrap()
    );
    assert_ne!(
        s.calc_seed("rand_hash", 0).unwrap(),
        settings("prefix_dp", vec![100, 6])
            .calc_seed("rand_hash", 0)
            .unwrap()
    );
}

#[test]
fn test_compute_then_verify() {
    let s = settings("prefix_dp", vec![120, 7]);
    for nonce in 0..5 {
        let result = compute_solution(&s, "rand_hash", nonce, &None).unwrap();
        assert!(result.err_msg.is_none());
        assert_eq!(result.output_data.nonce, nonce);
        assert!(verify_solution(&s, "rand_hash", nonce, result.output_data.solution).is_ok());
    }
}

#[test]
fn test_verify_rejects_solution_for_another_nonce() {
    let s = settings("prefix_dp", vec![60, 5]);
    let result = compute_solution(&s, "rand_hash", 1, &None).unwrap();
    assert!(verify_solution(&s, "rand_hash", 2, result.output_data.solution).is_err());
}

#[test]
fn test_verify_rejects_malformed_solution() {
    let s = settings("prefix_dp", vec![10, 2]);
    let solution = json!({"subarrays": [[0, 1]]}).as_object().cloned().unwrap();
    assert!(verify_solution(&s, "rand_hash", 0, solution).is_err());
    let solution = json!({"items": [0]}).as_object().cloned().unwrap();
    assert!(verify_solution(&s, "rand_hash", 0, solution).is_err());
}

#[test]
fn test_algorithm_error_is_reported() {
    // exhaustive refuses instances above its default size limit
    let s = settings("exhaustive", vec![40, 3]);
    let result = compute_solution(&s, "rand_hash", 0, &None).unwrap();
    assert!(result.err_msg.is_some());
    assert!(result.output_data.solution.is_empty());

    let hyperparameters = json!({"max_elements": 2}).as_object().cloned();
    let s = settings("exhaustive", vec![8, 3]);
    assert!(compute_solution(&s, "rand_hash", 0, &hyperparameters)
        .unwrap()
        .err_msg
        .is_some());
}

#[test]
fn test_unknown_ids_are_rejected() {
    assert!(compute_solution(&settings("greedy", vec![10, 2]), "rand_hash", 0, &None).is_err());
    let mut s = settings("prefix_dp", vec![10, 2]);
    s.challenge_id = "c999".to_string();
    assert!(compute_solution(&s, "rand_hash", 0, &None).is_err());
}

#[test]
fn test_invalid_difficulty_is_rejected() {
    assert!(compute_solution(&settings("prefix_dp", vec![3, 4]), "rand_hash", 0, &None).is_err());
    assert!(compute_solution(&settings("prefix_dp", vec![3]), "rand_hash", 0, &None).is_err());
}

#[test]
fn test_compute_maximum_strength() {
    assert_eq!(compute_maximum_strength("1,2,3,-1,2", 3).unwrap(), 22);
    assert_eq!(compute_maximum_strength("12, -2, -2, -2, -2", 5).unwrap(), 64);
    assert_eq!(compute_maximum_strength("-1,-2,-3", 1).unwrap(), -1);
    assert!(compute_maximum_strength("1,2", 3).is_err());
    assert!(compute_maximum_strength("1,x", 1).is_err());
}

#[test]
fn test_parse_nums() {
    assert_eq!(parse_nums(" 4, -5 ,6 ").unwrap(), vec![4, -5, 6]);
    assert_eq!(parse_nums("").unwrap(), Vec::<i32>::new());
    assert!(parse_nums("99999999999").is_err());
}

#[test]
fn test_settings_from_json() {
    let parsed: BenchmarkSettings = strength_utils::dejsonify(
        r#"{"algorithm_id":"prefix_dp","challenge_id":"c001","difficulty":[100,5]}"#,
    )
    .unwrap();
    assert_eq!(parsed, settings("prefix_dp", vec![100, 5]));
}

#[test]
fn test_print_algorithm_help() {
    assert!(print_algorithm_help("prefix_dp").is_ok());
    assert!(print_algorithm_help("exhaustive").is_ok());
    assert!(print_algorithm_help("greedy").is_err());
}
