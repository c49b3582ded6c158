use clap::Parser;
use takeoff::app::{run, task_config};
use takeoff::cli::Args;

fn args(extra: &[&str]) -> Args {
    let mut argv = vec!["takeoff"];
    argv.extend_from_slice(extra);
    Args::parse_from(argv)
}

#[test]
fn config_file_is_loaded_and_overridden() {
    let config = task_config(&args(&["--config", "tests/data/hover.json"])).unwrap();
    assert_eq!(config.runtime, 1.0);
    assert_eq!(config.target_pos, Some([0.0, 0.0, 15.0]));

    let config = task_config(&args(&[
        "--config",
        "tests/data/hover.json",
        "--runtime",
        "2.5",
        "--target",
        "1",
        "2",
        "3",
    ]))
    .unwrap();
    assert_eq!(config.runtime, 2.5);
    assert_eq!(config.target_pos, Some([1.0, 2.0, 3.0]));
}

#[test]
fn bad_config_is_reported() {
    let err = task_config(&args(&["--config", "tests/data/unknown_field.json"])).unwrap_err();
    assert!(format!("{err:#}").contains("action_repeat"));
    assert!(task_config(&args(&["--config", "tests/data/missing.json"])).is_err());
}

#[test]
fn hover_episodes_end_on_the_clock() {
    let summaries = run(&args(&["--config", "tests/data/hover.json", "--episodes", "2"])).unwrap();
    assert_eq!(summaries.len(), 2);
    for s in &summaries {
        assert!(s.terminated);
        // 1 s runtime at 0.12 s per step
        assert_eq!(s.steps, 9);
        assert_eq!(s.final_obs.len(), 36);
    }
    assert_eq!(summaries[0], summaries[1]);
}

#[test]
fn random_policy_respects_step_limit() {
    let summaries = run(&args(&["--policy", "random", "--seed", "3", "--max-steps", "4"])).unwrap();
    assert_eq!(summaries.len(), 1);
    assert!(summaries[0].steps <= 4);
    assert!(summaries[0].total_reward.is_finite());
}

#[test]
fn invalid_runtime_fails_to_build_the_task() {
    let err = run(&args(&["--runtime=-1"])).unwrap_err();
    assert!(format!("{err:#}").contains("runtime"));
}
