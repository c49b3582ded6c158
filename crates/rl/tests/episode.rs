use rl::{run_episode, Env, TakeoffTask, TaskConfig, STATE_SIZE};

/// A one-dimensional environment where the agent pushes a point to the right.
struct RollingPointEnv {
    pos_x: f64,
}

impl Env for RollingPointEnv {
    type Action = f64;

    fn step(&mut self, action: &f64) -> (Vec<f64>, f64, bool) {
        let force = action.clamp(-10.0, 10.0);
        let old = self.pos_x;
        self.pos_x += force * 0.1;
        (vec![self.pos_x], self.pos_x - old, self.pos_x.abs() > 5.0)
    }

    fn reset(&mut self) -> Vec<f64> {
        self.pos_x = 0.0;
        vec![self.pos_x]
    }

    fn obs_size(&self) -> usize {
        1
    }

    fn action_size(&self) -> usize {
        1
    }
}

#[test]
fn rollout_stops_when_env_reports_done() {
    let mut env = RollingPointEnv { pos_x: 0.0 };
    let summary = run_episode(&mut env, |_| 10.0, 100);
    assert!(summary.terminated);
    assert_eq!(summary.steps, 6);
    assert!(summary.final_obs[0] > 5.0);
    assert!((summary.total_reward - summary.final_obs[0]).abs() < 1e-9);
}

#[test]
fn rollout_respects_step_limit() {
    let mut env = RollingPointEnv { pos_x: 0.0 };
    let summary = run_episode(&mut env, |_| 1.0, 3);
    assert!(!summary.terminated);
    assert_eq!(summary.steps, 3);
}

#[test]
fn takeoff_task_rollout_with_hover_policy() {
    let mut task = TakeoffTask::new(&TaskConfig::default()).unwrap();
    assert_eq!(Env::obs_size(&task), STATE_SIZE);
    assert_eq!(Env::action_size(&task), 4);

    let summary = run_episode(&mut task, |obs| {
        assert_eq!(obs.len(), STATE_SIZE);
        [400.0; 4]
    }, 1_000);
    assert!(summary.terminated);
    assert_eq!(summary.steps, 42);
    // every substep earns close to one point
    assert!(summary.total_reward > 42.0 * 6.0 * 0.9);
}
