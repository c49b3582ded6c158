//! Run a policy against an [`Env`] for one episode.

use crate::env::Env;

#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// External steps taken.
    pub steps: usize,
    pub total_reward: f64,
    /// Whether the environment reported the end of the episode, as opposed
    /// to hitting the step limit.
    pub terminated: bool,
    pub final_obs: Vec<f64>,
}

/// Reset `env`, then step it with `policy` until it reports done or
/// `max_steps` steps have been taken.
pub fn run_episode<E, P>(env: &mut E, mut policy: P, max_steps: usize) -> EpisodeSummary
where
    E: Env,
    P: FnMut(&[f64]) -> E::Action,
{
    let mut obs = env.reset();
    let mut total_reward = 0.0;
    let mut steps = 0;
    let mut terminated = false;
    while steps < max_steps {
        let action = policy(&obs);
        let (next_obs, reward, done) = env.step(&action);
        obs = next_obs;
        total_reward += reward;
        steps += 1;
        if done {
            terminated = true;
            break;
        }
    }
    EpisodeSummary {
        steps,
        total_reward,
        terminated,
        final_obs: obs,
    }
}
