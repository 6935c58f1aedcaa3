use dynamics::{Floatation, Trajectory};

use crate::batch::ScenarioOutcome;

pub const SAMPLE_HEADER: &str = "t,x,y,theta,vx,vy,omega,ax,ay,alpha";

/// One human-readable line per scenario.
pub fn summary_line(outcome: &ScenarioOutcome) -> String {
    let report = match &outcome.result {
        Ok(report) => report,
        Err(err) => return format!("{:<24} FAILED  {err}", outcome.name),
    };
    let traj = &report.trajectory;
    let Some(last) = traj.last() else {
        return format!("{:<24} ok      no samples", outcome.name);
    };

    let mut line = format!(
        "{:<24} ok      n={:<6} end=({:>8.3}, {:>8.3}) hdg={:>6.1}° path={:>8.3}m vmax={:>6.3}m/s |w|max={:>6.3}rad/s",
        outcome.name,
        traj.len(),
        last.state.position.x,
        last.state.position.y,
        last.state.theta.to_degrees(),
        traj.path_length(),
        traj.peak_speed(),
        traj.peak_angular_velocity(),
    );
    if let Some(f) = report.floatation {
        let word = match f {
            Floatation::Floats => "floats",
            Floatation::Sinks => "sinks",
            Floatation::Neutral => "neutral",
        };
        line.push_str(&format!(" hull={word}"));
    }
    if let Some(p) = report.pressure {
        line.push_str(&format!(" p={:.1}kPa", p / 1000.0));
    }
    line
}

/// Every `every`-th sample as a comma-separated row, starting with the first.
pub fn sample_rows(traj: &Trajectory, every: usize) -> impl Iterator<Item = String> + '_ {
    traj.samples().step_by(every.max(1)).map(|s| {
        format!(
            "{:.4},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            s.time,
            s.state.position.x,
            s.state.position.y,
            s.state.theta,
            s.state.velocity.x,
            s.state.velocity.y,
            s.state.omega,
            s.linear_acceleration.x,
            s.linear_acceleration.y,
            s.angular_acceleration,
        )
    })
}
