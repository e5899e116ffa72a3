//! Movement domain: unit tests for the swing arc.

use super::systems::swing_pose;

#[test]
fn test_swing_pose_starts_and_ends_at_rest() {
    let rest = swing_pose(0.0);
    let done = swing_pose(1.0);
    assert!((rest.translation - done.translation).length() < 1e-5);
    assert!(rest.rotation.angle_between(done.rotation) < 1e-4);
}

#[test]
fn test_swing_pose_peaks_forward() {
    let rest = swing_pose(0.0);
    let peak = swing_pose(0.5);
    // Forward is -Z in the rig frame.
    assert!(peak.translation.z < rest.translation.z - 0.5);
    assert!(peak.translation.y > rest.translation.y);
}

#[test]
fn test_swing_covers_enough_ground_to_strike() {
    // The arc has to travel far enough, fast enough, that a full swing
    // can clear the 2.0 m/s strike threshold at typical frame times.
    let travel = (swing_pose(0.5).translation - swing_pose(0.0).translation).length();
    let out_and_back = travel * 2.0;
    let default_duration = 0.25;
    assert!(out_and_back / default_duration > 2.0);
}
