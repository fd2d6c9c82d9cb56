use bevy::prelude::*;

#[derive(Component)]
pub struct WaveTarget;

#[derive(Component)]
pub struct VelocityTarget;

// Bob the wave target and swoop the velocity target so every stage of the
// animator has something to react to.
pub fn move_targets(
    time: Res<Time>,
    mut wave_targets: Query<&mut Transform, (With<WaveTarget>, Without<VelocityTarget>)>,
    mut velocity_targets: Query<&mut Transform, With<VelocityTarget>>,
) {
    let t = time.elapsed_seconds();
    for mut transform in wave_targets.iter_mut() {
        transform.translation = Vec3::new(0.0, (t * 0.8).sin() * 3.0, 0.0);
    }
    for mut transform in velocity_targets.iter_mut() {
        // Figure-eight sweep; the vertical component is what the fins and
        // wings key off.
        transform.translation = Vec3::new(
            (t * 0.5).sin() * 10.0,
            (t * 1.0).sin() * 4.0,
            (t * 0.5).cos() * 4.0,
        );
    }
}
