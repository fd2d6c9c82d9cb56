use bevy::prelude::*;
use crate::animation::animator::PoseHandle;
use crate::animation::compositor::LineSink;
use crate::core::components::{DragonBody, SpineLine};

// Adapts a Bevy transform to the animator's handle interface. Angles cross
// the boundary in degrees, XYZ Euler order.
pub struct TransformPose<'a>(pub &'a mut Transform);

impl PoseHandle for TransformPose<'_> {
    fn position(&self) -> Vec3 {
        self.0.translation
    }

    fn set_position(&mut self, position: Vec3) {
        self.0.translation = position;
    }

    fn euler_degrees(&self) -> Vec3 {
        let (x, y, z) = self.0.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    fn set_euler_degrees(&mut self, euler_degrees: Vec3) {
        self.0.rotation = Quat::from_euler(
            EulerRot::XYZ,
            euler_degrees.x.to_radians(),
            euler_degrees.y.to_radians(),
            euler_degrees.z.to_radians(),
        );
    }
}

// Size the line once per body; point count is fixed after init.
pub fn init_spine_lines(mut bodies: Query<(&DragonBody, &mut SpineLine), Added<DragonBody>>) {
    for (body, mut spine) in bodies.iter_mut() {
        spine.set_point_count(body.animator.resolution());
        info!(
            "[Dragon] spine initialized with {} points",
            body.animator.resolution()
        );
    }
}

// Per-frame drive of every animated body, in the fixed stage order: wave,
// follow, line submission, attachments, velocity rotors, wings. Handle
// transforms are borrowed one at a time, so the whole frame stays a single
// synchronous unit.
pub fn animate_dragon_bodies(
    time: Res<Time>,
    mut bodies: Query<(&mut DragonBody, &mut SpineLine)>,
    mut transforms: Query<&mut Transform, Without<DragonBody>>,
) {
    let delta_time = time.delta_seconds();
    for (mut body, mut spine) in bodies.iter_mut() {
        let DragonBody {
            animator,
            wave_target,
            velocity_target,
            attachments,
            velocity_rotors,
            wings,
        } = &mut *body;

        let Ok(wave_target_pos) = transforms.get(*wave_target).map(|t| t.translation) else {
            debug!("[Dragon] wave target despawned, skipping frame");
            continue;
        };
        let Ok(velocity_target_pos) = transforms.get(*velocity_target).map(|t| t.translation)
        else {
            debug!("[Dragon] velocity target despawned, skipping frame");
            continue;
        };

        animator.advance(wave_target_pos, delta_time);
        animator.submit_line(&mut *spine);

        for (index, entity) in attachments.iter().enumerate() {
            if let Ok(mut transform) = transforms.get_mut(*entity) {
                animator.place_attachment(index, &mut TransformPose(&mut transform));
            }
        }

        animator.track_velocity(velocity_target_pos, delta_time);
        for (index, entity) in velocity_rotors.iter().enumerate() {
            if let Ok(mut transform) = transforms.get_mut(*entity) {
                animator.apply_velocity_rotation(index, delta_time, &mut TransformPose(&mut transform));
            }
        }

        animator.begin_wing_frame(delta_time);
        for (index, entity) in wings.iter().enumerate() {
            if let Ok(mut transform) = transforms.get_mut(*entity) {
                animator.drive_wing(index, delta_time, &mut TransformPose(&mut transform));
            }
        }
    }
}

// Draw the composed spine when enabled, in the spirit of the path debug
// overlay.
#[cfg(feature = "debug")]
pub fn draw_spine_debug(mut gizmos: Gizmos, spines: Query<(&SpineLine, &GlobalTransform)>) {
    for (spine, global) in spines.iter() {
        for pair in spine.points.windows(2) {
            gizmos.line(
                global.transform_point(pair[0]),
                global.transform_point(pair[1]),
                Color::ORANGE,
            );
        }
    }
}
