use bevy::prelude::*;
use bevy_math::primitives::{Cuboid, Sphere};
use dragon_anim::animation::animator::DragonAnimator;
use dragon_anim::core::components::{DragonBody, SpineLine};
use dragon_anim::core::rig::{AttachmentConfig, DragonRig, RotationAxis, VelocityRotConfig, WingConfig};
use dragon_anim::management::rig_loader::import_rig;
use crate::flight::{VelocityTarget, WaveTarget};

// Demo rig: a head at the first spine point, two velocity-reactive fins,
// and a pair of wings.
fn fallback_rig() -> DragonRig {
    let mut rig = DragonRig::default();
    rig.line_thickness = 0.6;
    rig.attachments.push(AttachmentConfig {
        chain_index: 0,
        offset: Vec3::new(-1.2, 0.0, 0.0),
        rotation_scale: 8.0,
        apply_rotation: true,
    });
    rig.velocity_rotors.push(VelocityRotConfig {
        range: (-35.0, 35.0),
        speed_scale: 3.0,
        smoothing: 5.0,
        reverse: false,
    });
    rig.velocity_rotors.push(VelocityRotConfig {
        range: (-35.0, 35.0),
        speed_scale: 3.0,
        smoothing: 5.0,
        reverse: true,
    });
    rig.wings.push(WingConfig {
        speed_range: (2.0, 9.0),
        speed_multiplier: 1.0,
        max_rotation: 40.0,
        smoothing: 2.5,
        flap_axis: RotationAxis::Y,
    });
    rig.wings.push(WingConfig {
        speed_range: (2.0, 9.0),
        speed_multiplier: 1.0,
        max_rotation: 40.0,
        smoothing: 2.5,
        flap_axis: RotationAxis::Y,
    });
    rig
}

pub fn spawn_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(8.0, 6.0, 28.0).looking_at(Vec3::new(8.0, 0.0, 0.0), Vec3::Y),
        ..default()
    });
    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_xyz(4.0, 12.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    let rig = match import_rig("dragon") {
        Ok(rig) => rig,
        Err(error) => {
            warn!("No rig asset found ({:?}), using the built-in rig", error);
            fallback_rig()
        }
    };

    let marker_mesh = meshes.add(Mesh::from(Sphere::new(0.3)));
    let marker_material = materials.add(StandardMaterial {
        base_color: Color::rgb(0.9, 0.3, 0.2),
        ..default()
    });
    let part_mesh = meshes.add(Mesh::from(Cuboid::new(0.8, 0.2, 2.4)));
    let part_material = materials.add(StandardMaterial {
        base_color: Color::rgb(0.2, 0.6, 0.3),
        ..default()
    });

    // The two stimulus targets; `flight` moves them every frame.
    let wave_target = commands
        .spawn((
            Name::new("WaveTarget"),
            WaveTarget,
            PbrBundle {
                mesh: marker_mesh.clone(),
                material: marker_material.clone(),
                ..default()
            },
        ))
        .id();
    let velocity_target = commands
        .spawn((
            Name::new("VelocityTarget"),
            VelocityTarget,
            PbrBundle {
                mesh: marker_mesh.clone(),
                material: marker_material.clone(),
                ..default()
            },
        ))
        .id();

    let mut body = DragonBody::new(DragonAnimator::new(rig.clone()), wave_target, velocity_target);

    for (i, _attachment) in rig.attachments.iter().enumerate() {
        let entity = commands
            .spawn((
                Name::new(format!("Attachment{}", i)),
                PbrBundle {
                    mesh: marker_mesh.clone(),
                    material: marker_material.clone(),
                    ..default()
                },
            ))
            .id();
        body.attachments.push(entity);
    }
    for (i, _rotor) in rig.velocity_rotors.iter().enumerate() {
        let entity = commands
            .spawn((
                Name::new(format!("Fin{}", i)),
                PbrBundle {
                    mesh: part_mesh.clone(),
                    material: part_material.clone(),
                    transform: Transform::from_xyz(2.0 + i as f32 * 4.0, 0.0, 1.5),
                    ..default()
                },
            ))
            .id();
        body.velocity_rotors.push(entity);
    }
    for (i, _wing) in rig.wings.iter().enumerate() {
        let entity = commands
            .spawn((
                Name::new(format!("Wing{}", i)),
                PbrBundle {
                    mesh: part_mesh.clone(),
                    material: part_material.clone(),
                    transform: Transform::from_xyz(6.0, 0.5, if i % 2 == 0 { 2.0 } else { -2.0 }),
                    ..default()
                },
            ))
            .id();
        body.wings.push(entity);
    }

    commands.spawn((
        Name::new("Dragon"),
        body,
        SpineLine::default(),
        SpatialBundle::default(),
    ));
}
