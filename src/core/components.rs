use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use crate::animation::animator::DragonAnimator;
use crate::animation::compositor::LineSink;

// World-space polyline for the composed spine, plus the strip widths the
// host renderer should use. This is the in-engine line collaborator.
#[derive(Component, Clone, Debug, Default, Reflect, InspectorOptions)]
#[reflect(Component, InspectorOptions)]
pub struct SpineLine {
    pub points: Vec<Vec3>,
    pub start_width: f32,
    pub end_width: f32,
}

impl LineSink for SpineLine {
    fn set_point_count(&mut self, count: usize) {
        self.points = vec![Vec3::ZERO; count];
    }

    fn set_position(&mut self, index: usize, point: Vec3) {
        self.points[index] = point;
    }

    fn set_width(&mut self, start: f32, end: f32) {
        self.start_width = start;
        self.end_width = end;
    }
}

// One animated body: the composite animator plus the entities it reads and
// writes. Handle lists line up index-for-index with the rig's attachment,
// rotor, and wing records. Target and handle entities must not carry a
// `DragonBody` of their own.
#[derive(Component)]
pub struct DragonBody {
    pub animator: DragonAnimator,
    pub wave_target: Entity,
    pub velocity_target: Entity,
    pub attachments: Vec<Entity>,
    pub velocity_rotors: Vec<Entity>,
    pub wings: Vec<Entity>,
}

impl DragonBody {
    pub fn new(animator: DragonAnimator, wave_target: Entity, velocity_target: Entity) -> Self {
        DragonBody {
            animator,
            wave_target,
            velocity_target,
            attachments: Vec::new(),
            velocity_rotors: Vec::new(),
            wings: Vec::new(),
        }
    }
}
