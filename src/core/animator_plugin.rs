use bevy::app::{App, Plugin, Update};
use bevy::ecs::schedule::IntoSystemConfigs;

use crate::core::components::SpineLine;
use crate::systems::animate::{animate_dragon_bodies, init_spine_lines};

pub struct DragonAnimatorPlugin;

impl Plugin for DragonAnimatorPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SpineLine>()
            .add_systems(Update, (init_spine_lines, animate_dragon_bodies).chain());
        #[cfg(feature = "debug")]
        {
            app.add_systems(Update, crate::systems::animate::draw_spine_debug);
        }
    }
}
