use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use dragon_anim::core::animator_plugin::DragonAnimatorPlugin;

mod scene;
mod flight;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,dragon_anim=info".to_string(),
                level: bevy::log::Level::WARN,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Dragon Anim Testing".into(),
                    resolution: (1024.0, 768.0).into(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .build(),
    );

    // Setup inspector plugins
    app.add_plugins(WorldInspectorPlugin::new());

    // The animator itself plus the harness scene and target motion
    app.add_plugins(DragonAnimatorPlugin);
    app.add_systems(Startup, scene::spawn_scene);
    app.add_systems(Update, flight::move_targets);

    app.run();
}
