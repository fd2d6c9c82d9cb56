pub mod body_params;
pub mod movement_profile;
pub mod rig;
pub mod rig_error;
pub mod components;
pub mod animator_plugin;
