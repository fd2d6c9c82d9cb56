pub mod rig_loader;
