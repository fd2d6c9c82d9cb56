use bevy::log::debug;
use bevy_math::Vec3;
use crate::animation::compositor::{submit_line, LineSink};
use crate::animation::follower::LagOffsets;
use crate::animation::velocity::VelocitySample;
use crate::animation::waveform::BodyWave;
use crate::animation::wings::WingDrive;
use crate::core::rig::DragonRig;

// Engine-owned transform, seen by the animator as position plus Euler
// rotation in degrees. The core never assumes a particular scene graph.
pub trait PoseHandle {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);
    fn euler_degrees(&self) -> Vec3;
    fn set_euler_degrees(&mut self, euler_degrees: Vec3);
}

// Handles for one frame of a full `update`, ordered to match the rig's
// attachment, rotor, and wing lists.
pub struct RigPose<'a> {
    pub attachments: Vec<&'a mut dyn PoseHandle>,
    pub velocity_rotors: Vec<&'a mut dyn PoseHandle>,
    pub wings: Vec<&'a mut dyn PoseHandle>,
}

// The composite animator: owns every piece of per-frame mutable state so
// nothing is accidentally duplicated per attachment or per wing. The stage
// methods run in a fixed frame order; `update` drives a whole frame from any
// driver.
pub struct DragonAnimator {
    rig: DragonRig,
    wave: BodyWave,
    lag: LagOffsets,
    origin_target: Option<Vec3>,
    velocity: VelocitySample,
    wing_drive: WingDrive,
    elapsed: f32,
}

impl DragonAnimator {
    // The rig must already be validated; see `DragonRig::validate`.
    pub fn new(rig: DragonRig) -> Self {
        let resolution = rig.wave.resolution;
        DragonAnimator {
            rig,
            wave: BodyWave::new(resolution),
            lag: LagOffsets::new(resolution),
            origin_target: None,
            velocity: VelocitySample::default(),
            wing_drive: WingDrive::default(),
            elapsed: 0.0,
        }
    }

    pub fn rig(&self) -> &DragonRig {
        &self.rig
    }

    pub fn resolution(&self) -> usize {
        self.rig.wave.resolution
    }

    pub fn points(&self) -> &[Vec3] {
        self.wave.points()
    }

    pub fn lag_offsets(&self) -> &[Vec3] {
        self.lag.offsets()
    }

    // Composed spine point: wave plus accumulated lag.
    pub fn point(&self, index: usize) -> Vec3 {
        self.wave.point(index) + self.lag.offset(index)
    }

    pub fn speed(&self) -> f32 {
        self.velocity.speed()
    }

    pub fn phase(&self) -> f32 {
        self.wave.phase()
    }

    // Stage 1 + 2: scroll the waveform and chase the wave target. The
    // target's position on the first call becomes the immutable origin the
    // lag delta is measured from.
    pub fn advance(&mut self, wave_target: Vec3, delta_time: f32) {
        self.elapsed += delta_time;
        self.wave
            .advance(&self.rig.wave, &self.rig.movement_profile, delta_time);
        let origin = *self.origin_target.get_or_insert(wave_target);
        let delta = wave_target - origin;
        self.lag.follow(delta, self.rig.smoothness, delta_time);
    }

    // Stage 3: forward the composed pose to the line collaborator.
    pub fn submit_line(&self, sink: &mut dyn LineSink) {
        submit_line(
            self.wave.points(),
            self.lag.offsets(),
            self.rig.line_thickness,
            sink,
        );
    }

    // Stage 4: pin one configured attachment to its spine point. The roll,
    // when enabled, is absolute rather than smoothed, and reads the spine
    // point before the attachment's own offset is applied.
    pub fn place_attachment(&self, index: usize, handle: &mut dyn PoseHandle) {
        let Some(attachment) = self.rig.attachments.get(index) else {
            debug!("[Dragon] no attachment record at {}, skipping", index);
            return;
        };
        let point = self.point(attachment.chain_index);
        handle.set_position(point + attachment.offset);
        if attachment.apply_rotation {
            handle.set_euler_degrees(Vec3::new(0.0, 0.0, point.y * attachment.rotation_scale));
        }
    }

    // Stage 5a: refresh the shared velocity estimate. Once per frame.
    pub fn track_velocity(&mut self, velocity_target: Vec3, delta_time: f32) {
        self.velocity.track(velocity_target, delta_time);
    }

    // Stage 5b: roll one rotor toward its clamped velocity-derived target.
    pub fn apply_velocity_rotation(&self, index: usize, delta_time: f32, handle: &mut dyn PoseHandle) {
        let Some(config) = self.rig.velocity_rotors.get(index) else {
            debug!("[Dragon] no velocity rotor record at {}, skipping", index);
            return;
        };
        let current = handle.euler_degrees().z;
        let smoothed = self.velocity.smoothed_roll(config, current, delta_time);
        handle.set_euler_degrees(Vec3::new(0.0, 0.0, smoothed));
    }

    // Stage 6a: settle the shared wing amplitude. Once per frame, before
    // any wing is driven.
    pub fn begin_wing_frame(&mut self, delta_time: f32) {
        self.wing_drive.begin_frame(self.velocity.speed(), delta_time);
    }

    // Stage 6b: flap one wing on its configured axis.
    pub fn drive_wing(&self, index: usize, delta_time: f32, handle: &mut dyn PoseHandle) {
        let Some(config) = self.rig.wings.get(index) else {
            debug!("[Dragon] no wing record at {}, skipping", index);
            return;
        };
        let current = config.flap_axis.read(handle.euler_degrees());
        let angle = self.wing_drive.flap_angle(
            config,
            self.velocity.speed(),
            self.elapsed,
            current,
            delta_time,
        );
        handle.set_euler_degrees(config.flap_axis.write(angle));
    }

    // One whole frame in stage order: wave, follow, line submission,
    // attachments, velocity rotors, wings.
    pub fn update(
        &mut self,
        delta_time: f32,
        wave_target: Vec3,
        velocity_target: Vec3,
        sink: &mut dyn LineSink,
        pose: &mut RigPose,
    ) {
        self.advance(wave_target, delta_time);
        self.submit_line(sink);
        for (index, handle) in pose.attachments.iter_mut().enumerate() {
            self.place_attachment(index, &mut **handle);
        }
        self.track_velocity(velocity_target, delta_time);
        for (index, handle) in pose.velocity_rotors.iter_mut().enumerate() {
            self.apply_velocity_rotation(index, delta_time, &mut **handle);
        }
        self.begin_wing_frame(delta_time);
        for (index, handle) in pose.wings.iter_mut().enumerate() {
            self.drive_wing(index, delta_time, &mut **handle);
        }
    }
}
