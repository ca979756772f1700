//! Thumbstick-Lokomotion pro Hand mit framerate-unabhängigem Easing.
//!
//! Der Stick-Vektor wird auch im deaktivierten Zustand entgegengenommen; die
//! Geschwindigkeit klingt dann weiter ab statt schlagartig zu stoppen.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::shared::options::LocomotionOptions;

/// Lokomotions-Zustand einer Hand.
#[derive(Debug, Clone)]
pub struct LocomotionGate {
    options: LocomotionOptions,
    /// Geschwindigkeit in Rig-Koordinaten (x = seitlich, z = vor/zurück)
    velocity: Vec3,
    /// Letzter Stick-Vektor
    stick: Vec2,
    enabled: bool,
}

impl LocomotionGate {
    /// Erstellt eine aktivierte Lokomotion ohne Geschwindigkeit.
    pub fn new(options: LocomotionOptions) -> Self {
        Self {
            options,
            velocity: Vec3::ZERO,
            stick: Vec2::ZERO,
            enabled: true,
        }
    }

    /// Schaltet die Beschleunigung durch den Stick an/aus.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!("Lokomotion {}", if enabled { "aktiviert" } else { "deaktiviert" });
        }
        self.enabled = enabled;
    }

    /// Ist die Lokomotion aktiv?
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Speichert den letzten Stick-Vektor (auch wenn deaktiviert).
    pub fn set_stick(&mut self, x: f32, y: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
        self.stick = Vec2::new(sanitize(x), sanitize(y));
    }

    /// Letzter Stick-Vektor.
    pub fn stick(&self) -> Vec2 {
        self.stick
    }

    /// Aktuelle Geschwindigkeit.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Ist weder Geschwindigkeit noch Stick-Eingabe vorhanden?
    pub fn is_idle(&self) -> bool {
        self.velocity == Vec3::ZERO && self.stick == Vec2::ZERO
    }

    /// Integriert die Geschwindigkeit über `delta` Sekunden.
    pub fn update(&mut self, delta: f32) {
        if self.is_idle() {
            return;
        }
        if !delta.is_finite() || delta > self.options.max_frame_delta {
            // Framerate zu niedrig (oder Pause): Geschwindigkeit verwerfen
            self.velocity = Vec3::ZERO;
            return;
        }
        let delta = delta.max(0.0);

        let scaled_easing = (1.0 / self.options.easing).powf(delta * 60.0);
        self.velocity.x *= scaled_easing;
        self.velocity.z *= scaled_easing;
        if self.velocity.x.abs() < self.options.clamp_velocity {
            self.velocity.x = 0.0;
        }
        if self.velocity.z.abs() < self.options.clamp_velocity {
            self.velocity.z = 0.0;
        }

        if !self.enabled {
            return;
        }

        let sign_x = if self.options.invert_x { -1.0 } else { 1.0 };
        let sign_y = if self.options.invert_y { -1.0 } else { 1.0 };
        self.velocity.x += sign_x * self.options.acceleration * self.stick.x * delta;
        self.velocity.z += sign_y * self.options.acceleration * self.stick.y * delta;
    }

    /// Versatz für diesen Frame, gedreht in Blickrichtung.
    ///
    /// `yaw`/`pitch` in Radiant; Pitch wird nur im Flug-Modus berücksichtigt.
    pub fn displacement(&self, delta: f32, yaw: f32, pitch: f32) -> Vec3 {
        if self.velocity == Vec3::ZERO || !delta.is_finite() {
            return Vec3::ZERO;
        }
        let pitch = if self.options.fly { pitch } else { 0.0 };
        let heading = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
        heading * (self.velocity * delta)
    }
}
