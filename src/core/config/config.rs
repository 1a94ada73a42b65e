use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Palette of the stock scene: one sphere and one cube per color.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#4060ff", "#20ffa0", "#ff4060", "#ffcc00", "#ff00cc", "#00ffcc",
];

/// Config layers read at startup, later overriding earlier. Both are optional.
pub const DEFAULT_LAYERS: [&str; 2] = ["assets/config/scene.ron", "assets/config/scene.local.ron"];

/// Inclusive bounds of the pointer actor radius.
pub const POINTER_RADIUS_MIN: f32 = 1.0;
pub const POINTER_RADIUS_MAX: f32 = 5.0;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Attractor Scene".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: [f32; 3],
    /// Multiplier of the centering impulse (`impulse = -translation * strength`).
    pub attractor_strength: f32,
    /// Fixed physics rate in Hz. 0.0 = variable step driven by frame time.
    pub timestep_hz: f32,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, 0.0, 0.0],
            attractor_strength: 1.0,
            timestep_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BodyDefaults {
    pub linear_damping: f32,
    pub angular_damping: f32,
    pub friction: f32,
    /// Edge length of the cube that unpositioned bodies are scattered in (centered on origin).
    pub spread: f32,
    pub sphere_radius: f32,
    pub cube_size: f32,
}
impl Default for BodyDefaults {
    fn default() -> Self {
        Self {
            linear_damping: 4.0,
            angular_damping: 1.0,
            friction: 0.1,
            spread: 10.0,
            sphere_radius: 1.0,
            cube_size: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PointerConfig {
    pub radius: f32,
}
impl Default for PointerConfig {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

/// One entry of the initial population.
///
/// `shape` is `"Sphere"` or `"Box"`; `size` overrides the default sphere radius / cube edge.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BodySpawnConfig {
    pub shape: String,
    pub color: String,
    pub position: Option<[f32; 3]>,
    pub size: Option<f32>,
}
impl Default for BodySpawnConfig {
    fn default() -> Self {
        Self {
            shape: "Sphere".into(),
            color: "#ffffff".into(),
            position: None,
            size: None,
        }
    }
}
impl BodySpawnConfig {
    pub fn sphere(color: impl Into<String>) -> Self {
        Self { shape: "Sphere".into(), color: color.into(), ..default() }
    }
    pub fn cube(color: impl Into<String>) -> Self {
        Self { shape: "Box".into(), color: color.into(), ..default() }
    }
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = Some(position.to_array());
        self
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub distance: f32,
    pub background: String,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 70.0,
            distance: 15.0,
            background: "#333333".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    pub directional_illuminance: f32,
    pub shadows: bool,
}
impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: 400.0,
            directional_illuminance: 4000.0,
            shadows: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Start with the collider wireframe overlay visible.
    pub overlay: bool,
    /// Seconds between periodic simulation stats log lines. 0.0 disables.
    pub log_interval: f32,
}
impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            overlay: false,
            log_interval: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub bodies: BodyDefaults,
    pub pointer: PointerConfig,
    pub population: Vec<BodySpawnConfig>,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub debug: DebugConfig,
    /// Seed for the position spread generator. None = OS entropy.
    pub seed: Option<u64>,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            physics: Default::default(),
            bodies: Default::default(),
            pointer: Default::default(),
            population: default_population(),
            camera: Default::default(),
            lighting: Default::default(),
            debug: Default::default(),
            seed: None,
        }
    }
}

/// Spheres for every palette color first, then cubes, all without fixed positions.
pub fn default_population() -> Vec<BodySpawnConfig> {
    DEFAULT_PALETTE
        .iter()
        .map(|c| BodySpawnConfig::sphere(*c))
        .chain(DEFAULT_PALETTE.iter().map(|c| BodySpawnConfig::cube(*c)))
        .collect()
}

impl SceneConfig {
    pub fn gravity(&self) -> Vec3 {
        Vec3::from_array(self.physics.gravity)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge of maps).
    /// Missing files are skipped; returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            if let Some(v) = incoming.take() {
                                merge_value(ev, v);
                            }
                        }
                        if let Some(v) = incoming {
                            bm.insert(k, v);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            if !path_ref.exists() {
                continue;
            }
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (SceneConfig::default(), used, errors);
        };
        match val.into_rust::<SceneConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (SceneConfig::default(), used, errors)
            }
        }
    }

    /// Validate the configuration returning a list of human-readable warning strings.
    /// Hard failures (bad geometry, colors) are reported again, as errors, when the scene plan is
    /// resolved; here they only show up as warnings so every problem is listed at once.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.gravity().length_squared() > 0.0 {
            w.push(format!(
                "physics.gravity {:?} is non-zero; bodies will drift off-center",
                self.physics.gravity
            ));
        }
        let s = self.physics.attractor_strength;
        if !s.is_finite() || s < 0.0 {
            w.push(format!("physics.attractor_strength {s} must be finite and >= 0"));
        } else if s == 0.0 {
            w.push("physics.attractor_strength is 0; nothing pulls bodies to the center".into());
        } else if s > 50.0 {
            w.push(format!("physics.attractor_strength {s} very high; integration instability possible"));
        }
        if self.physics.timestep_hz < 0.0 {
            w.push(format!("physics.timestep_hz {} negative", self.physics.timestep_hz));
        } else if self.physics.timestep_hz > 0.0 && self.physics.timestep_hz < 20.0 {
            w.push(format!(
                "physics.timestep_hz {} very low; fast bodies may tunnel",
                self.physics.timestep_hz
            ));
        }
        let b = &self.bodies;
        if b.linear_damping < 0.0 || b.angular_damping < 0.0 {
            w.push("bodies damping must be >= 0".into());
        }
        if b.linear_damping == 0.0 {
            w.push("bodies.linear_damping is 0; bodies oscillate through the center forever".into());
        }
        if b.friction < 0.0 {
            w.push("bodies.friction negative".into());
        }
        if b.spread < 0.0 {
            w.push("bodies.spread negative".into());
        } else if b.spread == 0.0 {
            w.push("bodies.spread is 0; unpositioned bodies all start at the origin".into());
        }
        if b.sphere_radius <= 0.0 {
            w.push("bodies.sphere_radius must be > 0".into());
        }
        if b.cube_size <= 0.0 {
            w.push("bodies.cube_size must be > 0".into());
        }
        if !(POINTER_RADIUS_MIN..=POINTER_RADIUS_MAX).contains(&self.pointer.radius) {
            w.push(format!(
                "pointer.radius {} outside {POINTER_RADIUS_MIN}..={POINTER_RADIUS_MAX}; default used",
                self.pointer.radius
            ));
        }
        if self.population.is_empty() {
            w.push("population is empty; only the pointer will spawn".into());
        }
        for (i, body) in self.population.iter().enumerate() {
            if !matches!(body.shape.as_str(), "Sphere" | "Box") {
                w.push(format!("population[{i}].shape '{}' unknown (Sphere | Box)", body.shape));
            }
            if Srgba::hex(&body.color).is_err() {
                w.push(format!("population[{i}].color '{}' is not a hex color", body.color));
            }
            if let Some(size) = body.size {
                if size <= 0.0 {
                    w.push(format!("population[{i}].size {size} must be > 0"));
                }
            }
        }
        if !(1.0..179.0).contains(&self.camera.fov_degrees) {
            w.push(format!("camera.fov_degrees {} outside 1..179", self.camera.fov_degrees));
        }
        if self.camera.distance <= 0.0 {
            w.push("camera.distance must be > 0 (camera sits in front of the z=0 plane)".into());
        }
        if self.debug.log_interval < 0.0 {
            w.push("debug.log_interval negative -> treated as disabled".into());
        }
        w
    }
}
