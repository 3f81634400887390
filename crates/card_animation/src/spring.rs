//! Spring physics
//!
//! A damped harmonic oscillator integrated with RK4. Springs are driven by
//! explicit time steps and settle once both displacement and velocity fall
//! under [`SpringConfig::rest_threshold`].

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Displacement and velocity below which the spring snaps to rest
    pub rest_threshold: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_threshold: 0.001,
        }
    }

    /// Fast, no overshoot
    pub const fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Quick with a hint of overshoot. Slider fills use this.
    pub const fn stiff() -> Self {
        Self::new(300.0, 20.0, 1.0)
    }

    /// Slow and smooth
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Visible bounce
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// An animated scalar value
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Move the target; current velocity is preserved
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to `value` and stop
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_threshold
            && self.velocity.abs() < self.config.rest_threshold
    }

    fn acceleration(&self, value: f32, velocity: f32) -> f32 {
        let spring_force = -self.config.stiffness * (value - self.target);
        let damping_force = -self.config.damping * velocity;
        (spring_force + damping_force) / self.config.mass.max(f32::EPSILON)
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        if dt <= 0.0 {
            return;
        }

        // Sub-step so large frame gaps stay stable
        let steps = (dt / (1.0 / 240.0)).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            let (x, v) = (self.value, self.velocity);

            let k1_v = self.acceleration(x, v);
            let k1_x = v;
            let k2_v = self.acceleration(x + k1_x * h / 2.0, v + k1_v * h / 2.0);
            let k2_x = v + k1_v * h / 2.0;
            let k3_v = self.acceleration(x + k2_x * h / 2.0, v + k2_v * h / 2.0);
            let k3_x = v + k2_v * h / 2.0;
            let k4_v = self.acceleration(x + k3_x * h, v + k3_v * h);
            let k4_x = v + k3_v * h;

            self.value = x + h / 6.0 * (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x);
            self.velocity = v + h / 6.0 * (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v);
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}
