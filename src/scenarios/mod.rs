mod builder;
mod presets;

pub use self::builder::{ScenarioBuilder, ScenarioContents};

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::Rng;

use crate::core::{FeatureFlags, GravityType, SimulationContext, Storage};
use crate::error::SandboxError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Built-in scenes the world can be reset to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ScenarioKind {
    Solar,
    Pendulum,
    Chain,
    Tower,
    Collision,
    Chaos,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::Solar,
        ScenarioKind::Pendulum,
        ScenarioKind::Chain,
        ScenarioKind::Tower,
        ScenarioKind::Collision,
        ScenarioKind::Chaos,
    ];

    /// Returns the lowercase name used for parsing
    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::Solar => "solar",
            ScenarioKind::Pendulum => "pendulum",
            ScenarioKind::Chain => "chain",
            ScenarioKind::Tower => "tower",
            ScenarioKind::Collision => "collision",
            ScenarioKind::Chaos => "chaos",
        }
    }

    /// Lays the scenario out into a builder
    pub fn build<R: Rng + ?Sized>(self, builder: &mut ScenarioBuilder, rng: &mut R) -> Result<()> {
        match self {
            ScenarioKind::Solar => presets::solar(builder, rng),
            ScenarioKind::Pendulum => presets::pendulum(builder, rng),
            ScenarioKind::Chain => presets::chain(builder, rng),
            ScenarioKind::Tower => presets::tower(builder, rng),
            ScenarioKind::Collision => presets::collision(builder, rng),
            ScenarioKind::Chaos => presets::chaos(builder, rng),
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SandboxError::UnknownScenario(s.to_string()))
    }
}

/// Replaces the world contents with a scenario.
///
/// The scenario is built completely before anything in `ctx` changes; on
/// error the context is left as it was. On success gravity is switched back
/// on, a non-uniform gravity field is replaced by the default one, and the
/// scenario may then override it. Friction goes back to whatever it was before
/// the last frictionless scenario turned it off.
pub fn load_scenario<R: Rng + ?Sized>(ctx: &mut SimulationContext, kind: ScenarioKind, rng: &mut R) -> Result<()> {
    let mut builder = ScenarioBuilder::new(ctx.config.bounds);
    kind.build(&mut builder, rng)?;
    let contents = builder.finish();

    let body_count = contents.bodies.len();
    let constraint_count = contents.constraints.len();

    ctx.replace_contents(contents.bodies, contents.constraints);
    ctx.events.clear();

    // Restore only if friction is still off; a user toggle since then wins
    if let Some(friction) = ctx.saved_friction.take() {
        if !ctx.config.is_enabled(FeatureFlags::FRICTION) {
            ctx.config.set_feature(FeatureFlags::FRICTION, friction);
        }
    }
    if !contents.friction {
        ctx.saved_friction = Some(ctx.config.is_enabled(FeatureFlags::FRICTION));
        ctx.config.set_feature(FeatureFlags::FRICTION, false);
    }

    let config = &mut ctx.config;
    config.set_feature(FeatureFlags::GRAVITY, true);
    config.gravity = match (contents.gravity, config.gravity) {
        (Some(gravity), _) => gravity,
        (None, GravityType::Uniform(gravity)) => GravityType::Uniform(gravity),
        (None, _) => GravityType::default(),
    };

    debug!(
        "loaded scenario {} with {} bodies and {} constraints",
        kind, body_count, constraint_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimulationConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn names_round_trip_through_parsing() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.name().parse::<ScenarioKind>().unwrap(), kind);
        }
        assert!(matches!(
            "orbit".parse::<ScenarioKind>(),
            Err(SandboxError::UnknownScenario(name)) if name == "orbit"
        ));
    }

    #[test]
    fn solar_switches_to_point_gravity_and_back() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        load_scenario(&mut ctx, ScenarioKind::Solar, &mut rng).unwrap();
        assert!(matches!(ctx.config.gravity, GravityType::Point { .. }));
        assert!(!ctx.config.is_enabled(FeatureFlags::FRICTION));

        load_scenario(&mut ctx, ScenarioKind::Pendulum, &mut rng).unwrap();
        assert_eq!(ctx.config.gravity, GravityType::default());
        assert!(ctx.config.is_enabled(FeatureFlags::FRICTION));
        assert_eq!(ctx.bodies.len(), 2);
        assert_eq!(ctx.constraints.len(), 1);
    }

    #[test]
    fn friction_returns_to_the_setting_before_solar() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        ctx.config.set_feature(FeatureFlags::FRICTION, false);

        load_scenario(&mut ctx, ScenarioKind::Pendulum, &mut rng).unwrap();
        assert!(!ctx.config.is_enabled(FeatureFlags::FRICTION));

        load_scenario(&mut ctx, ScenarioKind::Solar, &mut rng).unwrap();
        load_scenario(&mut ctx, ScenarioKind::Solar, &mut rng).unwrap();
        assert!(!ctx.config.is_enabled(FeatureFlags::FRICTION));

        ctx.config.set_feature(FeatureFlags::FRICTION, true);
        load_scenario(&mut ctx, ScenarioKind::Solar, &mut rng).unwrap();
        load_scenario(&mut ctx, ScenarioKind::Chain, &mut rng).unwrap();
        assert!(ctx.config.is_enabled(FeatureFlags::FRICTION));
        assert_eq!(ctx.saved_friction, None);
    }

    #[test]
    fn loading_keeps_custom_uniform_gravity() {
        let mut ctx = SimulationContext::new(SimulationConfig::default());
        ctx.config.set_gravity_polar(500.0, 0.0);
        ctx.config.set_feature(FeatureFlags::GRAVITY, false);

        load_scenario(&mut ctx, ScenarioKind::Tower, &mut StdRng::seed_from_u64(1)).unwrap();

        assert!(ctx.config.is_enabled(FeatureFlags::GRAVITY));
        assert!(matches!(ctx.config.gravity, GravityType::Uniform(g) if (g.x - 500.0).abs() < 1e-3));
    }
}
