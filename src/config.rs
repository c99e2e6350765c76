use crate::errors::{ConfigError, GenError};
use std::env;
use std::str::FromStr;

const DEFAULT_INITIAL_COUNT: usize = 15;
const DEFAULT_VALUE_MIN: i32 = 0;
const DEFAULT_VALUE_MAX: i32 = 100;
const DEFAULT_BATCH_MIN: usize = 100;
const DEFAULT_BATCH_MAX: usize = 200;

/// How generated values spread over `value_min..=value_max`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValueDistribution {
    #[default]
    Uniform,
    /// centred on the middle of the range, clamped to its ends
    Normal,
}

impl FromStr for ValueDistribution {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "normal" => Ok(Self::Normal),
            _ => Err(()),
        }
    }
}

/// Parameters of a demonstration run
///
/// # Fields
/// * `initial_count` - Number of random values the tree is built from
/// * `value_min`, `value_max` - Inclusive range of generated values
/// * `batch_min`, `batch_max` - Inclusive range for the number of random inserts after building
/// * `distribution` - Shape of the generated values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub initial_count: usize,
    pub value_min: i32,
    pub value_max: i32,
    pub batch_min: usize,
    pub batch_max: usize,
    pub distribution: ValueDistribution,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_INITIAL_COUNT,
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            batch_min: DEFAULT_BATCH_MIN,
            batch_max: DEFAULT_BATCH_MAX,
            distribution: ValueDistribution::default(),
        }
    }
}

impl DriverConfig {
    /// defaults overridden by any `BST_*` variables present in the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();
        override_from(&lookup, "BST_INITIAL_COUNT", &mut config.initial_count)?;
        override_from(&lookup, "BST_VALUE_MIN", &mut config.value_min)?;
        override_from(&lookup, "BST_VALUE_MAX", &mut config.value_max)?;
        override_from(&lookup, "BST_BATCH_MIN", &mut config.batch_min)?;
        override_from(&lookup, "BST_BATCH_MAX", &mut config.batch_max)?;
        override_from(&lookup, "BST_DISTRIBUTION", &mut config.distribution)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.value_min > self.value_max {
            return Err(GenError::InvalidRange {
                min: self.value_min.to_string(),
                max: self.value_max.to_string(),
            });
        }
        if self.batch_min > self.batch_max {
            return Err(GenError::InvalidBatch {
                min: self.batch_min,
                max: self.batch_max,
            });
        }
        Ok(())
    }
}

fn override_from<F, V>(lookup: &F, var: &'static str, slot: &mut V) -> Result<(), ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    V: FromStr,
{
    if let Some(value) = lookup(var) {
        *slot = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnv { var, value })?;
    }
    Ok(())
}
