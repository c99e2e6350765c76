use crate::config::{DriverConfig, ValueDistribution};
use crate::errors::GenError;
use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use rand::thread_rng;
use rand_distr::{Distribution, Normal, Uniform};
use std::fmt::Display;

pub fn generate_uniform<T>(count: usize, min: T, max: T) -> Result<Vec<T>, GenError>
where
    T: SampleUniform + PartialOrd + Copy + Display,
{
    if min > max {
        return Err(GenError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }

    let uniform = Uniform::new_inclusive(min, max);
    let mut rng = thread_rng();

    Ok((0..count).map(|_| uniform.sample(&mut rng)).collect())
}

pub fn generate_normal_i32(count: usize, mean: f64, std_dev: f64) -> Result<Vec<i32>, GenError> {
    let normal = Normal::new(mean, std_dev)?;
    let mut rng = thread_rng();

    Ok((0..count)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            sample.max(i32::MIN as f64).min(i32::MAX as f64) as i32
        })
        .collect())
}

/// pick how many values to insert in one batch, inclusive on both ends
pub fn generate_batch_len(min: usize, max: usize) -> Result<usize, GenError> {
    if min > max {
        return Err(GenError::InvalidBatch { min, max });
    }
    Ok(thread_rng().gen_range(min..=max))
}

/// `count` values in `config.value_min..=config.value_max`, shaped by `config.distribution`
pub fn generate_batch(config: &DriverConfig, count: usize) -> Result<Vec<i32>, GenError> {
    config.validate()?;
    let (min, max) = (config.value_min, config.value_max);

    match config.distribution {
        ValueDistribution::Uniform => generate_uniform(count, min, max),
        ValueDistribution::Normal => {
            // same shape as a smooth dataset: mean at the centre, 3 sigma to each end
            let mean = (min as f64 + max as f64) / 2.0;
            let std_dev = (max as f64 - min as f64) / 6.0;
            let values = generate_normal_i32(count, mean, std_dev)?;
            Ok(values.into_iter().map(|v| v.clamp(min, max)).collect())
        }
    }
}

pub fn generate_values(config: &DriverConfig) -> Result<Vec<i32>, GenError> {
    generate_batch(config, config.initial_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_i32() {
        let data = generate_uniform(1000, 0i32, 100).unwrap();
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| (0..=100).contains(&x)));
    }

    #[test]
    fn test_uniform_u64() {
        let data = generate_uniform(1000, u64::MAX - 10, u64::MAX).unwrap();
        assert_eq!(data.len(), 1000);
        assert!(data.iter().all(|&x| x >= u64::MAX - 10));
    }

    #[test]
    fn test_uniform_single_point() {
        let data = generate_uniform(10, 7usize, 7).unwrap();
        assert!(data.iter().all(|&x| x == 7));
    }

    #[test]
    fn test_uniform_inverted_range() {
        let err = generate_uniform(10, 5i32, -5).unwrap_err();
        match err {
            GenError::InvalidRange { min, max } => {
                assert_eq!((min.as_str(), max.as_str()), ("5", "-5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_normal_i32_bounds() {
        let data = generate_normal_i32(1000, 0.0, (i32::MAX / 3) as f64).unwrap();
        assert_eq!(data.len(), 1000);
    }

    #[test]
    fn test_normal_non_finite_std_dev() {
        assert!(matches!(
            generate_normal_i32(3, 0.0, f64::NAN),
            Err(GenError::Distribution(_))
        ));
        assert!(matches!(
            generate_normal_i32(3, 0.0, f64::INFINITY),
            Err(GenError::Distribution(_))
        ));
    }

    #[test]
    fn test_batch_len() {
        for _ in 0..100 {
            let n = generate_batch_len(100, 200).unwrap();
            assert!((100..=200).contains(&n));
        }
        assert_eq!(generate_batch_len(3, 3).unwrap(), 3);
        assert!(generate_batch_len(4, 3).is_err());
    }

    #[test]
    fn test_values_from_config() {
        let config = DriverConfig::default();
        let data = generate_values(&config).unwrap();
        assert_eq!(data.len(), config.initial_count);
        assert!(data.iter().all(|&x| x >= config.value_min && x <= config.value_max));
    }

    #[test]
    fn test_normal_values_stay_in_range() {
        let config = DriverConfig {
            value_min: -20,
            value_max: 20,
            distribution: ValueDistribution::Normal,
            ..DriverConfig::default()
        };
        let data = generate_batch(&config, 2000).unwrap();
        assert_eq!(data.len(), 2000);
        assert!(data.iter().all(|&x| (-20..=20).contains(&x)));

        // single point range gives a zero std_dev, which is still a valid distribution
        let config = DriverConfig {
            value_min: 4,
            value_max: 4,
            ..config
        };
        assert!(generate_batch(&config, 10).unwrap().iter().all(|&x| x == 4));
    }

    #[test]
    fn test_batch_rejects_inverted_config() {
        let config = DriverConfig {
            value_min: 9,
            value_max: 1,
            distribution: ValueDistribution::Normal,
            ..DriverConfig::default()
        };
        assert!(matches!(
            generate_batch(&config, 5),
            Err(GenError::InvalidRange { .. })
        ));
    }
}
