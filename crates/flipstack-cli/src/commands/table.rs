use anyhow::{bail, Result};

use flipstack_core::{AppConfig, PageSize, PageTransform, StackTransformer};

/// Most rows a single table may print
const MAX_SAMPLES: usize = 100_000;

/// Sample `from..=to` in steps of `step`
fn sample_positions(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if step.is_nan() || step <= 0.0 {
        bail!("Step must be positive, got {}", step);
    }
    if !from.is_finite() || !to.is_finite() {
        bail!("--from ({}) and --to ({}) must be finite", from, to);
    }
    if to < from {
        bail!("--to ({}) must not be below --from ({})", to, from);
    }

    // tolerate accumulated error on the last sample
    let steps = ((to - from) / step + 1e-9).floor();
    if steps >= MAX_SAMPLES as f64 {
        bail!(
            "{}..={} in steps of {} exceeds {} samples",
            from,
            to,
            step,
            MAX_SAMPLES
        );
    }
    let count = steps as usize;
    Ok((0..=count).map(|i| from + i as f64 * step).collect())
}

pub fn run(
    config: &AppConfig,
    from: f64,
    to: f64,
    step: f64,
    width: f64,
    height: f64,
    json: bool,
) -> Result<()> {
    let positions = sample_positions(from, to, step)?;
    let transformer = StackTransformer::new(config.stack.to_geometry()?);
    let size = PageSize::new(width, height);

    let transforms: Vec<PageTransform> = positions
        .iter()
        .map(|&position| transformer.compute_transform(position, size))
        .collect();

    if json {
        let output = serde_json::json!({
            "size": size,
            "geometry": transformer.bound_geometry(),
            "transforms": transforms,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if let Some(bound) = transformer.bound_geometry() {
        println!(
            "D = {}  overlap = {:.3}  space before = {:.3}  space after = {:.3}\n",
            bound.dimension, bound.overlap, bound.space_before, bound.space_after
        );
    }

    println!(
        "{:>9}  {:<8}  {:>7}  {:>7}  {:>10}  {:>8}  {:>17}  {:>6}",
        "position", "regime", "scale_x", "scale_y", "translate", "rotation", "pivot", "alpha"
    );
    for t in &transforms {
        let (scale_x, scale_y) = match t.scale {
            Some(s) => (format!("{:.4}", s.x), format!("{:.4}", s.y)),
            None => ("-".to_string(), "-".to_string()),
        };
        let translation = t
            .translation
            .map(|v| format!("{:.3}", v))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>9.3}  {:<8}  {:>7}  {:>7}  {:>10}  {:>8.3}  {:>17}  {:>6.3}",
            t.position,
            format!("{:?}", t.regime),
            scale_x,
            scale_y,
            translation,
            t.rotation,
            format!("({:.1}, {:.1})", t.pivot.x, t.pivot.y),
            t.alpha
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_positions() {
        let positions = sample_positions(-1.0, 1.0, 0.5).unwrap();
        assert_eq!(positions, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let positions = sample_positions(0.0, 1.0, 0.1).unwrap();
        assert_eq!(positions.len(), 11);
    }

    #[test]
    fn test_sample_positions_rejects_bad_input() {
        assert!(sample_positions(0.0, 1.0, 0.0).is_err());
        assert!(sample_positions(0.0, 1.0, f64::NAN).is_err());
        assert!(sample_positions(1.0, 0.0, 0.1).is_err());
    }

    #[test]
    fn test_sample_positions_rejects_unbounded_ranges() {
        assert!(sample_positions(0.0, f64::INFINITY, 1.0).is_err());
        assert!(sample_positions(f64::NEG_INFINITY, 0.0, 1.0).is_err());
        assert!(sample_positions(f64::NAN, 1.0, 0.1).is_err());
        assert!(sample_positions(-1e12, 1e12, 1e-3).is_err());

        let positions = sample_positions(0.0, 99_998.0, 1.0).unwrap();
        assert_eq!(positions.len(), 99_999);
    }
}
