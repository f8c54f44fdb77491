use std::path::PathBuf;

use anyhow::Context;
use rand::{SeedableRng, rngs::StdRng};
use strokemask::{
    CanvasSize, MovingStrokeConfig, masked_ratio, moving_stroke_masks, random_walk_mask,
};

fn parse_preset() -> anyhow::Result<MovingStrokeConfig> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("object") | None => Ok(MovingStrokeConfig::object_like()),
        Some("curve") => Ok(MovingStrokeConfig::rand_curve()),
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
            Ok(MovingStrokeConfig::from_json(&json)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = parse_preset()?;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let seq = moving_stroke_masks(&mut rng, 8, &cfg)?;

    let out_dir = PathBuf::from("assets").join("masks");
    std::fs::create_dir_all(&out_dir)?;

    for (i, mask) in seq.iter().enumerate() {
        let out_path = out_dir.join(format!("stroke_{i:03}.png"));
        mask.as_image()
            .save(&out_path)
            .with_context(|| format!("write {}", out_path.display()))?;
        eprintln!(
            "wrote {} (masked ratio {:.3})",
            out_path.display(),
            masked_ratio(mask)
        );
    }

    let size = CanvasSize::new(cfg.image_width, cfg.image_height)?;
    let walk = random_walk_mask(&mut rng, size, None)?;
    let walk_path = out_dir.join("random_walk.png");
    walk.as_image().save(&walk_path)?;
    eprintln!("wrote {}", walk_path.display());
    Ok(())
}
