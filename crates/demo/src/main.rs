// File: crates/demo/src/main.rs
// Summary: Demo loads a GraphQL user document, prints the profile summary and renders the
// XP progression, audit ratio and per-project charts to SVG and PNG.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dashboard_chart_core::profile::{decode_level, decode_user, ProfileSummary};
use dashboard_chart_core::{records, svg, DashboardConfig, Point, Scene, TooltipController};

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    out_dir: PathBuf,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut input = None;
        let mut config = None;
        let mut out_dir = PathBuf::from("target/out");
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config = Some(PathBuf::from(args.next().context("--config needs a path")?)),
                "--out" => out_dir = PathBuf::from(args.next().context("--out needs a directory")?),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
                _ => input = Some(PathBuf::from(arg)),
            }
        }
        let input = input.unwrap_or_else(|| PathBuf::from("crates/demo/data/sample_user.json"));
        Ok(Self { input, config, out_dir })
    }
}

fn init_logging() -> Result<()> {
    let level = std::env::var("DASHBOARD_LOG")
        .ok()
        .and_then(|v| v.parse::<log::LevelFilter>().ok())
        .unwrap_or(log::LevelFilter::Info);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("installing logger")?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;
    let args = Args::parse(std::env::args().skip(1))?;

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading '{}'", args.input.display()))?;
    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading '{}'", path.display()))?;
            DashboardConfig::from_json(&text).with_context(|| format!("parsing config '{}'", path.display()))?
        }
        None => DashboardConfig::default(),
    };

    let user = decode_user(&json).context("decoding user document")?;
    let transactions = user.transactions().context("decoding transactions")?;
    let level = match decode_level(&json) {
        Ok(level) => level,
        Err(e) => {
            log::warn!("no level in document: {e}");
            None
        }
    };
    let summary = ProfileSummary::from_user(&user, &transactions, level);
    print_summary(&summary);

    // 1) XP progression
    let xp = records::xp_series(&transactions);
    let line = config.line_chart().render(&xp).context("rendering XP progression")?;
    write_outputs(&line, &args.out_dir, "xp_progress")?;
    simulate_hover(&line);

    // 2) Audit ratio; a user with no audits either way has nothing to split
    let (given, received) = summary.ratio_magnitudes();
    match config.ratio_chart().render(given, received) {
        Ok(scene) => write_outputs(&scene, &args.out_dir, "audit_ratio")?,
        Err(e) => log::warn!("skipping audit ratio chart: {e}"),
    }

    // 3) XP per project
    let per_project = records::xp_per_project(&transactions);
    let bars = config.category_chart().render(&per_project).context("rendering XP per project")?;
    write_outputs(&bars, &args.out_dir, "projects")?;

    Ok(())
}

fn print_summary(s: &ProfileSummary) {
    println!("User #{}: {}", s.id, s.full_name);
    println!("  email:       {}", s.email);
    if let Some(address) = &s.address {
        println!("  address:     {address}");
    }
    if let Some(tel) = &s.tel {
        println!("  tel:         {tel}");
    }
    println!("  level:       {}", s.level);
    println!("  total XP:    {} kB", s.total_xp_kb);
    println!("  audit ratio: {} ({} MB given / {} MB received)", s.audit_ratio, s.given_mb, s.received_mb);
}

/// Write `<dir>/chart_<name>.svg` and `.png`.
fn write_outputs(scene: &Scene, dir: &Path, name: &str) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating '{}'", dir.display()))?;
    let svg_path = dir.join(format!("chart_{name}.svg"));
    let doc = svg::to_svg(scene).context("serializing SVG")?;
    std::fs::write(&svg_path, doc).with_context(|| format!("writing '{}'", svg_path.display()))?;
    let png_path = svg_path.with_extension("png");
    dashboard_chart_skia::render_png(scene, &png_path)?;
    println!("Wrote {} and {}", svg_path.display(), png_path.display());
    Ok(())
}

/// Sweep the pointer across every marker the way a host page would report it.
fn simulate_hover(scene: &Scene) {
    let mut tooltip = TooltipController::new();
    for marker in &scene.markers {
        let at = Point::new(marker.center.x + scene.origin.x, marker.center.y + scene.origin.y);
        tooltip.track(scene, at);
        if let (Some(text), Some(pos)) = (tooltip.text(), tooltip.position()) {
            log::info!("hover {:?}: \"{text}\" at ({:.1}, {:.1})", marker.id, pos.x, pos.y);
        }
    }
    tooltip.track(scene, Point::new(-1.0, -1.0));
    log::debug!("pointer left plot, tooltip visible = {}", tooltip.is_visible());
}
