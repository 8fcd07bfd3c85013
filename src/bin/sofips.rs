use sofips::base::{AccelUnit, Direction, Table, DEFAULT_OUT_DIR};
use sofips::code::CodeRuleTable;
use sofips::spectrum::{SpectrumEvaluator, SpectrumParameters};
use sofips::util::{plot_spectrum, write_direction_table, write_spectrum_table, TsvOptions};
use sofips::StrError;
use std::env;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "sofips",
    about = "Generates the elastic and design spectra of the NTE E.030 code"
)]
struct Options {
    /// Seismic zone id (1 to 4)
    #[structopt(long, default_value = "4")]
    zone: u32,

    /// Soil profile key (S0 to S4)
    #[structopt(long, default_value = "S1")]
    soil: String,

    /// Usage category key (A1, A2, B, C)
    #[structopt(long, default_value = "C")]
    category: String,

    /// Usage factor U (replaces the category)
    #[structopt(long)]
    usage: Option<f64>,

    /// Reduction coefficient RX (replaces the composed value)
    #[structopt(long)]
    rx: Option<f64>,

    /// Reduction coefficient RY (replaces the composed value)
    #[structopt(long)]
    ry: Option<f64>,

    /// Structural system key along X
    #[structopt(long, default_value = "rc-frames")]
    system_x: String,

    /// Structural system key along Y
    #[structopt(long, default_value = "rc-frames")]
    system_y: String,

    /// Height irregularity key along X
    #[structopt(long, default_value = "regular")]
    ia_x: String,

    /// Plan irregularity key along X
    #[structopt(long, default_value = "regular")]
    ip_x: String,

    /// Height irregularity key along Y
    #[structopt(long, default_value = "regular")]
    ia_y: String,

    /// Plan irregularity key along Y
    #[structopt(long, default_value = "regular")]
    ip_y: String,

    /// JSON file with the parameters (replaces the classification options)
    #[structopt(long)]
    input: Option<String>,

    /// Maximum period (s)
    #[structopt(long, default_value = "6.0")]
    t_max: f64,

    /// Period step (s)
    #[structopt(long, default_value = "0.01")]
    dt: f64,

    /// Writes the ordinates in m/s² instead of g
    #[structopt(long)]
    si: bool,

    /// Number of decimal digits of the full table
    #[structopt(long, default_value = "4")]
    precision: usize,

    /// Writes a header row in the full table
    #[structopt(long)]
    header: bool,

    /// Output directory
    #[structopt(long)]
    out_dir: Option<String>,

    /// Saves an SVG figure (requires Python and Matplotlib)
    #[structopt(long)]
    plot: bool,

    /// Prints the catalog of keys and exits
    #[structopt(long)]
    list: bool,
}

fn main() -> Result<(), StrError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    // parse options
    let options = Options::from_args();
    let table = CodeRuleTable::e030();
    if options.list {
        print_catalog(table);
        return Ok(());
    }

    // parameters
    let params = match build_parameters(&options) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("{}", e);
            return Err("invalid parameters");
        }
    };
    tracing::debug!("{}", params);

    // evaluate
    let evaluator = SpectrumEvaluator::new(table);
    let curve = match evaluator.evaluate(&params) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            return Err("evaluation rejected");
        }
    };
    if let Some(warning) = curve.warning() {
        tracing::warn!("{}", warning);
    }
    tracing::info!("{} spectrum with {} samples\n{}", table.title(), curve.len(), curve.summary());
    let curve = if options.si {
        curve.to_units(AccelUnit::MetersPerSecondSquared)
    } else {
        curve
    };

    // write files
    let out_dir = options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR);
    let tsv_options = TsvOptions {
        precision: options.precision,
        header: options.header,
    };
    let path_full = format!("{}/spectrum.tsv", out_dir);
    write_spectrum_table(&curve, &tsv_options, &path_full)?;
    for direction in Direction::all() {
        let path = format!("{}/spectrum_{}.txt", out_dir, direction.to_string().to_lowercase());
        write_direction_table(&curve, direction, &path)?;
        tracing::info!(
            "max design Sa{} = {:.4} {}",
            direction,
            curve.max_design(direction),
            curve.unit().symbol()
        );
    }
    let path_json = format!("{}/spectrum.json", out_dir);
    curve.write_json(&path_json)?;
    params.write_json(&format!("{}/parameters.json", out_dir))?;
    if options.plot {
        let path_svg = format!("{}/spectrum.svg", out_dir);
        let mut plot = plot_spectrum(&curve);
        plot.set_title(&table.title()).save(&path_svg)?;
        tracing::info!("figure saved to {}", path_svg);
    }

    // message
    let thin_line = format!("{:─^1$}", "", path_full.len());
    println!("\n{}", thin_line);
    println!("spectrum written to:");
    println!("{}", path_full);
    println!("{}\n", thin_line);
    Ok(())
}

/// Returns the log filter given by RUST_LOG, or "info" if it is missing or invalid
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Builds the parameters from the command line or from a JSON file
fn build_parameters(options: &Options) -> Result<SpectrumParameters, String> {
    if let Some(input) = &options.input {
        tracing::info!("reading parameters from {}", input);
        return SpectrumParameters::read_json(input).map_err(|e| format!("cannot read {}: {}", input, e));
    }
    let mut params = SpectrumParameters::new();
    params
        .set_zone(options.zone)
        .and_then(|p| p.set_soil(&options.soil))
        .and_then(|p| p.set_usage_category(&options.category))
        .and_then(|p| p.set_period_axis(options.t_max, options.dt))
        .map_err(|e| e.to_string())?;
    if let Some(u) = options.usage {
        params.set_usage_factor(u).map_err(|e| e.to_string())?;
    }
    let axes = [
        (Direction::X, options.rx, &options.system_x, &options.ia_x, &options.ip_x),
        (Direction::Y, options.ry, &options.system_y, &options.ia_y, &options.ip_y),
    ];
    for (direction, r, system, ia, ip) in axes {
        let res = match r {
            Some(value) => params.set_reduction(direction, value),
            None => params.set_reduction_composed(direction, system, ia, ip),
        };
        res.map_err(|e| e.to_string())?;
    }
    Ok(params)
}

/// Prints the keys accepted by the rule table
fn print_catalog(table: &CodeRuleTable) {
    println!("{}\n", table.title());
    println!("seismic zones");
    for zone in table.zones() {
        println!("  {}\tZ = {}", zone.id, zone.z);
    }
    println!("{}s", Table::Soil);
    for soil in table.soils() {
        println!("  {}\t{} (TP = {} s, TL = {} s)", soil.key, soil.description, soil.tp, soil.tl);
    }
    for t in [Table::Usage, Table::System, Table::HeightIrregularity, Table::PlanIrregularity] {
        println!("{}s", t);
        for entry in table.entries(t) {
            println!("  {}\t{} ({})", entry.key, entry.value, entry.description);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::log_filter;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_works() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("debug".to_string())).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("warn".to_string())).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("sofips=verbose".to_string())).max_level_hint(), Some(LevelFilter::INFO));
    }
}
