use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ziwei_base::{
    ALL_BRANCHES, BirthRecord, Chart, ChartError, Gender, StarKind, compute_chart,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "Ziwei natal chart CLI")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a chart and print all 12 sectors
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print the chart as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the prompt-facing summary of a chart
    Summary {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the 12 birth time slots with their clock hours
    Slots,
    /// List the star catalog
    Stars,
}

#[derive(Args)]
struct BirthArgs {
    /// JSON file holding a birth record (replaces the field flags)
    #[arg(long, conflicts_with_all = ["year", "month", "day", "slot", "gender", "leap"])]
    input: Option<PathBuf>,
    /// Lunar year
    #[arg(long, required_unless_present = "input")]
    year: Option<i32>,
    /// Lunar month (1-12)
    #[arg(long, required_unless_present = "input")]
    month: Option<u8>,
    /// Lunar day (1-30)
    #[arg(long, required_unless_present = "input")]
    day: Option<u8>,
    /// Time slot (0-11, 0 = Zi hour 23:00-01:00)
    #[arg(long, required_unless_present = "input")]
    slot: Option<u8>,
    /// Gender
    #[arg(long, value_enum, required_unless_present = "input")]
    gender: Option<GenderArg>,
    /// Birth month is a leap month
    #[arg(long)]
    leap: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(g: GenderArg) -> Self {
        match g {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

impl BirthArgs {
    fn to_record(&self) -> Result<BirthRecord, String> {
        if let Some(path) = &self.input {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            return serde_json::from_str(&text)
                .map_err(|e| format!("invalid birth record in {}: {e}", path.display()));
        }
        match (self.year, self.month, self.day, self.slot, self.gender) {
            (Some(year), Some(month), Some(day), Some(slot), Some(gender)) => Ok(
                BirthRecord::new(year, month, day, self.leap, slot, gender.into()),
            ),
            _ => Err("missing birth fields: --year --month --day --slot --gender".to_string()),
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn require_chart(birth: &BirthArgs) -> Chart {
    let record = match birth.to_record() {
        Ok(r) => r,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };
    debug!(?record, "computing chart");
    match compute_chart(&record) {
        Ok(chart) => chart,
        Err(e @ ChartError::InvalidInput { .. }) => {
            eprintln!("Invalid birth record: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Chart construction failed: {e}");
            std::process::exit(2);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart(chart: &Chart) {
    let birth = chart.birth();
    println!(
        "Lunar {}-{:02}{}-{:02}, {} ({}), year stem {}",
        birth.lunar_year,
        birth.lunar_month,
        if birth.is_leap_month { " (leap)" } else { "" },
        birth.lunar_day,
        birth.time_branch().map_or("?", |b| b.hour_name()),
        birth.gender.english_name(),
        chart.year_stem().name(),
    );
    println!(
        "Life sector: {} ({})    Body sector: {} ({})",
        chart.life_sector().name().name(),
        chart.life_sector().label().name(),
        chart.body_sector().name().name(),
        chart.body_sector().label().name(),
    );
    println!();
    for sector in chart.sectors() {
        let mut marks = String::new();
        if sector.is_life_sector() {
            marks.push_str(" [命]");
        }
        if sector.is_body_sector() {
            marks.push_str(" [身]");
        }
        let stars: Vec<String> = sector
            .stars()
            .iter()
            .map(|s| format!("{}({})", s.name(), s.category().name()))
            .collect();
        println!(
            "{:>2} {:<4} {:<8} {}{}  {}",
            sector.ring_index(),
            sector.name().name(),
            sector.name().english_name(),
            sector.label().name(),
            marks,
            stars.join(" ")
        );
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart { birth, json } => {
            let chart = require_chart(&birth);
            if json {
                print_json(&chart);
            } else {
                print_chart(&chart);
            }
        }

        Commands::Summary { birth, json } => {
            let summary = require_chart(&birth).summary();
            if json {
                print_json(&summary);
            } else {
                print!("{summary}");
            }
        }

        Commands::Slots => {
            for b in ALL_BRANCHES {
                let (start, end) = b.hour_range();
                println!(
                    "{:>2} {} ({}) {:02}:00-{:02}:00",
                    b.index(),
                    b.hour_name(),
                    b.pinyin(),
                    start,
                    end
                );
            }
        }

        Commands::Stars => {
            for kind in StarKind::all() {
                let info = kind.info();
                println!(
                    "{:<10} {} {:<10} {:<7} {}",
                    info.id,
                    info.name,
                    info.category.name(),
                    info.brightness.name(),
                    info.description
                );
            }
        }
    }
}
