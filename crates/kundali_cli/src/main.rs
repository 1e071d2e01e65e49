use clap::{Parser, Subcommand};
use kundali_chart::{BirthInput, Chart, ChartConfig, birth_chart};
use kundali_ephem::{AnalyticEphemeris, EphemerisProvider, HouseSystem};
use kundali_time::{ClockTime, UtcOffset, jd_to_calendar, parse_date, to_universal, ut_hours};
use kundali_vedic::{deg_to_dms, nakshatra_from_longitude, rashi_from_longitude, whole_sign_houses};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal birth chart CLI")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart from the built-in ephemeris
    Chart {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        /// Local clock time, HH:MM
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Clock offset from UT in hours
        #[arg(long, default_value = "5.5", allow_hyphen_values = true)]
        offset: f64,
        /// House system code for the ascendant query: W or P
        #[arg(long, default_value = "W")]
        houses: char,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Whole-sign houses for a lagna sign index (0 = Aries)
    Houses {
        /// Lagna sign index, 0-11
        lagna: u8,
    },
    /// Local civil time to Universal Time
    Ut {
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Local clock time, HH:MM
        #[arg(long)]
        time: String,
        /// Clock offset from UT in hours
        #[arg(long, default_value = "5.5", allow_hyphen_values = true)]
        offset: f64,
    },
    /// Lahiri ayanamsha for a Julian Day
    Ayanamsha {
        /// Julian Day (UT)
        #[arg(long)]
        jd: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_offset(hours: f64) -> UtcOffset {
    UtcOffset::from_hours(hours).unwrap_or_else(|e| fail(e))
}

fn print_chart(chart: &Chart, house_system: HouseSystem) {
    println!("UT:         {}", chart.ut);
    println!("JD:         {:.6}", chart.julian_day);
    println!("Ayanamsha:  {:.4} deg", chart.ayanamsha_deg);
    println!(
        "Lagna:      {} {:.2} deg ({} pada {})",
        chart.lagna.sign().western_name(),
        chart.lagna.degrees_in_sign(),
        chart.lagna.nakshatra().name(),
        chart.lagna.pada()
    );
    println!("Houses:     whole sign (ascendant query: {})", house_system.code());
    println!();
    println!(
        "{:<8} {:<12} {:>8}  {:<18} {:<4} House",
        "Graha", "Sign", "Degree", "Nakshatra", "Pada"
    );
    for g in &chart.grahas {
        let p = &g.placement;
        println!(
            "{:<8} {:<12} {:>8.2}  {:<18} {:<4} {}",
            g.graha.english_name(),
            p.sign().western_name(),
            p.display_degree(),
            p.nakshatra().name(),
            p.pada(),
            chart.house_of(g.graha)
        );
    }
    println!();
    for (house, sign) in chart.houses.iter() {
        println!("House {house:>2}: {}", sign.western_name());
    }
    println!();
    println!(
        "Dasha: {} / {}",
        chart.dasha.mahadasha.english_name(),
        chart.dasha.antardasha.english_name()
    );
    println!("Yogas: {}", chart.yogas.join(", "));
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart {
            dob,
            time,
            lat,
            lon,
            offset,
            houses,
        } => {
            let house_system = HouseSystem::from_code(houses)
                .unwrap_or_else(|| fail(format!("Invalid house system: {houses} (W or P)")));
            let config = ChartConfig {
                utc_offset: parse_offset(offset),
                house_system,
            };
            let input = BirthInput::parse(&dob, &time, lat, lon).unwrap_or_else(|e| fail(e));
            let eph = AnalyticEphemeris::new();
            match birth_chart(&eph, &eph, &input, &config) {
                Ok(chart) => print_chart(&chart, house_system),
                Err(e) => fail(format!("Chart failed ({}): {}", e.kind(), e.detail())),
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra,
                info.degrees_in_pada
            );
        }

        Commands::Houses { lagna } => {
            let houses = whole_sign_houses(lagna)
                .unwrap_or_else(|e| fail(format!("Invalid lagna index: {lagna} (0-11): {e}")));
            for (house, sign) in houses.iter() {
                println!("House {house:>2}: {} ({})", sign.western_name(), sign.name());
            }
        }

        Commands::Ut { date, time, offset } => {
            let offset = parse_offset(offset);
            let date = parse_date(&date).unwrap_or_else(|e| fail(e));
            let clock = ClockTime::parse(&time).unwrap_or_else(|e| fail(e));
            let raw = ut_hours(clock, offset);
            let ut = to_universal(date, clock, offset).unwrap_or_else(|e| fail(e));
            println!("Local:  {date} {clock} ({offset})");
            println!("UT:     {ut}");
            println!("Hours:  {:.4} (unwrapped {:.4})", ut.hours, raw);
            println!("JD:     {:.6}", ut.to_jd());
        }

        Commands::Ayanamsha { jd } => {
            let eph = AnalyticEphemeris::new();
            let aya = eph.ayanamsa(jd).unwrap_or_else(|e| fail(e));
            let dms = deg_to_dms(aya);
            let (year, month, day) = jd_to_calendar(jd);
            println!("Epoch:  {year}-{month:02}-{day:05.2} UT");
            println!(
                "Lahiri: {aya:.6} deg ({} deg {} min {:.2} sec)",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            let sign = if deg < 0.0 { "-" } else { "" };
            println!("{sign}{} deg {} min {:.4} sec", d.degrees, d.minutes, d.seconds);
        }
    }
}
