use clap::{Parser, Subcommand};
use panchanga::{Panchanga, PanchangaConfig};
use panchanga_core::{
    ALL_MASAS, ALL_NAKSHATRAS, ALL_TITHIS, ALL_VAARAS, ALL_YOGAS, AngaKind, DayBoundary,
    DayDescriptor, Location, MuhurtaWindow, RiseSetConfig, RiseSetResult, TITHI_SEGMENT_DEG,
    karana_for_slot, nakshatra_from_longitude, sun_times, tithi_at,
};
use panchanga_ephem::AyanamshaSystem;
use panchanga_festival::{FESTIVALS, RuleKind};
use panchanga_time::{CivilDate, UtcDateTime};

#[derive(Parser)]
#[command(name = "panchanga", about = "Panchanga computation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full day descriptor: limbs at sunrise, transitions, muhurta
    Day {
        /// Civil date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Altitude in meters (default 0)
        #[arg(long, default_value = "0")]
        alt: f64,
        /// UTC offset in hours (IST = 5.5)
        #[arg(long, default_value = "0")]
        offset: f64,
        /// Ayanamsha: lahiri, true-lahiri, kp, raman, fagan-bradley
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Festival occurrences over an inclusive date range
    Festivals {
        /// Range start (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Range end (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, default_value = "0")]
        alt: f64,
        #[arg(long, default_value = "0")]
        offset: f64,
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        #[arg(long)]
        json: bool,
    },
    /// Sunrise and sunset for a date and location
    Sun {
        #[arg(long)]
        date: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
        #[arg(long, default_value = "0")]
        alt: f64,
        #[arg(long, default_value = "0")]
        offset: f64,
    },
    /// Tithi at a UTC instant
    Tithi {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Nakshatra from a sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// List the built-in festival rules
    Rules,
}

fn parse_civil_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_datetime(s: &str) -> UtcDateTime {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid datetime '{s}': {e}");
        std::process::exit(1);
    })
}

fn parse_ayanamsha(s: &str) -> AyanamshaSystem {
    match s.to_lowercase().as_str() {
        "lahiri" => AyanamshaSystem::Lahiri,
        "true-lahiri" | "truelahiri" => AyanamshaSystem::TrueLahiri,
        "kp" => AyanamshaSystem::KP,
        "raman" => AyanamshaSystem::Raman,
        "fagan-bradley" | "faganbradley" => AyanamshaSystem::FaganBradley,
        _ => {
            eprintln!("Invalid ayanamsha: {s}");
            eprintln!("Valid: lahiri (default), true-lahiri, kp, raman, fagan-bradley");
            std::process::exit(1);
        }
    }
}

fn build_engine(ayanamsha: &str) -> Panchanga {
    let config = PanchangaConfig {
        ayanamsha: parse_ayanamsha(ayanamsha),
        ..PanchangaConfig::default()
    };
    Panchanga::new(config).unwrap_or_else(|e| {
        eprintln!("Failed to build engine: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

/// Format a UTC Julian Day as a timestamp rounded to the second.
fn format_jd(jd: f64) -> String {
    let t = UtcDateTime::from_jd(jd + 0.5 / 86_400.0);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        t.year,
        t.month,
        t.day,
        t.hour,
        t.minute,
        t.second.floor() as u32
    )
}

fn format_window(w: &MuhurtaWindow) -> String {
    format!("{} .. {}", format_jd(w.start_jd), format_jd(w.end_jd))
}

fn describe_rise_set(result: RiseSetResult) -> String {
    match result {
        RiseSetResult::Event { jd_utc, .. } => format_jd(jd_utc),
        RiseSetResult::NeverRises => "none (polar night)".to_string(),
        RiseSetResult::NeverSets => "none (midnight sun)".to_string(),
    }
}

fn anga_name(kind: AngaKind, index: u8) -> &'static str {
    let i = index as usize;
    match kind {
        AngaKind::Tithi => ALL_TITHIS.get(i).map_or("?", |t| t.name()),
        AngaKind::Vaara => ALL_VAARAS.get(i).map_or("?", |v| v.name()),
        AngaKind::Nakshatra => ALL_NAKSHATRAS.get(i).map_or("?", |n| n.name()),
        AngaKind::Yoga => ALL_YOGAS.get(i).map_or("?", |y| y.name()),
        AngaKind::Karana => karana_for_slot(index).name(),
        AngaKind::Masa => ALL_MASAS.get(i).map_or("?", |m| m.name()),
    }
}

fn adhika_prefix(adhika: bool) -> &'static str {
    if adhika { "Adhika " } else { "" }
}

fn print_day(day: &DayDescriptor) {
    let loc = &day.location;
    println!(
        "{} at lat {:.4} lon {:.4} (UTC{:+.2}h)",
        day.date, loc.latitude_deg, loc.longitude_deg, loc.utc_offset_hours
    );
    if let DayBoundary::MidnightFallback { midnight_sun } = day.boundary {
        let phase = if midnight_sun { "midnight sun" } else { "polar night" };
        println!("  ({phase}; window runs local midnight to midnight)");
    }
    match day.sunrise_jd {
        Some(jd) => println!("  sunrise:    {}", format_jd(jd)),
        None => println!("  sunrise:    none"),
    }
    match day.sunset_jd {
        Some(jd) => println!("  sunset:     {}", format_jd(jd)),
        None => println!("  sunset:     none"),
    }

    let at = &day.at_sunrise;
    println!(
        "  tithi:      {} ({} {}, {:.1}% elapsed)",
        at.tithi.tithi.name(),
        at.tithi.paksha.name(),
        at.tithi.tithi_in_paksha,
        at.tithi.degrees_in_tithi / TITHI_SEGMENT_DEG * 100.0
    );
    println!("  vaara:      {}", at.vaara.name());
    println!(
        "  nakshatra:  {} (pada {})",
        at.nakshatra.nakshatra.name(),
        at.nakshatra.pada
    );
    println!("  yoga:       {}", at.yoga.yoga.name());
    println!("  karana:     {}", at.karana.karana.name());
    println!(
        "  amanta masa:     {}{}",
        adhika_prefix(day.amanta_masa.adhika),
        day.amanta_masa.masa.name()
    );
    println!(
        "  purnimanta masa: {}{}",
        adhika_prefix(day.purnimanta_masa.adhika),
        day.purnimanta_masa.masa.name()
    );

    if !day.transitions.is_empty() {
        println!("  transitions:");
        for t in &day.transitions {
            println!(
                "    {:9} {} -> {} at {}",
                t.kind.name(),
                anga_name(t.kind, t.from_index),
                anga_name(t.kind, t.to_index),
                format_jd(t.jd_utc)
            );
        }
    }
    if let Some(m) = &day.muhurta {
        println!("  rahu kala:      {}", format_window(&m.rahu_kala));
        println!("  yamaganda kala: {}", format_window(&m.yamaganda_kala));
        println!("  gulika kala:    {}", format_window(&m.gulika_kala));
        println!("  abhijit:        {}", format_window(&m.abhijit));
        for v in &m.varjyam {
            println!("  varjyam:        {}", format_window(v));
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            lat,
            lon,
            alt,
            offset,
            ayanamsha,
            json,
        } => {
            let engine = build_engine(&ayanamsha);
            let location = Location::new(lat, lon, alt, offset);
            let day = engine
                .day_descriptor(parse_civil_date(&date), &location)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to build day: {e}");
                    std::process::exit(1);
                });
            if json {
                print_json(&*day);
            } else {
                print_day(&day);
            }
        }

        Commands::Festivals {
            from,
            to,
            lat,
            lon,
            alt,
            offset,
            ayanamsha,
            json,
        } => {
            let engine = build_engine(&ayanamsha);
            let location = Location::new(lat, lon, alt, offset);
            let occurrences = engine
                .festivals(parse_civil_date(&from), parse_civil_date(&to), &location)
                .unwrap_or_else(|e| {
                    eprintln!("Failed to resolve festivals: {e}");
                    std::process::exit(1);
                });
            if json {
                print_json(&occurrences);
            } else if occurrences.is_empty() {
                println!("No festivals between {from} and {to}");
            } else {
                for occ in &occurrences {
                    let mut flags = String::new();
                    if occ.skipped {
                        flags.push_str(" [skipped tithi]");
                    }
                    if occ.extended {
                        flags.push_str(" [extended tithi]");
                    }
                    println!("{}  {}{}", occ.date, occ.name, flags);
                }
            }
        }

        Commands::Sun {
            date,
            lat,
            lon,
            alt,
            offset,
        } => {
            let location = Location::new(lat, lon, alt, offset);
            let times = sun_times(&location, parse_civil_date(&date), &RiseSetConfig::default())
                .unwrap_or_else(|e| {
                    eprintln!("Failed to solve sun events: {e}");
                    std::process::exit(1);
                });
            println!("sunrise: {}", describe_rise_set(times.sunrise));
            println!("sunset:  {}", describe_rise_set(times.sunset));
        }

        Commands::Tithi { date } => {
            let instant = parse_datetime(&date);
            let info = tithi_at(instant.to_jd()).unwrap_or_else(|e| {
                eprintln!("Failed to compute tithi: {e}");
                std::process::exit(1);
            });
            println!(
                "{} (index {}, {} paksha, {:.2} deg into the tithi)",
                info.tithi.name(),
                info.tithi_index,
                info.paksha.name(),
                info.degrees_in_tithi
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra)",
                info.nakshatra.name(),
                info.nakshatra_index,
                info.pada,
                info.degrees_in_nakshatra
            );
        }

        Commands::Rules => {
            for rule in FESTIVALS.iter() {
                let when = match rule.kind {
                    RuleKind::Lunar { tithi, masa } => match masa {
                        Some(masa) => format!("{} of {}", tithi.name(), masa.name()),
                        None => tithi.name().to_string(),
                    },
                    RuleKind::Solar { longitude_deg } => {
                        format!("Sun at {longitude_deg:.0} deg sidereal")
                    }
                };
                println!("{:20} {} ({})", rule.id, rule.name, when);
            }
        }
    }
}
