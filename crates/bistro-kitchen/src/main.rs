//! `bistro` command line
//!
//! Loads a menu, applies dietary requests and evictions, prints the result.

use std::path::PathBuf;

use anyhow::Context;
use bistro_kitchen::{Kitchen, KitchenConfig};
use bistro_menu::DietaryRequest;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

const RULE: &str = "-------------------";

fn cli() -> Command {
    let flag = |name: &'static str, help: &'static str| {
        Arg::new(name).long(name).action(ArgAction::SetTrue).help(help)
    };

    Command::new("bistro")
        .version(bistro_kitchen::VERSION)
        .about("Load a menu into the kitchen and adjust it for dietary requests")
        .arg(
            Arg::new("menu")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Menu file, one header line then one dish per line"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_parser(value_parser!(PathBuf))
                .help("Kitchen configuration (TOML)"),
        )
        .arg(flag("vegetarian", "Replace meat and fish"))
        .arg(flag("vegan", "Remove dairy and eggs"))
        .arg(flag("gluten-free", "Remove gluten"))
        .arg(flag("nut-free", "Remove nuts"))
        .arg(flag("low-sodium", "Reduce spiciness"))
        .arg(flag("low-sugar", "Reduce sweetness"))
        .arg(flag("all-dietary", "Apply every dietary request"))
        .arg(
            Arg::new("evict-below")
                .long("evict-below")
                .value_parser(value_parser!(u32))
                .help("Serve every dish prepared in fewer minutes than this"),
        )
        .arg(
            Arg::new("evict-cuisine")
                .long("evict-cuisine")
                .help("Serve every dish of this cuisine (e.g. ITALIAN)"),
        )
        .arg(flag("report", "Print the kitchen report at the end"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log at debug level"),
        )
}

fn dietary_request(args: &ArgMatches) -> DietaryRequest {
    if args.get_flag("all-dietary") {
        return DietaryRequest::all();
    }
    DietaryRequest::new()
        .with_vegetarian(args.get_flag("vegetarian"))
        .with_vegan(args.get_flag("vegan"))
        .with_gluten_free(args.get_flag("gluten-free"))
        .with_nut_free(args.get_flag("nut-free"))
        .with_low_sodium(args.get_flag("low-sodium"))
        .with_low_sugar(args.get_flag("low-sugar"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_menu(title: &str, kitchen: &Kitchen) {
    println!("{title}");
    println!("{RULE}");
    print!("{}", kitchen.render_menu());
    println!("{RULE}");
}

fn main() -> anyhow::Result<()> {
    let args = cli().get_matches();
    init_tracing(args.get_flag("verbose"));

    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => KitchenConfig::from_toml_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => KitchenConfig::default(),
    };
    let request = dietary_request(&args).union(config.dietary);

    let menu = args
        .get_one::<PathBuf>("menu")
        .context("menu path is required")?;
    let mut kitchen = Kitchen::load(menu, config)
        .with_context(|| format!("loading menu {}", menu.display()))?;

    print_menu("Before adjustment", &kitchen);

    if !request.is_empty() {
        kitchen.apply_dietary_adjustment(&request);
        print_menu("After adjustment", &kitchen);
    }

    if let Some(&threshold) = args.get_one::<u32>("evict-below") {
        let evicted = kitchen.evict_below_prep_time(threshold);
        println!("Served {evicted} dishes under {threshold} minutes");
    }
    if let Some(token) = args.get_one::<String>("evict-cuisine") {
        let evicted = kitchen.evict_cuisine(token);
        println!("Served {evicted} {token} dishes");
    }

    if args.get_flag("report") {
        print!("{}", kitchen.report());
    }
    Ok(())
}
