// SPDX-License-Identifier: MIT
//
// tinct — generate, preview, and save color palettes from the terminal.
//
// This is the demo binary that wires together the crates:
//
//   tinct-core  → HSL color math, contrast, strategies, theme inversion
//   tinct-store → remote palette persistence over HTTP
//
// A run flows:
//
//   args → strategy/theme/seed → generate → [invert] → swatches/JSON
//                                                    → [save via --api]

use std::env;
use std::io::IsTerminal;
use std::process;

use tinct_core::{
    Palette, RandomSource, SeededSource, Strategy, Theme, ThreadSource, contrast_text, generate,
    generate_with, invert_for_theme, parse_rgb,
};
use tinct_store::{HttpStore, PaletteStore, fetch_or_empty};

const USAGE: &str = "\
tinct — generate color palettes

Usage: tinct [OPTIONS]

Options:
  -s, --strategy <NAME>  material, chakra, or modern (default: random)
  -t, --theme <NAME>     light or dark (default: light)
      --seed <N>         seed the generator for reproducible output
  -n, --count <N>        number of palettes to generate (default: 1)
      --invert           also show each palette re-aimed at the other theme
      --json             print palettes as JSON instead of swatches
      --api <URL>        save generated palettes to a palette service
  -h, --help             show this help";

/// Parsed command line.
struct Args {
    strategy: Option<Strategy>,
    theme: Theme,
    seed: Option<u64>,
    count: usize,
    invert: bool,
    json: bool,
    api: Option<String>,
}

/// Either kind of randomness behind one seam, so the generation path
/// doesn't care whether a seed was given.
enum Source {
    Seeded(SeededSource),
    Thread(ThreadSource),
}

impl RandomSource for Source {
    fn next_unit(&mut self) -> f64 {
        match self {
            Self::Seeded(s) => s.next_unit(),
            Self::Thread(t) => t.next_unit(),
        }
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        strategy: None,
        theme: Theme::Light,
        seed: None,
        count: 1,
        invert: false,
        json: false,
        api: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                process::exit(0);
            }
            "-s" | "--strategy" => {
                let value = expect_value(&arg, iter.next());
                args.strategy = Some(Strategy::from_name(&value).unwrap_or_else(|| {
                    usage_error(&format!("unknown strategy {value:?}"));
                }));
            }
            "-t" | "--theme" => {
                let value = expect_value(&arg, iter.next());
                args.theme = Theme::from_name(&value).unwrap_or_else(|| {
                    usage_error(&format!("unknown theme {value:?}"));
                });
            }
            "--seed" => {
                let value = expect_value(&arg, iter.next());
                args.seed = Some(value.parse().unwrap_or_else(|_| {
                    usage_error(&format!("--seed wants an integer, got {value:?}"));
                }));
            }
            "-n" | "--count" => {
                let value = expect_value(&arg, iter.next());
                args.count = value.parse().unwrap_or_else(|_| {
                    usage_error(&format!("--count wants an integer, got {value:?}"));
                });
            }
            "--invert" => args.invert = true,
            "--json" => args.json = true,
            "--api" => args.api = Some(expect_value(&arg, iter.next())),
            other => usage_error(&format!("unknown option {other:?}")),
        }
    }

    args
}

fn expect_value(flag: &str, value: Option<String>) -> String {
    value.unwrap_or_else(|| usage_error(&format!("{flag} needs a value")))
}

fn usage_error(msg: &str) -> ! {
    eprintln!("tinct: {msg}\n\n{USAGE}");
    process::exit(2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&parse_args()) {
        eprintln!("tinct: {err:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => Source::Seeded(SeededSource::new(seed)),
        None => Source::Thread(ThreadSource::new()),
    };

    let store = match &args.api {
        Some(url) => Some(HttpStore::new(url)?),
        None => None,
    };
    // Existing count feeds the default names for newly saved palettes.
    let mut saved_count = store.as_ref().map_or(0, |s| fetch_or_empty(s).len());

    let color = std::io::stdout().is_terminal();

    for i in 0..args.count {
        let palette = match args.strategy {
            Some(strategy) => generate_with(&mut rng, strategy, args.theme),
            None => generate(&mut rng, args.theme),
        };

        if i > 0 {
            println!();
        }
        print_palette(&palette, args.json, color)?;

        if args.invert {
            let other = args.theme.toggled();
            let inverted = invert_for_theme(&palette, other)?;
            println!("\nas {other}:");
            print_palette(&inverted, args.json, color)?;
        }

        if let Some(store) = &store {
            saved_count += 1;
            let name = format!("Palette {saved_count}");
            match store.save(&name, &palette) {
                Ok(saved) => println!("saved as {:?} (id {})", saved.name, saved.id),
                Err(err) => eprintln!("tinct: save failed: {err}"),
            }
        }
    }

    Ok(())
}

/// Print one palette, as swatch rows or one JSON object.
fn print_palette(palette: &Palette, json: bool, color: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(palette)?);
        return Ok(());
    }

    for (role, hex) in palette.roles() {
        if color {
            let (r, g, b) = parse_rgb(hex)?;
            // Label each swatch in whichever of black/white stays legible
            // on top of it.
            let (fr, fg, fb) = contrast_text(hex)?.rgb8();
            println!(
                "  \x1b[48;2;{r};{g};{b}m\x1b[38;2;{fr};{fg};{fb}m {hex}  {role:<10} \x1b[0m"
            );
        } else {
            println!("  {hex}  {role}");
        }
    }
    Ok(())
}
