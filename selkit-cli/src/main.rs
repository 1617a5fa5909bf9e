//! selkit CLI
//!
//! Build a CSS selector from a list of steps.
//!
//! Usage:
//!   selkit element=a attr='href$=".png"' pseudo-class=focus
//!   selkit element=ul '>' element=li --json
//!   selkit id=main class=wide --verbose

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

mod steps;

use steps::Step;

#[derive(Debug, Parser)]
#[command(name = "selkit", version, about = "Build CSS selector strings")]
struct Cli {
    /// Print the built selector as JSON instead of CSS text
    #[arg(short, long)]
    json: bool,

    /// Print each segment's fragments to stderr
    #[arg(short, long)]
    verbose: bool,

    /// KIND=VALUE (element, id, class, attr, pseudo-class, pseudo-element)
    /// or a combinator (>, +, ~, descendant)
    #[arg(value_name = "STEP", required = true)]
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let plan = steps::build(&cli.steps)?;

    if cli.verbose {
        for (index, segment) in plan.segments.iter().enumerate() {
            eprintln!("{}", format!("segment {}: {segment}", index + 1).bold());
            for fragment in segment.fragments() {
                eprintln!("  {:<15} {}", fragment.category().cyan(), fragment);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan.selector)?);
    } else {
        println!("{}", plan.selector.render());
    }

    Ok(())
}
