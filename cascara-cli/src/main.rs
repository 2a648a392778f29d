//! cascara: inspect selectors from the command line
//!
//! Run with: cargo run --bin cascara -- <COMMAND>
//!
//! Every command parses its selector arguments the same way the compiler
//! does, so syntax errors and deprecation warnings look exactly like they
//! would in a stylesheet.

use anyhow::{Context, bail};
use cascara_common::{Logger, SilentLogger, StderrLogger};
use cascara_selector::{SelectorList, Specificity};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::json;

/// cascara: parse, weigh, compare and nest selectors
#[derive(Parser, Debug)]
#[command(name = "cascara")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the canonical form of a selector
    cascara parse 'a>b ,  .c'

    # Print the selector tree as JSON
    cascara --json parse ':is(.a, #b) > c'

    # Show the specificity range of each complex selector
    cascara specificity '#a :is(.b, #c) > d::after'

    # Check whether one selector matches everything another matches
    cascara superselector '.a > .b' '.a > .c.b'

    # Resolve `&` against an enclosing rule's selector
    cascara nest '.btn, .link' '&:hover, &-primary'
"#)]
struct Cli {
    /// Suppress warnings
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Label used for the selector source in error locations
    #[arg(long, value_name = "LABEL", global = true)]
    url: Option<String>,

    /// Reject parent selectors (`&`) in selector arguments (not allowed
    /// with `nest`)
    #[arg(long, global = true)]
    no_parent: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a selector list and print its canonical text
    Parse {
        /// The selector list to parse
        selector: String,
    },

    /// Print the specificity range of every complex selector and of the list
    Specificity {
        /// The selector list to weigh
        selector: String,
    },

    /// Check whether A matches every element B matches
    Superselector {
        /// The candidate superselector
        a: String,
        /// The candidate subselector
        b: String,
    },

    /// Resolve `&` in CHILD against PARENT
    Nest {
        /// The enclosing rule's selector
        parent: String,
        /// The nested rule's selector
        child: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger: Box<dyn Logger> = if cli.quiet {
        Box::new(SilentLogger)
    } else {
        Box::new(StderrLogger::new(!cli.no_color))
    };
    let reader = Reader {
        logger: logger.as_ref(),
        url: cli.url.as_deref(),
        allow_parent: !cli.no_parent,
    };
    let style = Style {
        color: !cli.no_color,
        json: cli.json,
    };

    match &cli.command {
        Command::Parse { selector } => {
            let list = reader.read(selector, reader.allow_parent)?;
            if style.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                println!("{list}");
            }
        }
        Command::Specificity { selector } => {
            let list = reader.read(selector, reader.allow_parent)?;
            print_specificity(&list, style)?;
        }
        Command::Superselector { a, b } => {
            let a = reader.read(a, reader.allow_parent)?;
            let b = reader.read(b, reader.allow_parent)?;
            let result = a.is_superselector(&b);
            if style.json {
                println!("{}", json!({ "superselector": result }));
            } else if style.color {
                if result {
                    println!("{} {a} is a superselector of {b}", "yes".green().bold());
                } else {
                    println!("{} {a} is not a superselector of {b}", "no".red().bold());
                }
            } else {
                println!("{}", if result { "yes" } else { "no" });
            }
        }
        Command::Nest { parent, child } => {
            let nested = reader.nest(parent, child)?;
            if style.json {
                println!("{}", serde_json::to_string_pretty(&nested)?);
            } else {
                println!("{nested}");
            }
        }
    }

    Ok(())
}

/// Parsing options shared by every command.
struct Reader<'a> {
    logger: &'a dyn Logger,
    url: Option<&'a str>,
    allow_parent: bool,
}

impl Reader<'_> {
    fn read(&self, text: &str, allow_parent: bool) -> anyhow::Result<SelectorList> {
        Ok(SelectorList::parse(
            text,
            Some(self.logger),
            self.url,
            allow_parent,
            true,
        )?)
    }

    /// Resolve `child` against `parent`. `child` needs `&`, so this fails
    /// when parent selectors are disallowed.
    fn nest(&self, parent: &str, child: &str) -> anyhow::Result<SelectorList> {
        if !self.allow_parent {
            bail!("`nest` resolves parent selectors and can't be used with `--no-parent`");
        }
        let parent = self.read(parent, false).context("in the parent selector")?;
        let child = self.read(child, true).context("in the child selector")?;
        Ok(child.nest_within(Some(&parent), true, false)?)
    }
}

/// Output options shared by every command.
#[derive(Debug, Clone, Copy)]
struct Style {
    color: bool,
    json: bool,
}

/// Print one `min`/`max` row per complex selector, then the list's range.
fn print_specificity(list: &SelectorList, style: Style) -> anyhow::Result<()> {
    if style.json {
        let members: Vec<_> = list
            .components()
            .iter()
            .map(|complex| {
                json!({
                    "selector": complex.to_string(),
                    "min": complex.min_specificity(),
                    "max": complex.max_specificity(),
                })
            })
            .collect();
        let report = json!({ "members": members, "list": list.specificity() });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let rows: Vec<(String, Specificity)> = list
        .components()
        .iter()
        .map(|complex| (complex.to_string(), complex.specificity()))
        .collect();
    let width = rows.iter().map(|(text, _)| text.len()).max().unwrap_or(0);

    for (text, specificity) in &rows {
        println!("{text:<width$}  {}", format_range(*specificity, style.color));
    }
    if rows.len() > 1 {
        let label = "(list)";
        let width = width.max(label.len());
        println!("{label:<width$}  {}", format_range(list.specificity(), style.color));
    }
    Ok(())
}

fn format_range(specificity: Specificity, color: bool) -> String {
    let text = if specificity.is_exact() {
        specificity.min.to_string()
    } else {
        format!("{}..={}", specificity.min, specificity.max)
    };
    if color {
        text.cyan().to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(Specificity::exact(110), false), "110");
        assert_eq!(format_range(Specificity::new(10, 100), false), "10..=100");
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cascara", "parse", "a > b", "--json", "--no-parent"]).unwrap();
        assert!(cli.json);
        assert!(cli.no_parent);
        assert!(matches!(cli.command, Command::Parse { ref selector } if selector == "a > b"));
    }

    #[test]
    fn test_reader_respects_parent_flag() {
        let reader = Reader {
            logger: &SilentLogger,
            url: None,
            allow_parent: false,
        };
        assert!(reader.read("&.a", false).is_err());
        assert!(reader.read("&.a", true).is_ok());
    }

    #[test]
    fn test_nest_rejects_no_parent() {
        let mut reader = Reader {
            logger: &SilentLogger,
            url: None,
            allow_parent: true,
        };
        let nested = reader.nest(".btn", "&:hover, &-primary").unwrap();
        assert_eq!(nested.to_string(), ".btn:hover, .btn-primary");

        reader.allow_parent = false;
        let err = reader.nest(".btn", "&:hover").unwrap_err();
        assert!(err.to_string().contains("--no-parent"));
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
