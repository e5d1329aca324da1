//! boxedge - Expand CSS box-edge shorthands into longhands

use std::process::ExitCode;

use clap::Parser;
use cssparser::ParserInput;
use tracing_subscriber::EnvFilter;

use boxedge::{
    BoxShorthand, Error, Expander, LonghandDeclaration, Primitive, PrimitiveValue, Priority,
    ShorthandValue, ToCss,
};

#[derive(Parser)]
#[command(name = "boxedge")]
#[command(version, about = "Expand CSS box-edge shorthands into longhands", long_about = None)]
#[command(after_help = "EXAMPLES:
    boxedge padding 10px                 All four edges 10px
    boxedge margin 0 auto                Vertical 0, horizontal auto
    boxedge -i border-style solid dashed Mark every longhand !important
    boxedge border-width 1px 2px 3px --json
    boxedge margin -- -1px 0             Use -- before negative values")]
struct Cli {
    /// Shorthand property (margin, padding, border-width, border-color, border-style)
    #[arg(value_name = "SHORTHAND")]
    shorthand: String,

    /// One to four values
    #[arg(value_name = "VALUE", required = true)]
    values: Vec<String>,

    /// Declare the shorthand !important
    #[arg(short, long)]
    important: bool,

    /// Position of the declaration in its stylesheet
    #[arg(short, long, default_value_t = 0)]
    sequence: u32,

    /// Print the longhands as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let longhands = expand_args(cli, &Expander::default()).map_err(|e| e.to_string())?;

    if cli.json {
        let json = serde_json::to_string_pretty(&longhands).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        for decl in &longhands {
            println!("{};", decl.to_css_string());
        }
    }

    Ok(())
}

/// Expand the shorthand named on the command line.
///
/// A value count outside 1..=4 is reported through `expander` and yields
/// no longhands rather than an error.
fn expand_args(cli: &Cli, expander: &Expander) -> boxedge::Result<Vec<LonghandDeclaration>> {
    let shorthand = BoxShorthand::from_name(&cli.shorthand)
        .ok_or_else(|| Error::UnsupportedProperty(cli.shorthand.clone()))?;

    let mut values = Vec::new();
    for arg in &cli.values {
        values.extend(tokenize(arg)?);
    }

    let priority = if cli.important {
        Priority::Important
    } else {
        Priority::Normal
    };

    Ok(expander.expand(shorthand, &shorthand_value(values), priority, cli.sequence))
}

/// One value is a `Single`; any other count is a `List`.
fn shorthand_value(mut values: Vec<PrimitiveValue>) -> ShorthandValue {
    if values.len() == 1 {
        ShorthandValue::Single(values.remove(0))
    } else {
        ShorthandValue::List(values)
    }
}

/// Split one command-line argument into primitive values.
fn tokenize(arg: &str) -> boxedge::Result<Vec<PrimitiveValue>> {
    let mut input = ParserInput::new(arg);
    let mut parser = cssparser::Parser::new(&mut input);
    let mut values = Vec::new();

    while let Ok(token) = parser.next() {
        let primitive = Primitive::from_token(token)
            .ok_or_else(|| Error::InvalidValue(format!("unexpected {token:?} in '{arg}'")))?;
        values.push(PrimitiveValue::new(primitive));
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use boxedge::{CollectingSink, Diagnostic, Longhand};

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boxedge").chain(args.iter().copied())).unwrap()
    }

    fn collecting() -> (Arc<CollectingSink>, Expander) {
        let sink = Arc::new(CollectingSink::new());
        let expander = Expander::new(sink.clone());
        (sink, expander)
    }

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        assert_eq!(
            tokenize("1px 2px").unwrap(),
            vec![PrimitiveValue::px(1.0), PrimitiveValue::px(2.0)]
        );
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_rejects_non_values() {
        assert!(matches!(tokenize("calc(1px)"), Err(Error::InvalidValue(_))));
        assert!(matches!(tokenize(","), Err(Error::InvalidValue(_))));
    }

    #[test]
    fn test_shorthand_value_single_or_list() {
        let one = shorthand_value(vec![PrimitiveValue::px(1.0)]);
        assert_eq!(one, ShorthandValue::Single(PrimitiveValue::px(1.0)));
        assert_eq!(shorthand_value(Vec::new()), ShorthandValue::List(Vec::new()));
        let two = shorthand_value(vec![PrimitiveValue::px(1.0), PrimitiveValue::px(2.0)]);
        assert!(matches!(two, ShorthandValue::List(ref v) if v.len() == 2));
    }

    #[test]
    fn test_expand_args_joins_arguments() {
        let (sink, expander) = collecting();
        let out = expand_args(&cli(&["-i", "margin", "0 auto", "1px"]), &expander).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[1].property, Longhand::MarginRight);
        assert_eq!(out[1].value, PrimitiveValue::ident("auto"));
        assert_eq!(out[3].value, PrimitiveValue::ident("auto"));
        assert!(out.iter().all(|d| d.priority == Priority::Important));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_expand_args_too_many_values_is_not_an_error() {
        let (sink, expander) = collecting();
        let args = cli(&["padding", "1px", "2px", "3px", "4px", "5px"]);
        let out = expand_args(&args, &expander).unwrap();
        assert!(out.is_empty());
        assert_eq!(
            sink.take(),
            vec![Diagnostic::MalformedValueCount {
                property: "padding".to_string(),
                count: 5
            }]
        );
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_run_fails_on_bad_input() {
        assert!(run(&cli(&["border", "1px"])).is_err());
        assert!(run(&cli(&["padding", "calc(1px)"])).is_err());
        assert!(run(&cli(&["padding", "1px", ","])).is_err());
    }

    #[test]
    fn test_percentages_keep_their_written_form() {
        let (_, expander) = collecting();
        let out = expand_args(&cli(&["padding", "12.7%"]), &expander).unwrap();
        assert!(out.iter().all(|d| d.value.to_css_string() == "12.7%"));
    }
}
