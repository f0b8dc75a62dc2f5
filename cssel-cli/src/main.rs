//! cssel CLI
//!
//! Builds a CSS selector from fragment and combinator tokens and prints it.

use anyhow::{Context, Result};
use clap::Parser;
use cssel_common::json::to_json_pretty;
use cssel_selector::{self as css, Combinator, FragmentKind, Render, SelectorBuilder};

/// Assemble CSS selectors from typed fragments
#[derive(Parser, Debug)]
#[command(name = "cssel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"TOKENS:
    KIND:VALUE    add a fragment to the current compound selector
                  KIND is element, id, class, attr, pseudo-class or pseudo-element
    + ~ >         join the current compound selector to the next one
    _             descendant combinator (a space)

EXAMPLES:
    # #main.container.editable
    cssel id:main class:container class:editable

    # a[href$=".png"]:focus
    cssel element:a 'attr:href$=".png"' pseudo-class:focus

    # div#main + p
    cssel element:div id:main + element:p

    # Same, as JSON
    cssel --json element:div id:main + element:p
"#)]
struct Cli {
    /// Fragments and combinators, left to right
    #[arg(value_name = "TOKEN", required = true)]
    tokens: Vec<String>,

    /// Print the selector and its compound parts as JSON
    #[arg(long)]
    json: bool,
}

/// One command-line token.
#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Fragment(FragmentKind, &'a str),
    Combinator(Combinator),
}

/// Compound selectors and the combinators between them.
#[derive(Debug)]
struct Expression {
    compounds: Vec<SelectorBuilder>,
    combinators: Vec<Combinator>,
}

impl Render for Expression {
    fn render(&self) -> String {
        let mut compounds = self.compounds.iter();
        let Some(first) = compounds.next() else {
            return String::new();
        };

        let mut rendered: Box<dyn Render + '_> = Box::new(first);
        for (combinator, next) in self.combinators.iter().zip(compounds) {
            rendered = Box::new(css::combine(&rendered, combinator.symbol(), next));
        }
        rendered.render()
    }
}

fn parse_token(raw: &str) -> Result<Token<'_>> {
    if raw == "_" {
        return Ok(Token::Combinator(Combinator::Descendant));
    }
    if let Some(combinator) = Combinator::from_symbol(raw) {
        return Ok(Token::Combinator(combinator));
    }

    // Values may contain ':' themselves (`pseudo-class:not(:hover)`), so split once.
    let (kind, value) = raw
        .split_once(':')
        .with_context(|| format!("expected KIND:VALUE or a combinator, got '{raw}'"))?;
    let kind = kind
        .parse::<FragmentKind>()
        .with_context(|| format!("unknown fragment kind '{kind}' in '{raw}'"))?;
    Ok(Token::Fragment(kind, value))
}

fn assemble(tokens: &[String]) -> Result<Expression> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current: Option<SelectorBuilder> = None;

    for raw in tokens {
        match parse_token(raw)? {
            Token::Fragment(kind, value) => {
                let builder = current.get_or_insert_with(SelectorBuilder::new);
                let added = builder.add_fragment(kind, value).map(|_| ());
                added.with_context(|| format!("cannot apply '{raw}' to '{builder}'"))?;
            }
            Token::Combinator(combinator) => {
                let builder = current
                    .take()
                    .with_context(|| format!("combinator '{raw}' has no selector on its left"))?;
                compounds.push(builder);
                combinators.push(combinator);
            }
        }
    }

    let last = current.context("expected a selector after the last combinator")?;
    compounds.push(last);

    Ok(Expression {
        compounds,
        combinators,
    })
}

/// `{"selector": ..., "compounds": [...]}` with each compound as its builder record.
fn to_json_value(expression: &Expression) -> serde_json::Value {
    serde_json::json!({
        "selector": expression.render(),
        "compounds": expression.compounds,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let expression = assemble(&cli.tokens)?;

    if cli.json {
        println!("{}", to_json_pretty(&to_json_value(&expression))?);
    } else {
        println!("{}", expression.render());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_fragment_tokens() {
        assert_eq!(
            parse_token("id:main").unwrap(),
            Token::Fragment(FragmentKind::Id, "main")
        );
        assert_eq!(
            parse_token("pseudo-class:not(:hover)").unwrap(),
            Token::Fragment(FragmentKind::PseudoClass, "not(:hover)")
        );
        assert_eq!(
            parse_token("attr:href").unwrap(),
            Token::Fragment(FragmentKind::Attribute, "href")
        );
    }

    #[test]
    fn test_parse_combinator_tokens() {
        assert_eq!(
            parse_token("_").unwrap(),
            Token::Combinator(Combinator::Descendant)
        );
        assert_eq!(
            parse_token(">").unwrap(),
            Token::Combinator(Combinator::Child)
        );
        assert_eq!(
            parse_token("~").unwrap(),
            Token::Combinator(Combinator::SubsequentSibling)
        );
    }

    #[test]
    fn test_parse_bad_tokens() {
        let err = parse_token("main").unwrap_err();
        assert!(err.to_string().contains("expected KIND:VALUE"));

        let err = parse_token("tag:div").unwrap_err();
        assert!(err.to_string().contains("unknown fragment kind 'tag'"));
    }

    #[test]
    fn test_assemble_compound() {
        let expression =
            assemble(&tokens(&["id:main", "class:container", "class:editable"])).unwrap();
        assert_eq!(expression.render(), "#main.container.editable");
    }

    #[test]
    fn test_assemble_combined() {
        let expression = assemble(&tokens(&[
            "element:div",
            "id:main",
            "+",
            "element:table",
            "~",
            "element:tr",
            "_",
            "element:td",
        ]))
        .unwrap();
        assert_eq!(expression.compounds.len(), 4);
        assert_eq!(expression.render(), "div#main + table ~ tr   td");
    }

    #[test]
    fn test_assemble_reports_order_violation() {
        let err = assemble(&tokens(&["attr:href", "class:link"])).unwrap_err();
        assert_eq!(err.to_string(), "cannot apply 'class:link' to '[href]'");
        assert!(err.root_cause().to_string().starts_with("cannot add class after attribute"));
    }

    #[test]
    fn test_assemble_dangling_combinators() {
        assert!(assemble(&tokens(&["+", "element:p"])).is_err());
        assert!(assemble(&tokens(&["element:p", ">"])).is_err());
        assert!(assemble(&tokens(&["element:p", ">", "~", "element:a"])).is_err());
    }

    #[test]
    fn test_json_output_shape() {
        let expression = assemble(&tokens(&["element:div", "id:main", "+", "element:p"])).unwrap();
        let json = to_json_value(&expression);
        assert_eq!(json["selector"], "div#main + p");
        assert_eq!(json["compounds"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["compounds"][0]["element"], "div");
        assert_eq!(json["compounds"][0]["id"], "#main");
        assert_eq!(json["compounds"][1]["element"], "p");
        assert!(json["compounds"][1]["id"].is_null());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["cssel", "--json", "element:a", "+", "element:b"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.tokens, ["element:a", "+", "element:b"]);
    }
}
