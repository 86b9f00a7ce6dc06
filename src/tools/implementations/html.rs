// HTML extraction capabilities
//
// Selector-based lookups over a raw HTML string. All arguments and results
// are plain text so they can cross the capability-directive boundary.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};

use crate::tools::registry::Tool;

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| anyhow!("invalid CSS selector '{raw}': {e}"))
}

fn arg<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str> {
    args.get(index)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("missing '{name}' argument"))
}

/// Finds the first HTML element matching the given CSS selector.
pub struct FindElement;

#[async_trait]
impl Tool for FindElement {
    fn name(&self) -> &'static str {
        "find_element"
    }

    fn description(&self) -> &'static str {
        "Finds the first HTML element matching the given CSS selector"
    }

    fn module(&self) -> &'static str {
        "html"
    }

    fn params(&self) -> &'static [&'static str] {
        &["html", "selector"]
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let html = arg(args, 0, "html")?;
        let selector = parse_selector(arg(args, 1, "selector")?)?;

        let document = Html::parse_document(html);
        match document.select(&selector).next() {
            Some(element) => Ok(element.html()),
            None => Ok(format!("no element matched selector '{}'", args[1])),
        }
    }
}

/// Finds all HTML elements matching the given CSS selector.
pub struct FindAllElements;

#[async_trait]
impl Tool for FindAllElements {
    fn name(&self) -> &'static str {
        "find_all_elements"
    }

    fn description(&self) -> &'static str {
        "Finds all HTML elements matching the given CSS selector"
    }

    fn module(&self) -> &'static str {
        "html"
    }

    fn params(&self) -> &'static [&'static str] {
        &["html", "selector"]
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let html = arg(args, 0, "html")?;
        let selector = parse_selector(arg(args, 1, "selector")?)?;

        let document = Html::parse_document(html);
        let matches: Vec<String> = document.select(&selector).map(|el| el.html()).collect();

        if matches.is_empty() {
            Ok(format!("no elements matched selector '{}'", args[1]))
        } else {
            Ok(matches.join("\n"))
        }
    }
}

/// Extracts text content from an HTML document.
pub struct GetText;

#[async_trait]
impl Tool for GetText {
    fn name(&self) -> &'static str {
        "get_text"
    }

    fn description(&self) -> &'static str {
        "Extracts text content from an HTML document"
    }

    fn module(&self) -> &'static str {
        "html"
    }

    fn params(&self) -> &'static [&'static str] {
        &["html"]
    }

    async fn execute(&self, args: &[String]) -> Result<String> {
        let html = arg(args, 0, "html")?;

        let document = Html::parse_document(html);
        let text: String = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join("");

        Ok(text.trim().to_string())
    }
}
