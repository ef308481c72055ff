//! Loading pages from files, URLs or stdin.

use crate::cli::PageArgs;
use crate::error::{CliError, Result};
use clarity_domain::TextSource;
use clarity_extractor::{HtmlPage, PlainText};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A loaded page, parsed as HTML or kept as plain text
#[derive(Debug)]
pub enum PageInput {
    /// Parsed HTML document
    Html(HtmlPage),
    /// Plain text, one text node per line
    Text(PlainText),
}

impl PageInput {
    /// Build a page from raw content
    ///
    /// Content that looks like markup is parsed as HTML unless `plain` is set.
    pub fn from_content(content: &str, plain: bool) -> Self {
        if !plain && looks_like_html(content) {
            PageInput::Html(HtmlPage::parse(content))
        } else {
            PageInput::Text(PlainText::new(content))
        }
    }

    /// Attach a user selection, which takes precedence over the document
    pub fn with_selection(self, selection: Option<String>) -> Self {
        match selection {
            None => self,
            Some(selection) => match self {
                PageInput::Html(page) => PageInput::Html(page.with_selection(selection)),
                PageInput::Text(page) => PageInput::Text(page.with_selection(selection)),
            },
        }
    }

    /// Page title, when the page is HTML and has one
    pub fn title(&self) -> Option<String> {
        match self {
            PageInput::Html(page) => page.title(),
            PageInput::Text(_) => None,
        }
    }
}

impl TextSource for PageInput {
    fn selection(&self) -> Option<&str> {
        match self {
            PageInput::Html(page) => page.selection(),
            PageInput::Text(page) => page.selection(),
        }
    }

    fn text_nodes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            PageInput::Html(page) => page.text_nodes(),
            PageInput::Text(page) => page.text_nodes(),
        }
    }
}

/// Load the page named by `args`: a URL, a file, or stdin
///
/// With no file or URL and a non-empty `selection`, stdin is left alone; the
/// selection is all that will be summarized.
pub async fn load_page(args: &PageArgs, selection: Option<String>) -> Result<PageInput> {
    let selection = selection.filter(|s| !s.trim().is_empty());
    let content = if let Some(url) = &args.url {
        fetch(url).await?
    } else if let Some(path) = &args.path {
        debug!("Reading page from {}", path);
        tokio::fs::read_to_string(path).await?
    } else if selection.is_some() {
        debug!("No page given, using the selection only");
        String::new()
    } else {
        debug!("Reading page from stdin");
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    };

    Ok(PageInput::from_content(&content, args.plain).with_selection(selection))
}

async fn fetch(url: &str) -> Result<String> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|e| CliError::InvalidInput(format!("Invalid URL '{}': {}", url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(CliError::InvalidInput(format!(
            "Unsupported URL scheme '{}'",
            parsed.scheme()
        )));
    }

    info!("Fetching {}", parsed);
    let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let body = client
        .get(parsed)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

fn looks_like_html(content: &str) -> bool {
    let head = content.trim_start();
    let head = &head[..head.char_indices().nth(512).map_or(head.len(), |(i, _)| i)];
    let lower = head.to_ascii_lowercase();
    lower.starts_with("<!doctype html")
        || lower.contains("<html")
        || lower.contains("<body")
        || lower.contains("<head")
        || (lower.starts_with('<') && lower.contains("</"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_extractor::TextExtractor;

    #[test]
    fn test_html_is_sniffed() {
        let page = PageInput::from_content(
            "<!DOCTYPE html><html><head><title>T</title></head><body><p>Hi</p></body></html>",
            false,
        );
        assert!(matches!(page, PageInput::Html(_)));
        assert_eq!(page.title().as_deref(), Some("T"));
    }

    #[test]
    fn test_plain_text_and_plain_flag() {
        assert!(matches!(
            PageInput::from_content("just some words", false),
            PageInput::Text(_)
        ));
        assert!(matches!(
            PageInput::from_content("<p>markup</p>", true),
            PageInput::Text(_)
        ));
    }

    #[test]
    fn test_selection_takes_precedence() {
        let page = PageInput::from_content("<body><p>Whole page</p></body>", false)
            .with_selection(Some("  picked  ".to_string()));
        let extractor = TextExtractor::default();
        assert_eq!(extractor.extract(&page), "picked");
        assert_eq!(extractor.extract_document(&page), "Whole page");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<html><body><h1>Title</h1>\n<p>Body   text</p></body></html>").unwrap();

        let args = PageArgs {
            path: Some(path.to_string_lossy().into_owned()),
            ..PageArgs::default()
        };
        let page = load_page(&args, None).await.unwrap();
        assert_eq!(TextExtractor::default().extract(&page), "Title Body text");
    }

    #[tokio::test]
    async fn test_rejects_non_http_url() {
        let args = PageArgs {
            url: Some("file:///etc/passwd".to_string()),
            ..PageArgs::default()
        };
        assert!(matches!(load_page(&args, None).await, Err(CliError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_selection_without_page_skips_stdin() {
        let page = load_page(&PageArgs::default(), Some("picked text".to_string()))
            .await
            .unwrap();

        assert!(matches!(page, PageInput::Text(_)));
        let extractor = TextExtractor::default();
        assert_eq!(extractor.extract(&page), "picked text");
        assert_eq!(extractor.extract_document(&page), "");
    }
}
