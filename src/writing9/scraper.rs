use crate::writing9::{EssayDraft, NO_TITLE};
use crate::Scraper;
use lazy_regex::regex;
use lazy_static::lazy_static;
use scraper::{Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref H1: Selector = Selector::parse("h1").expect(E);
    static ref DIV: Selector = Selector::parse("div").expect(E);
    static ref P: Selector = Selector::parse("p").expect(E);
    static ref A: Selector = Selector::parse("a").expect(E);
}

/// Fragment that distinguishes essay detail links from the rest of a
/// listing page.
const DETAIL_MARKER: &str = "/text/";

#[derive(Debug)]
pub struct Writing9Scraper {
    origin: String,
    min_container_len: usize,
    min_paragraph_len: usize,
}

impl Writing9Scraper {
    pub fn new(origin: impl Into<String>) -> Self {
        Self::with_thresholds(origin, 200, 50)
    }

    pub fn with_thresholds(
        origin: impl Into<String>,
        min_container_len: usize,
        min_paragraph_len: usize,
    ) -> Self {
        Writing9Scraper {
            origin: origin.into(),
            min_container_len,
            min_paragraph_len,
        }
    }

    /// First div whose direct text nodes alone exceed the container
    /// threshold. The class names writing9 uses for the answer block are not
    /// stable, so this matches on text mass instead of a selector.
    fn long_container_text(&self, doc: &Html) -> Option<String> {
        doc.select(&DIV).find_map(|div| {
            let direct: String = div
                .children()
                .filter_map(|child| child.value().as_text())
                .map(|text| &*text.text)
                .collect();
            if direct.chars().count() > self.min_container_len {
                Some(collapse_ws(&div.text().collect::<String>()))
            } else {
                None
            }
        })
    }

    fn paragraph_fallback(&self, doc: &Html) -> String {
        doc.select(&P)
            .map(|p| collapse_ws(&p.text().collect::<String>()))
            .filter(|text| text.chars().count() > self.min_paragraph_len)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Scraper for Writing9Scraper {
    type Document = EssayDraft;

    fn extract_links(&self, doc: &Html) -> Vec<String> {
        doc.select(&A)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .filter(|href| href.contains(DETAIL_MARKER))
            .map(|href| {
                if href.starts_with("http") {
                    href.to_string()
                } else {
                    format!("{}{}", self.origin, href)
                }
            })
            .collect()
    }

    fn extract_document(&self, doc: &Html) -> Option<Self::Document> {
        let question = doc
            .select(&H1)
            .next()
            .map(|h1| collapse_ws(&h1.text().collect::<String>()))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let body = self
            .long_container_text(doc)
            .unwrap_or_else(|| self.paragraph_fallback(doc));

        Some(EssayDraft { question, body })
    }
}

fn collapse_ws(text: &str) -> String {
    regex!(r"\s+")
        .replace_all(text, " ")
        .trim()
        .to_string()
}
