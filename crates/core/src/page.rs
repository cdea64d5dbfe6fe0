use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use scraper::{Html, Selector as CssSelector};

/// The fixed document locations a view controller may write to
///
/// Containers are disjoint. Each controller owns exactly one results
/// container and never reads another controller's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    /// Dropdown options for the single-selection view
    PickerOptions,
    /// Result card for the single-selection view
    PickerResults,
    /// Card list for the concurrent roster view
    Gallery,
    /// Card list for the sequential, filterable roster view
    Browser,
}

impl Container {
    pub const ALL: [Container; 4] = [
        Container::PickerOptions,
        Container::PickerResults,
        Container::Gallery,
        Container::Browser,
    ];

    /// The element id used for this container in rendered documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Container::PickerOptions => "picker-options",
            Container::PickerResults => "picker-results",
            Container::Gallery => "gallery",
            Container::Browser => "browser",
        }
    }
}

/// One element matched by [`RenderTarget::query_all`], in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub index: usize,
    pub text: String,
    pub hidden: bool,
}

/// Render target capability
///
/// Abstracts the document surface the view controllers write to, so
/// rendering logic runs against an in-memory page in tests and could
/// be adapted to a real document elsewhere. `set_content` replaces a
/// container's markup wholesale; `query_all` reads back the elements
/// matching a CSS selector; `set_hidden` toggles visibility without
/// touching the markup.
pub trait RenderTarget {
    fn set_content(&mut self, container: Container, markup: String);
    fn query_all(&self, container: Container, selector: &str) -> Vec<Element>;
    fn set_hidden(&mut self, container: Container, index: usize, hidden: bool);
}

/// User-visible notification capability
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// In-memory implementation of [`RenderTarget`]
///
/// Holds the markup written to each container plus a per-container
/// set of hidden element indices. Replacing a container's content
/// clears its hidden set, since the indices refer to the old markup.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    content: HashMap<Container, String>,
    hidden: HashMap<Container, HashSet<usize>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The markup currently held by a container, empty if never written
    pub fn content(&self, container: Container) -> &str {
        self.content
            .get(&container)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl RenderTarget for MemoryPage {
    fn set_content(&mut self, container: Container, markup: String) {
        self.content.insert(container, markup);
        self.hidden.remove(&container);
    }

    fn query_all(&self, container: Container, selector: &str) -> Vec<Element> {
        let markup = match self.content.get(&container) {
            Some(markup) => markup,
            None => return Vec::new(),
        };

        let selector = match CssSelector::parse(selector) {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        let fragment = Html::parse_fragment(markup);
        let hidden = self.hidden.get(&container);

        fragment
            .select(&selector)
            .enumerate()
            .map(|(index, el)| Element {
                index,
                text: el.text().collect::<String>(),
                hidden: hidden.map(|set| set.contains(&index)).unwrap_or(false),
            })
            .collect()
    }

    fn set_hidden(&mut self, container: Container, index: usize, hidden: bool) {
        let set = self.hidden.entry(container).or_default();
        if hidden {
            set.insert(index);
        } else {
            set.remove(&index);
        }
    }
}

/// Render the whole page as a standalone HTML document
///
/// Embeds each container's markup under its fixed element id and adds
/// a generation timestamp in the footer. Hidden elements are expressed
/// as `display: none` rules so the snapshot reflects an applied filter;
/// marks pointing past the container's rendered cards are stale and
/// emit no rule.
pub fn render_document(page: &MemoryPage, generated_at: DateTime<Utc>) -> String {
    let mut rules = Vec::new();
    for container in Container::ALL {
        if let Some(set) = page.hidden.get(&container) {
            let card_count = page.query_all(container, ".card").len();
            let mut indices: Vec<usize> = set
                .iter()
                .copied()
                .filter(|index| *index < card_count)
                .collect();
            indices.sort_unstable();
            for index in indices {
                rules.push(format!(
                    "        #{} .card:nth-child({}) {{ display: none; }}",
                    container.as_str(),
                    index + 1
                ));
            }
        }
    }

    let style = if rules.is_empty() {
        String::new()
    } else {
        format!("    <style>\n{}\n    </style>\n", rules.join("\n"))
    };

    let stamp = generated_at.format("%Y-%m-%d %H:%M:%S UTC");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>dexview</title>
{style}</head>
<body>
    <h1>dexview</h1>
    <section>
        <h2>Pick one</h2>
        <select id="picker-options">
{picker_options}        </select>
        <button id="pick-submit" type="button">Submit</button>
        <ul id="picker-results" class="cards">
{picker_results}        </ul>
    </section>
    <section>
        <h2>Gallery</h2>
        <ul id="gallery" class="cards">
{gallery}        </ul>
    </section>
    <section>
        <h2>Browse</h2>
        <input id="searchbar" type="search" placeholder="Filter cards">
        <ul id="browser" class="cards">
{browser}        </ul>
    </section>
    <footer>Generated {stamp}</footer>
</body>
</html>
"#,
        picker_options = page.content(Container::PickerOptions),
        picker_results = page.content(Container::PickerResults),
        gallery = page.content(Container::Gallery),
        browser = page.content(Container::Browser),
    )
}
