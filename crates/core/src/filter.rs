use crate::page::{Container, RenderTarget};

/// Show or hide already-rendered cards by substring match
///
/// Lowercases the query and each card's rendered text, then hides a
/// card exactly when its text does not contain the query. Makes one
/// pass over the rendered cards, never rewrites markup, and repeated
/// calls with the same query leave the visibility state unchanged. An
/// empty query shows every card.
pub fn filter_cards(page: &mut dyn RenderTarget, container: Container, query: &str) {
    let needle = query.to_lowercase();

    for card in page.query_all(container, ".card") {
        let visible = card.text.to_lowercase().contains(&needle);
        page.set_hidden(container, card.index, !visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::render_cards;
    use crate::page::MemoryPage;
    use crate::pokemon::CardSummary;

    fn starter_page() -> MemoryPage {
        let summaries = vec![
            CardSummary {
                title: "Bulbasaur".to_string(),
                subtitle: "grass, poison".to_string(),
                image: "1.png".to_string(),
            },
            CardSummary {
                title: "Charmander".to_string(),
                subtitle: "fire".to_string(),
                image: "4.png".to_string(),
            },
        ];
        let mut page = MemoryPage::new();
        page.set_content(Container::Browser, render_cards(&summaries));
        page
    }

    fn hidden_flags(page: &MemoryPage) -> Vec<bool> {
        page.query_all(Container::Browser, ".card")
            .iter()
            .map(|card| card.hidden)
            .collect()
    }

    #[test]
    fn test_filter_matches_subtitle_text() {
        let mut page = starter_page();

        filter_cards(&mut page, Container::Browser, "fire");

        assert_eq!(hidden_flags(&page), vec![true, false]);
    }

    #[test]
    fn test_filter_matches_title_text() {
        let mut page = starter_page();

        filter_cards(&mut page, Container::Browser, "bulba");

        assert_eq!(hidden_flags(&page), vec![false, true]);
    }

    #[test]
    fn test_empty_query_shows_all() {
        let mut page = starter_page();
        filter_cards(&mut page, Container::Browser, "fire");

        filter_cards(&mut page, Container::Browser, "");

        assert_eq!(hidden_flags(&page), vec![false, false]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut page = starter_page();
        filter_cards(&mut page, Container::Browser, "FIRE");
        let upper = hidden_flags(&page);

        let mut page = starter_page();
        filter_cards(&mut page, Container::Browser, "fire");
        let lower = hidden_flags(&page);

        assert_eq!(upper, lower);
        assert_eq!(upper, vec![true, false]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut page = starter_page();

        filter_cards(&mut page, Container::Browser, "grass");
        let first = hidden_flags(&page);
        filter_cards(&mut page, Container::Browser, "grass");
        let second = hidden_flags(&page);

        assert_eq!(first, second);
        assert_eq!(first, vec![false, true]);
    }

    #[test]
    fn test_filter_with_no_rendered_cards() {
        let mut page = MemoryPage::new();

        filter_cards(&mut page, Container::Browser, "fire");

        assert!(page.query_all(Container::Browser, ".card").is_empty());
    }

    #[test]
    fn test_unmatched_query_hides_all() {
        let mut page = starter_page();

        filter_cards(&mut page, Container::Browser, "dragon");

        assert_eq!(hidden_flags(&page), vec![true, true]);
    }
}
