use scraper::ElementRef;

/// All text below `element`, each text node trimmed, empty nodes skipped and
/// the rest joined by a single space.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The element siblings following `element`, in document order. Text and
/// comment nodes between them are skipped.
pub fn following_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.next_siblings().filter_map(ElementRef::wrap)
}

pub fn is_named(element: ElementRef<'_>, name: &str) -> bool {
    element.value().name() == name
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, sel: &str) -> ElementRef<'a> {
        doc.select(&Selector::parse(sel).unwrap()).next().unwrap()
    }

    #[test]
    fn test_element_text_joins_nodes() {
        let doc = Html::parse_fragment("<p>  Lax <b>med</b>\n  <i> dillsås </i> </p>");
        assert_eq!(element_text(first(&doc, "p")), "Lax med dillsås");
    }

    #[test]
    fn test_following_elements_skips_text() {
        let doc = Html::parse_fragment(
            "<div><h3>A</h3> loose text <br><p>B</p><!-- c --><ul></ul></div>",
        );
        let names: Vec<_> = following_elements(first(&doc, "h3"))
            .map(|e| e.value().name().to_owned())
            .collect();
        assert_eq!(names, vec!["br", "p", "ul"]);
    }
}
