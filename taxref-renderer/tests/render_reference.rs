//! Renders extractor output end to end, the way the sync pipeline does.

use taxref_core::catalog;
use taxref_core::extract::Extractor;
use taxref_renderer::{ReferenceContext, Renderer};

const README: &str = "\
# Integration & Communication Architecture

Connecting systems and exchanging data.

### Messaging Styles
- Event-Driven Architecture → async, loosely coupled
- [Enterprise Service Bus](https://example.com/esb) → centralized routing
- API Gateway Architecture

### Contract Styles
- REST
- gRPC
";

#[test]
fn extracted_readme_renders_with_cleaned_items() {
    let extractor = Extractor::new().expect("extractor");
    let doc = extractor.extract(README);
    let located = vec![(&catalog::sections()[2], doc)];
    let ctx = ReferenceContext::from_sections("2026-08-07 09:30:00 UTC".to_string(), &located);

    let out = Renderer::new().expect("renderer").render(&ctx).expect("render");

    // Arrow suffixes and link syntax are gone from the rendered bullets.
    assert!(out.contains("- Event-Driven Architecture\n"));
    assert!(out.contains("- Enterprise Service Bus\n"));
    assert!(!out.contains("→"));
    assert!(!out.contains("example.com/esb"));

    // Both subsections land in the table of contents with derived anchors.
    assert!(out.contains("  - [Messaging Styles](#messaging-styles)"));
    assert!(out.contains("  - [Contract Styles](#contract-styles)"));

    // The section body sits between the TOC separator and the curated blocks.
    let body = out
        .find("## 3. Integration & Communication Architecture")
        .expect("section body");
    let curated = out
        .find("## 10. Practicality Taxonomy (Abstraction Levels)")
        .expect("curated block");
    assert!(body < curated);
}

#[test]
fn a_readme_without_subsections_still_gets_a_toc_entry() {
    let extractor = Extractor::new().expect("extractor");
    let doc = extractor.extract("# Industry Architectures\n\nVertical patterns.\n");
    let located = vec![(&catalog::sections()[8], doc)];
    let ctx = ReferenceContext::from_sections("now".to_string(), &located);

    let out = Renderer::new().expect("renderer").render(&ctx).expect("render");
    assert!(out.contains(
        "<summary><a href=\"#9-industry-specialized-architectures\">9. Industry & Specialized Architectures</a></summary>"
    ));
    assert!(out.contains("## 9. Industry & Specialized Architectures"));
}
