use pagedom::{Document, Markup, Selector, GENERATED_ID_PREFIX};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>mngr</title></head>
  <body>
    <c-sidebar>
      <nav>
        <menu>
          <li><a href="/tables/16384/records" data-table-oid="16384">users</a></li>
        </menu>
      </nav>
    </c-sidebar>
    <c-content>
      <c-table>
        <table>
          <thead><tr><th class="text" data-column="name">name</th></tr></thead>
          <tbody>
            <tr data-table-oid="16384" data-record-id="7"><td class="text">ada</td></tr>
          </tbody>
        </table>
      </c-table>
    </c-content>
  </body>
</html>"#;

#[test]
fn test_custom_elements_survive_parsing() {
    let doc: Document<()> = Document::parsed(Markup::document(PAGE));
    assert_eq!(doc.root().tag, "html");

    let sel = Selector::parse("c-table tbody tr").unwrap();
    let rows = doc.query_selector_all(&sel);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_attribute("data-record-id"), Some("7"));
}

#[test]
fn test_class_attribute_becomes_class_list() {
    let doc: Document<()> = Document::parsed(Markup::document(PAGE));
    let sel = Selector::parse("c-table thead th").unwrap();
    let th = doc.query_selector(&sel).unwrap();
    assert!(th.has_class("text"));
    assert_eq!(th.get_attribute("data-column"), Some("name"));
    assert_eq!(th.text_content(), "name");
}

#[test]
fn test_whitespace_text_is_dropped() {
    let markup = Markup::fragment("<ul>\n  <li>one</li>\n</ul>");
    let sel = Selector::parse("ul").unwrap();
    let ids = markup.select(&sel);
    assert_eq!(ids.len(), 1);

    let doc: Document<()> = Document::parsed(markup.clone());
    let ul = doc.element(ids[0]).unwrap();
    assert_eq!(ul.content.children().len(), 1);
}

#[test]
fn test_markup_id_becomes_identity() {
    let doc: Document<()> = Document::parsed(Markup::fragment(r#"<p id="intro">hi</p>"#));
    assert_eq!(doc.element("intro").unwrap().text_content(), "hi");
}

#[test]
fn test_duplicate_markup_id_keeps_first() {
    let doc: Document<()> = Document::parsed(Markup::fragment(
        r#"<p id="dup" class="first">a</p><p id="dup" class="second">b</p>"#,
    ));

    assert!(doc.element("dup").unwrap().has_class("first"));

    let sel = Selector::parse(".second").unwrap();
    let second = doc.query_selector(&sel).unwrap();
    assert!(second.id.starts_with(GENERATED_ID_PREFIX));
    assert_eq!(second.get_attribute("id"), Some("dup"));
}

#[test]
fn test_markup_cannot_claim_generated_ids() {
    let doc: Document<()> = Document::parsed(Markup::fragment(
        r#"<table><tbody><tr><td>a</td></tr><tr id="__pagedom-999999"><td>b</td></tr></tbody></table>"#,
    ));

    let sel = Selector::parse("tr").unwrap();
    let ids = doc.select_ids(&sel);
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert!(doc.element("__pagedom-999999").is_none());
    assert_eq!(doc.element(&ids[1]).unwrap().text_content(), "b");
}
