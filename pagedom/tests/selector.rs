use pagedom::{Document, Markup, Selector};

const PAGE: &str = r#"
<c-sidebar>
  <nav>
    <a id="users" data-schema="public" data-table="users">users</a>
    <a id="orders" data-schema="public" data-table="orders">orders</a>
    <a id="audit-users" data-schema="audit" data-table="users">users</a>
  </nav>
</c-sidebar>
<c-content>
  <c-table>
    <table>
      <thead>
        <tr>
          <th id="th-id" data-column="id">id</th>
          <th id="th-name" data-column="name">name</th>
          <th id="th-blank"></th>
        </tr>
      </thead>
      <tbody>
        <tr id="r1" class="odd"><td>1</td></tr>
        <tr id="r2" class="empty"></tr>
      </tbody>
    </table>
  </c-table>
</c-content>
"#;

fn page() -> Document<()> {
    Document::parsed(Markup::fragment(PAGE))
}

fn select<'a>(doc: &'a Document<()>, selector: &str) -> Vec<&'a str> {
    let sel = Selector::parse(selector).unwrap();
    doc.query_selector_all(&sel)
        .into_iter()
        .map(|el| el.id.as_str())
        .collect()
}

// ============================================================================
// Combinators
// ============================================================================

#[test]
fn test_descendant_chain_matches_in_document_order() {
    let doc = page();
    assert_eq!(
        select(&doc, "c-table thead th"),
        vec!["th-id", "th-name", "th-blank"]
    );
}

#[test]
fn test_descendant_chain_requires_every_ancestor() {
    let doc = page();
    assert!(select(&doc, "c-sidebar tbody tr").is_empty());
}

#[test]
fn test_child_combinator() {
    let doc = page();
    assert_eq!(select(&doc, "c-table > table > tbody > tr"), vec!["r1", "r2"]);
    assert!(select(&doc, "c-table > tbody > tr").is_empty());
}

#[test]
fn test_selector_group_keeps_document_order() {
    let doc = page();
    assert_eq!(select(&doc, "tbody tr, nav a.missing, #users"), vec!["users", "r1", "r2"]);
}

// ============================================================================
// Classes, Attributes and Pseudo-classes
// ============================================================================

#[test]
fn test_universal_and_class() {
    let doc = page();
    assert_eq!(select(&doc, "tbody *.odd"), vec!["r1"]);
}

#[test]
fn test_negation() {
    let doc = page();
    assert_eq!(select(&doc, "c-table tbody tr:not(.empty)"), vec!["r1"]);
}

#[test]
fn test_attribute_presence() {
    let doc = page();
    assert_eq!(select(&doc, "th[data-column]"), vec!["th-id", "th-name"]);
}

#[test]
fn test_attribute_equality() {
    let doc = page();
    let sel = Selector::parse(r#"c-sidebar a[data-schema="audit"][data-table=users]"#).unwrap();
    assert_eq!(
        doc.query_selector(&sel).map(|el| el.id.as_str()),
        Some("audit-users")
    );
}

#[test]
fn test_no_match() {
    let doc = page();
    let sel = Selector::parse("tr tr").unwrap();
    assert!(doc.query_selector(&sel).is_none());
    assert!(doc.select_ids(&sel).is_empty());
}

// ============================================================================
// Element Tree
// ============================================================================

#[test]
fn test_selectors_match_served_markup() {
    let mut doc = page();
    doc.element_mut("r2").unwrap().add_class("odd");

    assert_eq!(select(&doc, "tbody .odd"), vec!["r1"]);
    assert!(doc.element("r2").unwrap().has_class("odd"));
}

#[test]
fn test_select_ids_then_mutate() {
    let mut doc = page();
    let sel = Selector::parse("thead th").unwrap();
    for id in doc.select_ids(&sel) {
        if let Some(el) = doc.element_mut(&id) {
            el.add_class("cell");
        }
    }
    assert!(doc.element("th-blank").unwrap().has_class("cell"));
}
