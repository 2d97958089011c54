#![allow(dead_code)]

use mngr_enhance::{Enhancer, EnhancerConfig, KeyScheme, Location, Page};
use pagedom::{Element, Markup};

/// Records page rendered with schema/table/record attributes.
pub const NAMED_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><script src="/static/js/main.js" async></script></head>
  <body>
    <c-sidebar>
      <h1>mngr</h1>
      <nav>
        <section>
          <h2>public</h2>
          <menu>
            <li><a id="nav-users" href="/tables/public/users/records" data-schema="public" data-table="users">users</a></li>
            <li><a id="nav-orders" href="/tables/public/orders/records" data-schema="public" data-table="orders">orders</a></li>
          </menu>
        </section>
        <section>
          <h2>my schema</h2>
          <menu>
            <li><a id="nav-my-users" href="/tables/my%20schema/users/records" data-schema="my schema" data-table="users">users</a></li>
          </menu>
        </section>
        <section>
          <h2>audit</h2>
          <menu>
            <li><a id="nav-audit-users" href="/tables/audit/users/records" data-schema="audit" data-table="users">users</a></li>
          </menu>
        </section>
      </nav>
    </c-sidebar>
    <c-content>
      <header>
        <h2>users</h2>
        <menu class="tabs">
          <li><a id="tab-records" href="/tables/public/users/records">All Records</a></li>
          <li><a id="tab-new" href="/tables/public/users/records/new">New Record</a></li>
        </menu>
      </header>
      <c-table>
        <table>
          <thead>
            <tr>
              <th id="th-id" class="int4" data-column="id">id</th>
              <th id="th-name" class="text" data-column="name">name</th>
              <th id="th-email" class="text" data-column="email"><span id="th-email-label">email</span></th>
              <th id="th-actions">actions</th>
            </tr>
          </thead>
          <tbody>
            <tr id="row-1" data-schema="public" data-table="users" data-record="1">
              <td id="cell-1-id" class="int4">1</td>
              <td class="text">ada</td>
            </tr>
            <tr id="row-2" data-schema="public" data-table="users">
              <td id="cell-2-id" class="int4">2</td>
              <td class="text">grace</td>
            </tr>
          </tbody>
          <caption>Double-click any row to edit</caption>
        </table>
      </c-table>
    </c-content>
  </body>
</html>"#;

/// Records page rendered with numeric table identifiers.
pub const OID_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <c-sidebar>
      <nav>
        <menu>
          <li><a id="nav-16384" href="/tables/16384/records" data-table-oid="16384">users</a></li>
          <li><a id="nav-16390" href="/tables/16390/records" data-table-oid="16390">orders</a></li>
        </menu>
      </nav>
    </c-sidebar>
    <c-content>
      <menu class="tabs">
        <li><a id="tab-records" href="/tables/16384/records">All Records</a></li>
        <li><a id="tab-debug" href="/tables/16384/debug">Debug</a></li>
      </menu>
      <c-table>
        <table>
          <thead><tr><th id="th-id" data-column="id">id</th></tr></thead>
          <tbody>
            <tr id="row-7" data-table-oid="16384" data-record-id="7"><td id="cell-7">7</td></tr>
            <tr id="row-8" data-table-oid="16384"><td>8</td></tr>
          </tbody>
        </table>
      </c-table>
    </c-content>
  </body>
</html>"#;

/// Absolute URL of an admin path on the test host.
pub fn url(path: &str) -> String {
    format!("http://localhost{path}")
}

pub fn open(html: &str, href: &str, scheme: KeyScheme) -> Page {
    let enhancer = Enhancer::new(EnhancerConfig::default().with_scheme(scheme)).unwrap();
    Page::open(enhancer, Markup::document(html), Location::parse(href).unwrap())
}

pub fn open_named(href: &str) -> Page {
    open(NAMED_PAGE, href, KeyScheme::AttributeKeyed)
}

pub fn open_oid(href: &str) -> Page {
    open(OID_PAGE, href, KeyScheme::IdentifierKeyed)
}

pub fn classes<'a>(page: &'a Page, id: &str) -> Vec<&'a str> {
    page.document()
        .element(id)
        .unwrap_or_else(|| panic!("no element {id}"))
        .classes
        .iter()
        .map(String::as_str)
        .collect()
}

/// Ids of every element carrying `class`, in document order.
pub fn marked(page: &Page, class: &str) -> Vec<String> {
    fn walk(element: &Element, class: &str, out: &mut Vec<String>) {
        if element.has_class(class) {
            out.push(element.id.clone());
        }
        for child in element.content.children() {
            walk(child, class, out);
        }
    }

    let mut out = Vec::new();
    walk(page.document().root(), class, &mut out);
    out
}
