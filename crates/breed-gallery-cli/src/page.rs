//! Standalone HTML page around a rendered container

use breed_gallery::dom::{escape_html, Container};

const STYLE: &str = r"
      body { font-family: sans-serif; margin: 0; background: #f5f5f5; }
      header { padding: 1.5rem 2rem; background: #2d3e50; color: #fff; }
      .search { display: flex; gap: 0.5rem; margin-top: 1rem; }
      .search input { flex: 1; padding: 0.5rem; font-size: 1rem; }
      #breeds-container { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; padding: 2rem; }
      .breed-card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,.15); }
      .breed-card img { width: 100%; height: 200px; object-fit: cover; }
      .breed-info { padding: 1rem; }
      .breed-info h3 { margin-top: 0; }
";

/// Full HTML document showing `container` under a search bar holding `query`
#[must_use]
pub(crate) fn render_page(container: &Container, query: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8"/>
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>Dog Breeds</title>
    <style>{STYLE}    </style>
  </head>
  <body>
    <header>
      <h1>Dog Breeds</h1>
      <div class="search">
        <input type="text" id="search-input" placeholder="Search breeds..." value="{query}"/>
        <button id="search-btn">Search</button>
      </div>
    </header>
    <main>
      {gallery}
    </main>
  </body>
</html>
"#,
        query = escape_html(query),
        gallery = container.to_html(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use breed_gallery::{render, BreedRecord, GalleryConfig};

    #[test]
    fn page_embeds_container_and_query() {
        let mut container = Container::new("breeds-container");
        let breeds = vec![BreedRecord::new(1, "Akita")];
        render(&mut container, &breeds, &GalleryConfig::default());

        let page = render_page(&container, "a\"k");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<div id=\"breeds-container\"><div class=\"breed-card\">"));
        assert!(page.contains("value=\"a&quot;k\""));
    }
}
