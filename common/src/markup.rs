use api::product::{EXCLUSIVE_CATEGORY, Product, image_url};

use crate::format::format_price;

// attribute values are always double quoted, so quotes and tag openers are what
// would break out of them
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }

    out
}

// text nodes are escaped so the visible text reads exactly like the source data
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }

    out
}

// a single product card
//
// name and description are duplicated into data attributes, which is what the search
// filter reads back from the page
pub fn product_card(product: &Product, category_id: &str, section_id: &str) -> String {
    let modifier = if category_id == EXCLUSIVE_CATEGORY {
        " exclusive"
    } else {
        ""
    };
    let name_attr = escape_attr(&product.name);

    format!(
        r#"<article class="product-card horizontal{modifier}" data-name="{name_attr}" data-desc="{desc_attr}">
  <div class="product-image-wrap">
    <img class="product-image" src="{src}" alt="{name_attr}" loading="lazy" />
  </div>
  <div class="product-content">
    <div class="product-name">{name}</div>
    <div class="product-desc">{desc}</div>
    <div class="product-price">{price}</div>
  </div>
</article>"#,
        desc_attr = escape_attr(&product.description),
        src = escape_attr(&image_url(section_id, &product.image)),
        name = escape_text(&product.name),
        desc = escape_text(&product.description),
        price = format_price(product.price),
    )
}

// the contents of a .products-grid, built in one go so the page only parses it once
pub fn products_grid(products: &[Product], category_id: &str, section_id: &str) -> String {
    products
        .iter()
        .map(|product| product_card(product, category_id, section_id))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, description: &str) -> Product {
        Product {
            name: name.to_owned(),
            description: description.to_owned(),
            price: 4500.0,
            image: "milanesa.jpg".to_owned(),
        }
    }

    #[test]
    fn card_carries_search_data_and_assets() {
        let card = product_card(
            &product("Milanesa", "Con papas fritas"),
            "mains",
            "kitchen",
        );

        assert!(card.starts_with(r#"<article class="product-card horizontal" "#));
        assert!(card.contains(r#"data-name="Milanesa""#));
        assert!(card.contains(r#"data-desc="Con papas fritas""#));
        assert!(card.contains(r#"src="assets/products/kitchen/milanesa.jpg""#));
        assert!(card.contains(r#"loading="lazy""#));
        assert!(card.contains("<div class=\"product-price\">$\u{a0}4.500</div>"));
    }

    #[test]
    fn exclusive_category_adds_modifier() {
        let card = product_card(&product("Ojo de bife", ""), EXCLUSIVE_CATEGORY, "grill");

        assert!(card.starts_with(r#"<article class="product-card horizontal exclusive" "#));
    }

    #[test]
    fn quotes_and_brackets_are_escaped_in_attributes_only() {
        let card = product_card(
            &product(r#"Trago "La Casa""#, "Gin <tonic> & limón"),
            "",
            "bar",
        );

        assert!(card.contains(r#"data-name="Trago &quot;La Casa&quot;""#));
        assert!(card.contains(r#"alt="Trago &quot;La Casa&quot;""#));
        assert!(card.contains(r#"data-desc="Gin &lt;tonic> &amp; limón""#));
        assert!(card.contains(r#"<div class="product-name">Trago "La Casa"</div>"#));
        assert!(card.contains(r#"<div class="product-desc">Gin &lt;tonic&gt; &amp; limón</div>"#));
    }

    #[test]
    fn grid_keeps_product_order() {
        let products = vec![product("Flan", ""), product("Helado", ""), product("Budín", "")];
        let grid = products_grid(&products, "", "desserts");

        let flan = grid.find("data-name=\"Flan\"").unwrap();
        let helado = grid.find("data-name=\"Helado\"").unwrap();
        let budin = grid.find("data-name=\"Budín\"").unwrap();
        assert!(flan < helado && helado < budin);
        assert_eq!(grid.matches("<article").count(), 3);
    }

    #[test]
    fn empty_grid() {
        assert_eq!(products_grid(&[], "", "desserts"), "");
    }
}
