use api::{
    product::ProductCatalog,
    section::{Category, Section},
    theme::ThemeTable,
};
use common::{
    menu::{SectionBody, build_section},
    scroll::ScrollTracker,
    theme::{MonthDay, select_theme},
};

const SECTIONS: &str = r#"[
    {"id": "entradas", "name": "Entradas", "hasCategories": false},
    {"id": "bebidas", "name": "Bebidas", "hasCategories": true},
    {"id": "parrilla", "name": "Parrilla", "hasCategories": true}
]"#;

const ENTRADAS: &str = r#"{
    "default": [
        {"name": "Empanada", "description": "De carne", "price": 1800, "image": "empanada.jpg"},
        {"name": "Provoleta", "description": "Con orégano", "price": 5200, "image": "provoleta.jpg"}
    ]
}"#;

const BEBIDAS_CATEGORIES: &str = r#"[
    {"id": "vinos", "name": "Vinos"},
    {"id": "exclusive", "name": "Selección de la casa"}
]"#;

const BEBIDAS: &str = r#"{
    "exclusive": [
        {"name": "Gran Reserva", "description": "Edición limitada", "price": 48000, "image": "gran.jpg"}
    ],
    "vinos": [
        {"name": "Malbec", "description": "Mendoza", "price": 12000, "image": "malbec.jpg"},
        {"name": "Torrontés", "description": "Salta", "price": 11000, "image": "torrontes.jpg"}
    ],
    "cervezas": [
        {"name": "IPA", "description": "Artesanal", "price": 4000, "image": "ipa.jpg"}
    ]
}"#;

const PARRILLA: &str = r#"{
    "cortes": [
        {"name": "Vacío", "description": "", "price": 15000, "image": "vacio.jpg"}
    ]
}"#;

fn positions(grid: &str, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .map(|name| grid.find(&format!("data-name=\"{name}\"")).unwrap())
        .collect()
}

#[test]
fn renders_every_section_in_order() {
    let sections: Vec<Section> = serde_json::from_str(SECTIONS).unwrap();
    let categories: Vec<Category> = serde_json::from_str(BEBIDAS_CATEGORIES).unwrap();

    // the parrilla category file failed to load, which leaves it with no categories
    let views: Vec<_> = sections
        .iter()
        .map(|section| match section.id.as_str() {
            "entradas" => build_section(section, &[], &serde_json::from_str(ENTRADAS).unwrap()),
            "bebidas" => build_section(section, &categories, &serde_json::from_str(BEBIDAS).unwrap()),
            _ => build_section(section, &[], &serde_json::from_str(PARRILLA).unwrap()),
        })
        .collect();

    let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["entradas", "bebidas", "parrilla"]);

    let SectionBody::Flat { grid } = &views[0].body else {
        panic!("entradas has no categories");
    };
    let pos = positions(grid, &["Empanada", "Provoleta"]);
    assert!(pos[0] < pos[1]);
    assert_eq!(grid.matches("<article").count(), 2);

    let SectionBody::Categorized(blocks) = &views[1].body else {
        panic!("bebidas is categorized");
    };
    let block_ids: Vec<&str> = blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(block_ids, ["vinos", "exclusive"]);

    let pos = positions(&blocks[0].grid, &["Malbec", "Torrontés"]);
    assert!(pos[0] < pos[1]);
    assert!(!blocks[0].grid.contains("exclusive"));
    assert!(blocks[1].grid.contains(r#"class="product-card horizontal exclusive""#));
    assert!(blocks.iter().all(|b| !b.grid.contains("IPA")));

    assert_eq!(views[2].body, SectionBody::Categorized(Vec::new()));
}

#[test]
fn missing_product_file_leaves_an_empty_grid() {
    let sections: Vec<Section> = serde_json::from_str(SECTIONS).unwrap();
    let view = build_section(&sections[0], &[], &ProductCatalog::default());

    assert_eq!(
        view.body,
        SectionBody::Flat {
            grid: String::new()
        }
    );
}

#[test]
fn festive_theme_from_table() {
    let table: ThemeTable = serde_json::from_str(
        r#"{
            "default": {"class": "theme-default"},
            "fiestas": {"dateRange": ["12-28", "01-05"], "class": "theme-fiestas", "cssFile": "fiestas.css"}
        }"#,
    )
    .unwrap();

    let (_, theme) = select_theme(&table, "01-03".parse::<MonthDay>().unwrap()).unwrap();
    assert_eq!(theme.class, "theme-fiestas");
    assert_eq!(theme.css_file.as_deref(), Some("fiestas.css"));

    let (_, theme) = select_theme(&table, "03-15".parse::<MonthDay>().unwrap()).unwrap();
    assert_eq!(theme.class, "theme-default");
}

#[test]
fn tracker_follows_scrolling_down_and_back_up() {
    let mut tracker = ScrollTracker::new(500.0);

    assert_eq!(
        tracker
            .update([("entradas", 120.0), ("bebidas", 900.0), ("parrilla", 1700.0)])
            .as_deref(),
        Some("entradas")
    );
    assert_eq!(
        tracker
            .update([("entradas", -700.0), ("bebidas", 80.0), ("parrilla", 880.0)])
            .as_deref(),
        Some("bebidas")
    );
    assert_eq!(
        tracker.update([("entradas", -650.0), ("bebidas", 130.0), ("parrilla", 930.0)]),
        None
    );
    assert_eq!(
        tracker
            .update([("entradas", 200.0), ("bebidas", 980.0), ("parrilla", 1780.0)])
            .as_deref(),
        Some("entradas")
    );
}
