// structural rules the menu behavior depends on; the look of the page is left to
// the site's own stylesheet and the theme files
pub const MENU_STYLES: &str = r#"
.sections-nav {
    position: sticky;
    top: 0;
    display: flex;
    gap: 0.5rem;
    overflow-x: auto;
    white-space: nowrap;
    scrollbar-width: none;
}

.sections-nav a {
    flex: 0 0 auto;
    padding: 0.5rem 0.75rem;
    text-decoration: none;
}

.sections-nav a.active {
    font-weight: 600;
    border-bottom: 2px solid currentColor;
}

.products-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1rem;
}

.product-card.horizontal {
    display: flex;
    gap: 0.75rem;
}

.product-image {
    width: 96px;
    height: 96px;
    object-fit: cover;
}

.socials {
    display: flex;
    gap: 0.5rem;
}
"#;
