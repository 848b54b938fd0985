// client-side search over the rendered menu
//
// the filter works against whatever holds the rendered cards (the live dom in the
// browser, plain structs in tests), so the tree is abstracted behind a trait

pub trait MenuTree {
    type Card;
    type Block;

    fn cards(&self) -> Vec<Self::Card>;

    // the (name, description) pair stored on the card when it was rendered
    fn card_text(&self, card: &Self::Card) -> (String, String);

    fn set_card_visible(&self, card: &Self::Card, visible: bool);

    fn categories(&self) -> Vec<Self::Block>;

    fn sections(&self) -> Vec<Self::Block>;

    // whether any card nested anywhere below the block is currently shown
    fn has_visible_card(&self, block: &Self::Block) -> bool;

    fn set_block_visible(&self, block: &Self::Block, visible: bool);
}

// the search box hands over raw input; the filter expects trimmed lowercase
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn card_matches(term: &str, name: &str, description: &str) -> bool {
    term.is_empty()
        || name.to_lowercase().contains(term)
        || description.to_lowercase().contains(term)
}

// visibility cascades bottom-up, so cards have to be settled before categories, and
// categories before sections
pub fn filter_products<T: MenuTree>(tree: &T, term: &str) {
    for card in tree.cards() {
        let visible = if term.is_empty() {
            true
        } else {
            let (name, description) = tree.card_text(&card);
            card_matches(term, &name, &description)
        };
        tree.set_card_visible(&card, visible);
    }

    for category in tree.categories() {
        let visible = tree.has_visible_card(&category);
        tree.set_block_visible(&category, visible);
    }

    for section in tree.sections() {
        let visible = tree.has_visible_card(&section);
        tree.set_block_visible(&section, visible);
    }
}
