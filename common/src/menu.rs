use api::{
    product::{DEFAULT_BUCKET, ProductCatalog},
    section::{Category, Section},
};

use crate::markup::products_grid;

// everything needed to put one section on the page, with the grids already
// turned into markup
#[derive(Clone, Debug, PartialEq)]
pub struct SectionView {
    pub id: String,
    pub name: String,
    pub body: SectionBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    Flat { grid: String },
    Categorized(Vec<CategoryView>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    pub grid: String,
}

impl SectionView {
    pub fn anchor(&self) -> String {
        section_anchor(&self.id)
    }
}

pub fn section_anchor(section_id: &str) -> String {
    format!("section-{section_id}")
}

// lay out a section from whatever its data files yielded
//
// categorized sections only ever look up the buckets named by their categories, so
// products filed under an unknown id (or under "default") are dropped, and a section
// whose category list failed to load ends up with no blocks at all
pub fn build_section(
    section: &Section,
    categories: &[Category],
    catalog: &ProductCatalog,
) -> SectionView {
    let body = if section.has_categories {
        SectionBody::Categorized(
            categories
                .iter()
                .map(|category| CategoryView {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    grid: products_grid(catalog.bucket(&category.id), &category.id, &section.id),
                })
                .collect(),
        )
    } else {
        SectionBody::Flat {
            grid: products_grid(catalog.bucket(DEFAULT_BUCKET), "", &section.id),
        }
    };

    SectionView {
        id: section.id.clone(),
        name: section.name.clone(),
        body,
    }
}
