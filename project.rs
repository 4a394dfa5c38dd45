use rand::{seq::SliceRandom, Rng};

use crate::*;

/// Grey 800x600 SVG reading "Project", inlined as a data URI so placeholder cards need no fetch
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0naHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmcnIHdpZHRoPSc4MDAnIGhlaWdodD0nNjAwJz4KICA8cmVjdCB3aWR0aD0nMTAwJScgaGVpZ2h0PScxMDAlJyBmaWxsPScjZTVlN2ViJy8+CiAgPHRleHQgeD0nNTAlJyB5PSc1MCUnIGRvbWluYW50LWJhc2VsaW5lPSdtaWRkbGUnIHRleHQtYW5jaG9yPSdtaWRkbGUnIGZpbGw9JyM5Y2EzYWYnIGZvbnQtZmFtaWx5PSdBcmlhbCcgZm9udC1zaXplPScxNCc+UHJvamVjdDwvdGV4dD4KPC9zdmc+";

/// Synthetic project shown by "load more", display data only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub category: String,
    pub location: String,
    pub number: u32,
}

impl ProjectCard {
    /// Generates one batch of cards: categories rotate in config order, location and number
    /// are random
    pub fn generate_batch<R: Rng + ?Sized>(config: &ProjectsConfig, rng: &mut R) -> Vec<Self> {
        if config.categories.is_empty() || config.locations.is_empty() {
            warn!("no categories or locations configured for placeholder projects");
            return vec![];
        }
        let mut batch = Vec::with_capacity(config.batch_size);
        for i in 0..config.batch_size {
            let category = config.categories[i % config.categories.len()].clone();
            let Some(location) = config.locations.choose(&mut *rng).cloned() else {
                break;
            };
            let number = rng.gen_range(0..config.max_project_number.max(1));
            batch.push(Self {
                category,
                location,
                number,
            });
        }
        batch
    }

    pub fn aria_label(&self) -> String {
        format!(
            "View {} project {} in {}",
            self.category, self.number, self.location
        )
    }

    /// Category with the first letter uppercased, as shown on the card
    pub fn category_label(&self) -> String {
        let mut chars = self.category.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl Render for ProjectCard {
    fn render_to(&self, w: &mut String) {
        w.push_str("<img src='");
        w.push_str(PLACEHOLDER_IMAGE);
        w.push_str("' alt='Project placeholder'>");
        w.push_str(r#"<div class="content"><div class="project-meta"><span>"#);
        self.category_label().render_to(w);
        w.push_str("</span><span>");
        self.location.render_to(w);
        w.push_str("</span></div><h3>Project ");
        self.number.render_to(w);
        w.push_str("</h3></div>");
    }
}
