use std::collections::BTreeSet;

/// The product being rendered, as seen by placement rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductContext {
    pub id: String,

    /// Category slugs the product is tagged with (no ancestors)
    pub categories: BTreeSet<String>,
}

impl ProductContext {
    pub fn new<I, S>(id: impl Into<String>, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact slug membership
    pub fn has_category(&self, slug: &str) -> bool {
        self.categories.contains(slug)
    }
}

/// Render-time context handed to every hook callback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    pub product: ProductContext,

    /// True only while rendering a single product detail page
    pub is_detail_view: bool,
}

impl PageContext {
    pub fn detail(product: ProductContext) -> Self {
        Self {
            product,
            is_detail_view: true,
        }
    }

    pub fn listing(product: ProductContext) -> Self {
        Self {
            product,
            is_detail_view: false,
        }
    }
}
