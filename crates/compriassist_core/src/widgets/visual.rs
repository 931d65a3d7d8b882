use assist_logging::{assist_info, assist_warn};

use crate::{
    text::{escape_html, format_price, percent},
    Config, Effect, FileSelection, RequestFailure, RequestSlot, RequestToken, SimilarProduct,
};

pub const VISUAL_INVALID_FILE_MESSAGE: &str = "Por favor, selecciona una imagen válida";
pub const VISUAL_SEARCHING_MESSAGE: &str = "Buscando productos similares...";
pub const VISUAL_EMPTY_MESSAGE: &str = "No se encontraron productos similares.";
pub const VISUAL_FAILURE_MESSAGE: &str = "Error de conexión con el servidor.";
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/200?text=Sin+Imagen";
pub const DEFAULT_CATEGORY_LABEL: &str = "General";

#[derive(Debug, Clone, PartialEq)]
enum Results {
    Idle,
    Searching,
    Found(Vec<SimilarProduct>),
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualSearch {
    hovering: bool,
    preview: Option<FileSelection>,
    slot: RequestSlot,
    results: Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualSearchView {
    pub hovering: bool,
    /// Path of the image being searched, shown as the preview.
    pub preview: Option<String>,
    pub results: VisualResultsView,
}

/// Replaces only the results region; the preview stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualResultsView {
    Idle,
    Searching { message: String },
    Cards(Vec<ProductCardView>),
    Empty { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub name: String,
    pub image_url: String,
    pub category: String,
    pub price: Option<String>,
    pub similarity: String,
}

impl Default for VisualSearch {
    fn default() -> Self {
        Self {
            hovering: false,
            preview: None,
            slot: RequestSlot::default(),
            results: Results::Idle,
        }
    }
}

impl VisualSearch {
    /// Returns whether the highlight changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        std::mem::replace(&mut self.hovering, hovering) != hovering
    }

    pub fn file_dropped(&mut self, file: FileSelection, config: &Config) -> Vec<Effect> {
        self.hovering = false;
        if !file.is_image() {
            assist_info!("visual: rejected {} ({})", file.name, file.mime);
            return vec![Effect::Alert {
                message: VISUAL_INVALID_FILE_MESSAGE.to_string(),
            }];
        }

        let token = self.slot.issue();
        assist_info!("visual: searching with {} {}", file.name, token);
        self.preview = Some(file.clone());
        self.results = Results::Searching;
        vec![Effect::SearchSimilar {
            token,
            file,
            top_k: config.visual_top_k,
        }]
    }

    pub fn found(
        &mut self,
        token: RequestToken,
        result: Result<Vec<SimilarProduct>, RequestFailure>,
    ) -> bool {
        if !self.slot.settle(token) {
            assist_info!("visual: dropping stale result {}", token);
            return false;
        }
        self.results = match result {
            Ok(products) => Results::Found(products),
            Err(failure) => {
                assist_warn!("visual: request {} failed: {}", token, failure);
                Results::Failed
            }
        };
        true
    }

    pub fn view(&self) -> VisualSearchView {
        VisualSearchView {
            hovering: self.hovering,
            preview: self
                .preview
                .as_ref()
                .map(|file| escape_html(&file.path.display().to_string())),
            results: match &self.results {
                Results::Idle => VisualResultsView::Idle,
                Results::Searching => VisualResultsView::Searching {
                    message: VISUAL_SEARCHING_MESSAGE.to_string(),
                },
                Results::Found(products) if products.is_empty() => VisualResultsView::Empty {
                    message: VISUAL_EMPTY_MESSAGE.to_string(),
                },
                Results::Found(products) => {
                    VisualResultsView::Cards(products.iter().map(product_card).collect())
                }
                Results::Failed => VisualResultsView::Error {
                    message: VISUAL_FAILURE_MESSAGE.to_string(),
                },
            },
        }
    }
}

fn product_card(product: &SimilarProduct) -> ProductCardView {
    let non_blank = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(escape_html)
    };
    ProductCardView {
        name: escape_html(&product.name),
        image_url: non_blank(&product.image_url).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        category: non_blank(&product.category)
            .unwrap_or_else(|| DEFAULT_CATEGORY_LABEL.to_string()),
        price: format_price(product.price),
        similarity: percent(product.similarity),
    }
}
