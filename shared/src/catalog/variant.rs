//! Variant matrix generation
//!
//! Builds a product's variants as the Cartesian product of its option axes
//! (color, RAM, storage). Empty axes contribute no dimension.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{DomainError, DomainResult};
use crate::models::{ProductOptions, Variant};

/// Id of the single variant of a product without options
pub const DEFAULT_VARIANT_ID: &str = "default";

const ID_SEPARATOR: &str = "-";

/// One independent option dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantAxis {
    Color,
    Ram,
    Storage,
}

impl VariantAxis {
    /// Tag used in variant ids
    pub fn tag(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Ram => "ram",
            Self::Storage => "storage",
        }
    }
}

impl fmt::Display for VariantAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Values per axis, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantAxes {
    pub colors: Vec<String>,
    pub rams: Vec<String>,
    pub storages: Vec<String>,
}

impl VariantAxes {
    pub fn new(colors: Vec<String>, rams: Vec<String>, storages: Vec<String>) -> Self {
        Self {
            colors,
            rams,
            storages,
        }
    }

    pub fn from_options(options: &ProductOptions) -> Self {
        Self {
            colors: options.color.clone().unwrap_or_default(),
            rams: options.ram.clone().unwrap_or_default(),
            storages: options.storage.clone().unwrap_or_default(),
        }
    }

    /// `availableOptions` form; empty axes are omitted
    pub fn to_options(&self) -> ProductOptions {
        fn non_empty(values: &[String]) -> Option<Vec<String>> {
            (!values.is_empty()).then(|| values.to_vec())
        }
        ProductOptions {
            color: non_empty(&self.colors),
            ram: non_empty(&self.rams),
            storage: non_empty(&self.storages),
        }
    }

    pub fn values(&self, axis: VariantAxis) -> &[String] {
        match axis {
            VariantAxis::Color => &self.colors,
            VariantAxis::Ram => &self.rams,
            VariantAxis::Storage => &self.storages,
        }
    }

    fn values_mut(&mut self, axis: VariantAxis) -> &mut Vec<String> {
        match axis {
            VariantAxis::Color => &mut self.colors,
            VariantAxis::Ram => &mut self.rams,
            VariantAxis::Storage => &mut self.storages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.rams.is_empty() && self.storages.is_empty()
    }
}

/// Deterministic id from the present axis values, color → ram → storage
pub fn variant_id(color: Option<&str>, ram: Option<&str>, storage: Option<&str>) -> String {
    let parts: Vec<String> = [
        (VariantAxis::Color, color),
        (VariantAxis::Ram, ram),
        (VariantAxis::Storage, storage),
    ]
    .into_iter()
    .filter_map(|(axis, value)| value.map(|v| format!("{}{}{}", axis.tag(), ID_SEPARATOR, v)))
    .collect();

    if parts.is_empty() {
        DEFAULT_VARIANT_ID.to_string()
    } else {
        parts.join(ID_SEPARATOR)
    }
}

#[derive(Clone, Default)]
struct Combination {
    color: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
}

/// Cartesian product of the non-empty axes, stock 0, default prices
///
/// With no axis values at all the result is a single [`DEFAULT_VARIANT_ID`]
/// variant.
pub fn generate(axes: &VariantAxes, purchased_price: f64, selling_price: f64) -> Vec<Variant> {
    let mut combinations = vec![Combination::default()];

    for axis in [VariantAxis::Color, VariantAxis::Ram, VariantAxis::Storage] {
        let values = axes.values(axis);
        if values.is_empty() {
            continue;
        }
        combinations = combinations
            .into_iter()
            .flat_map(|base| {
                values.iter().map(move |value| {
                    let mut next = base.clone();
                    let slot = match axis {
                        VariantAxis::Color => &mut next.color,
                        VariantAxis::Ram => &mut next.ram,
                        VariantAxis::Storage => &mut next.storage,
                    };
                    *slot = Some(value.clone());
                    next
                })
            })
            .collect();
    }

    combinations
        .into_iter()
        .map(|c| Variant {
            id: variant_id(c.color.as_deref(), c.ram.as_deref(), c.storage.as_deref()),
            color: c.color,
            ram: c.ram,
            storage: c.storage,
            purchased_price,
            selling_price,
            stock: 0,
        })
        .collect()
}

/// Single-field edit of a variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantEdit {
    PurchasedPrice(f64),
    SellingPrice(f64),
    Stock(u32),
}

/// Copy of `variants` with one field of `variant_id` replaced
///
/// Unknown ids leave the list unchanged.
pub fn update_variant_field(variants: &[Variant], variant_id: &str, edit: VariantEdit) -> Vec<Variant> {
    variants
        .iter()
        .map(|v| {
            if v.id != variant_id {
                return v.clone();
            }
            let mut updated = v.clone();
            match edit {
                VariantEdit::PurchasedPrice(price) => updated.purchased_price = price,
                VariantEdit::SellingPrice(price) => updated.selling_price = price,
                VariantEdit::Stock(stock) => updated.stock = stock,
            }
            updated
        })
        .collect()
}

/// What happens to per-variant edits when the axes change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerationMode {
    /// Discard all edits; every variant starts from the defaults
    #[default]
    Replace,
    /// Keep price and stock of variants whose id survives
    MergeById,
}

/// Editable variant set of a product form
#[derive(Debug, Clone, PartialEq)]
pub struct VariantMatrix {
    axes: VariantAxes,
    default_purchased_price: f64,
    default_selling_price: f64,
    variants: Vec<Variant>,
    /// Ids of variants whose price or stock was set by hand
    edited: HashSet<String>,
    mode: RegenerationMode,
}

impl VariantMatrix {
    pub fn new(default_purchased_price: f64, default_selling_price: f64) -> Self {
        let axes = VariantAxes::default();
        let variants = generate(&axes, default_purchased_price, default_selling_price);
        Self {
            axes,
            default_purchased_price,
            default_selling_price,
            variants,
            edited: HashSet::new(),
            mode: RegenerationMode::default(),
        }
    }

    /// Resume editing an existing product's axes and variants
    pub fn from_parts(
        axes: VariantAxes,
        variants: Vec<Variant>,
        default_purchased_price: f64,
        default_selling_price: f64,
    ) -> Self {
        // stored variants that differ from the defaults carry edits
        let edited = variants
            .iter()
            .filter(|v| {
                v.stock != 0
                    || v.purchased_price != default_purchased_price
                    || v.selling_price != default_selling_price
            })
            .map(|v| v.id.clone())
            .collect();
        Self {
            axes,
            default_purchased_price,
            default_selling_price,
            variants,
            edited,
            mode: RegenerationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: RegenerationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn axes(&self) -> &VariantAxes {
        &self.axes
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn mode(&self) -> RegenerationMode {
        self.mode
    }

    /// Whether any variant carries a hand-set price or stock
    pub fn has_edits(&self) -> bool {
        !self.edited.is_empty()
    }

    pub fn into_variants(self) -> Vec<Variant> {
        self.variants
    }

    /// Prices used for variants created by later regenerations
    pub fn set_default_prices(&mut self, purchased_price: f64, selling_price: f64) {
        self.default_purchased_price = purchased_price;
        self.default_selling_price = selling_price;
    }

    pub fn add_axis_value(&mut self, axis: VariantAxis, value: &str) -> DomainResult<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::validation(format!("{} value must not be empty", axis)));
        }
        if self.axes.values(axis).iter().any(|v| v == value) {
            return Err(DomainError::DuplicateAxisValue {
                axis: axis.to_string(),
                value: value.to_string(),
            });
        }
        self.axes.values_mut(axis).push(value.to_string());
        self.regenerate();
        Ok(())
    }

    /// Removes `value` from `axis`; absent values change nothing
    pub fn remove_axis_value(&mut self, axis: VariantAxis, value: &str) {
        let values = self.axes.values_mut(axis);
        let before = values.len();
        values.retain(|v| v != value);
        if values.len() != before {
            self.regenerate();
        }
    }

    pub fn update_variant(&mut self, variant_id: &str, edit: VariantEdit) {
        if self.variants.iter().any(|v| v.id == variant_id) {
            self.variants = update_variant_field(&self.variants, variant_id, edit);
            self.edited.insert(variant_id.to_string());
        }
    }

    fn regenerate(&mut self) {
        let fresh = generate(
            &self.axes,
            self.default_purchased_price,
            self.default_selling_price,
        );

        self.variants = match self.mode {
            RegenerationMode::Replace => {
                let discarded = self.edited.len();
                self.edited.clear();
                if discarded > 0 {
                    tracing::warn!(
                        discarded,
                        "Variant regeneration discarded per-variant price/stock edits"
                    );
                }
                fresh
            }
            RegenerationMode::MergeById => {
                self.edited.retain(|id| fresh.iter().any(|v| &v.id == id));
                let previous: HashMap<&str, &Variant> =
                    self.variants.iter().map(|v| (v.id.as_str(), v)).collect();
                fresh
                    .into_iter()
                    .map(|mut v| {
                        if let Some(old) = previous.get(v.id.as_str()) {
                            v.purchased_price = old.purchased_price;
                            v.selling_price = old.selling_price;
                            v.stock = old.stock;
                        }
                        v
                    })
                    .collect()
            }
        };
    }
}
