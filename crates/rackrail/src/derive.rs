//! The derivation engine.
//!
//! Turns one breakpoint of a [`GridConfig`] into CSS custom properties and
//! selector rules. Pure and deterministic: table values are copied verbatim,
//! iteration follows index order, nothing depends on time or hashing.
//!
//! ## Output per breakpoint
//!
//! ```css
//! @media (min-width: 23.4375rem) {
//!   :root {
//!     --tw-layout-padding: 1.5rem;
//!     --tw-layout-padding-total: 3rem;
//!     --tw-layout-max-width: 327px;
//!     --tw-layout-breakpoint: sm;
//!     --tw-rack-col-1: 8.33%;
//!     --tw-rail-col-1: 16rem;
//!     --tw-offset-0: 0%;
//!   }
//!   .rack .col-1 { width: var(--tw-rack-col-1); flex-shrink: 0; }
//!   .rail .col-1 { width: var(--tw-rail-col-1); min-width: var(--tw-rail-col-1); flex-shrink: 0; }
//!   .rack .offset-0 { margin-left: var(--tw-offset-0); }
//!   .page-wrapper { max-width: var(--tw-layout-max-width); }
//! }
//! ```
//!
//! Blocks are produced in breakpoint order so that wider breakpoints override
//! narrower ones through the cascade.

use rrcss::{Declaration, Rule, StyleSheet, VarReference};

use crate::config::{ColumnRow, ContainerKind, GridConfig, Viewport, is_declared};

/// Builds custom property names under a namespace.
#[derive(Debug, Clone, Copy)]
pub struct VarNames<'a> {
    namespace: &'a str,
}

impl<'a> VarNames<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    fn property(&self, rest: &str) -> String {
        if self.namespace.is_empty() {
            format!("--{rest}")
        } else {
            format!("--{}-{rest}", self.namespace)
        }
    }

    /// `--{ns}-rack-col-{n}` / `--{ns}-rail-col-{n}`
    pub fn column(&self, kind: ContainerKind, n: u8) -> String {
        self.property(&format!("{}-col-{n}", kind.class_name()))
    }

    /// `--{ns}-offset-{n}`
    pub fn offset(&self, n: u8) -> String {
        self.property(&format!("offset-{n}"))
    }

    /// `--{ns}-layout-{attr}`
    pub fn layout(&self, attr: &str) -> String {
        self.property(&format!("layout-{attr}"))
    }
}

fn var(name: String) -> String {
    VarReference::new(name).to_string()
}

/// Everything derived for one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointStyles {
    pub breakpoint: String,
    /// `@media (min-width: ...)`
    pub media_query: String,
    /// `:root` custom properties, in emission order.
    pub variables: Vec<Declaration>,
    pub rules: Vec<Rule>,
}

impl BreakpointStyles {
    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|d| d.property == name)
            .map(|d| d.value.as_str())
    }

    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selector_text() == selector)
    }

    /// The media block with `:root` first, then the selector rules.
    pub fn to_rule(&self) -> Rule {
        let mut root = Rule::new(":root");
        for decl in &self.variables {
            root.push_declaration(decl.clone());
        }

        let mut block = Rule::at(self.media_query.clone()).nest(root);
        for rule in &self.rules {
            block.push_rule(rule.clone());
        }
        block
    }
}

/// Declared entries of `row` within `range`, in index order.
///
/// An empty range yields nothing.
fn declared_entries<'a>(
    row: Option<&'a ColumnRow>,
    range: std::ops::RangeInclusive<u8>,
) -> impl Iterator<Item = (u8, &'a str)> + 'a {
    row.filter(|_| !range.is_empty())
        .into_iter()
        .flat_map(move |r| r.range(range.clone()))
        .filter(|(_, value)| is_declared(value))
        .map(|(index, value)| (*index, value.as_str()))
}

/// Derives the custom properties and rules for one breakpoint.
pub fn derive_breakpoint(config: &GridConfig, vp: &Viewport) -> BreakpointStyles {
    let names = VarNames::new(&config.system.namespace);
    let max = config.system.max_columns;
    let column_range = 1..=max;
    #[allow(clippy::reversed_empty_ranges)]
    let offset_range = if max == 0 { 1..=0 } else { 0..=max - 1 };

    let mut variables = vec![
        Declaration::new(names.layout("padding"), vp.padding_rem().to_string()),
        Declaration::new(names.layout("padding-total"), vp.padding_total_rem().to_string()),
        Declaration::new(names.layout("max-width"), format!("{}px", vp.available_space)),
        Declaration::new(names.layout("breakpoint"), vp.name.clone()),
    ];
    let mut rules = Vec::new();

    for kind in [ContainerKind::Rack, ContainerKind::Rail] {
        let row = config.columns(kind).get(&vp.name);
        for (n, value) in declared_entries(row, column_range.clone()) {
            let name = names.column(kind, n);
            variables.push(Declaration::new(name.clone(), value));

            let selector = format!(".{} .col-{n}", kind.class_name());
            let rule = match kind {
                ContainerKind::Rack => Rule::new(&selector).declare("width", var(name)),
                ContainerKind::Rail => Rule::new(&selector)
                    .declare("width", var(name.clone()))
                    .declare("min-width", var(name)),
            };
            rules.push(rule.declare("flex-shrink", "0"));
        }
    }

    for (n, value) in declared_entries(config.offsets.get(&vp.name), offset_range) {
        let name = names.offset(n);
        variables.push(Declaration::new(name.clone(), value));
        rules.push(Rule::new(&format!(".rack .offset-{n}")).declare("margin-left", var(name)));
    }

    rules.push(
        Rule::new(".page-wrapper").declare("max-width", var(names.layout("max-width"))),
    );

    BreakpointStyles {
        breakpoint: vp.name.clone(),
        media_query: vp.media_query(),
        variables,
        rules,
    }
}

/// Derives every breakpoint, in configuration order.
pub fn derive_all(config: &GridConfig) -> Vec<BreakpointStyles> {
    config
        .viewports
        .iter()
        .map(|vp| derive_breakpoint(config, vp))
        .collect()
}

/// Breakpoint-independent container rules.
pub fn base_styles(config: &GridConfig) -> StyleSheet {
    let names = VarNames::new(&config.system.namespace);
    let padding = var(names.layout("padding"));
    let gap = var(names.layout("gap"));

    StyleSheet::new()
        .with(
            Rule::new(":root")
                .declare(names.layout("padding"), config.system.container_padding.clone())
                .declare(names.layout("gap"), config.system.gap.clone()),
        )
        .with(
            Rule::new(".rack, .rail")
                .declare("display", "flex")
                .declare("gap", gap)
                .declare("padding-left", padding.clone())
                .declare("padding-right", padding.clone())
                .declare("width", "100%")
                .declare("box-sizing", "border-box"),
        )
        .with(
            Rule::new(".rack")
                .declare("flex-wrap", "wrap")
                .declare("align-items", "stretch"),
        )
        .with(
            Rule::new(".rail")
                .declare("flex-wrap", "nowrap")
                .declare("overflow-x", "auto")
                .declare("scrollbar-width", "none")
                .declare("-ms-overflow-style", "none")
                .nest(Rule::new("&::-webkit-scrollbar").declare("display", "none")),
        )
        .with(
            // Slides sit one container padding apart
            Rule::new(&format!(".rail:has(> .col-{})", config.system.max_columns))
                .declare("gap", padding.clone()),
        )
        .with(
            Rule::new(".page-wrapper")
                .declare("width", "100%")
                .declare("margin", "0 auto")
                .declare("padding-left", padding.clone())
                .declare("padding-right", padding),
        )
}

/// Flex alignment helpers registered as utilities.
pub fn utility_styles() -> StyleSheet {
    let flex = |selector: &str, justify: &str| {
        Rule::new(selector)
            .declare("display", "flex")
            .declare("align-items", "center")
            .declare("justify-content", justify.to_string())
    };

    StyleSheet::new()
        .with(flex(".flex-center", "center"))
        .with(flex(".flex-between", "space-between"))
        .with(flex(".flex-around", "space-around"))
        .with(flex(".flex-evenly", "space-evenly"))
}

/// Base rules followed by one media block per breakpoint.
///
/// Does not validate; see [`crate::emitter::GridPlugin`] for the checked path.
pub fn stylesheet(config: &GridConfig) -> StyleSheet {
    let mut sheet = base_styles(config);
    for styles in derive_all(config) {
        sheet.push(styles.to_rule());
    }
    sheet
}
