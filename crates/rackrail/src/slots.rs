//! Info slots: page elements that display a column's or offset's live size.
//!
//! A slot is identified by its element id alone:
//!
//! | Id                         | Slot                    |
//! |----------------------------|-------------------------|
//! | `col-4-info`               | column 4                |
//! | `col-4-info-2`             | column 4, second copy   |
//! | `responsive-col-4-info-2`  | column 4, second copy   |
//! | `offset-3-info`            | offset 3                |
//!
//! Ids are parsed once into [`InfoSlots`]; refreshing the displays afterwards
//! never re-reads the ids.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt},
    sequence::{preceded, tuple},
};

use crate::config::{ContainerKind, GridConfig};
use crate::diagnostics::{column_info, offset_info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotTarget {
    Column(u8),
    Offset(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoSlot {
    pub target: SlotTarget,
    /// Trailing `-N` copy number, if any.
    pub copy: Option<u8>,
}

fn index(input: &str) -> IResult<&str, u8> {
    map_res(digit1, |s: &str| s.parse::<u8>())(input)
}

fn column_slot(input: &str) -> IResult<&str, InfoSlot> {
    map(
        tuple((
            opt(tag("responsive-")),
            preceded(tag("col-"), index),
            tag("-info"),
            opt(preceded(char('-'), index)),
        )),
        |(_, column, _, copy)| InfoSlot {
            target: SlotTarget::Column(column),
            copy,
        },
    )(input)
}

fn offset_slot(input: &str) -> IResult<&str, InfoSlot> {
    map(
        tuple((preceded(tag("offset-"), index), tag("-info"))),
        |(offset, _)| InfoSlot {
            target: SlotTarget::Offset(offset),
            copy: None,
        },
    )(input)
}

/// Parse an element id into a slot.
pub fn parse_slot_id(id: &str) -> Option<InfoSlot> {
    all_consuming(alt((column_slot, offset_slot)))(id)
        .ok()
        .map(|(_, slot)| slot)
}

/// Element ids resolved to slots, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoSlots {
    slots: Vec<(String, InfoSlot)>,
}

impl InfoSlots {
    /// Keeps the ids that name a slot and drops the rest.
    pub fn resolve<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let slots = ids
            .into_iter()
            .filter_map(|id| match parse_slot_id(id) {
                Some(slot) => Some((id.to_string(), slot)),
                None => {
                    log::debug!("Ignoring element id '{id}': not an info slot");
                    None
                }
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<InfoSlot> {
        self.slots
            .iter()
            .find(|(slot_id, _)| slot_id == id)
            .map(|(_, slot)| *slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, InfoSlot)> {
        self.slots.iter().map(|(id, slot)| (id.as_str(), *slot))
    }

    /// Display text for every slot at `breakpoint`.
    ///
    /// `measure` returns the rendered width (columns) or left margin (offsets)
    /// of the element a slot describes, in px.
    pub fn render(
        &self,
        config: &GridConfig,
        breakpoint: &str,
        container: ContainerKind,
        mut measure: impl FnMut(InfoSlot) -> f64,
    ) -> Vec<(String, String)> {
        self.slots
            .iter()
            .map(|(id, slot)| {
                let measured = measure(*slot);
                let text = match slot.target {
                    SlotTarget::Column(n) => column_info(config, breakpoint, container, n, measured),
                    SlotTarget::Offset(n) => offset_info(config, breakpoint, n, measured),
                };
                (id.clone(), text)
            })
            .collect()
    }
}
