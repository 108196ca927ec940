//! Cycle detection for transitive target-property evaluation.
//!
//! Every `$<TARGET_PROPERTY:...>` descent pushes one frame; the frames
//! link along the call stack, so walking the parent chain is the whole
//! graph check. The top frame also carries a seen-set so repeat visits
//! of a `(target, property)` pair in disjoint branches short-circuit.

use std::cell::RefCell;
use std::collections::HashSet;

use fxhash::FxHashMap;
use log::trace;

use crate::context::EvaluationContext;
use crate::diagnostics::{report_error, Backtrace};

/// Base names of the properties whose value propagates over the link
/// interface. Reading one of these (or its `INTERFACE_` twin) triggers
/// transitive collection.
pub const TRANSITIVE_PROPERTIES: [&str; 9] = [
    "COMPILE_DEFINITIONS",
    "COMPILE_OPTIONS",
    "COMPILE_FEATURES",
    "INCLUDE_DIRECTORIES",
    "SYSTEM_INCLUDE_DIRECTORIES",
    "SOURCES",
    "POSITION_INDEPENDENT_CODE",
    "AUTOUIC_OPTIONS",
    "AUTOGEN_TARGET_DEPENDS",
];

const INTERFACE_NAMES: [&str; 9] = [
    "INTERFACE_COMPILE_DEFINITIONS",
    "INTERFACE_COMPILE_OPTIONS",
    "INTERFACE_COMPILE_FEATURES",
    "INTERFACE_INCLUDE_DIRECTORIES",
    "INTERFACE_SYSTEM_INCLUDE_DIRECTORIES",
    "INTERFACE_SOURCES",
    "INTERFACE_POSITION_INDEPENDENT_CODE",
    "INTERFACE_AUTOUIC_OPTIONS",
    "INTERFACE_AUTOGEN_TARGET_DEPENDS",
];

/// The `INTERFACE_` form a property propagates through, if the name is a
/// transitive property or its twin.
pub fn interface_property_for(property: &str) -> Option<&'static str> {
    for (base, interface) in TRANSITIVE_PROPERTIES.iter().zip(INTERFACE_NAMES.iter()) {
        if property == *base || property == *interface {
            return Some(interface);
        }
    }
    None
}

/// Whether `property` is one of the `INTERFACE_` whitelist entries.
pub fn is_transitive_interface_property(property: &str) -> bool {
    INTERFACE_NAMES.contains(&property)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DagCheckResult {
    SelfReference,
    CyclicReference,
    AlreadySeen,
    Dag,
}

pub struct DagChecker<'a> {
    parent: Option<&'a DagChecker<'a>>,
    target: String,
    property: String,
    backtrace: Backtrace,
    /// Set on the top frame when only usage requirements are being
    /// propagated, so `$<LINK_ONLY:...>` drops its content.
    transitive_properties_only: bool,
    /// `(target -> properties)` pairs already visited below the top
    /// frame. Only the top frame's map is consulted.
    seen: RefCell<FxHashMap<String, HashSet<String>>>,
    check_result: DagCheckResult,
}

impl<'a> DagChecker<'a> {
    pub fn new(
        backtrace: Backtrace,
        target: impl Into<String>,
        property: impl Into<String>,
        parent: Option<&'a DagChecker<'a>>,
    ) -> DagChecker<'a> {
        let mut checker = DagChecker {
            parent,
            target: target.into(),
            property: property.into(),
            backtrace,
            transitive_properties_only: false,
            seen: RefCell::new(FxHashMap::default()),
            check_result: DagCheckResult::Dag,
        };
        checker.check_result = checker.initial_check();
        trace!(
            "dag frame {}::{} -> {:?}",
            checker.target,
            checker.property,
            checker.check_result
        );
        checker
    }

    fn initial_check(&self) -> DagCheckResult {
        if let Some(parent) = self.parent {
            // A match on the immediate parent is a direct self
            // reference; a match further up closes a cycle.
            if parent.target == self.target && parent.property == self.property {
                return DagCheckResult::SelfReference;
            }
            let mut ancestor = parent.parent;
            while let Some(frame) = ancestor {
                if frame.target == self.target && frame.property == self.property {
                    return DagCheckResult::CyclicReference;
                }
                ancestor = frame.parent;
            }
        }

        // Repeat-visit bookkeeping only applies while a transitive
        // property drives the whole walk.
        let top = self.top();
        if interface_property_for(&top.property).is_some() {
            let mut seen = top.seen.borrow_mut();
            let properties = seen.entry(self.target.clone()).or_default();
            if !properties.insert(self.property.clone()) {
                return DagCheckResult::AlreadySeen;
            }
        }
        DagCheckResult::Dag
    }

    pub fn check(&self) -> DagCheckResult {
        self.check_result
    }

    fn top(&self) -> &DagChecker<'a> {
        let mut top = self;
        while let Some(parent) = top.parent {
            top = parent;
        }
        top
    }

    /// Name of the target the whole walk started from.
    pub fn top_target(&self) -> &str {
        &self.top().target
    }

    /// Whether the walk is rooted in a link-libraries evaluation. With a
    /// target name, additionally requires the walk to be rooted at that
    /// target.
    pub fn evaluating_link_libraries(&self, target: Option<&str>) -> bool {
        let top = self.top();
        match target {
            Some(name) => top.target == name && top.property == "LINK_LIBRARIES",
            None => {
                top.property == "LINK_LIBRARIES"
                    || top.property == "INTERFACE_LINK_LIBRARIES"
                    || top.property == "LINK_INTERFACE_LIBRARIES"
                    || top.property.starts_with("LINK_INTERFACE_LIBRARIES_")
                    || top.property.starts_with("IMPORTED_LINK_INTERFACE_LIBRARIES")
            }
        }
    }

    /// Whether the walk is rooted in a sources evaluation.
    pub fn evaluating_sources(&self) -> bool {
        self.top().property == "SOURCES"
    }

    pub fn transitive_properties_only(&self) -> bool {
        self.top().transitive_properties_only
    }

    /// Marks this (top) frame as propagating usage requirements only.
    pub fn set_transitive_properties_only(&mut self, enabled: bool) {
        self.transitive_properties_only = enabled;
    }

    /// Reports the self-reference diagnostic for this frame.
    pub fn report_self_reference(&self, context: &mut EvaluationContext<'_>, expression: &str) {
        let reason = format!("Self reference on target \"{}\".", self.target);
        report_error(context, expression, &reason);
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}
