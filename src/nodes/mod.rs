//! Operator descriptors and the identifier registry.
//!
//! Operators are stateless: each is a `NodeDescriptor` pairing the
//! evaluation function with its arity and content flags, registered once
//! in a process-wide table keyed by the upper-case identifier.

use fxhash::FxHashMap;
use once_cell::sync::Lazy;

use crate::ast::Content;
use crate::context::EvaluationContext;
use crate::dag::DagChecker;

pub mod artifact;
pub mod compile_features;
pub mod interface;
pub mod logical;
pub mod queries;
pub mod target_objects;
pub mod target_policy;
pub mod target_property;
pub mod text;

pub type EvalFn =
    fn(&[String], &mut EvaluationContext<'_>, &Content, Option<&DagChecker<'_>>) -> String;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOrMore,
    OneOrZero,
    /// The operator validates its own parameter count.
    Dynamic,
}

pub struct NodeDescriptor {
    pub arity: Arity,
    /// When false the result is discarded and a lone arbitrary-content
    /// parameter is only checked for presence.
    pub generates_content: bool,
    /// Every parameter child must be a literal text leaf.
    pub requires_literal_input: bool,
    /// The last declared parameter swallows the remaining comma-joined
    /// content verbatim.
    pub accepts_arbitrary_content: bool,
    pub eval: EvalFn,
}

impl NodeDescriptor {
    pub const fn new(eval: EvalFn) -> NodeDescriptor {
        NodeDescriptor {
            arity: Arity::Exact(1),
            generates_content: true,
            requires_literal_input: false,
            accepts_arbitrary_content: false,
            eval,
        }
    }

    pub const fn arity(mut self, arity: Arity) -> NodeDescriptor {
        self.arity = arity;
        self
    }

    pub const fn no_content(mut self) -> NodeDescriptor {
        self.generates_content = false;
        self
    }

    pub const fn arbitrary_content(mut self) -> NodeDescriptor {
        self.accepts_arbitrary_content = true;
        self
    }

    pub const fn literal_input(mut self) -> NodeDescriptor {
        self.requires_literal_input = true;
        self
    }
}

static NODE_REGISTRY: Lazy<FxHashMap<&'static str, &'static NodeDescriptor>> = Lazy::new(|| {
    let mut map: FxHashMap<&'static str, &'static NodeDescriptor> = FxHashMap::default();
    map.insert("0", &logical::ZERO);
    map.insert("1", &logical::ONE);
    map.insert("AND", &logical::AND);
    map.insert("OR", &logical::OR);
    map.insert("NOT", &logical::NOT);
    map.insert("BOOL", &logical::BOOL);
    map.insert("IF", &logical::IF);
    map.insert("STREQUAL", &logical::STREQUAL);
    map.insert("EQUAL", &logical::EQUAL);
    map.insert("IN_LIST", &logical::IN_LIST);
    map.insert("VERSION_LESS", &logical::VERSION_LESS);
    map.insert("VERSION_GREATER", &logical::VERSION_GREATER);
    map.insert("VERSION_EQUAL", &logical::VERSION_EQUAL);
    map.insert("VERSION_LESS_EQUAL", &logical::VERSION_LESS_EQUAL);
    map.insert("VERSION_GREATER_EQUAL", &logical::VERSION_GREATER_EQUAL);
    map.insert("LOWER_CASE", &text::LOWER_CASE);
    map.insert("UPPER_CASE", &text::UPPER_CASE);
    map.insert("MAKE_C_IDENTIFIER", &text::MAKE_C_IDENTIFIER);
    map.insert("ANGLE-R", &text::ANGLE_R);
    map.insert("COMMA", &text::COMMA);
    map.insert("SEMICOLON", &text::SEMICOLON);
    map.insert("JOIN", &text::JOIN);
    map.insert("C_COMPILER_ID", &queries::C_COMPILER_ID);
    map.insert("CXX_COMPILER_ID", &queries::CXX_COMPILER_ID);
    map.insert("C_COMPILER_VERSION", &queries::C_COMPILER_VERSION);
    map.insert("CXX_COMPILER_VERSION", &queries::CXX_COMPILER_VERSION);
    map.insert("PLATFORM_ID", &queries::PLATFORM_ID);
    map.insert("CONFIGURATION", &queries::CONFIGURATION);
    map.insert("CONFIG", &queries::CONFIG);
    map.insert("TARGET_FILE", &artifact::TARGET_FILE);
    map.insert("TARGET_LINKER_FILE", &artifact::TARGET_LINKER_FILE);
    map.insert("TARGET_SONAME_FILE", &artifact::TARGET_SONAME_FILE);
    map.insert("TARGET_FILE_NAME", &artifact::TARGET_FILE_NAME);
    map.insert("TARGET_LINKER_FILE_NAME", &artifact::TARGET_LINKER_FILE_NAME);
    map.insert("TARGET_SONAME_FILE_NAME", &artifact::TARGET_SONAME_FILE_NAME);
    map.insert("TARGET_FILE_DIR", &artifact::TARGET_FILE_DIR);
    map.insert("TARGET_LINKER_FILE_DIR", &artifact::TARGET_LINKER_FILE_DIR);
    map.insert("TARGET_SONAME_FILE_DIR", &artifact::TARGET_SONAME_FILE_DIR);
    map.insert("TARGET_PROPERTY", &target_property::TARGET_PROPERTY);
    map.insert("TARGET_NAME", &interface::TARGET_NAME);
    map.insert("TARGET_OBJECTS", &target_objects::TARGET_OBJECTS);
    map.insert("TARGET_POLICY", &target_policy::TARGET_POLICY);
    map.insert("COMPILE_FEATURES", &compile_features::COMPILE_FEATURES);
    map.insert("BUILD_INTERFACE", &interface::BUILD_INTERFACE);
    map.insert("INSTALL_INTERFACE", &interface::INSTALL_INTERFACE);
    map.insert("INSTALL_PREFIX", &interface::INSTALL_PREFIX);
    map.insert("LINK_ONLY", &interface::LINK_ONLY);
    map
});

pub fn lookup(identifier: &str) -> Option<&'static NodeDescriptor> {
    NODE_REGISTRY.get(identifier).copied()
}
