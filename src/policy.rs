/// Compatibility policies consulted during evaluation.
///
/// Only the policies that change expression behavior are modelled:
/// `Cmp0043`/`Cmp0044` gate legacy semantics inside the evaluator itself,
/// and the rest form the whitelist accepted by `$<TARGET_POLICY:...>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolicyId {
    Cmp0003,
    Cmp0004,
    Cmp0008,
    Cmp0020,
    Cmp0021,
    Cmp0022,
    Cmp0027,
    Cmp0038,
    Cmp0041,
    Cmp0042,
    Cmp0043,
    Cmp0044,
}

/// Policies that may be queried through `$<TARGET_POLICY:...>`.
pub const TARGET_POLICY_WHITELIST: [PolicyId; 10] = [
    PolicyId::Cmp0003,
    PolicyId::Cmp0004,
    PolicyId::Cmp0008,
    PolicyId::Cmp0020,
    PolicyId::Cmp0021,
    PolicyId::Cmp0022,
    PolicyId::Cmp0027,
    PolicyId::Cmp0038,
    PolicyId::Cmp0041,
    PolicyId::Cmp0042,
];

impl PolicyId {
    pub fn name(self) -> &'static str {
        match self {
            PolicyId::Cmp0003 => "CMP0003",
            PolicyId::Cmp0004 => "CMP0004",
            PolicyId::Cmp0008 => "CMP0008",
            PolicyId::Cmp0020 => "CMP0020",
            PolicyId::Cmp0021 => "CMP0021",
            PolicyId::Cmp0022 => "CMP0022",
            PolicyId::Cmp0027 => "CMP0027",
            PolicyId::Cmp0038 => "CMP0038",
            PolicyId::Cmp0041 => "CMP0041",
            PolicyId::Cmp0042 => "CMP0042",
            PolicyId::Cmp0043 => "CMP0043",
            PolicyId::Cmp0044 => "CMP0044",
        }
    }

    pub fn from_name(name: &str) -> Option<PolicyId> {
        Some(match name {
            "CMP0003" => PolicyId::Cmp0003,
            "CMP0004" => PolicyId::Cmp0004,
            "CMP0008" => PolicyId::Cmp0008,
            "CMP0020" => PolicyId::Cmp0020,
            "CMP0021" => PolicyId::Cmp0021,
            "CMP0022" => PolicyId::Cmp0022,
            "CMP0027" => PolicyId::Cmp0027,
            "CMP0038" => PolicyId::Cmp0038,
            "CMP0041" => PolicyId::Cmp0041,
            "CMP0042" => PolicyId::Cmp0042,
            "CMP0043" => PolicyId::Cmp0043,
            "CMP0044" => PolicyId::Cmp0044,
            _ => return None,
        })
    }

    fn summary(self) -> &'static str {
        match self {
            PolicyId::Cmp0003 => {
                "Libraries linked via full path no longer produce linker search paths."
            }
            PolicyId::Cmp0004 => "Libraries linked may not have leading or trailing whitespace.",
            PolicyId::Cmp0008 => {
                "Libraries linked by full-path must have a valid library file name."
            }
            PolicyId::Cmp0020 => "Automatically link Qt executables to qtmain target on Windows.",
            PolicyId::Cmp0021 => {
                "Fatal error on relative paths in INCLUDE_DIRECTORIES target property."
            }
            PolicyId::Cmp0022 => "INTERFACE_LINK_LIBRARIES defines the link interface.",
            PolicyId::Cmp0027 => {
                "Conditionally linked imported targets with missing include directories."
            }
            PolicyId::Cmp0038 => "Targets may not link directly to themselves.",
            PolicyId::Cmp0041 => "Error on relative include with generator expression.",
            PolicyId::Cmp0042 => "MACOSX_RPATH is enabled by default.",
            PolicyId::Cmp0043 => "Ignore COMPILE_DEFINITIONS_<Config> properties.",
            PolicyId::Cmp0044 => "Case sensitive <LANG>_COMPILER_ID generator expressions.",
        }
    }

    /// Author-warning text emitted when a policy-gated behavior is hit
    /// while the policy is unset.
    pub fn warning(self) -> String {
        format!(
            "Policy {} is not set: {}  Use the policy command to set the policy and suppress this warning.",
            self.name(),
            self.summary()
        )
    }
}

/// Effective setting of a policy for a directory or target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolicyStatus {
    Old,
    Warn,
    New,
    RequiredIfUsed,
    RequiredAlways,
}
