/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or tracking down a surprising verdict.

Note, no log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::parse)
    pub const PARSE: &str = "parse";

    /// Logs related to [conversion to CNF](crate::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [resolution](crate::procedures)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [knowledge base](crate::db::knowledge_base)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to the [derivation graph](crate::db::derivation)
    pub const DERIVATION: &str = "derivation";
}
