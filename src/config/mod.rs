/*!
Configuration of a context.

All configuration is contained within the [Config] of a [Context](crate::context::Context), and is fixed once the context is built.

```rust
# use otter_res::config::{Config, PairSelection};
let mut config = Config::default();
config.pair_selection.value = PairSelection::Frontier;
config.round_limit = Some(8);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod pair_selection;
pub use pair_selection::PairSelection;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which pairs of clauses to resolve each round.
    pub pair_selection: ConfigOption<PairSelection>,

    /// Record the parents of each derived clause, so a refutation proof may be extracted.
    pub record_derivations: ConfigOption<bool>,

    /// The most rounds to run before giving up on a refutation, if any.
    pub round_limit: Option<usize>,
}

impl Default for Config {
    /// The default config resolves all pairs each round without limit, and so gives the trace of plain PL-resolution.
    fn default() -> Self {
        Config {
            pair_selection: ConfigOption {
                name: "pair_selection",
                min: PairSelection::MIN,
                max: PairSelection::MAX,
                value: PairSelection::All,
            },

            record_derivations: ConfigOption {
                name: "record_derivations",
                min: false,
                max: true,
                value: false,
            },

            round_limit: None,
        }
    }
}
