//! Environment source: `VSETTINGS_<SECTION>__<KEY>`, e.g. `VSETTINGS_LOGGING__LEVEL`.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("VSETTINGS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
