//! Environment source: TRAIL_<SECTION>__<KEY>, e.g. TRAIL_HISTORY__MAX_SIZE=20

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("TRAIL")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
